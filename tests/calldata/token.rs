// Integration tests for calldata/token.rs — run token layout and selector escape

use libzip::calldata::{escape, RleToken, RunValue, SELECTOR_LEN};

#[test]
fn escape_complements_selector_positions_only() {
    for position in 0..SELECTOR_LEN {
        assert_eq!(escape(position, 0x00), 0xff);
        assert_eq!(escape(position, 0x5a), 0xa5);
    }
    assert_eq!(escape(SELECTOR_LEN, 0x5a), 0x5a);
    assert_eq!(escape(1_000, 0x00), 0x00);
}

#[test]
fn token_bytes() {
    assert_eq!(RleToken::new(RunValue::Zero, 1).to_bytes(), [0x00, 0x00]);
    assert_eq!(RleToken::new(RunValue::Zero, 128).to_bytes(), [0x00, 0x7f]);
    assert_eq!(RleToken::new(RunValue::Ones, 1).to_bytes(), [0x00, 0x80]);
    assert_eq!(RleToken::new(RunValue::Ones, 32).to_bytes(), [0x00, 0x9f]);
}

#[test]
fn token_lengths_are_checked() {
    assert!(RleToken::try_new(RunValue::Zero, 0).is_none());
    assert!(RleToken::try_new(RunValue::Ones, 129).is_none());
    assert!(RleToken::try_new(RunValue::Ones, 128).is_some());
}

#[test]
fn every_payload_parses() {
    for payload in 0..=255u8 {
        let token = RleToken::from_payload(payload);
        assert_eq!(token.payload(), payload);
        assert!((1..=128).contains(&token.run_length()));
        let expected = if payload & 0x80 == 0 { RunValue::Zero } else { RunValue::Ones };
        assert_eq!(token.value(), expected);
    }
}

#[test]
fn run_value_bytes() {
    assert_eq!(RunValue::Zero.byte(), 0x00);
    assert_eq!(RunValue::Ones.byte(), 0xff);
}
