// Integration tests for flz/decompress.rs — opcode expansion and malformed streams

use libzip::flz::decompress;
use libzip::sample::SampleRng;
use libzip::DecompressError;

#[test]
fn literals_only() {
    assert_eq!(decompress(&[0x02, b'a', b'b', b'c']).unwrap(), b"abc".to_vec());
}

#[test]
fn short_match_copies_earlier_bytes() {
    // "abcd" then 3 bytes from 4 back
    let src = [0x03, b'a', b'b', b'c', b'd', 0x20, 0x03];
    assert_eq!(decompress(&src).unwrap(), b"abcdabc".to_vec());
}

#[test]
fn overlapping_long_match_repeats_a_run() {
    let src = [0x00, b'z', 0xe0, 0x00, 0x00];
    assert_eq!(decompress(&src).unwrap(), vec![b'z'; 10]);
}

#[test]
fn truncated_literal_run() {
    assert_eq!(decompress(&[0x03, 1, 2]), Err(DecompressError::TruncatedInput { position: 0 }));
}

#[test]
fn truncated_match_opcode() {
    assert_eq!(
        decompress(&[0x00, 0x41, 0xe0, 0x01]),
        Err(DecompressError::TruncatedInput { position: 2 })
    );
}

#[test]
fn reference_before_start() {
    assert_eq!(
        decompress(&[0x00, 0x41, 0x20, 0x01]),
        Err(DecompressError::OffsetOutOfRange { position: 2, distance: 1, produced: 1 })
    );
    assert!(decompress(&[0xe0, 0x00, 0x05]).is_err());
}

#[test]
fn arbitrary_bytes_never_panic() {
    let mut rng = SampleRng::new(0xf1a2);
    for len in 0..400 {
        let mut buf = vec![0u8; len];
        rng.fill(&mut buf);
        let _ = decompress(&buf);
    }
}
