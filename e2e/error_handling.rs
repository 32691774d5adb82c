//! E2E suite: error handling and edge cases
//!
//! Verifies that malformed hex text and malformed compressed streams come
//! back as typed errors, never panics.
//!
//! Coverage:
//! - hex grammar errors through every entry point
//! - truncated and out-of-range FLZ streams
//! - truncated calldata streams
//! - bit-flipped compressed streams (either an error or wrong bytes)

use libzip::sample::{gen_buffer, SampleRng};
use libzip::{calldata, flz};
use libzip::{cd_decompress, flz_decompress, DecompressError, Error, InvalidHexError};

// ═════════════════════════════════════════════════════════════════════════════
// Hex grammar
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_invalid_character_position() {
    match flz_decompress("0x00g0") {
        Err(Error::Hex(InvalidHexError::InvalidCharacter { ch, index })) => {
            assert_eq!(ch, 'g');
            assert_eq!(index, 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_non_ascii_is_reported_as_character() {
    assert!(matches!(
        cd_decompress("0x00é0"),
        Err(Error::Hex(InvalidHexError::InvalidCharacter { ch: 'é', index: 2 }))
    ));
}

#[test]
fn test_double_prefix_is_rejected() {
    assert!(matches!(
        cd_decompress("0x0x00"),
        Err(Error::Hex(InvalidHexError::InvalidCharacter { ch: 'x', index: 1 }))
    ));
}

// ═════════════════════════════════════════════════════════════════════════════
// FLZ streams
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_flz_every_truncation_of_a_valid_stream() {
    let src = gen_buffer(2048, 1);
    let compressed = flz::compress(&src);
    for cut in 0..compressed.len() {
        match flz::decompress(&compressed[..cut]) {
            Ok(out) => assert!(src.starts_with(&out), "cut {cut}"),
            Err(DecompressError::TruncatedInput { position }) => assert!(position < cut),
            Err(e) => panic!("cut {cut}: unexpected {e}"),
        }
    }
}

#[test]
fn test_flz_reference_into_empty_output() {
    let err = flz::decompress(&[0x20, 0x00]).unwrap_err();
    assert_eq!(err, DecompressError::OffsetOutOfRange { position: 0, distance: 0, produced: 0 });
}

#[test]
fn test_flz_far_reference() {
    let mut stream = vec![0x1f];
    stream.extend_from_slice(&[0xaa; 32]);
    stream.extend_from_slice(&[0xff, 0x00, 0xff]); // 9 bytes from 8192 back
    assert!(matches!(
        flz::decompress(&stream),
        Err(DecompressError::OffsetOutOfRange { position: 33, distance: 8191, produced: 32 })
    ));
}

#[test]
fn test_flz_bit_flips_never_panic() {
    let src = gen_buffer(4096, 2);
    let compressed = flz::compress(&src);
    let mut rng = SampleRng::new(99);
    for _ in 0..2000 {
        let mut corrupt = compressed.clone();
        let at = rng.below(corrupt.len() as u32) as usize;
        corrupt[at] ^= 1 << rng.below(8);
        let _ = flz::decompress(&corrupt);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Calldata streams
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_cd_every_truncation_of_a_valid_stream() {
    let src = gen_buffer(1024, 3);
    let compressed = calldata::compress(&src);
    for cut in 0..compressed.len() {
        match calldata::decompress(&compressed[..cut]) {
            Ok(out) => assert!(out.len() <= src.len() + 128, "cut {cut}"),
            Err(DecompressError::TruncatedInput { position }) => assert_eq!(position, cut - 1),
            Err(e) => panic!("cut {cut}: unexpected {e}"),
        }
    }
}

#[test]
fn test_cd_bit_flips_never_panic() {
    let src = gen_buffer(4096, 4);
    let compressed = calldata::compress(&src);
    let mut rng = SampleRng::new(7);
    for _ in 0..2000 {
        let mut corrupt = compressed.clone();
        let at = rng.below(corrupt.len() as u32) as usize;
        corrupt[at] ^= 1 << rng.below(8);
        let _ = calldata::decompress(&corrupt);
    }
}

#[test]
fn test_decompress_error_message_through_crate_error() {
    let err = cd_decompress("0x11223344aa00").unwrap_err();
    assert_eq!(err, Error::Decompress(DecompressError::TruncatedInput { position: 5 }));
    assert_eq!(err.to_string(), "compressed data truncated at offset 5");
}
