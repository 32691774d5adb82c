// libzip — calldata run-length and FastLZ codecs for transaction payloads

pub mod calldata;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod flz;
pub mod hex;
pub mod io;
pub mod sample;

pub use codec::Codec;
pub use error::{DecompressError, Error, InvalidHexError};

// ── Version constants ─────────────────────────────────────────────────────────
pub const LIBZIP_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    LIBZIP_VERSION_STRING
}

// ── Hex-text API ──────────────────────────────────────────────────────────────
//
// Each function decodes hex text (optional `0x`, surrounding whitespace,
// either case), runs one codec over the bytes and re-encodes the result as
// lowercase `0x`-prefixed hex.  Malformed text fails before any codec work.

/// Compress hex-encoded calldata with the run-length codec.
pub fn cd_compress<T: AsRef<str>>(text: T) -> Result<String, Error> {
    let src = hex::decode(text)?;
    Ok(hex::encode(&calldata::compress(&src)))
}

/// Inverse of [`cd_compress`].
pub fn cd_decompress<T: AsRef<str>>(text: T) -> Result<String, Error> {
    let src = hex::decode(text)?;
    Ok(hex::encode(&calldata::decompress(&src)?))
}

/// Compress hex-encoded bytes with FastLZ level 1.
pub fn flz_compress<T: AsRef<str>>(text: T) -> Result<String, Error> {
    let src = hex::decode(text)?;
    Ok(hex::encode(&flz::compress(&src)))
}

/// Inverse of [`flz_compress`].
pub fn flz_decompress<T: AsRef<str>>(text: T) -> Result<String, Error> {
    let src = hex::decode(text)?;
    Ok(hex::encode(&flz::decompress(&src)?))
}
