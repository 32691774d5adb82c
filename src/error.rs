//! Error types shared by the hex layer and both codecs.
//!
//! | Type                | Raised by                                   |
//! |---------------------|---------------------------------------------|
//! | [`InvalidHexError`] | [`crate::hex::decode`] and every hex entry point |
//! | [`DecompressError`] | [`crate::calldata::decompress`], [`crate::flz::decompress`] |
//! | [`Error`]           | the four hex-in / hex-out functions at the crate root |
//!
//! Compressed streams carry no checksum, so [`DecompressError`] only reports
//! the malformations the decoders can see (missing bytes, references before
//! the start of the output).  Other corruption decodes to wrong bytes.

use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// InvalidHexError
// ─────────────────────────────────────────────────────────────────────────────

/// Input text is not well-formed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidHexError {
    /// Raw input bytes are not valid UTF-8 text.
    NotText,
    /// A character outside `[0-9a-fA-F]` was found after the optional `0x`.
    /// `index` is the byte offset inside the digit run.
    InvalidCharacter { ch: char, index: usize },
    /// The digit run has an odd number of characters.
    OddLength { digits: usize },
}

impl fmt::Display for InvalidHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidHexError::NotText => f.write_str("data must be a hex string"),
            InvalidHexError::InvalidCharacter { ch, index } => {
                write!(f, "data must be a hex string: invalid character {ch:?} at digit {index}")
            }
            InvalidHexError::OddLength { digits } => {
                write!(f, "hex string length must be a multiple of 2 (got {digits} digits)")
            }
        }
    }
}

impl std::error::Error for InvalidHexError {}

// ─────────────────────────────────────────────────────────────────────────────
// DecompressError
// ─────────────────────────────────────────────────────────────────────────────

/// A compressed stream could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The stream ended inside a token or opcode.  `position` is the offset
    /// of the token/opcode that could not be completed.
    TruncatedInput { position: usize },
    /// A back-reference points before the first output byte.
    OffsetOutOfRange { position: usize, distance: usize, produced: usize },
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::TruncatedInput { position } => {
                write!(f, "compressed data truncated at offset {position}")
            }
            DecompressError::OffsetOutOfRange { position, distance, produced } => write!(
                f,
                "back-reference at offset {position} reaches {} bytes back, only {produced} decoded",
                distance + 1
            ),
        }
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// Crate-level error
// ─────────────────────────────────────────────────────────────────────────────

/// Error returned by the hex-in / hex-out entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Hex(InvalidHexError),
    Decompress(DecompressError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Hex(e) => e.fmt(f),
            Error::Decompress(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Hex(e) => Some(e),
            Error::Decompress(e) => Some(e),
        }
    }
}

impl From<InvalidHexError> for Error {
    fn from(e: InvalidHexError) -> Self {
        Error::Hex(e)
    }
}

impl From<DecompressError> for Error {
    fn from(e: DecompressError) -> Self {
        Error::Decompress(e)
    }
}
