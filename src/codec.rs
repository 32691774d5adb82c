//! Codec selection.
//!
//! [`Codec`] dispatches a byte buffer to one of the two codec families, the
//! way the CLI and the batch helpers pick between them at runtime.

use std::fmt;
use std::str::FromStr;

use crate::config::{CD_EXTENSION, FLZ_EXTENSION};
use crate::error::DecompressError;
use crate::{calldata, flz};

/// One of the two independent codec families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Run-length codec for ABI-encoded calldata.
    Calldata,
    /// FastLZ level-1 LZ77 codec.
    Flz,
}

impl Codec {
    pub fn compress(self, src: &[u8]) -> Vec<u8> {
        match self {
            Codec::Calldata => calldata::compress(src),
            Codec::Flz => flz::compress(src),
        }
    }

    pub fn decompress(self, src: &[u8]) -> Result<Vec<u8>, DecompressError> {
        match self {
            Codec::Calldata => calldata::decompress(src),
            Codec::Flz => flz::decompress(src),
        }
    }

    /// Suffix appended to compressed file names.
    pub fn extension(self) -> &'static str {
        match self {
            Codec::Calldata => CD_EXTENSION,
            Codec::Flz => FLZ_EXTENSION,
        }
    }

    /// The codec whose suffix `filename` carries, if any.
    pub fn from_filename(filename: &str) -> Option<Self> {
        [Codec::Calldata, Codec::Flz]
            .into_iter()
            .find(|c| filename.ends_with(c.extension()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Codec::Calldata => "cd",
            Codec::Flz => "flz",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cd" | "calldata" | "rle" => Ok(Codec::Calldata),
            "flz" | "fastlz" | "lz" => Ok(Codec::Flz),
            other => Err(format!("unknown codec {other:?} (expected \"cd\" or \"flz\")")),
        }
    }
}
