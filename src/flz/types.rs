//! FastLZ level-1 constants, hashing helpers and the opcode layout.
//!
//! Opcode byte 0 splits into a 3-bit class and a 5-bit field:
//!
//! | Class | Form        | Bytes | Decoded length   | Distance                    |
//! |-------|-------------|-------|------------------|-----------------------------|
//! | 0     | literal run | 1 + n | `low5 + 1`       | —                           |
//! | 1..=6 | short match | 2     | `class + 2`      | `low5 << 8 \| byte1`        |
//! | 7     | long match  | 3     | `byte1 + 9`      | `low5 << 8 \| byte2`        |
//!
//! A match copies from `output_len - distance - 1`.

use crate::error::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Log₂ of the match-finder hash table size.
pub const HASH_LOG: u32 = 13;
/// Number of hash-table entries.
pub const HASH_SIZE: usize = 1 << HASH_LOG;
pub const HASH_MASK: u32 = (1 << HASH_LOG) - 1;

/// Matches must start fewer than this many bytes back.
pub const MAX_DISTANCE: usize = 8192;
/// Largest value of the 13-bit distance field.
pub const DISTANCE_FIELD_MAX: usize = (1 << 13) - 1;

/// Maximum literal run per opcode.
pub const MAX_COPY: usize = 32;

pub const MIN_MATCH: usize = 3;
pub const SHORT_MATCH_MAX: usize = 8;
pub const LONG_MATCH_MIN: usize = 9;
pub const LONG_MATCH_MAX: usize = LONG_MATCH_MIN + 255;

/// Length carried by each chained long opcode of an over-long match.
pub const CHAIN_LENGTH: usize = 262;

/// First position probed for a match.
pub const SCAN_START: usize = 2;
/// No match is started within this many bytes of the end of input.
pub const INPUT_MARGIN: usize = 13;
/// Match extension never reads within this many bytes of the end of input.
pub const MATCH_MARGIN: usize = 4;

const CLASS_SHIFT: u8 = 5;
const LOW5_MASK: u8 = 0x1f;
const LONG_CLASS: u8 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Hashing helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Little-endian 24-bit window at `pos`.  Caller guarantees `pos + 3 <= src.len()`.
#[inline(always)]
pub fn read_u24(src: &[u8], pos: usize) -> u32 {
    u32::from(src[pos]) | u32::from(src[pos + 1]) << 8 | u32::from(src[pos + 2]) << 16
}

/// Fibonacci hash of a 24-bit window into `0..HASH_SIZE`.
#[inline(always)]
pub fn hash(seq: u32) -> usize {
    ((seq.wrapping_mul(2_654_435_769) >> (32 - HASH_LOG)) & HASH_MASK) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// Opcode
// ─────────────────────────────────────────────────────────────────────────────

/// Opcode form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeKind {
    Literal,
    ShortMatch,
    LongMatch,
}

/// One opcode of an FLZ stream (header only; literal bytes follow separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    kind: OpcodeKind,
    length: u16,
    distance: u16,
}

impl Opcode {
    /// Literal run header for `length` bytes.
    ///
    /// # Panics
    /// If `length` is outside `1..=32`.
    pub fn literal(length: usize) -> Self {
        assert!((1..=MAX_COPY).contains(&length), "literal run {length} outside 1..={MAX_COPY}");
        Opcode { kind: OpcodeKind::Literal, length: length as u16, distance: 0 }
    }

    /// Two-byte match.
    ///
    /// # Panics
    /// If `length` is outside `3..=8` or `distance` exceeds 8191.
    pub fn short_match(length: usize, distance: usize) -> Self {
        assert!(
            (MIN_MATCH..=SHORT_MATCH_MAX).contains(&length),
            "short match {length} outside {MIN_MATCH}..={SHORT_MATCH_MAX}"
        );
        assert!(distance <= DISTANCE_FIELD_MAX, "distance {distance} exceeds {DISTANCE_FIELD_MAX}");
        Opcode { kind: OpcodeKind::ShortMatch, length: length as u16, distance: distance as u16 }
    }

    /// Three-byte match.
    ///
    /// # Panics
    /// If `length` is outside `9..=264` or `distance` exceeds 8191.
    pub fn long_match(length: usize, distance: usize) -> Self {
        assert!(
            (LONG_MATCH_MIN..=LONG_MATCH_MAX).contains(&length),
            "long match {length} outside {LONG_MATCH_MIN}..={LONG_MATCH_MAX}"
        );
        assert!(distance <= DISTANCE_FIELD_MAX, "distance {distance} exceeds {DISTANCE_FIELD_MAX}");
        Opcode { kind: OpcodeKind::LongMatch, length: length as u16, distance: distance as u16 }
    }

    /// Short or long match, whichever form `length` (3..=264) needs.
    pub fn back_reference(length: usize, distance: usize) -> Self {
        if length < LONG_MATCH_MIN {
            Self::short_match(length, distance)
        } else {
            Self::long_match(length, distance)
        }
    }

    #[inline]
    pub fn kind(self) -> OpcodeKind {
        self.kind
    }

    /// Bytes produced when the opcode is decoded.
    #[inline]
    pub fn length(self) -> usize {
        self.length as usize
    }

    /// Back-reference distance field (`0` for literal runs).
    #[inline]
    pub fn distance(self) -> usize {
        self.distance as usize
    }

    /// Header size in bytes (literal payload excluded).
    #[inline]
    pub fn header_len(self) -> usize {
        match self.kind {
            OpcodeKind::Literal => 1,
            OpcodeKind::ShortMatch => 2,
            OpcodeKind::LongMatch => 3,
        }
    }

    /// Append the header bytes to `out`.
    pub fn encode_into(self, out: &mut Vec<u8>) {
        let d_hi = (self.distance >> 8) as u8;
        let d_lo = (self.distance & 0xff) as u8;
        match self.kind {
            OpcodeKind::Literal => out.push(self.length as u8 - 1),
            OpcodeKind::ShortMatch => {
                out.push(((self.length as u8 - 2) << CLASS_SHIFT) | d_hi);
                out.push(d_lo);
            }
            OpcodeKind::LongMatch => {
                out.push((LONG_CLASS << CLASS_SHIFT) | d_hi);
                out.push((self.length as usize - LONG_MATCH_MIN) as u8);
                out.push(d_lo);
            }
        }
    }

    /// Parse the header at `src[pos..]`.
    ///
    /// Only header bytes are checked for presence; the caller checks the
    /// literal payload.
    pub fn parse(src: &[u8], pos: usize) -> Result<Self, DecompressError> {
        let truncated = DecompressError::TruncatedInput { position: pos };
        let &op = src.get(pos).ok_or(truncated)?;
        let class = op >> CLASS_SHIFT;
        let d_hi = u16::from(op & LOW5_MASK);

        Ok(match class {
            0 => Opcode { kind: OpcodeKind::Literal, length: d_hi + 1, distance: 0 },
            LONG_CLASS => {
                let extra = *src.get(pos + 1).ok_or(truncated)?;
                let d_lo = *src.get(pos + 2).ok_or(truncated)?;
                Opcode {
                    kind: OpcodeKind::LongMatch,
                    length: LONG_MATCH_MIN as u16 + u16::from(extra),
                    distance: d_hi << 8 | u16::from(d_lo),
                }
            }
            _ => {
                let d_lo = *src.get(pos + 1).ok_or(truncated)?;
                Opcode {
                    kind: OpcodeKind::ShortMatch,
                    length: u16::from(class) + 2,
                    distance: d_hi << 8 | u16::from(d_lo),
                }
            }
        })
    }
}
