//! Calldata stream constants, the run token layout and the selector escape.
//!
//! A run token is two in-band bytes:
//!
//! ```text
//!  byte 0      byte 1
//! +--------+  +---+-----------+
//! |  0x00  |  | v | len - 1   |    v = 0: run of 0x00, v = 1: run of 0xFF
//! +--------+  +---+-----------+    len in 1..=128
//!               7   6 ....... 0
//! ```
//!
//! Every other byte of the stream is a literal.  Bytes at stream positions
//! 0..4 are stored complemented (see [`escape`]).

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Marker byte introducing a run token (as seen after [`escape`]).
pub const RUN_MARKER: u8 = 0x00;

/// Number of leading stream bytes stored complemented.
pub const SELECTOR_LEN: usize = 4;

/// Longest run a single token can describe.
pub const TOKEN_RUN_MAX: usize = 128;

/// Zero runs are flushed when they reach this length.
pub const ZERO_RUN_MAX: usize = 128;

/// 0xFF runs are flushed when they reach this length.
pub const ONES_RUN_MAX: usize = 32;

const VALUE_BIT: u8 = 0x80;
const LENGTH_MASK: u8 = 0x7f;

// ─────────────────────────────────────────────────────────────────────────────
// Selector escape
// ─────────────────────────────────────────────────────────────────────────────

/// Complement `b` if it sits at a selector position of the compressed stream.
///
/// The same function is applied on write and on read.
#[inline]
pub fn escape(position: usize, b: u8) -> u8 {
    if position < SELECTOR_LEN {
        b ^ 0xff
    } else {
        b
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RunValue / RleToken
// ─────────────────────────────────────────────────────────────────────────────

/// Byte value repeated by a run token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunValue {
    /// Run of `0x00`.
    Zero,
    /// Run of `0xFF`.
    Ones,
}

impl RunValue {
    /// The byte this run expands to.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            RunValue::Zero => 0x00,
            RunValue::Ones => 0xff,
        }
    }
}

/// A decoded run token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleToken {
    value: RunValue,
    run_length: u8,
}

impl RleToken {
    /// Build a token, or `None` if `run_length` is outside `1..=128`.
    pub fn try_new(value: RunValue, run_length: usize) -> Option<Self> {
        if (1..=TOKEN_RUN_MAX).contains(&run_length) {
            Some(RleToken { value, run_length: (run_length - 1) as u8 })
        } else {
            None
        }
    }

    /// Build a token.
    ///
    /// # Panics
    /// If `run_length` is outside `1..=128`.
    pub fn new(value: RunValue, run_length: usize) -> Self {
        match Self::try_new(value, run_length) {
            Some(token) => token,
            None => panic!("run length {run_length} outside 1..={TOKEN_RUN_MAX}"),
        }
    }

    /// Decode the payload byte that follows a [`RUN_MARKER`].
    ///
    /// Total: every payload byte describes a valid token.
    #[inline]
    pub fn from_payload(payload: u8) -> Self {
        let value = if payload & VALUE_BIT == 0 { RunValue::Zero } else { RunValue::Ones };
        RleToken { value, run_length: payload & LENGTH_MASK }
    }

    /// Payload byte: value in bit 7, `length - 1` in bits 0..=6.
    #[inline]
    pub fn payload(self) -> u8 {
        let v = match self.value {
            RunValue::Zero => 0,
            RunValue::Ones => VALUE_BIT,
        };
        v | self.run_length
    }

    /// Both token bytes, before the selector escape.
    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        [RUN_MARKER, self.payload()]
    }

    #[inline]
    pub fn value(self) -> RunValue {
        self.value
    }

    /// Number of bytes the token expands to (1..=128).
    #[inline]
    pub fn run_length(self) -> usize {
        self.run_length as usize + 1
    }
}
