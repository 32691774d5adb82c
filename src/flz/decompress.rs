//! FastLZ level-1 decompression.
//!
//! One pass over the opcode stream; decoding ends exactly when the input is
//! exhausted (the format carries no length field).
//!
//! # Safety boundary
//!
//! Any byte sequence may reach this decoder.  Missing operand or literal
//! bytes return [`DecompressError::TruncatedInput`] and references before
//! the start of the output return [`DecompressError::OffsetOutOfRange`].
//! The decoder never panics; other corruption produces wrong bytes.

use super::types::{Opcode, OpcodeKind};
use crate::error::DecompressError;

/// Append `length` bytes copied from `distance + 1` bytes back.
///
/// Copies one byte at a time: when `distance < length` the source window
/// overlaps bytes written by this same copy, which is how runs are encoded.
#[inline]
fn copy_match(
    out: &mut Vec<u8>,
    length: usize,
    distance: usize,
    position: usize,
) -> Result<(), DecompressError> {
    let Some(start) = out.len().checked_sub(distance + 1) else {
        return Err(DecompressError::OffsetOutOfRange { position, distance, produced: out.len() });
    };
    out.reserve(length);
    for k in start..start + length {
        let b = out[k];
        out.push(b);
    }
    Ok(())
}

/// Decompress an FLZ opcode stream.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::with_capacity(src.len().saturating_mul(2));
    let mut ip = 0usize;

    while ip < src.len() {
        let op = Opcode::parse(src, ip)?;
        let position = ip;
        ip += op.header_len();

        match op.kind() {
            OpcodeKind::Literal => {
                let end = ip + op.length();
                let run = src
                    .get(ip..end)
                    .ok_or(DecompressError::TruncatedInput { position })?;
                out.extend_from_slice(run);
                ip = end;
            }
            OpcodeKind::ShortMatch | OpcodeKind::LongMatch => {
                copy_match(&mut out, op.length(), op.distance(), position)?;
            }
        }
    }

    Ok(out)
}
