//! Calldata run-length decompression.
//!
//! Mirror of [`super::compress`]: bytes are un-escaped by stream position,
//! a [`RUN_MARKER`] consumes the following payload byte as a run token and
//! everything else is copied through.
//!
//! Every byte sequence except one ending in a lone marker decodes to
//! *something*; only that truncation is reported.  Feeding data that was not
//! produced by the compressor yields unspecified (but memory-safe) output.

use super::token::{escape, RleToken, RUN_MARKER};
use crate::error::DecompressError;

/// Decompress a calldata stream.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::with_capacity(src.len().saturating_mul(2));
    let mut ip = 0usize;

    while ip < src.len() {
        let c = escape(ip, src[ip]);
        ip += 1;

        if c != RUN_MARKER {
            out.push(c);
            continue;
        }

        let payload = match src.get(ip) {
            Some(&b) => escape(ip, b),
            None => return Err(DecompressError::TruncatedInput { position: ip - 1 }),
        };
        ip += 1;

        let token = RleToken::from_payload(payload);
        out.resize(out.len() + token.run_length(), token.value().byte());
    }

    Ok(out)
}
