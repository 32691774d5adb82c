//! Run-length codec for ABI-encoded calldata.
//!
//! Calldata is mostly 32-byte words padded with `0x00`, with the occasional
//! all-ones mask.  This codec replaces runs of those two byte values with
//! two-byte tokens and passes every other byte through, which keeps the
//! on-chain decoder trivial.
//!
//! The first four bytes of the compressed stream are stored complemented so
//! that a router dispatching on the 4-byte selector never sees a run marker
//! there by accident.  See [`token`] for the exact layout.

pub mod compress;
pub mod decompress;
pub mod token;

pub use compress::{compress, compress_bound};
pub use decompress::decompress;
pub use token::{escape, RleToken, RunValue, ONES_RUN_MAX, SELECTOR_LEN, ZERO_RUN_MAX};
