//! Generic LZ77 codec in the FastLZ level-1 wire format.
//!
//! Use this for payloads that are not ABI-shaped; for calldata the
//! run-length codec in [`crate::calldata`] is usually smaller and cheaper to
//! decode on-chain.

pub mod compress;
pub mod decompress;
pub mod types;

pub use compress::{compress, compress_bound};
pub use decompress::decompress;
pub use types::{Opcode, OpcodeKind, MAX_COPY, MAX_DISTANCE};
