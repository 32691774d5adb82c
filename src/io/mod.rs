//! File and stdin/stdout plumbing for the `libzip` binary.
//!
//! The codecs themselves never touch the filesystem; this layer reads hex
//! text, hands the decoded bytes to a [`crate::codec::Codec`] and writes the
//! re-encoded result.

pub mod file_io;
pub mod prefs;
pub mod process;

pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};
pub use prefs::Prefs;
pub use process::{
    dst_filename, process_filename, process_multiple_filenames, transform, Operation, Stats,
};
