//! File primitives for the `libzip` binary.
//!
//! - [`read_src`] — reads a whole source (file or stdin) into memory.
//!   Payloads are transaction sized, so there is no streaming path.
//! - [`open_dst_file`] — resolves a destination (file, stdout or the null
//!   device) and enforces the overwrite policy from [`Prefs`].
//!
//! Stdin carries the payload itself, so an existing destination is never
//! confirmed interactively: without `-f` it is refused.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::displaylevel;
use crate::io::prefs::Prefs;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Sentinel: discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Read the whole of `path` (or stdin for [`STDIN_MARK`]).
pub fn read_src(path: &str) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path == STDIN_MARK {
        displaylevel!(4, "Using stdin for input\n");
        io::stdin().lock().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    if Path::new(path).is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path}: is a directory"),
        ));
    }

    File::open(path)?.read_to_end(&mut buf)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Open a destination for writing.
///
/// - [`STDOUT_MARK`] → stdout.
/// - [`NUL_MARK`] → [`io::sink`], no file created.
/// - Otherwise a regular file; an existing file is an
///   [`io::ErrorKind::AlreadyExists`] error unless `prefs.overwrite`.
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    if path == STDOUT_MARK {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile { inner: Box::new(io::stdout()), is_stdout: true });
    }

    if path == NUL_MARK {
        return Ok(DstFile { inner: Box::new(io::sink()), is_stdout: false });
    }

    if !prefs.overwrite && Path::new(path).exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{path}: already exists; not overwritten (use -f)"),
        ));
    }

    let f = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    Ok(DstFile { inner: Box::new(f), is_stdout: false })
}
