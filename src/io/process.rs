//! Per-file processing: read hex text, run a codec, write hex text.
//!
//! | Function                       | Purpose                                        |
//! |--------------------------------|------------------------------------------------|
//! | [`transform`]                  | pure hex-in / hex-out step on an in-memory buffer |
//! | [`process_filename`]           | one source → one destination                   |
//! | [`process_multiple_filenames`] | many sources, destinations derived by suffix, run on a rayon pool |
//! | [`dst_filename`]               | destination name for `-m`                      |
//!
//! Errors carry the file name as `anyhow` context; the multiple-file path
//! reports each failure and counts it instead of stopping.

use std::io::Write;

use anyhow::{anyhow, bail, Context};
use rayon::prelude::*;

use crate::codec::Codec;
use crate::displaylevel;
use crate::hex;
use crate::io::file_io::{open_dst_file, read_src, NUL_MARK};
use crate::io::prefs::Prefs;

/// Work applied to each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
    /// Compress, decompress and compare with the input; nothing is written.
    Test,
}

/// Sizes (in bytes, not hex digits) seen while processing one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

impl Stats {
    /// Output size as a percentage of input size (100 for empty input).
    pub fn ratio_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            100.0
        } else {
            self.output_bytes as f64 * 100.0 / self.input_bytes as f64
        }
    }
}

/// Decode `raw` as hex text, apply `op` with `codec`, and return the encoded result.
///
/// For [`Operation::Test`] the result is the compressed form, returned only
/// after it decoded back to the input.
pub fn transform(codec: Codec, op: Operation, raw: &[u8]) -> anyhow::Result<(String, Stats)> {
    let input = hex::decode_utf8(raw)?;
    let output = match op {
        Operation::Compress => codec.compress(&input),
        Operation::Decompress => codec.decompress(&input)?,
        Operation::Test => {
            let compressed = codec.compress(&input);
            let restored = codec.decompress(&compressed)?;
            if restored != input {
                bail!("{codec} round trip mismatch ({} bytes in, {} bytes back)", input.len(), restored.len());
            }
            compressed
        }
    };
    let stats = Stats { input_bytes: input.len(), output_bytes: output.len() };
    Ok((hex::encode(&output), stats))
}

/// Process one source into one destination.
///
/// In [`Operation::Test`] mode `dst` is ignored and nothing is written.
pub fn process_filename(src: &str, dst: &str, op: Operation, prefs: &Prefs) -> anyhow::Result<Stats> {
    let codec = prefs.codec_for(src, op);
    let raw = read_src(src).with_context(|| format!("{src}: cannot read"))?;
    let (text, stats) = transform(codec, op, &raw).with_context(|| format!("{src}: {codec} {op:?} failed"))?;

    if op != Operation::Test {
        let mut out = open_dst_file(dst, prefs).with_context(|| format!("{dst}: cannot open"))?;
        writeln!(out, "{text}").and_then(|_| out.flush()).with_context(|| format!("{dst}: write error"))?;
    }

    displaylevel!(
        2,
        "{:<24} : {} {} bytes => {} bytes ({:.2}%)\n",
        src,
        codec,
        stats.input_bytes,
        stats.output_bytes,
        stats.ratio_percent()
    );
    Ok(stats)
}

/// Destination name for `src` in multiple-input mode.
///
/// Compression appends the codec suffix; decompression strips it and fails
/// when the file carries no known suffix.  Test mode writes nothing.
pub fn dst_filename(src: &str, op: Operation, prefs: &Prefs) -> anyhow::Result<String> {
    match op {
        Operation::Compress => Ok(format!("{src}{}", prefs.codec.extension())),
        Operation::Test => Ok(NUL_MARK.to_owned()),
        Operation::Decompress => {
            let codec = Codec::from_filename(src)
                .ok_or_else(|| anyhow!("{src}: unknown suffix -- ignored"))?;
            Ok(src[..src.len() - codec.extension().len()].to_owned())
        }
    }
}

/// Process every source on a rayon pool of `prefs.nb_workers` threads.
///
/// Returns the number of sources that failed; each failure is reported at
/// display level 1.
pub fn process_multiple_filenames(srcs: &[String], op: Operation, prefs: &Prefs) -> anyhow::Result<usize> {
    if srcs.is_empty() {
        bail!("no input files");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(prefs.nb_workers)
        .build()
        .context("cannot start worker pool")?;
    displaylevel!(4, "Using {} worker threads\n", pool.current_num_threads());

    let missed = pool.install(|| {
        srcs.par_iter()
            .map(|src| {
                let result = dst_filename(src, op, prefs)
                    .and_then(|dst| process_filename(src, &dst, op, prefs));
                match result {
                    Ok(_) => 0usize,
                    Err(e) => {
                        displaylevel!(1, "libzip: {:#}\n", e);
                        1
                    }
                }
            })
            .sum::<usize>()
    });
    Ok(missed)
}
