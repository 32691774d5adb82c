// prefs.rs — I/O preferences for the `libzip` binary.
//
// `Prefs` is a plain value type: the CLI builds one from defaults, the
// environment and flags, then hands it by reference to the processing layer.

use crate::codec::Codec;
use crate::config::{NB_WORKERS_DEFAULT, NB_WORKERS_MAX};
use crate::io::process::Operation;

/// Options that affect how inputs are read, transformed and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefs {
    /// Codec used for compression, and for decompression of files whose
    /// name carries no codec suffix.
    pub codec: Codec,
    /// Whether the codec was chosen explicitly (`--cd` / `--flz`).  An
    /// explicit choice wins over a file suffix when decompressing.
    pub codec_forced: bool,
    /// Replace existing destination files.
    pub overwrite: bool,
    /// Worker threads for multiple-input mode (0 = one per core).
    pub nb_workers: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            codec: Codec::Calldata,
            codec_forced: false,
            overwrite: false,
            nb_workers: NB_WORKERS_DEFAULT,
        }
    }
}

impl Prefs {
    pub fn set_codec(&mut self, codec: Codec) {
        self.codec = codec;
        self.codec_forced = true;
    }

    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    /// Set the worker count, clamped to [`NB_WORKERS_MAX`].  Returns the value kept.
    pub fn set_nb_workers(&mut self, nb_workers: usize) -> usize {
        self.nb_workers = nb_workers.min(NB_WORKERS_MAX);
        self.nb_workers
    }

    /// Codec to apply to `filename` under `op`.
    ///
    /// Only decompression reads the suffix (unless the codec was forced);
    /// compression and test always use [`Prefs::codec`], so the output of
    /// `-m` matches the suffix it is given.
    pub fn codec_for(&self, filename: &str, op: Operation) -> Codec {
        match op {
            Operation::Decompress if !self.codec_forced => {
                Codec::from_filename(filename).unwrap_or(self.codec)
            }
            _ => self.codec,
        }
    }
}
