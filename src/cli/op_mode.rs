//! Operation mode selection and startup defaults for the CLI.
//!
//! - [`OpMode`] — what the CLI should do; [`OpMode::Auto`] is resolved per
//!   input by [`determine_op_mode`].
//! - [`init_codec`] / [`init_nb_workers`] — per-process defaults read from
//!   `LIBZIP_CODEC` / `LIBZIP_NBWORKERS`, each with a testable `*_from` core.

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::constants::display_level;
use crate::codec::Codec;
use crate::config::{CODEC_DEFAULT, ENV_CODEC, ENV_NBWORKERS, NB_WORKERS_DEFAULT};
use crate::io::Operation;

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decompress inputs carrying a codec suffix, compress everything else.
    Auto,
    Compress,
    Decompress,
    /// Round-trip the input through the codec and compare, without writing output.
    Test,
}

/// Infer the operation from `filename`'s suffix.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if Codec::from_filename(filename).is_some() {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

impl OpMode {
    /// Concrete operation for `filename`, resolving [`OpMode::Auto`].
    pub fn resolve(self, filename: &str) -> Operation {
        match self {
            OpMode::Auto => determine_op_mode(filename).resolve(filename),
            OpMode::Compress => Operation::Compress,
            OpMode::Decompress => Operation::Decompress,
            OpMode::Test => Operation::Test,
        }
    }
}

/// Read the default codec from `LIBZIP_CODEC`.
pub fn init_codec() -> Codec {
    init_codec_from(std::env::var(ENV_CODEC).ok().as_deref())
}

/// Testable core of [`init_codec`].
pub fn init_codec_from(env_val: Option<&str>) -> Codec {
    let fallback = CODEC_DEFAULT.parse().unwrap_or(Codec::Calldata);
    match env_val {
        None => fallback,
        Some(env) => env.parse().unwrap_or_else(|e| {
            if display_level() >= 2 {
                eprintln!("Ignore environment variable setting {}={}: {} ", ENV_CODEC, env, e);
            }
            fallback
        }),
    }
}

/// Read the worker count from `LIBZIP_NBWORKERS`.
pub fn init_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Testable core of [`init_nb_workers`].
///
/// Pass `Some(s)` with the raw string, or `None` to simulate the variable
/// being unset.
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val as usize;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_NBWORKERS, env
            );
        }
    }
    NB_WORKERS_DEFAULT
}
