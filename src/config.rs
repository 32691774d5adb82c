// config.rs — Compile-time configuration constants.
//
// Defaults for the `libzip` binary.  The codec modules themselves take no
// configuration: every stream-format constant lives next to the code that
// encodes it (calldata::token, flz::types) and is fixed by the on-chain
// decoders.

// Codec used when neither --cd nor --flz is given.
// Can be overridden by the LIBZIP_CODEC environment variable ("cd" / "flz").
pub const CODEC_DEFAULT: &str = "cd";

// Environment variable selecting the default codec.
pub const ENV_CODEC: &str = "LIBZIP_CODEC";

// Environment variable selecting the worker count for -m.
pub const ENV_NBWORKERS: &str = "LIBZIP_NBWORKERS";

// Default number of worker threads for multiple-input mode (0 = one per core).
// Can be overridden by LIBZIP_NBWORKERS or -T#.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Maximum number of worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// Initial display level: 0 silent, 1 errors, 2 results, 3 info, 4 verbose.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// File suffixes written by -m and recognised by automatic mode selection.
pub const CD_EXTENSION: &str = ".cd";
pub const FLZ_EXTENSION: &str = ".flz";
