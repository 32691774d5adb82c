// cli/help.rs — usage and help text printers.
//
// All help goes to stderr; only the version banner goes to stdout.

use crate::cli::constants::{welcome_message, COMPRESSOR_NAME};
use crate::config::{CD_EXTENSION, ENV_CODEC, ENV_NBWORKERS, FLZ_EXTENSION, NB_WORKERS_DEFAULT};
use crate::io::STDIN_MARK;

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!("Usage : ");
    eprintln!("      {} [arg] [input] [output] ", program);
    eprintln!();
    eprintln!("input   : a file holding hex text (optional 0x prefix)");
    eprintln!(
        "          with no FILE, or when FILE is - or {}, read standard input",
        STDIN_MARK
    );
    eprintln!("Arguments : ");
    eprintln!(" -z     : compression (default) ");
    eprintln!(
        " -d     : decompression (default for {} and {} extensions)",
        CD_EXTENSION, FLZ_EXTENSION
    );
    eprintln!(" --cd   : calldata run-length codec (default) ");
    eprintln!(" --flz  : FastLZ level 1 codec ");
    eprintln!(" -f     : overwrite output without prompting ");
    eprintln!(" -h/-H  : display help/long help and exit ");
}

/// Print the welcome banner, brief usage and advanced options to stderr.
pub fn print_usage_advanced(program: &str) {
    eprintln!("{}", welcome_message());
    print_usage(program);
    eprintln!();
    eprintln!("Advanced arguments :");
    eprintln!(" -V     : display Version number and exit ");
    eprintln!(" -v     : verbose mode ");
    eprintln!(" -q     : suppress warnings; specify twice to suppress errors too");
    eprintln!(" -c     : force write to standard output, even if it is the console");
    eprintln!(" -t     : test round trip (compress, decompress, compare; no output)");
    eprintln!(" -m     : multiple input files (implies automatic output filenames)");
    eprintln!("          without -z/-d/-t, each file is decompressed if it has a codec suffix");
    eprintln!(
        " -T#    : use # threads for -m (default:{}==auto) ",
        NB_WORKERS_DEFAULT
    );
    eprintln!("--codec=NAME : select codec by name (cd, flz)");
    eprintln!("--threads=#  : same as -T#");
    eprintln!(" --     : all following arguments are file names");
}

/// Print the full help, including environment variables and examples.
pub fn print_long_help(program: &str) {
    print_usage_advanced(program);
    eprintln!();
    eprintln!("****************************");
    eprintln!("***** Environment       ****");
    eprintln!("****************************");
    eprintln!();
    eprintln!("{}=cd|flz : default codec", ENV_CODEC);
    eprintln!("{}=#      : default worker count for -m", ENV_NBWORKERS);
    eprintln!();
    eprintln!("****************************");
    eprintln!("***** Use cases         ****");
    eprintln!("****************************");
    eprintln!();
    eprintln!("Compress calldata from a file, result on stdout :");
    eprintln!("          {} -c tx.hex", program);
    eprintln!("Compress every file, writing <name>{} :", FLZ_EXTENSION);
    eprintln!("          {} --flz -m a.hex b.hex", program);
    eprintln!("Decompress, codec chosen by suffix :");
    eprintln!("          {} -d tx.hex{} tx.hex", program, CD_EXTENSION);
    eprintln!("Pipe :");
    eprintln!("          cat tx.hex | {} | {} -d --cd", COMPRESSOR_NAME, COMPRESSOR_NAME);
}

/// Print the version banner to stdout.
pub fn print_version() {
    println!("{}", welcome_message());
}
