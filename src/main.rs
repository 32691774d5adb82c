//! Binary entry point for the `libzip` command-line tool.
//!
//! # Control flow
//!
//! 1. [`parse_args`] reads the environment defaults and all flags into a
//!    [`ParsedArgs`] value.
//! 2. [`run`] resolves input/output names and the operation, then hands off
//!    to [`libzip::io`].  It returns the process exit code.

use libzip::cli::args::{parse_args, ParsedArgs};
use libzip::cli::constants::{display_level, set_display_level, welcome_message};
use libzip::cli::help::print_usage;
use libzip::io::{process_filename, process_multiple_filenames, Operation, NUL_MARK, STDIN_MARK, STDOUT_MARK};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = error).
fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs {
        prefs,
        op_mode,
        force_stdout,
        multiple_inputs,
        input_filename,
        output_filename,
        in_file_names,
        exe_name,
        ..
    } = args;

    libzip::displaylevel!(3, "{}\n", welcome_message());
    libzip::displaylevel!(
        4,
        "codec : {} ({}), workers : {}, overwrite : {}\n",
        prefs.codec,
        if prefs.codec_forced { "forced" } else { "default" },
        prefs.nb_workers,
        prefs.overwrite
    );

    // ── Multiple inputs ───────────────────────────────────────────────────────
    if multiple_inputs {
        if force_stdout {
            libzip::displaylevel!(1, "libzip: -c cannot be combined with -m \n");
            return 1;
        }
        if in_file_names.is_empty() {
            libzip::displaylevel!(1, "libzip: no input files \n");
            print_usage(&exe_name);
            return 1;
        }
        // Auto mode resolves each file on its own suffix.
        let mut missed = 0;
        for op in [Operation::Compress, Operation::Decompress, Operation::Test] {
            let batch: Vec<String> = in_file_names
                .iter()
                .filter(|name| op_mode.resolve(name) == op)
                .cloned()
                .collect();
            if batch.is_empty() {
                continue;
            }
            match process_multiple_filenames(&batch, op, &prefs) {
                Ok(n) => missed += n,
                Err(e) => {
                    libzip::displaylevel!(1, "libzip: {:#}\n", e);
                    return 1;
                }
            }
        }
        if missed > 0 {
            libzip::displaylevel!(2, "{} files failed \n", missed);
            return 1;
        }
        return 0;
    }

    // ── Single input ──────────────────────────────────────────────────────────
    let input_filename = input_filename.unwrap_or_else(|| STDIN_MARK.to_owned());
    let op = op_mode.resolve(&input_filename);
    let output_filename = match (op, force_stdout, output_filename) {
        (Operation::Test, _, _) => NUL_MARK.to_owned(),
        (_, true, _) | (_, false, None) => STDOUT_MARK.to_owned(),
        (_, false, Some(name)) => name,
    };

    // Results on stdout would interleave with the per-file summary.
    if output_filename == STDOUT_MARK && display_level() == 2 {
        set_display_level(1);
    }

    match process_filename(&input_filename, &output_filename, op, &prefs) {
        Ok(_) => 0,
        Err(e) => {
            libzip::displaylevel!(1, "libzip: {:#}\n", e);
            1
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("libzip: {}", e);
            std::process::exit(1);
        }
    };

    if args.exit_early {
        std::process::exit(0);
    }

    std::process::exit(run(args));
}
