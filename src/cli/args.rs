//! Command-line argument parsing for the `libzip` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()` and the
//! environment) and [`parse_args_from`] (takes explicit starting preferences
//! and an argument slice, suitable for unit-testing).
//!
//! Short options may be aggregated (e.g. `-dfv`).  Long options taking a
//! value accept `--option=VALUE` or `--option VALUE`.  A bare `--` marks the
//! end of options.
//!
//! Bad or unrecognised options return an `Err` whose message begins with
//! `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::arg_utils::{last_name_from_path, long_command_w_arg, read_u32_from_str};
use crate::cli::constants::{display_level, set_display_level};
use crate::cli::help::{print_long_help, print_usage_advanced, print_version};
use crate::cli::op_mode::{init_codec, init_nb_workers, OpMode};
use crate::codec::Codec;
use crate::displaylevel;
use crate::io::{Prefs, STDIN_MARK, STDOUT_MARK};

/// Everything the argument loop discovered.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Codec, overwrite and worker preferences.
    pub prefs: Prefs,
    /// Requested operation; [`OpMode::Auto`] is resolved per input later.
    pub op_mode: OpMode,
    /// Write to stdout regardless of any output name (`-c`).
    pub force_stdout: bool,
    /// Treat every non-option argument as an input file (`-m`).
    pub multiple_inputs: bool,
    /// Single input (non-multiple mode).
    pub input_filename: Option<String>,
    /// Single output (non-multiple mode).
    pub output_filename: Option<String>,
    /// Inputs collected in multiple-input mode.
    pub in_file_names: Vec<String>,
    /// A `--help` / `--version` flag was handled; exit 0 without doing I/O.
    pub exit_early: bool,
    /// Basename of argv[0], used by help text.
    pub exe_name: String,
}

/// Parse the process arguments, starting from environment defaults.
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut prefs = Prefs::default();
    prefs.codec = init_codec();
    prefs.set_nb_workers(init_nb_workers());
    parse_args_from(prefs, &exe_name, &argv)
}

/// Parse an explicit argument list, starting from `prefs`.
///
/// `exe_name` is argv[0]; `argv` is argv[1..].
pub fn parse_args_from(mut prefs: Prefs, exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let exe_name = last_name_from_path(exe_name).to_owned();

    let mut op_mode = OpMode::Auto;
    let mut force_stdout = false;
    let mut multiple_inputs = false;
    let mut all_arguments_are_files = false;
    let mut input_filename: Option<String> = None;
    let mut output_filename: Option<String> = None;
    let mut in_file_names: Vec<String> = Vec::new();
    let mut exit_early = false;

    // ── Main argument loop ──────────────────────────────────────────────────

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];

        if argument.is_empty() {
            arg_idx += 1;
            continue;
        }

        let bytes = argument.as_bytes();

        // ── Non-option path (or end-of-options forced by `--`) ────────────────
        if all_arguments_are_files || bytes[0] != b'-' {
            if multiple_inputs {
                in_file_names.push(argument.clone());
            } else if input_filename.is_none() {
                input_filename = Some(argument.clone());
            } else if output_filename.is_none() {
                output_filename = Some(argument.clone());
            } else {
                return Err(anyhow!(
                    "bad usage: {} won't be used ! Do you want multiple input files (-m) ?",
                    argument
                ));
            }
            arg_idx += 1;
            continue;
        }

        // ── Single `-` means stdin (as input) or stdout (as output) ──────────
        if bytes.len() == 1 {
            if multiple_inputs {
                return Err(anyhow!("bad usage: stdin cannot be combined with -m"));
            }
            if input_filename.is_none() {
                input_filename = Some(STDIN_MARK.to_owned());
            } else {
                output_filename = Some(STDOUT_MARK.to_owned());
            }
            arg_idx += 1;
            continue;
        }

        // ── Long options (`--...`) ────────────────────────────────────────────
        if bytes[1] == b'-' {
            if argument == "--" {
                all_arguments_are_files = true;
            } else if argument == "--compress" {
                op_mode = OpMode::Compress;
            } else if argument == "--decompress" || argument == "--uncompress" {
                op_mode = OpMode::Decompress;
            } else if argument == "--test" {
                op_mode = OpMode::Test;
            } else if argument == "--multiple" {
                multiple_inputs = true;
            } else if argument == "--force" {
                prefs.set_overwrite(true);
            } else if argument == "--no-force" {
                prefs.set_overwrite(false);
            } else if argument == "--stdout" || argument == "--to-stdout" {
                force_stdout = true;
            } else if argument == "--cd" {
                prefs.set_codec(Codec::Calldata);
            } else if argument == "--flz" {
                prefs.set_codec(Codec::Flz);
            } else if argument == "--verbose" {
                set_display_level(display_level().saturating_add(1));
            } else if argument == "--quiet" {
                set_display_level(display_level().saturating_sub(1));
            } else if argument == "--version" {
                print_version();
                exit_early = true;
                break;
            } else if argument == "--help" {
                print_usage_advanced(&exe_name);
                exit_early = true;
                break;
            } else if let Some(rest) = long_command_w_arg(argument, "--codec") {
                let name = next_value(rest, argv, &mut arg_idx, "--codec")?;
                let codec: Codec = name.parse().map_err(|e| anyhow!("bad usage: --codec: {}", e))?;
                prefs.set_codec(codec);
            } else if let Some(rest) = long_command_w_arg(argument, "--threads") {
                let value = next_value(rest, argv, &mut arg_idx, "--threads")?;
                let nb_workers = parse_workers(&value, "--threads")?;
                set_workers(&mut prefs, nb_workers);
            } else {
                return Err(anyhow!("bad usage: unknown option: {}", argument));
            }

            arg_idx += 1;
            continue;
        }

        // ── Short options (possibly aggregated, e.g. `-dfv`) ─────────────────

        let mut char_pos: usize = 1;
        while char_pos < bytes.len() {
            match bytes[char_pos] {
                b'V' => {
                    print_version();
                    exit_early = true;
                }
                b'h' => {
                    print_usage_advanced(&exe_name);
                    exit_early = true;
                }
                b'H' => {
                    print_long_help(&exe_name);
                    exit_early = true;
                }
                b'z' => op_mode = OpMode::Compress,
                b'd' => op_mode = OpMode::Decompress,
                b't' => op_mode = OpMode::Test,
                b'c' => force_stdout = true,
                b'f' => prefs.set_overwrite(true),
                b'm' => multiple_inputs = true,
                b'v' => set_display_level(display_level().saturating_add(1)),
                b'q' => set_display_level(display_level().saturating_sub(1)),
                b'T' => {
                    // `-T4` inline, or `-T 4` as the next argument.
                    let next = char_pos + 1;
                    if next < bytes.len() {
                        let (val, remainder) = read_u32_from_str(&argument[next..])
                            .ok_or_else(|| anyhow!("bad usage: -T: expected numeric value"))?;
                        set_workers(&mut prefs, val as usize);
                        let consumed = argument[next..].len() - remainder.len();
                        char_pos = next + consumed - 1;
                    } else {
                        arg_idx += 1;
                        let value = argv
                            .get(arg_idx)
                            .ok_or_else(|| anyhow!("bad usage: -T requires a numeric argument"))?;
                        let nb_workers = parse_workers(value, "-T")?;
                        set_workers(&mut prefs, nb_workers);
                    }
                }
                other => {
                    return Err(anyhow!("bad usage: unrecognised option: -{}", other as char));
                }
            }

            if exit_early {
                break;
            }
            char_pos += 1;
        }

        if exit_early {
            break;
        }

        arg_idx += 1;
    }

    Ok(ParsedArgs {
        prefs,
        op_mode,
        force_stdout,
        multiple_inputs,
        input_filename,
        output_filename,
        in_file_names,
        exit_early,
        exe_name,
    })
}

// ── Private helpers ────────────────────────────────────────────────────────────

/// Value of a long option: `=VALUE` inside `rest`, or the next argument
/// (advancing `arg_idx`) when `rest` is empty.
fn next_value(rest: &str, argv: &[String], arg_idx: &mut usize, option: &str) -> anyhow::Result<String> {
    if let Some(value) = rest.strip_prefix('=') {
        return Ok(value.to_owned());
    }
    if !rest.is_empty() {
        return Err(anyhow!("bad usage: {}: unexpected text after option", option));
    }
    *arg_idx += 1;
    let next = argv
        .get(*arg_idx)
        .ok_or_else(|| anyhow!("bad usage: {}: missing command argument", option))?;
    if next.starts_with('-') {
        return Err(anyhow!("bad usage: {}: option argument cannot be another option", option));
    }
    Ok(next.clone())
}

/// Strict worker count: digits only.
fn parse_workers(value: &str, option: &str) -> anyhow::Result<usize> {
    match read_u32_from_str(value) {
        Some((val, "")) => Ok(val as usize),
        _ => Err(anyhow!("bad usage: {}: only numeric values are allowed", option)),
    }
}

fn set_workers(prefs: &mut Prefs, requested: usize) {
    let kept = prefs.set_nb_workers(requested);
    if kept != requested {
        displaylevel!(2, "Requested {} threads too large => automatically reduced to {} \n", requested, kept);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
