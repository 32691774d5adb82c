// Integration tests for cli/args.rs — option parsing into ParsedArgs

use libzip::cli::args::{parse_args_from, ParsedArgs};
use libzip::cli::op_mode::OpMode;
use libzip::io::{Prefs, STDIN_MARK};
use libzip::Codec;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn parse(args: &[&str]) -> ParsedArgs {
    parse_args_from(Prefs::default(), "libzip", &argv(args)).expect("parse failed")
}

#[test]
fn environment_defaults_survive_parsing() {
    let mut prefs = Prefs::default();
    prefs.codec = Codec::Flz;
    prefs.set_nb_workers(6);
    let p = parse_args_from(prefs, "libzip", &argv(&["in.hex"])).unwrap();
    assert_eq!(p.prefs.codec, Codec::Flz);
    assert!(!p.prefs.codec_forced);
    assert_eq!(p.prefs.nb_workers, 6);
}

#[test]
fn later_codec_flag_wins() {
    let p = parse(&["--flz", "--cd"]);
    assert_eq!(p.prefs.codec, Codec::Calldata);
    assert!(p.prefs.codec_forced);
}

#[test]
fn long_mode_options() {
    assert_eq!(parse(&["--compress"]).op_mode, OpMode::Compress);
    assert_eq!(parse(&["--decompress"]).op_mode, OpMode::Decompress);
    assert_eq!(parse(&["--test"]).op_mode, OpMode::Test);
}

#[test]
fn stdout_and_force_long_forms() {
    let p = parse(&["--stdout", "--force"]);
    assert!(p.force_stdout);
    assert!(p.prefs.overwrite);
    assert!(!parse(&["--force", "--no-force"]).prefs.overwrite);
}

#[test]
fn dash_alone_is_stdin() {
    let p = parse(&["-d", "-"]);
    assert_eq!(p.input_filename.as_deref(), Some(STDIN_MARK));
    assert_eq!(p.op_mode, OpMode::Decompress);
}

#[test]
fn multiple_collects_everything_after() {
    let p = parse(&["-m", "--flz", "a", "b", "--", "-c"]);
    assert!(p.multiple_inputs);
    assert_eq!(p.prefs.codec, Codec::Flz);
    assert_eq!(p.in_file_names, vec!["a", "b", "-c"]);
}

#[test]
fn help_stops_parsing() {
    let p = parse(&["-h", "--definitely-not-an-option"]);
    assert!(p.exit_early);
}

#[test]
fn bad_usage_messages() {
    for bad in [&["--codec"][..], &["--codec=gzip"], &["-x"], &["--threads=-1"], &["a", "b", "c"]] {
        let err = parse_args_from(Prefs::default(), "libzip", &argv(bad)).unwrap_err();
        assert!(err.to_string().starts_with("bad usage:"), "{bad:?}: {err}");
    }
}
