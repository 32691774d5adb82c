// Integration tests for cli/op_mode.rs — mode resolution and environment defaults

use libzip::cli::op_mode::{determine_op_mode, init_codec_from, init_nb_workers_from, OpMode};
use libzip::io::Operation;
use libzip::Codec;

#[test]
fn auto_mode_follows_suffix() {
    assert_eq!(OpMode::Auto.resolve("payload.hex"), Operation::Compress);
    assert_eq!(OpMode::Auto.resolve("payload.hex.cd"), Operation::Decompress);
    assert_eq!(OpMode::Auto.resolve("payload.flz"), Operation::Decompress);
}

#[test]
fn explicit_mode_ignores_suffix() {
    assert_eq!(OpMode::Compress.resolve("payload.cd"), Operation::Compress);
    assert_eq!(OpMode::Decompress.resolve("payload.hex"), Operation::Decompress);
}

#[test]
fn suffix_must_be_at_the_end() {
    assert_eq!(determine_op_mode("a.cd.hex"), OpMode::Compress);
    assert_eq!(determine_op_mode("a.flzx"), OpMode::Compress);
}

#[test]
fn codec_from_environment() {
    assert_eq!(init_codec_from(Some(" FLZ ")), Codec::Flz);
    assert_eq!(init_codec_from(Some("calldata")), Codec::Calldata);
    assert_eq!(init_codec_from(Some("")), Codec::Calldata);
}

#[test]
fn workers_from_environment() {
    assert_eq!(init_nb_workers_from(Some("12")), 12);
    assert_eq!(init_nb_workers_from(Some("0")), 0);
    assert_eq!(init_nb_workers_from(Some("")), 0);
}
