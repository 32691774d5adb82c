// Integration tests for io/prefs.rs — codec choice per file and worker clamping

use libzip::config::NB_WORKERS_MAX;
use libzip::io::{Operation, Prefs};
use libzip::Codec;

#[test]
fn suffix_picks_codec_unless_forced() {
    let mut prefs = Prefs::default();
    assert_eq!(prefs.codec_for("x.flz", Operation::Decompress), Codec::Flz);
    assert_eq!(prefs.codec_for("x.hex", Operation::Decompress), Codec::Calldata);

    prefs.set_codec(Codec::Calldata);
    assert_eq!(prefs.codec_for("x.flz", Operation::Decompress), Codec::Calldata);
}

#[test]
fn unforced_default_applies_to_unknown_suffix() {
    let prefs = Prefs { codec: Codec::Flz, ..Prefs::default() };
    assert_eq!(prefs.codec_for("stdin", Operation::Decompress), Codec::Flz);
    assert_eq!(prefs.codec_for("x.cd", Operation::Decompress), Codec::Calldata);
}

#[test]
fn compress_and_test_use_configured_codec() {
    let prefs = Prefs::default();
    assert_eq!(prefs.codec_for("x.flz", Operation::Compress), Codec::Calldata);
    assert_eq!(prefs.codec_for("x.flz", Operation::Test), Codec::Calldata);

    let prefs = Prefs { codec: Codec::Flz, ..Prefs::default() };
    assert_eq!(prefs.codec_for("x.cd", Operation::Compress), Codec::Flz);
}

#[test]
fn worker_count_is_clamped() {
    let mut prefs = Prefs::default();
    assert_eq!(prefs.set_nb_workers(NB_WORKERS_MAX + 1), NB_WORKERS_MAX);
    assert_eq!(prefs.set_nb_workers(3), 3);
    assert_eq!(prefs.nb_workers, 3);
}
