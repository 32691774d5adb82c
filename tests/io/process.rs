// Integration tests for io/process.rs — per-file processing and batch mode

use libzip::io::{dst_filename, process_filename, process_multiple_filenames, transform, Operation, Prefs, Stats};
use libzip::Codec;
use tempfile::TempDir;

fn s(p: &std::path::Path) -> String {
    p.to_str().unwrap().to_owned()
}

#[test]
fn transform_each_operation() {
    let raw = b"  0xFFFFFFFF00000000  \n";
    let (compressed, stats) = transform(Codec::Calldata, Operation::Compress, raw).unwrap();
    assert_eq!(compressed, "0xff7cfffc");
    assert_eq!(stats, Stats { input_bytes: 8, output_bytes: 4 });

    let (restored, _) = transform(Codec::Calldata, Operation::Decompress, compressed.as_bytes()).unwrap();
    assert_eq!(restored, "0xffffffff00000000");

    let (tested, _) = transform(Codec::Calldata, Operation::Test, raw).unwrap();
    assert_eq!(tested, compressed);
}

#[test]
fn transform_rejects_corrupt_stream() {
    let err = transform(Codec::Flz, Operation::Decompress, b"0x1f").unwrap_err();
    assert!(err.to_string().contains("truncated"), "{err}");
}

#[test]
fn single_file_compress_then_decompress() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("tx.hex");
    let packed = dir.path().join("tx.hex.flz");
    let back = dir.path().join("back.hex");
    std::fs::write(&src, "0x60806040526004361061001e5760003560e01c80\n").unwrap();

    let prefs = Prefs::default();
    process_filename(&s(&src), &s(&packed), Operation::Compress, &Prefs { codec: Codec::Flz, ..prefs.clone() })
        .unwrap();
    // The suffix selects the codec on the way back.
    process_filename(&s(&packed), &s(&back), Operation::Decompress, &prefs).unwrap();

    assert_eq!(
        std::fs::read_to_string(&back).unwrap(),
        "0x60806040526004361061001e5760003560e01c80\n"
    );
}

#[test]
fn test_operation_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("tx.hex");
    let dst = dir.path().join("should-not-exist");
    std::fs::write(&src, "0xa9059cbb").unwrap();
    process_filename(
        src.to_str().unwrap(),
        dst.to_str().unwrap(),
        Operation::Test,
        &Prefs::default(),
    )
    .unwrap();
    assert!(!dst.exists());
}

#[test]
fn bad_hex_file_carries_file_name() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("bad.hex");
    std::fs::write(&src, "0xnothex").unwrap();
    let err = process_filename(src.to_str().unwrap(), "stdout", Operation::Compress, &Prefs::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("bad.hex"), "{err:#}");
}

#[test]
fn dst_filename_uses_forced_codec_suffix() {
    let mut prefs = Prefs::default();
    prefs.set_codec(Codec::Flz);
    assert_eq!(dst_filename("x.hex", Operation::Compress, &prefs).unwrap(), "x.hex.flz");
    assert_eq!(dst_filename("x.hex.cd", Operation::Decompress, &prefs).unwrap(), "x.hex");
}

#[test]
fn batch_reports_partial_failure() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.hex");
    let bad = dir.path().join("bad.hex");
    std::fs::write(&good, "0x00000000").unwrap();
    std::fs::write(&bad, "0x0").unwrap();
    let srcs = vec![good.to_str().unwrap().to_owned(), bad.to_str().unwrap().to_owned()];

    let missed = process_multiple_filenames(&srcs, Operation::Compress, &Prefs::default()).unwrap();
    assert_eq!(missed, 1);
    assert_eq!(std::fs::read_to_string(dir.path().join("good.hex.cd")).unwrap(), "0xfffc\n");
    assert!(!dir.path().join("bad.hex.cd").exists());
}

#[test]
fn batch_without_inputs_is_an_error() {
    assert!(process_multiple_filenames(&[], Operation::Compress, &Prefs::default()).is_err());
}

#[test]
fn batch_compress_of_codec_named_source_round_trips() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("payload.flz");
    std::fs::write(&src, "0xa9059cbb0000000000000000000000000000").unwrap();
    let prefs = Prefs::default();

    let missed = process_multiple_filenames(&[s(&src)], Operation::Compress, &prefs).unwrap();
    assert_eq!(missed, 0);
    let packed = dir.path().join("payload.flz.cd");
    // The configured codec is used, not the one named by the source suffix.
    assert_eq!(std::fs::read_to_string(&packed).unwrap(), "0x56fa6344000d\n");

    std::fs::remove_file(&src).unwrap();
    let missed = process_multiple_filenames(&[s(&packed)], Operation::Decompress, &prefs).unwrap();
    assert_eq!(missed, 0);
    assert_eq!(
        std::fs::read_to_string(&src).unwrap(),
        "0xa9059cbb0000000000000000000000000000\n"
    );
}
