// Integration tests for calldata/decompress.rs — run expansion and malformed streams

use libzip::calldata::{compress, decompress};
use libzip::sample::{calldata, SampleRng};
use libzip::DecompressError;

#[test]
fn expands_runs() {
    let out = decompress(&[0xed, 0xcb, 0xa9, 0x87, 0x00, 0x7f, 0x00, 0x9f]).unwrap();
    assert_eq!(&out[..4], &[0x12, 0x34, 0x56, 0x78]);
    assert_eq!(&out[4..132], &[0x00; 128][..]);
    assert_eq!(&out[132..], &[0xff; 32][..]);
}

#[test]
fn round_trips_calldata_shapes() {
    for seed in 0..200 {
        let call = calldata(seed, (seed % 12) as usize);
        assert_eq!(decompress(&compress(&call)).unwrap(), call, "seed {seed}");
    }
}

#[test]
fn trailing_marker_is_truncation() {
    let err = decompress(&[0xed, 0xcb, 0xa9, 0x87, 0x01, 0x00]).unwrap_err();
    assert_eq!(err, DecompressError::TruncatedInput { position: 5 });
    assert!(err.to_string().contains("truncated"));
}

#[test]
fn arbitrary_bytes_never_panic() {
    let mut rng = SampleRng::new(0x5eed);
    for len in 0..300 {
        let mut buf = vec![0u8; len];
        rng.fill(&mut buf);
        let _ = decompress(&buf);
    }
}
