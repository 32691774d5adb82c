#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = libzip::calldata::compress(data);
    assert!(compressed.len() <= libzip::calldata::compress_bound(data.len()));

    let recovered = libzip::calldata::decompress(&compressed)
        .expect("compressor output must decode");
    assert_eq!(
        recovered, data,
        "calldata round-trip mismatch: {} bytes -> {} compressed -> {} bytes",
        data.len(),
        compressed.len(),
        recovered.len()
    );
});
