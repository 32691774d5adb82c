#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = libzip::flz::compress(data);

    let recovered = libzip::flz::decompress(&compressed)
        .expect("compressor output must decode");
    assert_eq!(
        recovered, data,
        "flz round-trip mismatch: {} bytes -> {} compressed -> {} bytes",
        data.len(),
        compressed.len(),
        recovered.len()
    );
});
