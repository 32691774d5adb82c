#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary text through the hex entry points: typed errors only.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else { return };
    if let Ok(compressed) = libzip::cd_compress(text) {
        let restored = libzip::cd_decompress(&compressed).expect("cd output must decode");
        assert_eq!(libzip::hex::decode(&restored), libzip::hex::decode(text));
    }
    if let Ok(compressed) = libzip::flz_compress(text) {
        let restored = libzip::flz_decompress(&compressed).expect("flz output must decode");
        assert_eq!(libzip::hex::decode(&restored), libzip::hex::decode(text));
    }
    let _ = libzip::cd_decompress(text);
    let _ = libzip::flz_decompress(text);
});
