#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must decode or fail cleanly; a panic is a bug.
fuzz_target!(|data: &[u8]| {
    if let Ok(out) = libzip::flz::decompress(data) {
        // Each input byte expands to at most 264 output bytes.
        assert!(out.len() <= data.len() * 264);
    }
});
