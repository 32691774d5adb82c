#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must decode or fail cleanly; a panic is a bug.
fuzz_target!(|data: &[u8]| {
    let _ = libzip::calldata::decompress(data);
});
