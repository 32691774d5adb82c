// e2e/roundtrip.rs — randomized round trips through the hex-text API
//
// Mirrors how the codecs are used off-chain: hex strings of arbitrary case,
// with and without `0x`, padded with whitespace, compressed and restored.
// Trials run in parallel on rayon's global pool.

use libzip::sample::{biased_bytes, gen_buffer, SampleRng};
use libzip::{cd_compress, cd_decompress, flz_compress, flz_decompress, hex};
use rayon::prelude::*;

const TRIALS: u32 = 10_000;

/// Random hex text for `bytes`: optional prefix, random case.
fn render(rng: &mut SampleRng, bytes: &[u8]) -> String {
    let encoded = hex::encode(bytes);
    let digits = &encoded[2..];
    let prefix = if rng.chance(500) { "0x" } else { "" };
    let text = format!("{prefix}{digits}");
    if rng.chance(500) {
        text.to_uppercase()
    } else {
        text
    }
}

/// Surround `text` with a random run of tabs and spaces on each side.
fn pad(rng: &mut SampleRng, text: &str) -> String {
    let mut before = String::new();
    let mut after = String::new();
    while rng.chance(500) {
        before.push(if rng.chance(500) { '\t' } else { ' ' });
    }
    while rng.chance(500) {
        after.push(if rng.chance(500) { '\t' } else { ' ' });
    }
    format!("{before}{text}{after}")
}

/// Zero probability per trial: 45 %, 99 % or 99.9 %.
fn bias(rng: &mut SampleRng) -> u32 {
    match rng.below(4) {
        0 | 1 => 450,
        2 => 990,
        _ => 999,
    }
}

/// Lengths in hex digits (input, compressed) for one calldata trial.
fn cd_trial(seed: u32) -> (usize, usize) {
    let mut rng = SampleRng::new(seed);
    let n = rng.below(2000) as usize;
    let zero_per_mille = bias(&mut rng);
    let bytes = biased_bytes(&mut rng, n, zero_per_mille);
    let text = render(&mut rng, &bytes);

    let compressed = cd_compress(pad(&mut rng, &text)).unwrap();
    let restored = cd_decompress(pad(&mut rng, &compressed)).unwrap();

    assert!(compressed.starts_with("0x"));
    assert_eq!(restored, hex::encode(&bytes), "seed {seed}");
    (2 * n, compressed.len() - 2)
}

#[test]
fn cd_biased_inputs_shrink_in_aggregate() {
    let (total_in, total_out) = (0..TRIALS)
        .into_par_iter()
        .map(cd_trial)
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    assert!(total_out < total_in, "{total_out} >= {total_in}");
}

#[test]
fn cd_selector_region_is_complemented() {
    (0..1_000u32).into_par_iter().for_each(|seed| {
        let mut rng = SampleRng::new(seed);
        let mut selector = [0u8; 4];
        rng.fill(&mut selector);
        if selector.iter().any(|&b| b == 0x00 || b == 0xff) {
            return;
        }
        let mut bytes = selector.to_vec();
        bytes.extend(biased_bytes(&mut rng, 64, 900));
        let out = libzip::calldata::compress(&bytes);
        let complemented: Vec<u8> = selector.iter().map(|b| !b).collect();
        assert_eq!(&out[..4], &complemented[..], "seed {seed}");
    });
}

#[test]
fn flz_round_trips_random_text() {
    (0..2_000u32).into_par_iter().for_each(|seed| {
        let mut rng = SampleRng::new(seed ^ 0x9e37_79b9);
        let n = rng.below(3000) as usize;
        let zero_per_mille = bias(&mut rng);
        let bytes = biased_bytes(&mut rng, n, zero_per_mille);
        let rendered = render(&mut rng, &bytes);
        let text = pad(&mut rng, &rendered);

        let compressed = flz_compress(&text).unwrap();
        assert_eq!(flz_decompress(pad(&mut rng, &compressed)).unwrap(), hex::encode(&bytes), "seed {seed}");
    });
}

#[test]
fn flz_round_trips_large_calldata_buffers() {
    [1usize << 10, 1 << 14, 1 << 17, (1 << 17) + 13].par_iter().for_each(|&size| {
        let bytes = gen_buffer(size, size as u32);
        let compressed = libzip::flz::compress(&bytes);
        assert!(compressed.len() < bytes.len(), "size {size}");
        assert_eq!(libzip::flz::decompress(&compressed).unwrap(), bytes);
    });
}

#[test]
fn cd_round_trips_large_calldata_buffers() {
    for size in [1usize << 10, 1 << 14, 1 << 17] {
        let bytes = gen_buffer(size, !(size as u32));
        let compressed = libzip::calldata::compress(&bytes);
        assert!(compressed.len() < bytes.len(), "size {size}");
        assert_eq!(libzip::calldata::decompress(&compressed).unwrap(), bytes);
    }
}
