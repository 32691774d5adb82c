// Integration tests for flz/compress.rs — parsing decisions of the match finder

use libzip::flz::{compress, compress_bound, decompress};
use libzip::sample::{biased_bytes, gen_buffer, SampleRng};

#[test]
fn empty_input() {
    assert!(compress(&[]).is_empty());
}

#[test]
fn tiny_inputs_are_literal_runs() {
    for len in 1..=16usize {
        let src: Vec<u8> = (0..len as u8).collect();
        let out = compress(&src);
        assert_eq!(out[0] as usize, len - 1);
        assert_eq!(&out[1..], &src[..]);
    }
}

#[test]
fn zero_block_exact_stream() {
    let out = compress(&[0u8; 1000]);
    let expected: Vec<u8> = vec![
        0x01, 0x00, 0x00, // two literals
        0xe0, 253, 0x01, // 262 bytes, one byte back
        0xe0, 253, 0x01,
        0xe0, 253, 0x01,
        0xe0, 198, 0x01, // 207 bytes
        0x04, 0x00, 0x00, 0x00, 0x00, 0x00, // tail literals
    ];
    assert_eq!(out, expected);
}

#[test]
fn repeated_phrase_compresses() {
    let src = b"transfer(address,uint256) transfer(address,uint256) transfer(address,uint256)";
    let out = compress(src);
    assert!(out.len() < src.len() * 2 / 3, "{} vs {}", out.len(), src.len());
    assert_eq!(decompress(&out).unwrap(), src.to_vec());
}

#[test]
fn incompressible_data_stays_within_bound() {
    let mut rng = SampleRng::new(42);
    for len in [1usize, 31, 32, 33, 100, 4096] {
        let mut src = vec![0u8; len];
        rng.fill(&mut src);
        let out = compress(&src);
        assert!(out.len() <= compress_bound(len) + 3, "len {len}: {}", out.len());
        assert_eq!(decompress(&out).unwrap(), src);
    }
}

#[test]
fn repeats_beyond_window_round_trip() {
    let mut rng = SampleRng::new(7);
    let mut block = vec![0u8; 9000];
    rng.fill(&mut block);
    let mut src = block.clone();
    src.extend_from_slice(&block);
    assert_eq!(decompress(&compress(&src)).unwrap(), src);
}

#[test]
fn calldata_corpus_round_trips() {
    for size in [0usize, 1, 2, 3, 13, 14, 15, 16, 17, 100, 1000, 10_000, 70_000] {
        let src = gen_buffer(size, size as u32);
        assert_eq!(decompress(&compress(&src)).unwrap(), src, "size {size}");
    }
}

#[test]
fn biased_noise_round_trips() {
    let mut rng = SampleRng::new(0xb1a5);
    for per_mille in [0u32, 450, 900, 990, 1000] {
        let src = biased_bytes(&mut rng, 2048, per_mille);
        assert_eq!(decompress(&compress(&src)).unwrap(), src);
    }
}

#[test]
fn compress_is_deterministic() {
    let src = gen_buffer(5000, 3);
    assert_eq!(compress(&src), compress(&src));
}
