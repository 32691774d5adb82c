// Integration tests for calldata/compress.rs — token emission and run caps

use libzip::calldata::{compress, compress_bound, decompress, ONES_RUN_MAX, ZERO_RUN_MAX};

const SELECTOR: [u8; 4] = [0x12, 0x34, 0x56, 0x78];

fn with_selector(body: &[u8]) -> Vec<u8> {
    let mut v = SELECTOR.to_vec();
    v.extend_from_slice(body);
    v
}

#[test]
fn empty_input() {
    assert!(compress(&[]).is_empty());
}

#[test]
fn selector_bytes_are_complemented() {
    assert_eq!(compress(&SELECTOR), vec![0xed, 0xcb, 0xa9, 0x87]);
}

#[test]
fn zero_run_after_selector() {
    let out = compress(&with_selector(&[0; 3]));
    assert_eq!(out, vec![0xed, 0xcb, 0xa9, 0x87, 0x00, 0x02]);
}

#[test]
fn long_zero_run_is_split_at_cap() {
    let out = compress(&with_selector(&[0; 300]));
    assert_eq!(&out[4..], &[0x00, 0x7f, 0x00, 0x7f, 0x00, 0x2b]);
    assert_eq!(ZERO_RUN_MAX, 128);
}

#[test]
fn ones_run_is_split_at_cap() {
    let out = compress(&with_selector(&[0xff; 40]));
    assert_eq!(&out[4..], &[0x00, 0x9f, 0x00, 0x87]);
    assert_eq!(ONES_RUN_MAX, 32);
}

#[test]
fn token_in_selector_region_is_escaped() {
    // A run token written at positions 0..2 is stored complemented.
    assert_eq!(compress(&[0x00; 4]), vec![0xff, 0xfc]);
    assert_eq!(compress(&[0xff; 4]), vec![0xff, 0x7c]);
}

#[test]
fn run_flushed_on_value_change() {
    let out = compress(&with_selector(&[0x00, 0x00, 0xff, 0x42, 0x00]));
    assert_eq!(&out[4..], &[0x00, 0x01, 0x00, 0x80, 0x42, 0x00, 0x00]);
}

#[test]
fn abi_word_shrinks() {
    // transfer(address,uint256) with a small amount
    let mut call = vec![0xa9, 0x05, 0x9c, 0xbb];
    call.extend_from_slice(&[0; 12]);
    call.extend_from_slice(&[0x11; 20]);
    call.extend_from_slice(&[0; 31]);
    call.push(0x64);
    let out = compress(&call);
    assert!(out.len() < call.len() / 2, "{} vs {}", out.len(), call.len());
    assert_eq!(decompress(&out).unwrap(), call);
}

#[test]
fn output_never_exceeds_bound() {
    let inputs: [Vec<u8>; 4] = [
        (0..512).map(|i| if i % 2 == 0 { 0x00 } else { 0xff }).collect(),
        (0..512).map(|i| i as u8).collect(),
        vec![0xff; 513],
        vec![0x00; 1],
    ];
    for input in &inputs {
        assert!(compress(input).len() <= compress_bound(input.len()));
    }
}
