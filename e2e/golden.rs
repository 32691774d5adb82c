// e2e/golden.rs — recorded vectors for a Multicall `multicall(bytes[])` payload
//
// The calldata stream must match the on-chain decoder's expectations byte
// for byte.  The FLZ stream is a regression vector for the match finder.

use libzip::{cd_compress, cd_decompress, flz_compress, flz_decompress};

const MULTICALL: &[&str] = &[
    "0xac9650d800000000000000000000000000000000000000000000000000000000000000200000000000000000000000",
    "000000000000000000000000000000000000000004000000000000000000000000000000000000000000000000000000",
    "000000008000000000000000000000000000000000000000000000000000000000000001600000000000000000000000",
    "000000000000000000000000000000000000000220000000000000000000000000000000000000000000000000000000",
    "00000002a000000000000000000000000000000000000000000000000000000000000000a40c49ccbe00000000000000",
    "0000000000000000000000000000000000000000000005b70e0000000000000000000000000000000000000000000000",
    "0000000dfc79825feb000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "0000000000645c48a7000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000084fc6f78650000000000000000000000000000000000000000000000",
    "00000000000005b70e000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000ffffffffffffffffffffffffffffffff00000000000000000000000000000000ffffffffffffff",
    "ffffffffffffffffff000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "00000000000000000000000000000000000000004449404b7c0000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000001f1cdf1a632eaaab40d1c263edf49faf749010a100000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "0000000064df2ab5bb0000000000000000000000007f5c764cbc14f9669b88837ca1490cca17c3160700000000000000",
    "000000000000000000000000000000000000000000000000000000000000000000000000001f1cdf1a632eaaab40d1c2",
    "63edf49faf749010a100000000000000000000000000000000000000000000000000000000",
];

const MULTICALL_CD: &[&str] = &[
    "0x5369af27001e20001e04001e80001d0160001d0220001d02a0001ea40c49ccbe001c05b70e00190dfc79825feb005b",
    "645c48a7003a84fc6f7865001c05b70e002f008f000f008f003a4449404b7c002b1f1cdf1a632eaaab40d1c263edf49f",
    "af749010a1003a64df2ab5bb000b7f5c764cbc14f9669b88837ca1490cca17c31607002b1f1cdf1a632eaaab40d1c263",
    "edf49faf749010a1001b",
];

const MULTICALL_FLZ: &[&str] = &[
    "0x04ac9650d800e015000020e0151e0100042003e013000080e0131c03000001602004e012000002e0167f0102a0e012",
    "3c400004a40c49ccbe4008e010000205b70ee0101b06000dfc79825feb2008e0500003645c48a7e0325c0484fc6f7865",
    "e0143fe014dfe00d0000ffe00600e00725e0061ee0081fe02200044449404b7ce0222f14001f1cdf1a632eaaab40d1c2",
    "63edf49faf749010a12016e02f000464df2ab5bbe0033c137f5c764cbc14f9669b88837ca1490cca17c31607e0031fe0",
    "1700e0229f040000000000",
];

fn joined(parts: &[&str]) -> String {
    parts.concat()
}

#[test]
fn multicall_cd_stream() {
    assert_eq!(cd_compress(joined(MULTICALL)).unwrap(), joined(MULTICALL_CD));
}

#[test]
fn multicall_cd_decodes_back() {
    assert_eq!(cd_decompress(joined(MULTICALL_CD)).unwrap(), joined(MULTICALL));
}

#[test]
fn multicall_cd_is_a_fixed_point_of_the_round_trip() {
    let once = cd_compress(joined(MULTICALL)).unwrap();
    let twice = cd_compress(cd_decompress(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn multicall_flz_stream() {
    assert_eq!(flz_compress(joined(MULTICALL)).unwrap(), joined(MULTICALL_FLZ));
}

#[test]
fn multicall_flz_decodes_back() {
    assert_eq!(flz_decompress(joined(MULTICALL_FLZ)).unwrap(), joined(MULTICALL));
}

#[test]
fn multicall_sizes() {
    // 900 bytes of calldata
    assert_eq!(joined(MULTICALL).len(), 2 + 2 * 900);
    assert_eq!(joined(MULTICALL_FLZ).len(), 2 + 2 * 202);
    assert!(joined(MULTICALL_CD).len() < joined(MULTICALL_FLZ).len());
}

#[test]
fn uppercase_and_padding_give_the_same_stream() {
    let shouted = format!(" \t{}\n", joined(MULTICALL).to_uppercase().replacen("0X", "0x", 1));
    assert_eq!(cd_compress(shouted).unwrap(), joined(MULTICALL_CD));
}
