//! FastLZ level-1 compression.
//!
//! Greedy single-pass match finder over a per-call hash table:
//!
//! 1. Hash the 3-byte window at `ip`, swap `ip` into the table slot and keep
//!    the previous occupant as the candidate.
//! 2. The candidate is a hit only if it lies fewer than [`MAX_DISTANCE`]
//!    bytes back and its 3-byte window is byte-identical (hash collisions are
//!    always re-verified).
//! 3. On a hit, flush pending literals, extend the match, emit it, seed the
//!    table with the two positions closing the match and move the anchor.
//! 4. The last [`INPUT_MARGIN`] bytes are never the start of a match and are
//!    flushed as literals.
//!
//! Parsing decisions (scan start, tail margins, chained long matches of 262
//! bytes) follow the FastLZ level-1 encoder, so streams decode with any
//! FastLZ level-1 / `LibZip.flzDecompress` implementation.

use super::types::{
    hash, read_u24, Opcode, CHAIN_LENGTH, HASH_SIZE, INPUT_MARGIN, LONG_MATCH_MAX, MATCH_MARGIN,
    MAX_COPY, MAX_DISTANCE, SCAN_START,
};

/// Size of a literal-only encoding of `input_size` bytes.
///
/// Used as the initial output capacity.  Matches never cost more than the
/// bytes they replace, so real output stays within a few bytes of this.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    input_size + input_size.div_ceil(MAX_COPY)
}

/// Emit `literals` as a sequence of literal-run opcodes of at most 32 bytes.
fn emit_literals(literals: &[u8], out: &mut Vec<u8>) {
    for run in literals.chunks(MAX_COPY) {
        Opcode::literal(run.len()).encode_into(out);
        out.extend_from_slice(run);
    }
}

/// Emit a match of `length` bytes (>= 3) at encoded `distance`.
///
/// Matches longer than [`LONG_MATCH_MAX`] are split into chained long
/// opcodes of [`CHAIN_LENGTH`] bytes at the same distance.
fn emit_match(mut length: usize, distance: usize, out: &mut Vec<u8>) {
    while length > LONG_MATCH_MAX {
        Opcode::long_match(CHAIN_LENGTH, distance).encode_into(out);
        length -= CHAIN_LENGTH;
    }
    Opcode::back_reference(length, distance).encode_into(out);
}

/// Count how far the match continues past its first three bytes.
///
/// Compares `src[reference + 3..]` against `src[ip + 3..]` up to `bound`.
/// A mismatching byte is included in the count, so the result is the
/// number of matching bytes plus one unless `bound` stopped the scan first.
fn extend_match(src: &[u8], reference: usize, ip: usize, bound: usize) -> usize {
    let p = reference + 3;
    let q = ip + 3;
    let mut n = 0usize;
    while q + n < bound {
        let same = src[p + n] == src[q + n];
        n += 1;
        if !same {
            break;
        }
    }
    n
}

/// Compress `src` into an FLZ opcode stream.
pub fn compress(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(compress_bound(src.len()));
    let mut table = vec![0u32; HASH_SIZE];

    let ip_limit = src.len().saturating_sub(INPUT_MARGIN);
    let ip_bound = src.len().saturating_sub(MATCH_MARGIN);

    let mut anchor = 0usize;
    let mut ip = SCAN_START;

    'scan: while ip < ip_limit {
        // ── find the next usable match ───────────────────────────────────────
        let reference = loop {
            let seq = read_u24(src, ip);
            let slot = hash(seq);
            let candidate = table[slot] as usize;
            table[slot] = ip as u32;
            let hit = ip - candidate < MAX_DISTANCE && read_u24(src, candidate) == seq;
            ip += 1;
            // A hit on the last probed position is dropped.
            if ip >= ip_limit {
                break 'scan;
            }
            if hit {
                break candidate;
            }
        };
        ip -= 1;

        if ip > anchor {
            emit_literals(&src[anchor..ip], &mut out);
        }

        // ── encode the match ─────────────────────────────────────────────────
        let extra = extend_match(src, reference, ip, ip_bound);
        let distance = ip - reference - 1;
        emit_match(extra + 2, distance, &mut out);

        // ── seed the table with the two positions closing the match ─────────
        ip += extra;
        table[hash(read_u24(src, ip))] = ip as u32;
        ip += 1;
        table[hash(read_u24(src, ip))] = ip as u32;
        ip += 1;
        anchor = ip;
    }

    emit_literals(&src[anchor..], &mut out);
    out
}
