// sample.rs — deterministic payload generators for tests and benchmarks.
//
// Two shapes are produced:
//   - ABI-encoded calldata: a 4-byte selector followed by 32-byte words
//     (padded integers, addresses, offsets, all-ones masks, hashes);
//   - biased noise: bytes drawn mostly from {0x00, 0xFF}.
//
// All output is a pure function of the seed.

// ---------------------------------------------------------------------------
// PRNG
// ---------------------------------------------------------------------------

/// Small 32-bit xor-rotate generator.  Not for anything but test data.
#[derive(Debug, Clone)]
pub struct SampleRng {
    state: u32,
}

impl SampleRng {
    pub fn new(seed: u32) -> Self {
        SampleRng { state: seed }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        const PRIME1: u32 = 2_654_435_761;
        const PRIME2: u32 = 2_246_822_519;
        let mut r = self.state;
        r = r.wrapping_mul(PRIME1);
        r ^= PRIME2;
        r = r.rotate_left(13);
        self.state = r;
        r
    }

    /// Uniform value in `0..range`.
    #[inline]
    pub fn below(&mut self, range: u32) -> u32 {
        ((self.next_u32() as u64 * range as u64) >> 32) as u32
    }

    /// `true` with probability `per_mille / 1000`.
    #[inline]
    pub fn chance(&mut self, per_mille: u32) -> bool {
        self.below(1000) < per_mille
    }

    #[inline]
    pub fn byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }

    pub fn fill(&mut self, buf: &mut [u8]) {
        for b in buf {
            *b = self.byte();
        }
    }
}

// ---------------------------------------------------------------------------
// Calldata
// ---------------------------------------------------------------------------

/// ABI word size.
pub const WORD: usize = 32;
/// Function selector size.
pub const SELECTOR: usize = 4;

/// Append one ABI word of a randomly chosen kind.
fn push_word(rng: &mut SampleRng, out: &mut Vec<u8>) {
    let start = out.len();
    out.resize(start + WORD, 0);
    let word = &mut out[start..];
    match rng.below(8) {
        // small uint
        0 | 1 => {
            let n = 1 + rng.below(4) as usize;
            rng.fill(&mut word[WORD - n..]);
        }
        // address
        2 => rng.fill(&mut word[12..]),
        // dynamic offset / length
        3 => word[WORD - 1] = (rng.below(8) as u8 + 1) * 0x20,
        // zero
        4 => {}
        // type(uint256).max / mask
        5 => word.fill(0xff),
        // negative int256
        6 => {
            word.fill(0xff);
            let n = 1 + rng.below(6) as usize;
            rng.fill(&mut word[WORD - n..]);
        }
        // bytes32 hash
        _ => rng.fill(word),
    }
}

/// Generate a calldata-shaped payload: selector plus `words` ABI words.
pub fn calldata(seed: u32, words: usize) -> Vec<u8> {
    let mut rng = SampleRng::new(seed);
    let mut out = Vec::with_capacity(SELECTOR + words * WORD);
    out.resize(SELECTOR, 0);
    rng.fill(&mut out[..SELECTOR]);
    for _ in 0..words {
        push_word(&mut rng, &mut out);
    }
    out
}

/// Fill exactly `size` bytes with concatenated calldata payloads.
///
/// Equivalent in purpose to a lorem-ipsum buffer for text codecs.
pub fn gen_buffer(size: usize, seed: u32) -> Vec<u8> {
    let mut rng = SampleRng::new(seed);
    let mut out = Vec::with_capacity(size + SELECTOR + 16 * WORD);
    while out.len() < size {
        let call = calldata(rng.next_u32(), 1 + rng.below(16) as usize);
        out.extend_from_slice(&call);
    }
    out.truncate(size);
    out
}

// ---------------------------------------------------------------------------
// Biased noise
// ---------------------------------------------------------------------------

/// Generate `size` bytes where each byte is `0x00` with probability
/// `zero_per_mille / 1000`, and the remaining probability mass is split
/// evenly between `0xFF` and a uniform random byte.
pub fn biased_bytes(rng: &mut SampleRng, size: usize, zero_per_mille: u32) -> Vec<u8> {
    let zero = zero_per_mille.min(1000);
    let ones = zero + (1000 - zero) / 2;
    (0..size)
        .map(|_| {
            let r = rng.below(1000);
            if r < zero {
                0x00
            } else if r < ones {
                0xff
            } else {
                rng.byte()
            }
        })
        .collect()
}
