//! Calldata run-length compression.
//!
//! Single pass, two pending-run counters.  Zero runs are capped at
//! [`ZERO_RUN_MAX`] and 0xFF runs at [`ONES_RUN_MAX`]; a counter is flushed
//! as one [`RleToken`] when it hits its cap or when a different byte arrives.
//! At most one counter is non-zero at any time.

use super::token::{escape, RleToken, RunValue, ONES_RUN_MAX, ZERO_RUN_MAX};

/// Worst-case compressed size: every byte of an alternating `00 ff` input
/// becomes a two-byte token.
#[inline]
pub fn compress_bound(input_size: usize) -> usize {
    input_size.saturating_mul(2)
}

/// Output sink applying the selector escape by output position.
struct TokenWriter {
    out: Vec<u8>,
}

impl TokenWriter {
    #[inline]
    fn push(&mut self, b: u8) {
        let position = self.out.len();
        self.out.push(escape(position, b));
    }

    /// Emit a token for `*pending` bytes of `value` (if any) and reset the counter.
    #[inline]
    fn flush(&mut self, value: RunValue, pending: &mut usize) {
        if *pending == 0 {
            return;
        }
        for b in RleToken::new(value, *pending).to_bytes() {
            self.push(b);
        }
        *pending = 0;
    }
}

/// Compress raw calldata bytes.
pub fn compress(src: &[u8]) -> Vec<u8> {
    let mut w = TokenWriter { out: Vec::with_capacity(compress_bound(src.len())) };
    let mut zeros = 0usize;
    let mut ones = 0usize;

    for &c in src {
        match c {
            0x00 => {
                w.flush(RunValue::Ones, &mut ones);
                zeros += 1;
                if zeros == ZERO_RUN_MAX {
                    w.flush(RunValue::Zero, &mut zeros);
                }
            }
            0xff => {
                w.flush(RunValue::Zero, &mut zeros);
                ones += 1;
                if ones == ONES_RUN_MAX {
                    w.flush(RunValue::Ones, &mut ones);
                }
            }
            _ => {
                w.flush(RunValue::Ones, &mut ones);
                w.flush(RunValue::Zero, &mut zeros);
                w.push(c);
            }
        }
    }
    w.flush(RunValue::Ones, &mut ones);
    w.flush(RunValue::Zero, &mut zeros);

    w.out
}
