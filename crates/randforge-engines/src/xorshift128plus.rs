//! XorShift128+: two 64-bit words, xor-shift recurrence with an additive
//! output function.

use randforge_core::engine::Engine;
use randforge_core::seed;

use crate::splitmix64::{expand, nonzero};

/// Jump polynomial for `2^64` draws.
const JUMP: [u64; 2] = [0x8a5c_d789_635d_2dff, 0x121f_d215_5c47_2f96];

/// XorShift128+ engine (shift triple 23/18/5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift128Plus {
    state: [u64; 2],
}

impl XorShift128Plus {
    /// Log2 of the skip-ahead stride.
    pub const SKIP_AHEAD_STRIDE_LOG2: u32 = 64;

    /// Creates an engine from raw state words. An all-zero state is replaced
    /// with a fixed nonzero one.
    #[must_use]
    pub fn from_state(state: [u64; 2]) -> Self {
        Self {
            state: nonzero(state),
        }
    }

    /// Creates an engine by expanding a 64-bit seed through SplitMix64.
    #[must_use]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::from_state(expand(seed))
    }

    /// Creates an engine from hashed seed bytes.
    #[must_use]
    pub fn from_seed_bytes(seed: &[u8]) -> Self {
        Self::from_state(seed::words_u64(seed))
    }

    /// Creates an engine from a hashed string seed.
    #[must_use]
    pub fn from_seed_str(seed: &str) -> Self {
        Self::from_seed_bytes(seed.as_bytes())
    }

    /// Creates an engine seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed_u64(crate::entropy_seed())
    }

    /// Returns the raw state words.
    #[must_use]
    pub fn state(&self) -> [u64; 2] {
        self.state
    }
}

impl Engine for XorShift128Plus {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        let result = s0.wrapping_add(s1);
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 18) ^ (s0 >> 5);
        result
    }

    fn skip_ahead(&mut self) {
        let mut s0 = 0;
        let mut s1 = 0;
        for word in JUMP {
            for bit in 0..64 {
                if word & (1 << bit) != 0 {
                    s0 ^= self.state[0];
                    s1 ^= self.state[1];
                }
                self.next_u64();
            }
        }
        self.state = [s0, s1];
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        Self::SKIP_AHEAD_STRIDE_LOG2
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_state_matches_reference_sequence() {
        let mut engine = XorShift128Plus::from_state([1, 2]);

        assert_eq!(engine.next_u64(), 0x3);
        assert_eq!(engine.next_u64(), 0x0080_0025);
        assert_eq!(engine.next_u64(), 0x0204_0083);
        assert_eq!(engine.next_u64(), 0x4000_020c_2460);
    }

    #[test]
    fn test_skip_ahead_matches_reference_jump() {
        let mut engine = XorShift128Plus::from_state([1, 2]);

        engine.skip_ahead();

        assert_eq!(engine.next_u64(), 0x374f_8681_4f97_00a9);
        assert_eq!(engine.next_u64(), 0x1727_1b1b_3446_d495);
    }

    #[test]
    fn test_seed_constructors_are_reproducible() {
        let mut from_str = XorShift128Plus::from_seed_str("randforge");
        let mut from_u64 = XorShift128Plus::from_seed_u64(42);

        assert_eq!(from_str.next_u64(), 0x075d_d220_1d6b_bb40);
        assert_eq!(from_str.next_u64(), 0x7ea9_6fbc_c96e_10b4);
        assert_eq!(from_u64.next_u64(), 0xe6c7_1559_e252_5f98);
        assert_eq!(from_u64.next_u64(), 0xb058_533f_2de1_e247);
    }

    #[test]
    fn test_zero_state_is_normalized() {
        let mut engine = XorShift128Plus::from_state([0, 0]);

        assert_ne!(engine.state(), [0, 0]);
        assert!((0..8).any(|_| engine.next_u64() != 0));
    }
}
