//! Xoroshiro128+: two 64-bit words, xor/shift/rotate recurrence with an
//! additive output function.

use randforge_core::engine::Engine;
use randforge_core::seed;

use crate::splitmix64::{expand, nonzero};

/// Jump polynomial for `2^64` draws.
const JUMP: [u64; 2] = [0xbeac_0467_eba5_facb, 0xd86b_048b_86aa_9922];

/// Xoroshiro128+ engine (rotation/shift triple 55/14/36).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    state: [u64; 2],
}

impl Xoroshiro128Plus {
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

impl Engine for Xoroshiro128Plus {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);
        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);
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
