//! XorShift1024*: sixteen 64-bit words with a rotating cursor and a
//! multiplicative output function.

use randforge_core::engine::Engine;
use randforge_core::seed;

use crate::splitmix64::{expand, nonzero};

const MULTIPLIER: u64 = 0x9e37_79b9_7f4a_7c13;

/// Jump polynomial for `2^512` draws.
const JUMP: [u64; 16] = [
    0x8424_2f96_eca9_c41d,
    0xa3c6_5b87_76f9_6855,
    0x5b34_a39f_070b_5837,
    0x4489_affc_e4f3_1a1e,
    0x2ffe_eb0a_4831_6f40,
    0xdc2d_9891_fe68_c022,
    0x3659_132b_b12f_ea70,
    0xaac1_7d8e_fa43_cab8,
    0xc4cb_8155_9098_9b13,
    0x5ee9_7528_3d71_c93b,
    0x6915_48c8_6c1b_d540,
    0x7910_c41d_10a1_e6a5,
    0x0b5f_c645_63b3_e2a8,
    0x047f_7684_e9fc_949d,
    0xb991_81f2_d8f6_85ca,
    0x2846_00e3_f30e_38c3,
];

/// XorShift1024* engine (shift triple 31/11/30).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift1024Star {
    state: [u64; 16],
    index: usize,
}

impl XorShift1024Star {
    /// Log2 of the skip-ahead stride.
    pub const SKIP_AHEAD_STRIDE_LOG2: u32 = 512;

    /// Creates an engine from raw state words with the cursor at word 0.
    /// An all-zero state is replaced with a fixed nonzero one.
    #[must_use]
    pub fn from_state(state: [u64; 16]) -> Self {
        Self::from_state_and_index(state, 0)
    }

    /// Creates an engine from raw state words and a cursor position
    /// (taken modulo 16).
    #[must_use]
    pub fn from_state_and_index(state: [u64; 16], index: usize) -> Self {
        Self {
            state: nonzero(state),
            index: index & 15,
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

    /// Returns the raw state words and the cursor position.
    #[must_use]
    pub fn state(&self) -> ([u64; 16], usize) {
        (self.state, self.index)
    }
}

impl Engine for XorShift1024Star {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[self.index];
        self.index = (self.index + 1) & 15;
        let mut s1 = self.state[self.index];
        s1 ^= s1 << 31;
        self.state[self.index] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.state[self.index].wrapping_mul(MULTIPLIER)
    }

    fn skip_ahead(&mut self) {
        let mut jumped = [0_u64; 16];
        for word in JUMP {
            for bit in 0..64 {
                if word & (1 << bit) != 0 {
                    for (j, acc) in jumped.iter_mut().enumerate() {
                        *acc ^= self.state[(j + self.index) & 15];
                    }
                }
                self.next_u64();
            }
        }
        for (j, word) in jumped.into_iter().enumerate() {
            self.state[(j + self.index) & 15] = word;
        }
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

    fn counting_state() -> [u64; 16] {
        std::array::from_fn(|i| i as u64 + 1)
    }

    #[test]
    fn test_raw_state_matches_reference_sequence() {
        let mut engine = XorShift1024Star::from_state(counting_state());

        assert_eq!(engine.next_u64(), 0x9120_d28f_003f_7439);
        assert_eq!(engine.next_u64(), 0xd41b_1997_3e59_f04c);
        assert_eq!(engine.next_u64(), 0x04a0_f0e9_4484_f826);
        assert_eq!(engine.next_u64(), 0x08d1_2e6b_76c8_4cf7);
    }

    #[test]
    fn test_cursor_rotates_through_all_sixteen_words() {
        let mut engine = XorShift1024Star::from_state(counting_state());

        for _ in 0..16 {
            engine.next_u64();
        }

        assert_eq!(engine.state().1, 0);
    }

    #[test]
    fn test_skip_ahead_matches_reference_jump() {
        let mut engine = XorShift1024Star::from_state(counting_state());

        engine.skip_ahead();

        assert_eq!(engine.next_u64(), 0x837b_2837_5be5_17e3);
        assert_eq!(engine.next_u64(), 0xf5ce_cbea_58c7_b890);
    }

    #[test]
    fn test_seed_constructors_are_reproducible() {
        let mut from_str = XorShift1024Star::from_seed_str("randforge");
        let mut from_u64 = XorShift1024Star::from_seed_u64(42);

        assert_eq!(from_str.next_u64(), 0xf0df_fe0b_a8b5_6351);
        assert_eq!(from_str.next_u64(), 0x09f9_afd6_2b49_a1f1);
        assert_eq!(from_u64.next_u64(), 0x05ab_320e_0acf_d070);
        assert_eq!(from_u64.next_u64(), 0x107c_c38e_3db4_c2a5);
    }

    #[test]
    fn test_index_is_taken_modulo_sixteen() {
        let engine = XorShift1024Star::from_state_and_index(counting_state(), 17);

        assert_eq!(engine.state().1, 1);
    }
}
