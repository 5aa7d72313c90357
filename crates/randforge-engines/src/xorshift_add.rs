//! XorShiftAdd: four 32-bit words, xor-shift recurrence whose output adds
//! the two newest words.

use randforge_core::engine::Engine;
use randforge_core::seed;

use crate::splitmix64::expand;

/// Jump polynomial for `2^64` 32-bit draws.
const JUMP: [u32; 4] = [0xfe10_e86d, 0x7bac_ae76, 0x4a3f_3aa8, 0xad97_ad55];

/// XorShiftAdd engine (shift triple 15/18/11).
///
/// This is the only 32-bit-native engine in the family: `next_u64` combines
/// two consecutive 32-bit draws, the first supplying the high half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftAdd {
    state: [u32; 4],
}

#[allow(clippy::cast_possible_truncation)]
fn split_words(words: [u64; 2]) -> [u32; 4] {
    [
        words[0] as u32,
        (words[0] >> 32) as u32,
        words[1] as u32,
        (words[1] >> 32) as u32,
    ]
}

impl XorShiftAdd {
    /// Log2 of the skip-ahead stride, counted in 32-bit draws.
    pub const SKIP_AHEAD_STRIDE_LOG2: u32 = 64;

    /// Creates an engine from raw state words. An all-zero state is replaced
    /// with a fixed nonzero one.
    #[must_use]
    pub fn from_state(state: [u32; 4]) -> Self {
        let state = if state.iter().all(|&w| w == 0) {
            split_words(expand(0))
        } else {
            state
        };
        Self { state }
    }

    /// Creates an engine by expanding a 64-bit seed through SplitMix64.
    #[must_use]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::from_state(split_words(expand(seed)))
    }

    /// Creates an engine from hashed seed bytes.
    #[must_use]
    pub fn from_seed_bytes(seed: &[u8]) -> Self {
        Self::from_state(seed::words_u32(seed))
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
    pub fn state(&self) -> [u32; 4] {
        self.state
    }

    fn advance(&mut self) {
        let mut t = self.state[0];
        t ^= t << 15;
        t ^= t >> 18;
        t ^= self.state[3] << 11;
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = self.state[3];
        self.state[3] = t;
    }
}

impl Engine for XorShiftAdd {
    fn next_u32(&mut self) -> u32 {
        self.advance();
        self.state[3].wrapping_add(self.state[2])
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn skip_ahead(&mut self) {
        let mut jumped = [0_u32; 4];
        for word in JUMP {
            for bit in 0..32 {
                if word & (1 << bit) != 0 {
                    for (acc, current) in jumped.iter_mut().zip(self.state) {
                        *acc ^= current;
                    }
                }
                self.advance();
            }
        }
        self.state = jumped;
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
        let mut engine = XorShiftAdd::from_state([1, 2, 3, 4]);

        assert_eq!(engine.next_u32(), 0x0000_a005);
        assert_eq!(engine.next_u32(), 0x0501_a803);
        assert_eq!(engine.next_u32(), 0x0d42_9805);
        assert_eq!(engine.next_u32(), 0x14c3_a807);
    }

    #[test]
    fn test_next_u64_takes_high_half_first() {
        let mut engine = XorShiftAdd::from_state([1, 2, 3, 4]);

        assert_eq!(engine.next_u64(), 0x0000_a005_0501_a803);
        assert_eq!(engine.next_u64(), 0x0d42_9805_14c3_a807);
    }

    #[test]
    fn test_skip_ahead_matches_reference_jump() {
        let mut engine = XorShiftAdd::from_state([1, 2, 3, 4]);

        engine.skip_ahead();

        assert_eq!(engine.next_u64(), 0xb66f_3086_1800_fef0);
        assert_eq!(engine.next_u64(), 0x5a91_dfe7_7e3b_5d4a);
    }

    #[test]
    fn test_seed_constructors_are_reproducible() {
        let mut from_str = XorShiftAdd::from_seed_str("randforge");
        let mut from_u64 = XorShiftAdd::from_seed_u64(42);

        assert_eq!(from_str.next_u64(), 0x2f10_922c_9adb_cd3a);
        assert_eq!(from_str.next_u64(), 0xc50e_e003_188f_458b);
        assert_eq!(from_u64.next_u64(), 0x10a8_33f0_cdfa_23d4);
        assert_eq!(from_u64.next_u64(), 0xaac1_ced1_eb2b_8128);
    }

    #[test]
    fn test_zero_state_is_normalized() {
        let engine = XorShiftAdd::from_state([0; 4]);

        assert_ne!(engine.state(), [0; 4]);
    }
}
