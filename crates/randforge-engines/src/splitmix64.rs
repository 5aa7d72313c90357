//! SplitMix64: a one-word additive recurrence with a mixing finalizer.

use randforge_core::engine::Engine;
use randforge_core::seed;

/// Weyl-sequence increment (the 64-bit golden ratio).
pub(crate) const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// State increment equivalent to `2^32` ordinary draws.
const SKIP_AHEAD_INCREMENT: u64 = GOLDEN_GAMMA << 32;

/// The SplitMix64 output finalizer.
#[must_use]
pub fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// SplitMix64 engine. Every 64-bit state is valid, including zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Log2 of the skip-ahead stride.
    pub const SKIP_AHEAD_STRIDE_LOG2: u32 = 32;

    /// Creates an engine from its raw state word.
    #[must_use]
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Creates an engine seeded directly with `seed`.
    #[must_use]
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::from_state(seed)
    }

    /// Creates an engine from hashed seed bytes.
    #[must_use]
    pub fn from_seed_bytes(seed: &[u8]) -> Self {
        let [state] = seed::words_u64::<1>(seed);
        Self::from_state(state)
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

    /// Returns the raw state word.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Fills `words` with consecutive outputs. Used to expand a single
    /// 64-bit seed into the wider states of the other engines.
    pub(crate) fn fill(&mut self, words: &mut [u64]) {
        for word in words {
            *word = self.next_u64();
        }
    }
}

/// Expands `seed` into `N` words, as every `from_seed_u64` constructor does.
pub(crate) fn expand<const N: usize>(seed: u64) -> [u64; N] {
    let mut words = [0_u64; N];
    SplitMix64::from_state(seed).fill(&mut words);
    words
}

/// Replaces an all-zero xor-shift state with the expansion of seed zero.
pub(crate) fn nonzero<const N: usize>(words: [u64; N]) -> [u64; N] {
    if words.iter().all(|&w| w == 0) {
        expand(0)
    } else {
        words
    }
}

impl Engine for SplitMix64 {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        mix64(self.state)
    }

    fn skip_ahead(&mut self) {
        self.state = self.state.wrapping_add(SKIP_AHEAD_INCREMENT);
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        Self::SKIP_AHEAD_STRIDE_LOG2
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(self.clone())
    }
}
