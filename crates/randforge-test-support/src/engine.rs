//! Test engines — deterministic `Engine` implementations for tests.

use randforge_core::engine::Engine;

/// An engine that returns words from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need exact control over the raw
/// words a sampler sees (e.g., the individual dice of a roll).
///
/// `next_u32` returns the low 32 bits of the next word. `skip_ahead` only
/// counts invocations.
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    words: Vec<u64>,
    index: usize,
    cycle: bool,
    skips: usize,
}

impl ScriptedEngine {
    /// Create a new `ScriptedEngine` that panics once `words` are used up.
    #[must_use]
    pub fn new(words: Vec<u64>) -> Self {
        Self {
            words,
            index: 0,
            cycle: false,
            skips: 0,
        }
    }

    /// Create a new `ScriptedEngine` that wraps around to the first word
    /// once `words` are used up.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    #[must_use]
    pub fn cycling(words: Vec<u64>) -> Self {
        assert!(!words.is_empty(), "cycling ScriptedEngine needs at least one word");
        Self {
            cycle: true,
            ..Self::new(words)
        }
    }

    /// Number of words drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }

    /// Number of words not yet drawn. Always nonzero for a cycling engine.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.cycle {
            self.words.len()
        } else {
            self.words.len().saturating_sub(self.index)
        }
    }

    /// Number of `skip_ahead` calls so far.
    #[must_use]
    pub fn skips(&self) -> usize {
        self.skips
    }

    fn next_word(&mut self) -> u64 {
        let position = if self.cycle {
            self.index % self.words.len()
        } else {
            self.index
        };
        let word = *self.words.get(position).unwrap_or_else(|| {
            panic!(
                "ScriptedEngine exhausted after {} words",
                self.words.len()
            )
        });
        self.index += 1;
        word
    }
}

impl Engine for ScriptedEngine {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn skip_ahead(&mut self) {
        self.skips += 1;
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        0
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(self.clone())
    }
}

/// An engine that returns the same word forever. Suitable for tests that
/// only need some engine and do not depend on specific values.
#[derive(Debug, Clone, Copy)]
pub struct ConstantEngine(pub u64);

impl Engine for ConstantEngine {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn skip_ahead(&mut self) {}

    fn skip_ahead_stride_log2(&self) -> u32 {
        0
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(*self)
    }
}

/// Wraps another engine and counts the words drawn from it.
#[derive(Debug, Clone)]
pub struct CountingEngine<E> {
    inner: E,
    draws_u32: usize,
    draws_u64: usize,
}

impl<E> CountingEngine<E> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            draws_u32: 0,
            draws_u64: 0,
        }
    }

    /// Number of `next_u32` calls so far.
    #[must_use]
    pub fn draws_u32(&self) -> usize {
        self.draws_u32
    }

    /// Number of `next_u64` calls so far, including pair draws.
    #[must_use]
    pub fn draws_u64(&self) -> usize {
        self.draws_u64
    }

    /// Returns the wrapped engine.
    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Engine + Clone + Send + 'static> Engine for CountingEngine<E> {
    fn next_u32(&mut self) -> u32 {
        self.draws_u32 += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws_u64 += 1;
        self.inner.next_u64()
    }

    fn skip_ahead(&mut self) {
        self.inner.skip_ahead();
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        self.inner.skip_ahead_stride_log2()
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_engine_returns_words_in_order() {
        let mut engine = ScriptedEngine::new(vec![7, 0x1_0000_0003]);

        assert_eq!(engine.next_u64(), 7);
        assert_eq!(engine.next_u32(), 3);
        assert_eq!(engine.draws(), 2);
        assert_eq!(engine.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "ScriptedEngine exhausted after 1 words")]
    fn test_scripted_engine_panics_when_exhausted() {
        let mut engine = ScriptedEngine::new(vec![1]);

        engine.next_u32();
        engine.next_u32();
    }

    #[test]
    fn test_cycling_engine_wraps_around() {
        let mut engine = ScriptedEngine::cycling(vec![1, 2]);

        let words: Vec<u64> = (0..5).map(|_| engine.next_u64()).collect();

        assert_eq!(words, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_scripted_engine_counts_skips() {
        let mut engine = ScriptedEngine::new(vec![]);

        engine.skip_ahead();
        engine.skip_ahead();

        assert_eq!(engine.skips(), 2);
    }

    #[test]
    fn test_counting_engine_counts_each_width() {
        let mut engine = CountingEngine::new(ConstantEngine(5));

        engine.next_u32();
        engine.next_u64();
        engine.next_u64();

        assert_eq!(engine.draws_u32(), 1);
        assert_eq!(engine.draws_u64(), 2);
    }
}
