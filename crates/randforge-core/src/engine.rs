//! Bit engine abstraction.
//!
//! Samplers, the dice evaluator and the shuffles depend only on this trait,
//! never on a concrete recurrence. In tests a scripted implementation is
//! injected in place of a real generator.

/// A pseudorandom bit-generation state machine.
pub trait Engine {
    /// Returns the next 32-bit word of the stream.
    fn next_u32(&mut self) -> u32;

    /// Returns the next 64-bit word of the stream.
    fn next_u64(&mut self) -> u64;

    /// Returns the low and high halves of a single `next_u64` draw.
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32_pair(&mut self) -> (u32, u32) {
        let word = self.next_u64();
        (word as u32, (word >> 32) as u32)
    }

    /// Advances the state as if `2^stride` ordinary draws had been made,
    /// where `stride` is [`Engine::skip_ahead_stride_log2`].
    fn skip_ahead(&mut self);

    /// Base-two logarithm of the number of draws one `skip_ahead` covers.
    fn skip_ahead_stride_log2(&self) -> u32;

    /// Clones the engine behind a trait object. The copy continues the
    /// same sequence independently of the original.
    fn boxed_clone(&self) -> Box<dyn Engine + Send>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_u32_pair(&mut self) -> (u32, u32) {
        (**self).next_u32_pair()
    }

    fn skip_ahead(&mut self) {
        (**self).skip_ahead();
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        (**self).skip_ahead_stride_log2()
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        (**self).boxed_clone()
    }
}
