//! `rand::RngCore` bridge, so the engines can drive the `rand` ecosystem.

use rand::RngCore;
use rand::rand_core::impls;
use randforge_core::engine::Engine;

use crate::{AnyEngine, SplitMix64, XorShift1024Star, XorShift128Plus, XorShiftAdd, Xoroshiro128Plus};

macro_rules! impl_rng_core {
    ($($engine:ty),+ $(,)?) => {
        $(
            impl RngCore for $engine {
                fn next_u32(&mut self) -> u32 {
                    Engine::next_u32(self)
                }

                fn next_u64(&mut self) -> u64 {
                    Engine::next_u64(self)
                }

                fn fill_bytes(&mut self, dst: &mut [u8]) {
                    impls::fill_bytes_via_next(self, dst);
                }
            }
        )+
    };
}

impl_rng_core!(
    SplitMix64,
    XorShift128Plus,
    Xoroshiro128Plus,
    XorShift1024Star,
    XorShiftAdd,
    AnyEngine,
);
