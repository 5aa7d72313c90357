//! Randforge Engines — the bit-generation state machines.
//!
//! Each engine is a distinct linear, xor-shift or multiplicative recurrence
//! over a small fixed-size word state. All of them implement
//! [`randforge_core::engine::Engine`] and [`rand::RngCore`], derive `Clone`,
//! and support a precomputed large-stride skip-ahead. [`AnyEngine`] is the
//! closed tagged variant over the family.

mod any;
pub mod config;
mod rng_core;
mod splitmix64;
mod streams;
mod xoroshiro128plus;
mod xorshift1024star;
mod xorshift128plus;
mod xorshift_add;

pub use any::{AnyEngine, EngineKind};
pub use splitmix64::{SplitMix64, mix64};
pub use streams::split_streams;
pub use xoroshiro128plus::Xoroshiro128Plus;
pub use xorshift_add::XorShiftAdd;
pub use xorshift1024star::XorShift1024Star;
pub use xorshift128plus::XorShift128Plus;

/// Draws a 64-bit seed from the operating system's entropy source.
pub(crate) fn entropy_seed() -> u64 {
    use rand::RngCore;

    let seed = rand::rng().next_u64();
    tracing::debug!("drew engine seed from OS entropy");
    seed
}
