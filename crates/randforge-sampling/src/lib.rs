//! Randforge Sampling — turns raw engine words into shaped values.
//!
//! Every function here is stateless: it takes an engine by mutable
//! reference plus its own parameters and consumes only engine state.
//! Integer ranges use masked rejection sampling, so no range carries modulo
//! bias. Unit intervals build IEEE-754 mantissas directly from engine bits.

pub mod angle;
pub mod bits;
pub mod chance;
pub mod range;
pub mod shuffle;
pub mod unit;
pub mod weighted;

mod sealed {
    pub trait Sealed {}
}
