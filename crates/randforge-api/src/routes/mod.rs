//! Route modules organized by capability.

pub mod dice;
pub mod health;
pub mod random;
