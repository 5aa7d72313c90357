//! Randforge Core — shared engine abstractions.
//!
//! This crate defines the engine capability trait, the interval boundary
//! flavors, seed hashing, and the error taxonomy that every other crate in
//! the workspace depends on. It contains no generators and no samplers.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod seed;
