//! Shared test engines and statistics helpers for the randforge toolkit.

mod engine;
mod stats;

pub use engine::{ConstantEngine, CountingEngine, ScriptedEngine};
pub use stats::{bucket_counts, bucket_std_dev};
