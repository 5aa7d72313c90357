//! Parallel decomposition by clone + skip-ahead.

use randforge_core::engine::Engine;

/// Returns `count` clones of `engine`, the `i`-th advanced by `i`
/// skip-aheads.
///
/// Each clone consumes a disjoint subsequence of the same deterministic
/// stream as long as it draws fewer than one skip-ahead stride of words, so
/// the clones can be handed to independent workers.
#[must_use]
pub fn split_streams<E: Engine + Clone>(engine: &E, count: usize) -> Vec<E> {
    let mut streams = Vec::with_capacity(count);
    let mut current = engine.clone();
    for _ in 0..count {
        streams.push(current.clone());
        current.skip_ahead();
    }
    streams
}
