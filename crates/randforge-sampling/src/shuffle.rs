//! Uniform (Fisher–Yates) and single-cycle (Sattolo) shuffles.
//!
//! Both walk from the last index down to 1 and swap with a drawn partner.
//! The uniform shuffle draws the partner from `[0, i]`; the cyclic shuffle
//! draws from `[0, i)`, which forbids fixed points at every step and leaves
//! exactly one cycle of length `n`.

use randforge_core::engine::Engine;
use randforge_core::error::RandomError;

use crate::range::index_closed;

/// Shuffles `items` in place; every permutation is equally likely.
pub fn shuffle<T, E: Engine + ?Sized>(engine: &mut E, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = index_closed(engine, i);
        items.swap(i, j);
    }
}

/// Shuffles `items` in place into a uniformly chosen single `n`-cycle.
pub fn cyclic_shuffle<T, E: Engine + ?Sized>(engine: &mut E, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = index_closed(engine, i - 1);
        items.swap(i, j);
    }
}

/// Clones `source` into the front of `destination`, returning that prefix.
fn copy_prefix<'a, T: Clone>(source: &[T], destination: &'a mut [T]) -> Result<&'a mut [T], RandomError> {
    let available = destination.len();
    let prefix = destination
        .get_mut(..source.len())
        .ok_or(RandomError::Capacity {
            required: source.len(),
            available,
        })?;
    prefix.clone_from_slice(source);
    Ok(prefix)
}

/// Clones `source` into the front of `destination` and shuffles that prefix.
/// Elements of `destination` past `source.len()` are left untouched.
///
/// # Errors
///
/// Returns `RandomError::Capacity` if `destination` is shorter than `source`.
pub fn shuffle_into<T: Clone, E: Engine + ?Sized>(
    engine: &mut E,
    source: &[T],
    destination: &mut [T],
) -> Result<(), RandomError> {
    shuffle(engine, copy_prefix(source, destination)?);
    Ok(())
}

/// Cyclic counterpart of [`shuffle_into`].
///
/// # Errors
///
/// Returns `RandomError::Capacity` if `destination` is shorter than `source`.
pub fn cyclic_shuffle_into<T: Clone, E: Engine + ?Sized>(
    engine: &mut E,
    source: &[T],
    destination: &mut [T],
) -> Result<(), RandomError> {
    cyclic_shuffle(engine, copy_prefix(source, destination)?);
    Ok(())
}

/// A shuffled copy of `source`.
pub fn shuffled<T: Clone, E: Engine + ?Sized>(engine: &mut E, source: &[T]) -> Vec<T> {
    let mut items = source.to_vec();
    shuffle(engine, &mut items);
    items
}

/// A cyclically shuffled copy of `source`.
pub fn cyclic_shuffled<T: Clone, E: Engine + ?Sized>(engine: &mut E, source: &[T]) -> Vec<T> {
    let mut items = source.to_vec();
    cyclic_shuffle(engine, &mut items);
    items
}
