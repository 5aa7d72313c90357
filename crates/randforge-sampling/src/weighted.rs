//! Weighted and uniform index selection.
//!
//! Every selector draws one half-open value in `[0, total)` and finds the
//! entry whose cumulative interval `[before, before + weight)` contains it.
//! A draw landing exactly on a boundary therefore belongs to the entry the
//! boundary opens, and zero-weight entries are never chosen.

use std::fmt;

use randforge_core::engine::Engine;
use randforge_core::error::RandomError;
use tracing::debug;

use crate::range::{index_closed, offset_closed_u32, offset_closed_u64};
use crate::sealed::Sealed;
use crate::unit::{half_open_f32, half_open_f64};

/// Numeric types usable as selection weights.
pub trait Weight: Copy + PartialOrd + fmt::Display + fmt::Debug + Sealed {
    /// The additive identity.
    const ZERO: Self;

    /// Whether the value is an acceptable weight (finite and nonnegative).
    fn is_valid(self) -> bool;

    /// `self + other`, or `None` if the sum overflows or is not finite.
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// A uniform draw in `[0, total)`. Requires `total > 0`.
    fn sample_below<E: Engine + ?Sized>(engine: &mut E, total: Self) -> Self;
}

impl Sealed for f32 {}
impl Sealed for f64 {}

impl Weight for u32 {
    const ZERO: Self = 0;

    fn is_valid(self) -> bool {
        true
    }

    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }

    fn sample_below<E: Engine + ?Sized>(engine: &mut E, total: Self) -> Self {
        offset_closed_u32(engine, total - 1)
    }
}

impl Weight for u64 {
    const ZERO: Self = 0;

    fn is_valid(self) -> bool {
        true
    }

    fn checked_sum(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }

    fn sample_below<E: Engine + ?Sized>(engine: &mut E, total: Self) -> Self {
        offset_closed_u64(engine, total - 1)
    }
}

macro_rules! impl_float_weight {
    ($t:ty, $unit:ident) => {
        impl Weight for $t {
            const ZERO: Self = 0.0;

            fn is_valid(self) -> bool {
                self.is_finite() && self >= 0.0
            }

            fn checked_sum(self, other: Self) -> Option<Self> {
                Some(self + other).filter(|sum| sum.is_finite())
            }

            fn sample_below<E: Engine + ?Sized>(engine: &mut E, total: Self) -> Self {
                loop {
                    let draw = $unit(engine) * total;
                    if draw < total {
                        return draw;
                    }
                }
            }
        }
    };
}

impl_float_weight!(f32, half_open_f32);
impl_float_weight!(f64, half_open_f64);

fn check_weight<W: Weight>(index: usize, weight: W) -> Result<(), RandomError> {
    if weight.is_valid() {
        Ok(())
    } else {
        Err(RandomError::invalid(format!(
            "weight {weight} at index {index} is negative or not finite"
        )))
    }
}

fn check_total<W: Weight>(total: W) -> Result<(), RandomError> {
    if total > W::ZERO {
        Ok(())
    } else {
        Err(RandomError::invalid("total weight must be positive"))
    }
}

fn overflowed() -> RandomError {
    RandomError::invalid("total weight overflows its type")
}

/// Weights with precomputed prefix sums, sampled by binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedIndexTable<W: Weight> {
    cumulative: Vec<W>,
}

impl<W: Weight> WeightedIndexTable<W> {
    /// Builds a table over `weights`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `weights` is empty, any
    /// weight is negative or not finite, the total overflows, or the total
    /// is zero.
    pub fn new(weights: &[W]) -> Result<Self, RandomError> {
        if weights.is_empty() {
            return Err(RandomError::invalid("weighted table needs at least one weight"));
        }
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = W::ZERO;
        for (index, &weight) in weights.iter().enumerate() {
            check_weight(index, weight)?;
            total = total.checked_sum(weight).ok_or_else(overflowed)?;
            cumulative.push(total);
        }
        check_total(total)?;
        debug!(entries = cumulative.len(), %total, "built weighted index table");
        Ok(Self { cumulative })
    }

    /// Number of entries, including zero-weight ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Always `false`: construction rejects empty tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> W {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Selects an index with probability proportional to its weight.
    pub fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> usize {
        let draw = W::sample_below(engine, self.total());
        self.cumulative.partition_point(|&bound| bound <= draw)
    }
}

/// Selects an index from `weights` by a linear scan, without building a table.
///
/// # Errors
///
/// Same as [`WeightedIndexTable::new`].
pub fn select_weighted_index<W: Weight, E: Engine + ?Sized>(
    engine: &mut E,
    weights: &[W],
) -> Result<usize, RandomError> {
    if weights.is_empty() {
        return Err(RandomError::invalid("cannot select from an empty weight list"));
    }
    let mut total = W::ZERO;
    for (index, &weight) in weights.iter().enumerate() {
        check_weight(index, weight)?;
        total = total.checked_sum(weight).ok_or_else(overflowed)?;
    }
    check_total(total)?;
    select_weighted_index_by(engine, weights.len(), |index| weights[index], total)
}

/// Selects an index in `0..count` whose weight is given by `weight_of`,
/// against a caller-supplied `total`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `count` is zero, `total` is not
/// positive, a visited weight is invalid, or the weights sum to less than
/// `total` so that the draw falls past the last entry.
pub fn select_weighted_index_by<W, E, F>(
    engine: &mut E,
    count: usize,
    weight_of: F,
    total: W,
) -> Result<usize, RandomError>
where
    W: Weight,
    E: Engine + ?Sized,
    F: Fn(usize) -> W,
{
    if count == 0 {
        return Err(RandomError::invalid("cannot select from zero entries"));
    }
    if !total.is_valid() {
        return Err(RandomError::invalid(format!("total weight {total} is not finite")));
    }
    check_total(total)?;
    let draw = W::sample_below(engine, total);
    let mut running = W::ZERO;
    for index in 0..count {
        let weight = weight_of(index);
        check_weight(index, weight)?;
        running = running.checked_sum(weight).ok_or_else(overflowed)?;
        if draw < running {
            return Ok(index);
        }
    }
    Err(RandomError::invalid(format!(
        "weights sum to {running}, short of the supplied total {total}"
    )))
}

/// A uniformly chosen index in `0..len`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `len` is zero.
pub fn choose_index<E: Engine + ?Sized>(engine: &mut E, len: usize) -> Result<usize, RandomError> {
    if len == 0 {
        return Err(RandomError::invalid("cannot choose from an empty collection"));
    }
    Ok(index_closed(engine, len - 1))
}

/// A uniformly chosen element of `items`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `items` is empty.
pub fn choose<'a, T, E: Engine + ?Sized>(engine: &mut E, items: &'a [T]) -> Result<&'a T, RandomError> {
    let index = choose_index(engine, items.len())?;
    Ok(&items[index])
}

/// Items paired with a weighted index table.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedSelector<T, W: Weight> {
    items: Vec<T>,
    table: WeightedIndexTable<W>,
}

impl<T, W: Weight> WeightedSelector<T, W> {
    /// Builds a selector from `(item, weight)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`WeightedIndexTable::new`].
    pub fn new(entries: impl IntoIterator<Item = (T, W)>) -> Result<Self, RandomError> {
        let (items, weights): (Vec<T>, Vec<W>) = entries.into_iter().unzip();
        let table = WeightedIndexTable::new(&weights)?;
        Ok(Self { items, table })
    }

    /// The items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &WeightedIndexTable<W> {
        &self.table
    }

    /// Selects an item with probability proportional to its weight.
    pub fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> &T {
        &self.items[self.table.sample(engine)]
    }
}
