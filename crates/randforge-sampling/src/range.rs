//! Unbiased integer ranges.
//!
//! All four boundary flavors reduce to one rejection core: draw a word, mask
//! it down to the smallest all-ones value covering the span, and redraw
//! while the masked value falls outside the span. Spans that fit in 32 bits
//! are served from `next_u32`; wider spans draw `next_u64`.

use std::fmt;

use randforge_core::bounds::Bounds;
use randforge_core::engine::Engine;
use randforge_core::error::RandomError;

use crate::sealed::Sealed;

/// Integer types the range sampler supports.
pub trait RangeInt: Copy + PartialOrd + fmt::Display + Sealed {
    /// The additive identity.
    const ZERO: Self;

    /// `max - min` as an unsigned distance. Requires `min <= max`.
    fn distance(min: Self, max: Self) -> u64;

    /// `min + offset`. Requires the result to be representable.
    fn offset(min: Self, offset: u64) -> Self;
}

macro_rules! impl_range_int_unsigned {
    ($($t:ty),+) => {
        $(
            impl Sealed for $t {}

            impl RangeInt for $t {
                const ZERO: Self = 0;

                #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn distance(min: Self, max: Self) -> u64 {
                    (max - min) as u64
                }

                #[allow(clippy::cast_possible_truncation)]
                fn offset(min: Self, offset: u64) -> Self {
                    min + offset as Self
                }
            }
        )+
    };
}

macro_rules! impl_range_int_signed {
    ($($t:ty => $u:ty),+) => {
        $(
            impl Sealed for $t {}

            impl RangeInt for $t {
                const ZERO: Self = 0;

                #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn distance(min: Self, max: Self) -> u64 {
                    max.abs_diff(min) as u64
                }

                #[allow(clippy::cast_possible_truncation)]
                fn offset(min: Self, offset: u64) -> Self {
                    min.wrapping_add_unsigned(offset as $u)
                }
            }
        )+
    };
}

impl_range_int_unsigned!(u8, u16, u32, u64, usize);
impl_range_int_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

/// Uniform value in `[0, max_offset]` from 32-bit draws. This is the
/// rejection core every other sampler reduces to.
pub fn offset_closed_u32<E: Engine + ?Sized>(engine: &mut E, max_offset: u32) -> u32 {
    if max_offset == 0 {
        return 0;
    }
    let mask = u32::MAX >> max_offset.leading_zeros();
    loop {
        let candidate = engine.next_u32() & mask;
        if candidate <= max_offset {
            return candidate;
        }
    }
}

/// Uniform value in `[0, max_offset]`, drawing 64-bit words only when the
/// span does not fit in 32 bits.
pub fn offset_closed_u64<E: Engine + ?Sized>(engine: &mut E, max_offset: u64) -> u64 {
    if let Ok(narrow) = u32::try_from(max_offset) {
        return u64::from(offset_closed_u32(engine, narrow));
    }
    let mask = u64::MAX >> max_offset.leading_zeros();
    loop {
        let candidate = engine.next_u64() & mask;
        if candidate <= max_offset {
            return candidate;
        }
    }
}

/// Uniform index in `[0, max]`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn index_closed<E: Engine + ?Sized>(engine: &mut E, max: usize) -> usize {
    offset_closed_u64(engine, max as u64) as usize
}

fn empty_range<T: RangeInt>(min: T, max: T, bounds: Bounds) -> RandomError {
    RandomError::invalid(format!("empty {bounds} range: min {min}, max {max}"))
}

/// Uniform value in `(min, max)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` unless at least one value lies
/// strictly between `min` and `max`.
pub fn open<T: RangeInt, E: Engine + ?Sized>(engine: &mut E, min: T, max: T) -> Result<T, RandomError> {
    if min >= max || T::distance(min, max) < 2 {
        return Err(empty_range(min, max, Bounds::Open));
    }
    let offset = offset_closed_u64(engine, T::distance(min, max) - 2);
    Ok(T::offset(min, offset + 1))
}

/// Uniform value in `[min, max)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `min >= max`.
pub fn half_open<T: RangeInt, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
) -> Result<T, RandomError> {
    if min >= max {
        return Err(empty_range(min, max, Bounds::HalfOpen));
    }
    let offset = offset_closed_u64(engine, T::distance(min, max) - 1);
    Ok(T::offset(min, offset))
}

/// Uniform value in `(min, max]`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `min >= max`.
pub fn half_closed<T: RangeInt, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
) -> Result<T, RandomError> {
    if min >= max {
        return Err(empty_range(min, max, Bounds::HalfClosed));
    }
    let offset = offset_closed_u64(engine, T::distance(min, max) - 1);
    Ok(T::offset(min, offset + 1))
}

/// Uniform value in `[min, max]`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `min > max`.
pub fn closed<T: RangeInt, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
) -> Result<T, RandomError> {
    if min > max {
        return Err(empty_range(min, max, Bounds::Closed));
    }
    let offset = offset_closed_u64(engine, T::distance(min, max));
    Ok(T::offset(min, offset))
}

/// Uniform value between `min` and `max` under the given boundary flavor.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if the range is empty under
/// `bounds`.
pub fn range<T: RangeInt, E: Engine + ?Sized>(
    engine: &mut E,
    min: T,
    max: T,
    bounds: Bounds,
) -> Result<T, RandomError> {
    match bounds {
        Bounds::Open => open(engine, min, max),
        Bounds::HalfOpen => half_open(engine, min, max),
        Bounds::HalfClosed => half_closed(engine, min, max),
        Bounds::Closed => closed(engine, min, max),
    }
}
