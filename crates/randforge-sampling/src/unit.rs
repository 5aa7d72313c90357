//! Unit intervals and scaled float ranges.
//!
//! Values are built from mantissa bits rather than by dividing an integer,
//! so every flavor is exact at its endpoints: the half-open interval yields
//! `k * 2^-m` for `k` in `[0, 2^m)`, where `m` is the mantissa width (23 for
//! `f32`, 52 for `f64`).

use std::fmt;

use randforge_core::bounds::Bounds;
use randforge_core::engine::Engine;
use randforge_core::error::RandomError;

use crate::range::offset_closed_u64;

const F32_MANTISSA_BITS: u32 = 23;
const F64_MANTISSA_BITS: u32 = 52;
const F32_ONE: u32 = 0x3f80_0000;
const F64_ONE: u64 = 0x3ff0_0000_0000_0000;

/// A value in `[1, 2)` with the high 23 bits of a draw as its mantissa.
fn one_to_two_f32<E: Engine + ?Sized>(engine: &mut E) -> f32 {
    f32::from_bits(F32_ONE | (engine.next_u32() >> (32 - F32_MANTISSA_BITS)))
}

/// A value in `[1, 2)` with the high 52 bits of a draw as its mantissa.
fn one_to_two_f64<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    f64::from_bits(F64_ONE | (engine.next_u64() >> (64 - F64_MANTISSA_BITS)))
}

/// Uniform `f32` in `(0, 1)`.
pub fn open_f32<E: Engine + ?Sized>(engine: &mut E) -> f32 {
    loop {
        let value = one_to_two_f32(engine) - 1.0;
        if value != 0.0 {
            return value;
        }
    }
}

/// Uniform `f32` in `[0, 1)`.
pub fn half_open_f32<E: Engine + ?Sized>(engine: &mut E) -> f32 {
    one_to_two_f32(engine) - 1.0
}

/// Uniform `f32` in `(0, 1]`.
pub fn half_closed_f32<E: Engine + ?Sized>(engine: &mut E) -> f32 {
    2.0 - one_to_two_f32(engine)
}

/// Uniform `f32` in `[0, 1]`. Exactly 1.0 occurs once in `2^23 + 1` draws.
#[allow(clippy::cast_precision_loss)]
pub fn closed_f32<E: Engine + ?Sized>(engine: &mut E) -> f32 {
    let steps = offset_closed_u64(engine, 1 << F32_MANTISSA_BITS);
    steps as f32 / (1_u32 << F32_MANTISSA_BITS) as f32
}

/// Uniform `f64` in `(0, 1)`.
pub fn open_f64<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    loop {
        let value = one_to_two_f64(engine) - 1.0;
        if value != 0.0 {
            return value;
        }
    }
}

/// Uniform `f64` in `[0, 1)`.
pub fn half_open_f64<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    one_to_two_f64(engine) - 1.0
}

/// Uniform `f64` in `(0, 1]`.
pub fn half_closed_f64<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    2.0 - one_to_two_f64(engine)
}

/// Uniform `f64` in `[0, 1]`. Exactly 1.0 occurs once in `2^52 + 1` draws.
#[allow(clippy::cast_precision_loss)]
pub fn closed_f64<E: Engine + ?Sized>(engine: &mut E) -> f64 {
    let steps = offset_closed_u64(engine, 1 << F64_MANTISSA_BITS);
    steps as f64 / (1_u64 << F64_MANTISSA_BITS) as f64
}

/// Uniform `f32` in the unit interval under `bounds`.
pub fn unit_f32<E: Engine + ?Sized>(engine: &mut E, bounds: Bounds) -> f32 {
    match bounds {
        Bounds::Open => open_f32(engine),
        Bounds::HalfOpen => half_open_f32(engine),
        Bounds::HalfClosed => half_closed_f32(engine),
        Bounds::Closed => closed_f32(engine),
    }
}

/// Uniform `f64` in the unit interval under `bounds`.
pub fn unit_f64<E: Engine + ?Sized>(engine: &mut E, bounds: Bounds) -> f64 {
    match bounds {
        Bounds::Open => open_f64(engine),
        Bounds::HalfOpen => half_open_f64(engine),
        Bounds::HalfClosed => half_closed_f64(engine),
        Bounds::Closed => closed_f64(engine),
    }
}

/// Scales a unit draw into `min..max`, redrawing the rare value that
/// rounding pushes onto an excluded endpoint.
pub(crate) fn scaled_f32<E: Engine + ?Sized>(engine: &mut E, min: f32, max: f32, bounds: Bounds) -> f32 {
    let span = max - min;
    loop {
        let value = min + span * unit_f32(engine, bounds);
        if bounds.contains(value, min, max) {
            return value;
        }
    }
}

/// `f64` counterpart of [`scaled_f32`].
pub(crate) fn scaled_f64<E: Engine + ?Sized>(engine: &mut E, min: f64, max: f64, bounds: Bounds) -> f64 {
    let span = max - min;
    loop {
        let value = min + span * unit_f64(engine, bounds);
        if bounds.contains(value, min, max) {
            return value;
        }
    }
}

/// The least `f32` above a finite `value`.
fn next_up_f32(value: f32) -> f32 {
    if value == 0.0 {
        f32::from_bits(1)
    } else if value > 0.0 {
        f32::from_bits(value.to_bits() + 1)
    } else {
        f32::from_bits(value.to_bits() - 1)
    }
}

/// The least `f64` above a finite `value`.
fn next_up_f64(value: f64) -> f64 {
    if value == 0.0 {
        f64::from_bits(1)
    } else if value > 0.0 {
        f64::from_bits(value.to_bits() + 1)
    } else {
        f64::from_bits(value.to_bits() - 1)
    }
}

/// Resolves a range of two adjacent floats, where no value lies strictly
/// between the endpoints. `None` leaves the draw to the scaling loop.
fn resolve_adjacent<T: fmt::Display>(
    adjacent: bool,
    min: T,
    max: T,
    bounds: Bounds,
) -> Option<Result<T, RandomError>> {
    if !adjacent {
        return None;
    }
    match bounds {
        Bounds::Open => Some(Err(RandomError::invalid(format!(
            "no value lies strictly between adjacent floats {min} and {max}"
        )))),
        Bounds::HalfOpen => Some(Ok(min)),
        Bounds::HalfClosed => Some(Ok(max)),
        Bounds::Closed => None,
    }
}

fn check_float_range(min: f64, max: f64, bounds: Bounds) -> Result<(), RandomError> {
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(RandomError::invalid(format!(
            "float range bounds must be finite: min {min}, max {max}"
        )));
    }
    let empty = if bounds == Bounds::Closed {
        min > max
    } else {
        min >= max
    };
    if empty {
        return Err(RandomError::invalid(format!(
            "empty {bounds} range: min {min}, max {max}"
        )));
    }
    Ok(())
}

/// Uniform `f32` between `min` and `max` under `bounds`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if either bound is not finite or
/// the range is empty under `bounds`. An open range between two adjacent
/// floats is empty.
pub fn ranged_f32<E: Engine + ?Sized>(
    engine: &mut E,
    min: f32,
    max: f32,
    bounds: Bounds,
) -> Result<f32, RandomError> {
    check_float_range(f64::from(min), f64::from(max), bounds)?;
    if !(max - min).is_finite() {
        return Err(RandomError::invalid(format!(
            "float range span overflows f32: min {min}, max {max}"
        )));
    }
    if min == max {
        return Ok(min);
    }
    if let Some(resolved) = resolve_adjacent(next_up_f32(min) >= max, min, max, bounds) {
        return resolved;
    }
    Ok(scaled_f32(engine, min, max, bounds))
}

/// Uniform `f64` between `min` and `max` under `bounds`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if either bound or the span is not
/// finite, or the range is empty under `bounds`. An open range between two
/// adjacent floats is empty.
pub fn ranged_f64<E: Engine + ?Sized>(
    engine: &mut E,
    min: f64,
    max: f64,
    bounds: Bounds,
) -> Result<f64, RandomError> {
    check_float_range(min, max, bounds)?;
    if min == max {
        return Ok(min);
    }
    if let Some(resolved) = resolve_adjacent(next_up_f64(min) >= max, min, max, bounds) {
        return resolved;
    }
    Ok(scaled_f64(engine, min, max, bounds))
}
