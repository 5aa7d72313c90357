//! Probability and sign sampling.
//!
//! A [`Probability`] is validated once at construction and then sampled
//! without further checks. Ratios draw one half-open value in
//! `[0, denominator)` through the range sampler, fractions compare a single
//! raw word against their numerator, and floats compare a half-open unit
//! draw of matching precision.

use randforge_core::engine::Engine;
use randforge_core::error::RandomError;

use crate::range::{RangeInt, offset_closed_u64};
use crate::unit::{half_open_f32, half_open_f64};

/// A validated probability in one of five representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probability(Repr);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
    Ratio { numerator: u64, denominator: u64 },
    Fraction32(u32),
    Fraction64(u64),
    Single(f32),
    Double(f64),
}

/// Which slot a tri-state draw landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    First,
    Second,
    Rest,
}

impl Probability {
    /// `numerator / denominator` for any supported integer width.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if the denominator is not
    /// positive, the numerator is negative, or the numerator exceeds the
    /// denominator.
    pub fn ratio<T: RangeInt>(numerator: T, denominator: T) -> Result<Self, RandomError> {
        if denominator <= T::ZERO {
            return Err(RandomError::invalid(format!(
                "probability denominator must be positive, got {denominator}"
            )));
        }
        if numerator < T::ZERO {
            return Err(RandomError::invalid(format!(
                "probability numerator must be nonnegative, got {numerator}"
            )));
        }
        if numerator > denominator {
            return Err(RandomError::invalid(format!(
                "probability {numerator}/{denominator} exceeds certainty"
            )));
        }
        Ok(Self(Repr::Ratio {
            numerator: T::distance(T::ZERO, numerator),
            denominator: T::distance(T::ZERO, denominator),
        }))
    }

    /// `numerator / 2^32`, compared directly against one 32-bit draw.
    #[must_use]
    pub fn fraction_u32(numerator: u32) -> Self {
        Self(Repr::Fraction32(numerator))
    }

    /// `numerator / 2^64`, compared directly against one 64-bit draw.
    #[must_use]
    pub fn fraction_u64(numerator: u64) -> Self {
        Self(Repr::Fraction64(numerator))
    }

    /// A single-precision probability, sampled with `f32` unit draws.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `p` is NaN or outside `[0, 1]`.
    pub fn single(p: f32) -> Result<Self, RandomError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RandomError::invalid(format!(
                "probability must lie in [0, 1], got {p}"
            )));
        }
        Ok(Self(Repr::Single(p)))
    }

    /// A double-precision probability, sampled with `f64` unit draws.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidArgument` if `p` is NaN or outside `[0, 1]`.
    pub fn double(p: f64) -> Result<Self, RandomError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(RandomError::invalid(format!(
                "probability must lie in [0, 1], got {p}"
            )));
        }
        Ok(Self(Repr::Double(p)))
    }

    /// The probability as an `f64`, for reporting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self.0 {
            Repr::Ratio {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
            Repr::Fraction32(numerator) => f64::from(numerator) / 4_294_967_296.0,
            Repr::Fraction64(numerator) => numerator as f64 / 18_446_744_073_709_551_616.0,
            Repr::Single(p) => f64::from(p),
            Repr::Double(p) => p,
        }
    }

    /// Draws once and reports whether the event occurred.
    pub fn sample<E: Engine + ?Sized>(self, engine: &mut E) -> bool {
        match self.0 {
            Repr::Ratio {
                numerator,
                denominator,
            } => offset_closed_u64(engine, denominator - 1) < numerator,
            Repr::Fraction32(numerator) => engine.next_u32() < numerator,
            Repr::Fraction64(numerator) => engine.next_u64() < numerator,
            Repr::Single(p) => half_open_f32(engine) < p,
            Repr::Double(p) => half_open_f64(engine) < p,
        }
    }

    /// One draw split three ways: `self`, then `second`, then the remainder.
    fn sample_tri<E: Engine + ?Sized>(self, second: Self, engine: &mut E) -> Result<Slot, RandomError> {
        let slot = |first: bool, within: bool| match (first, within) {
            (true, _) => Slot::First,
            (false, true) => Slot::Second,
            (false, false) => Slot::Rest,
        };
        match (self.0, second.0) {
            (
                Repr::Ratio {
                    numerator: a,
                    denominator,
                },
                Repr::Ratio {
                    numerator: b,
                    denominator: other,
                },
            ) if denominator == other => {
                let both = a
                    .checked_add(b)
                    .filter(|&sum| sum <= denominator)
                    .ok_or_else(|| exceeds_certainty(self, second))?;
                let draw = offset_closed_u64(engine, denominator - 1);
                Ok(slot(draw < a, draw < both))
            }
            (Repr::Fraction32(a), Repr::Fraction32(b)) => {
                let both = u64::from(a) + u64::from(b);
                if both > 1 << 32 {
                    return Err(exceeds_certainty(self, second));
                }
                let draw = engine.next_u32();
                Ok(slot(draw < a, u64::from(draw) < both))
            }
            (Repr::Fraction64(a), Repr::Fraction64(b)) => {
                let both = u128::from(a) + u128::from(b);
                if both > 1 << 64 {
                    return Err(exceeds_certainty(self, second));
                }
                let draw = engine.next_u64();
                Ok(slot(draw < a, u128::from(draw) < both))
            }
            (Repr::Single(a), Repr::Single(b)) => {
                let both = a + b;
                if both > 1.0 {
                    return Err(exceeds_certainty(self, second));
                }
                let draw = half_open_f32(engine);
                Ok(slot(draw < a, draw < both))
            }
            (Repr::Double(a), Repr::Double(b)) => {
                let both = a + b;
                if both > 1.0 {
                    return Err(exceeds_certainty(self, second));
                }
                let draw = half_open_f64(engine);
                Ok(slot(draw < a, draw < both))
            }
            _ => Err(RandomError::invalid(
                "sign thresholds must share one representation and denominator",
            )),
        }
    }
}

fn exceeds_certainty(first: Probability, second: Probability) -> RandomError {
    RandomError::invalid(format!(
        "sign thresholds {} and {} sum beyond certainty",
        first.as_f64(),
        second.as_f64()
    ))
}

/// `true` with the given probability.
pub fn chance<E: Engine + ?Sized>(engine: &mut E, probability: Probability) -> bool {
    probability.sample(engine)
}

/// `1` with the given probability, otherwise `0`.
pub fn one_or_zero<E: Engine + ?Sized>(engine: &mut E, probability: Probability) -> u32 {
    u32::from(probability.sample(engine))
}

/// `+1` with the given probability, otherwise `-1`.
pub fn sign<E: Engine + ?Sized>(engine: &mut E, positive: Probability) -> i32 {
    if positive.sample(engine) { 1 } else { -1 }
}

/// `+1` with probability `positive`, `-1` with probability `negative`, and
/// `0` with whatever remains. Uses a single draw.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if the two thresholds use
/// different representations (or ratio denominators), or if they sum to more
/// than certainty.
pub fn sign_or_zero<E: Engine + ?Sized>(
    engine: &mut E,
    positive: Probability,
    negative: Probability,
) -> Result<i32, RandomError> {
    Ok(match positive.sample_tri(negative, engine)? {
        Slot::First => 1,
        Slot::Second => -1,
        Slot::Rest => 0,
    })
}

/// `true` with probability `numerator / denominator`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` under the rules of
/// [`Probability::ratio`].
pub fn chance_ratio<T: RangeInt, E: Engine + ?Sized>(
    engine: &mut E,
    numerator: T,
    denominator: T,
) -> Result<bool, RandomError> {
    Ok(Probability::ratio(numerator, denominator)?.sample(engine))
}

/// `true` when a raw 32-bit draw falls below `numerator`.
pub fn chance_fraction_u32<E: Engine + ?Sized>(engine: &mut E, numerator: u32) -> bool {
    Probability::fraction_u32(numerator).sample(engine)
}

/// `true` when a raw 64-bit draw falls below `numerator`.
pub fn chance_fraction_u64<E: Engine + ?Sized>(engine: &mut E, numerator: u64) -> bool {
    Probability::fraction_u64(numerator).sample(engine)
}

/// `true` with probability `p`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `p` is NaN or outside `[0, 1]`.
pub fn chance_f32<E: Engine + ?Sized>(engine: &mut E, p: f32) -> Result<bool, RandomError> {
    Ok(Probability::single(p)?.sample(engine))
}

/// `true` with probability `p`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `p` is NaN or outside `[0, 1]`.
pub fn chance_f64<E: Engine + ?Sized>(engine: &mut E, p: f64) -> Result<bool, RandomError> {
    Ok(Probability::double(p)?.sample(engine))
}
