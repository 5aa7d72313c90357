//! Angles in degrees and radians.
//!
//! Each span is a fixed interval scaled from a unit draw, so every boundary
//! flavor of the unit interval carries over to the angle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use randforge_core::bounds::Bounds;
use randforge_core::engine::Engine;

use crate::unit::{scaled_f32, scaled_f64};

/// The interval an angle is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleSpan {
    /// 0° to 360°.
    FullCircle,
    /// -180° to 180°.
    SignedHalfCircle,
    /// 0° to 180°.
    HalfCircle,
    /// -90° to 90°.
    SignedQuarterCircle,
}

impl AngleSpan {
    /// Every span, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::FullCircle,
        Self::SignedHalfCircle,
        Self::HalfCircle,
        Self::SignedQuarterCircle,
    ];

    /// `(min, max)` in degrees.
    #[must_use]
    pub fn degrees(self) -> (f64, f64) {
        match self {
            Self::FullCircle => (0.0, 360.0),
            Self::SignedHalfCircle => (-180.0, 180.0),
            Self::HalfCircle => (0.0, 180.0),
            Self::SignedQuarterCircle => (-90.0, 90.0),
        }
    }

    /// `(min, max)` in radians.
    #[must_use]
    pub fn radians(self) -> (f64, f64) {
        match self {
            Self::FullCircle => (0.0, TAU),
            Self::SignedHalfCircle => (-PI, PI),
            Self::HalfCircle => (0.0, PI),
            Self::SignedQuarterCircle => (-FRAC_PI_2, FRAC_PI_2),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn narrow((min, max): (f64, f64)) -> (f32, f32) {
    (min as f32, max as f32)
}

/// An `f32` angle in degrees.
pub fn degrees_f32<E: Engine + ?Sized>(engine: &mut E, span: AngleSpan, bounds: Bounds) -> f32 {
    let (min, max) = narrow(span.degrees());
    scaled_f32(engine, min, max, bounds)
}

/// An `f32` angle in radians.
pub fn radians_f32<E: Engine + ?Sized>(engine: &mut E, span: AngleSpan, bounds: Bounds) -> f32 {
    let (min, max) = narrow(span.radians());
    scaled_f32(engine, min, max, bounds)
}

/// An `f64` angle in degrees.
pub fn degrees_f64<E: Engine + ?Sized>(engine: &mut E, span: AngleSpan, bounds: Bounds) -> f64 {
    let (min, max) = span.degrees();
    scaled_f64(engine, min, max, bounds)
}

/// An `f64` angle in radians.
pub fn radians_f64<E: Engine + ?Sized>(engine: &mut E, span: AngleSpan, bounds: Bounds) -> f64 {
    let (min, max) = span.radians();
    scaled_f64(engine, min, max, bounds)
}

#[cfg(test)]
mod tests {
    use randforge_engines::XorShift1024Star;
    use randforge_test_support::ScriptedEngine;

    use super::*;

    #[test]
    fn test_half_open_full_circle_starts_at_zero() {
        let mut engine = ScriptedEngine::new(vec![0]);

        assert_eq!(degrees_f64(&mut engine, AngleSpan::FullCircle, Bounds::HalfOpen), 0.0);
    }

    #[test]
    fn test_half_closed_signed_span_reaches_its_maximum() {
        let mut engine = ScriptedEngine::new(vec![0, 0]);

        assert_eq!(
            degrees_f64(&mut engine, AngleSpan::SignedHalfCircle, Bounds::HalfClosed),
            180.0
        );
        assert_eq!(
            radians_f32(&mut engine, AngleSpan::SignedQuarterCircle, Bounds::HalfClosed),
            std::f32::consts::FRAC_PI_2
        );
    }

    #[test]
    fn test_midpoint_draw_maps_to_span_centre() {
        // The top mantissa bit alone is exactly 0.5.
        let mut engine = ScriptedEngine::new(vec![1 << 63]);

        assert_eq!(
            degrees_f64(&mut engine, AngleSpan::SignedQuarterCircle, Bounds::HalfOpen),
            0.0
        );
    }

    #[test]
    fn test_angles_stay_within_span_and_flavor() {
        let mut engine = XorShift1024Star::from_seed_str("angles");

        for span in AngleSpan::ALL {
            let (min_deg, max_deg) = span.degrees();
            let (min_rad, max_rad) = span.radians();
            for bounds in Bounds::ALL {
                for _ in 0..2_500 {
                    let deg = degrees_f64(&mut engine, span, bounds);
                    let rad = radians_f64(&mut engine, span, bounds);
                    let deg32 = f64::from(degrees_f32(&mut engine, span, bounds));
                    let rad32 = radians_f32(&mut engine, span, bounds);
                    let (min32, max32) = narrow(span.radians());
                    assert!(bounds.contains(deg, min_deg, max_deg), "{span:?} {bounds}: {deg}");
                    assert!(bounds.contains(rad, min_rad, max_rad), "{span:?} {bounds}: {rad}");
                    assert!(bounds.contains(deg32, min_deg, max_deg), "{span:?} {bounds}: {deg32}");
                    assert!(bounds.contains(rad32, min32, max32), "{span:?} {bounds}: {rad32}");
                }
            }
        }
    }
}
