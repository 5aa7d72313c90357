//! Uniformly random bits.

use randforge_core::engine::Engine;
use randforge_core::error::RandomError;

/// `n` uniformly random bits in the low end of a `u32`, taken from the high
/// bits of one draw. `n == 0` returns 0 without drawing.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `n > 32`.
pub fn bits_u32<E: Engine + ?Sized>(engine: &mut E, n: u32) -> Result<u32, RandomError> {
    match n {
        0 => Ok(0),
        1..=32 => Ok(engine.next_u32() >> (32 - n)),
        _ => Err(RandomError::invalid(format!(
            "cannot draw {n} bits into a 32-bit value"
        ))),
    }
}

/// `n` uniformly random bits in the low end of a `u64`. Requests of 32 bits
/// or fewer are served from a single 32-bit draw.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `n > 64`.
pub fn bits_u64<E: Engine + ?Sized>(engine: &mut E, n: u32) -> Result<u64, RandomError> {
    match n {
        0..=32 => bits_u32(engine, n).map(u64::from),
        33..=64 => Ok(engine.next_u64() >> (64 - n)),
        _ => Err(RandomError::invalid(format!(
            "cannot draw {n} bits into a 64-bit value"
        ))),
    }
}

/// One uniformly random bit.
pub fn bit<E: Engine + ?Sized>(engine: &mut E) -> bool {
    engine.next_u32() >> 31 == 1
}

#[cfg(test)]
mod tests {
    use randforge_engines::SplitMix64;
    use randforge_test_support::{CountingEngine, ScriptedEngine};

    use super::*;

    #[test]
    fn test_bits_come_from_the_high_end_of_the_draw() {
        let mut engine = ScriptedEngine::new(vec![0xabcd_1234, 0xabcd_1234, 0xfedc_ba98_7654_3210]);

        assert_eq!(bits_u32(&mut engine, 4).unwrap(), 0xa);
        assert_eq!(bits_u32(&mut engine, 32).unwrap(), 0xabcd_1234);
        assert_eq!(bits_u64(&mut engine, 40).unwrap(), 0xfe_dcba_9876);
    }

    #[test]
    fn test_zero_bits_draw_nothing() {
        let mut engine = ScriptedEngine::new(Vec::new());

        assert_eq!(bits_u32(&mut engine, 0).unwrap(), 0);
        assert_eq!(bits_u64(&mut engine, 0).unwrap(), 0);
    }

    #[test]
    fn test_narrow_u64_requests_use_32_bit_draws() {
        let mut engine = CountingEngine::new(SplitMix64::from_seed_u64(5));

        let value = bits_u64(&mut engine, 20).unwrap();

        assert!(value < 1 << 20);
        assert_eq!(engine.draws_u32(), 1);
        assert_eq!(engine.draws_u64(), 0);
    }

    #[test]
    fn test_too_many_bits_are_rejected() {
        let mut engine = ScriptedEngine::new(Vec::new());

        assert!(bits_u32(&mut engine, 33).is_err());
        assert!(bits_u64(&mut engine, 65).is_err());
    }

    #[test]
    fn test_bit_is_the_top_bit() {
        let mut engine = ScriptedEngine::new(vec![0x8000_0000, 0x7fff_ffff]);

        assert!(bit(&mut engine));
        assert!(!bit(&mut engine));
    }

    #[test]
    fn test_results_fit_the_requested_width() {
        let mut engine = SplitMix64::from_seed_str("bit widths");

        for n in 1..=64 {
            for _ in 0..200 {
                let value = bits_u64(&mut engine, n).unwrap();
                assert!(n == 64 || value < 1 << n, "{n} bits gave {value:#x}");
            }
        }
    }
}
