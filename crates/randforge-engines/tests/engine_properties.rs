//! Properties every engine of the family must satisfy.

use randforge_core::engine::Engine;
use randforge_engines::{AnyEngine, EngineKind};

/// Five interleavings of six `next_u64` calls (`N`) and three skip-aheads
/// (`S`).
const INTERLEAVINGS: [&str; 5] = [
    "SSSNNNNNN",
    "NNNNNNSSS",
    "NSNSNSNNN",
    "NNSNNSNNS",
    "SNNNSNNSN",
];

fn run_interleaving(mut engine: AnyEngine, pattern: &str) -> u64 {
    for op in pattern.chars() {
        match op {
            'N' => {
                engine.next_u64();
            }
            'S' => engine.skip_ahead(),
            other => panic!("unknown op {other}"),
        }
    }
    engine.next_u64()
}

#[test]
fn test_same_seed_produces_identical_sequences() {
    for kind in EngineKind::ALL {
        let mut a = AnyEngine::from_seed_str(kind, "determinism");
        let mut b = AnyEngine::from_seed_str(kind, "determinism");

        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32(), "{kind} next_u32 diverged");
            assert_eq!(a.next_u64(), b.next_u64(), "{kind} next_u64 diverged");
        }
    }
}

#[test]
fn test_different_seeds_produce_different_sequences() {
    for kind in EngineKind::ALL {
        let mut a = AnyEngine::from_seed_str(kind, "left");
        let mut b = AnyEngine::from_seed_str(kind, "right");

        let a_words: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let b_words: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(a_words, b_words, "{kind} ignored its seed");
    }
}

#[test]
fn test_clone_continues_identically_and_independently() {
    for kind in EngineKind::ALL {
        let mut original = AnyEngine::from_seed_u64(kind, 99);
        original.next_u64();
        let mut copy = original.clone();
        let mut boxed = original.boxed_clone();

        let expected: Vec<u64> = (0..32).map(|_| original.next_u64()).collect();
        let from_copy: Vec<u64> = (0..32).map(|_| copy.next_u64()).collect();
        let from_boxed: Vec<u64> = (0..32).map(|_| boxed.next_u64()).collect();

        assert_eq!(expected, from_copy, "{kind} clone diverged");
        assert_eq!(expected, from_boxed, "{kind} boxed clone diverged");
    }
}

#[test]
fn test_skip_ahead_commutes_with_ordinary_draws() {
    for kind in EngineKind::ALL {
        let engine = AnyEngine::from_seed_str(kind, "commutativity");

        let results: Vec<u64> = INTERLEAVINGS
            .iter()
            .map(|pattern| run_interleaving(engine.clone(), pattern))
            .collect();

        assert!(
            results.windows(2).all(|pair| pair[0] == pair[1]),
            "{kind} interleavings disagree: {results:x?}"
        );
    }
}

#[test]
fn test_skip_ahead_changes_the_stream() {
    for kind in EngineKind::ALL {
        let mut plain = AnyEngine::from_seed_u64(kind, 5);
        let mut skipped = plain.clone();

        skipped.skip_ahead();

        assert_ne!(plain.next_u64(), skipped.next_u64(), "{kind} skip was a no-op");
    }
}

#[test]
fn test_next_u32_pair_matches_split_next_u64() {
    for kind in EngineKind::ALL {
        let mut a = AnyEngine::from_seed_u64(kind, 11);
        let mut b = a.clone();

        let (low, high) = a.next_u32_pair();
        let word = b.next_u64();

        assert_eq!(u64::from(low) | (u64::from(high) << 32), word, "{kind}");
    }
}
