//! Evaluating compiled dice expressions.

use randforge_core::engine::Engine;
use randforge_sampling::range::offset_closed_u32;
use serde::Serialize;
use tracing::trace;

use crate::expression::{DiceExpression, DiceTerm, Sign};

/// One die as rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DieRoll {
    /// Face shown, in `1..=sides`.
    pub value: u32,
    /// Whether the face counts toward the term's sum.
    pub kept: bool,
}

/// Every die rolled for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRoll {
    /// `true` when the term is subtracted.
    pub negative: bool,
    /// Faces per die.
    pub sides: u32,
    /// Dice in roll order.
    pub dice: Vec<DieRoll>,
    /// Sum of the kept dice, before the term's sign.
    pub subtotal: i64,
}

/// A full breakdown of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRoll {
    /// Final value after signs and suffixes.
    pub total: i64,
    /// Per-term breakdown, in source order.
    pub terms: Vec<TermRoll>,
}

/// A face in `1..=sides` through the closed-range rejection core.
fn roll_die<E: Engine + ?Sized>(engine: &mut E, sides: u32) -> u32 {
    1 + offset_closed_u32(engine, sides - 1)
}

/// Flags which of `faces` survive the term's modifier. Ties at the cut are
/// resolved in favour of the die rolled first.
fn kept_flags(term: &DiceTerm, faces: &[u32]) -> Vec<bool> {
    let Some(modifier) = term.modifier else {
        return vec![true; faces.len()];
    };
    let (survivors, from_high_end) = modifier.survivors(term.count);
    let mut order: Vec<usize> = (0..faces.len()).collect();
    if from_high_end {
        order.sort_by(|&a, &b| faces[b].cmp(&faces[a]));
    } else {
        order.sort_by_key(|&index| faces[index]);
    }
    let mut kept = vec![false; faces.len()];
    for &index in order.iter().take(survivors as usize) {
        kept[index] = true;
    }
    kept
}

fn roll_term<E: Engine + ?Sized>(engine: &mut E, term: &DiceTerm) -> TermRoll {
    let faces: Vec<u32> = (0..term.count).map(|_| roll_die(engine, term.sides)).collect();
    let kept = kept_flags(term, &faces);
    let subtotal = faces
        .iter()
        .zip(&kept)
        .filter(|&(_, &keep)| keep)
        .map(|(&face, _)| i64::from(face))
        .fold(0_i64, i64::saturating_add);
    TermRoll {
        negative: term.sign == Sign::Minus,
        sides: term.sides,
        dice: faces
            .into_iter()
            .zip(kept)
            .map(|(value, kept)| DieRoll { value, kept })
            .collect(),
        subtotal,
    }
}

/// Sum of one term without recording individual dice when no modifier
/// needs them.
fn term_sum<E: Engine + ?Sized>(engine: &mut E, term: &DiceTerm) -> i64 {
    if term.modifier.is_some() {
        return roll_term(engine, term).subtotal;
    }
    (0..term.count)
        .map(|_| i64::from(roll_die(engine, term.sides)))
        .fold(0_i64, i64::saturating_add)
}

impl DiceExpression {
    /// Rolls every die and returns the final total.
    pub fn evaluate<E: Engine + ?Sized>(&self, engine: &mut E) -> i64 {
        let sum = self
            .terms
            .iter()
            .map(|term| term.sign.apply(term_sum(engine, term)))
            .fold(0_i64, i64::saturating_add);
        self.apply_suffixes(sum)
    }

    /// Rolls every die and returns the total together with each die's face
    /// and whether it was kept. Draws exactly what [`evaluate`] draws.
    ///
    /// [`evaluate`]: DiceExpression::evaluate
    pub fn roll<E: Engine + ?Sized>(&self, engine: &mut E) -> DiceRoll {
        let terms: Vec<TermRoll> = self.terms.iter().map(|term| roll_term(engine, term)).collect();
        let sum = self
            .terms
            .iter()
            .zip(&terms)
            .map(|(term, rolled)| term.sign.apply(rolled.subtotal))
            .fold(0_i64, i64::saturating_add);
        let total = self.apply_suffixes(sum);
        trace!(expression = %self, total, "rolled dice");
        DiceRoll { total, terms }
    }
}
