//! The compiled form of dice notation.

use std::fmt;

/// Whether a term is added to or subtracted from the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Added.
    Plus,
    /// Subtracted.
    Minus,
}

impl Sign {
    pub(crate) fn apply(self, value: i64) -> i64 {
        match self {
            Self::Plus => value,
            Self::Minus => value.saturating_neg(),
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// Keep or drop `n` dice from one end of a sorted roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Keep the `n` highest dice.
    KeepHighest(u32),
    /// Keep the `n` lowest dice.
    KeepLowest(u32),
    /// Drop the `n` highest dice.
    DropHighest(u32),
    /// Drop the `n` lowest dice.
    DropLowest(u32),
}

impl Modifier {
    /// Number of dice that survive out of `count`, and whether the survivors
    /// are taken from the high end.
    pub(crate) fn survivors(self, count: u32) -> (u32, bool) {
        match self {
            Self::KeepHighest(n) => (n, true),
            Self::KeepLowest(n) => (n, false),
            Self::DropHighest(n) => (count - n, false),
            Self::DropLowest(n) => (count - n, true),
        }
    }

    pub(crate) fn count(self) -> u32 {
        match self {
            Self::KeepHighest(n) | Self::KeepLowest(n) | Self::DropHighest(n) | Self::DropLowest(n) => n,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, end) = match self {
            Self::KeepHighest(_) => ('k', 'h'),
            Self::KeepLowest(_) => ('k', 'l'),
            Self::DropHighest(_) => ('d', 'h'),
            Self::DropLowest(_) => ('d', 'l'),
        };
        match self.count() {
            1 => write!(f, "{action}{end}"),
            n => write!(f, "{action}{n}{end}"),
        }
    }
}

/// `count` dice of `sides` faces, optionally filtered by a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceTerm {
    /// How the term's sum joins the total.
    pub sign: Sign,
    /// Number of dice rolled, at least 1.
    pub count: u32,
    /// Faces per die, at least 2.
    pub sides: u32,
    /// Keep/drop rule; only the final term may carry one.
    pub modifier: Option<Modifier>,
}

impl DiceTerm {
    /// Number of dice whose faces count toward the term's sum.
    #[must_use]
    pub fn kept(&self) -> u32 {
        self.modifier.map_or(self.count, |m| m.survivors(self.count).0)
    }

    /// `(lowest, highest)` unsigned sums this term can produce.
    fn unsigned_bounds(&self) -> (i64, i64) {
        let kept = i64::from(self.kept());
        (kept, kept.saturating_mul(i64::from(self.sides)))
    }

    /// `(lowest, highest)` signed contributions to the total.
    fn signed_bounds(&self) -> (i64, i64) {
        let (low, high) = self.unsigned_bounds();
        match self.sign {
            Sign::Plus => (low, high),
            Sign::Minus => (high.saturating_neg(), low.saturating_neg()),
        }
    }
}

/// Arithmetic applied after all dice terms are summed, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// `+ k`
    Add(i64),
    /// `- k`
    Subtract(i64),
    /// `* k` or `x k`
    Multiply(i64),
    /// `/ k`, truncating toward zero. `k` is never zero.
    Divide(i64),
}

impl Suffix {
    /// Applies the operation, saturating at the `i64` limits.
    #[must_use]
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Self::Add(k) => value.saturating_add(k),
            Self::Subtract(k) => value.saturating_sub(k),
            Self::Multiply(k) => value.saturating_mul(k),
            Self::Divide(k) => value.saturating_div(k),
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(k) => write!(f, "+{k}"),
            Self::Subtract(k) => write!(f, "-{k}"),
            Self::Multiply(k) => write!(f, "*{k}"),
            Self::Divide(k) => write!(f, "/{k}"),
        }
    }
}

/// Compiled dice notation. Immutable; every evaluation is independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceExpression {
    pub(crate) terms: Vec<DiceTerm>,
    pub(crate) suffixes: Vec<Suffix>,
}

impl DiceExpression {
    /// The dice terms, in source order. Never empty.
    #[must_use]
    pub fn terms(&self) -> &[DiceTerm] {
        &self.terms
    }

    /// The arithmetic suffixes, in source order.
    #[must_use]
    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    /// Total number of dice one evaluation rolls.
    #[must_use]
    pub fn dice_count(&self) -> u64 {
        self.terms.iter().map(|term| u64::from(term.count)).sum()
    }

    /// Smallest total any evaluation can produce.
    #[must_use]
    pub fn minimum(&self) -> i64 {
        self.bounds().0
    }

    /// Largest total any evaluation can produce.
    #[must_use]
    pub fn maximum(&self) -> i64 {
        self.bounds().1
    }

    pub(crate) fn apply_suffixes(&self, total: i64) -> i64 {
        self.suffixes.iter().fold(total, |value, suffix| suffix.apply(value))
    }

    fn bounds(&self) -> (i64, i64) {
        let (low, high) = self
            .terms
            .iter()
            .map(DiceTerm::signed_bounds)
            .fold((0_i64, 0_i64), |(low, high), (term_low, term_high)| {
                (low.saturating_add(term_low), high.saturating_add(term_high))
            });
        // Suffix operands are nonnegative, so each operation preserves order.
        (self.apply_suffixes(low), self.apply_suffixes(high))
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, term) in self.terms.iter().enumerate() {
            if index > 0 || term.sign == Sign::Minus {
                write!(f, "{}", term.sign.symbol())?;
            }
            write!(f, "{}d{}", term.count, term.sides)?;
            if let Some(modifier) = term.modifier {
                write!(f, "{modifier}")?;
            }
        }
        for suffix in &self.suffixes {
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::compile;

    use super::*;

    #[test]
    fn test_display_is_canonical_lowercase() {
        let cases = [
            ("3d4", "3d4"),
            ("d20", "1d20"),
            ("5d4kH", "5d4kh"),
            ("4d6-1l-1", "4d6dl-1"),
            ("2d8 + 4D6 K3H X 2", "2d8+4d6k3h*2"),
            ("2d10 - 1d4 / 3", "2d10-1d4/3"),
            ("6d6d2h", "6d6d2h"),
        ];

        for (notation, canonical) in cases {
            assert_eq!(compile(notation).unwrap().to_string(), canonical, "{notation}");
        }
    }

    #[test]
    fn test_display_round_trips_through_the_parser() {
        for notation in ["4d6-1l-1", "d8+2d6k1l*3-4", "1d2+10d10dh/2", "2d6-1d6"] {
            let expression = compile(notation).unwrap();

            assert_eq!(compile(&expression.to_string()).unwrap(), expression);
        }
    }

    #[test]
    fn test_minimum_and_maximum_cover_modifiers_and_signs() {
        let expression = compile("4d6-1l-1").unwrap();
        assert_eq!((expression.minimum(), expression.maximum()), (2, 17));

        let expression = compile("2d8-1d4").unwrap();
        assert_eq!((expression.minimum(), expression.maximum()), (-2, 15));

        let expression = compile("3d6*2/4").unwrap();
        assert_eq!((expression.minimum(), expression.maximum()), (1, 9));
    }

    #[test]
    fn test_kept_counts_survivors() {
        let expression = compile("2d4+6d6d2h").unwrap();

        let kept: Vec<u32> = expression.terms().iter().map(DiceTerm::kept).collect();

        assert_eq!(kept, vec![2, 4]);
        assert_eq!(expression.dice_count(), 8);
    }

    #[test]
    fn test_suffix_arithmetic_saturates_and_truncates() {
        assert_eq!(Suffix::Multiply(2).apply(i64::MAX), i64::MAX);
        assert_eq!(Suffix::Subtract(2).apply(i64::MIN), i64::MIN);
        assert_eq!(Suffix::Divide(2).apply(-7), -3);
        assert_eq!(Suffix::Divide(2).apply(7), 3);
    }
}
