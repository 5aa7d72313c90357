//! Dice notation parser.
//!
//! A hand-written recursive-descent parser over bytes. Positions in errors
//! are byte offsets into the original notation.

use std::str::FromStr;

use randforge_core::error::RandomError;
use tracing::debug;

use crate::expression::{DiceExpression, DiceTerm, Modifier, Sign, Suffix};

/// Compiles dice notation into a reusable expression.
///
/// # Errors
///
/// Returns `RandomError::Parse` if the notation is empty, does not match the
/// grammar, names a die with fewer than two sides or a term with no dice,
/// uses a keep/drop count outside `1..count`, places a modifier anywhere but
/// the final term, adds dice after an arithmetic suffix, divides by zero, or
/// contains a number too large to represent.
pub fn compile(notation: &str) -> Result<DiceExpression, RandomError> {
    let expression = Parser::new(notation).expression()?;
    debug!(
        notation,
        canonical = %expression,
        terms = expression.terms.len(),
        suffixes = expression.suffixes.len(),
        "compiled dice notation"
    );
    Ok(expression)
}

impl FromStr for DiceExpression {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(notation: &'a str) -> Self {
        Self {
            bytes: notation.as_bytes(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        self.pos = self.whitespace_end(self.pos);
    }

    fn whitespace_end(&self, mut at: usize) -> usize {
        while self.bytes.get(at).is_some_and(u8::is_ascii_whitespace) {
            at += 1;
        }
        at
    }

    fn digits_end(&self, mut at: usize) -> usize {
        while self.bytes.get(at).is_some_and(u8::is_ascii_digit) {
            at += 1;
        }
        at
    }

    /// The lowercased byte at `at`, if any.
    fn byte_at(&self, at: usize) -> Option<u8> {
        self.bytes.get(at).map(u8::to_ascii_lowercase)
    }

    fn peek(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    fn error(&self, message: impl Into<String>) -> RandomError {
        RandomError::parse(self.pos, message)
    }

    fn unexpected(&self) -> RandomError {
        match self.bytes.get(self.pos) {
            Some(&byte) if byte.is_ascii_graphic() => {
                self.error(format!("unexpected character '{}'", char::from(byte)))
            }
            Some(_) => self.error("unexpected character"),
            None => self.error("unexpected end of notation"),
        }
    }

    /// Reads an unsigned decimal number at the cursor, if one starts there.
    fn number(&mut self) -> Result<Option<u64>, RandomError> {
        let start = self.pos;
        let end = self.digits_end(start);
        if end == start {
            return Ok(None);
        }
        let mut value: u64 = 0;
        for &digit in &self.bytes[start..end] {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit - b'0')))
                .ok_or_else(|| RandomError::parse(start, "number is too large"))?;
        }
        self.pos = end;
        Ok(Some(value))
    }

    fn small_number(&mut self) -> Result<Option<u32>, RandomError> {
        let start = self.pos;
        self.number()?
            .map(|value| u32::try_from(value).map_err(|_| RandomError::parse(start, "number is too large")))
            .transpose()
    }

    /// Whether a dice term starts at the cursor: optional digits, then `d`.
    fn at_term(&self) -> bool {
        let after_count = self.whitespace_end(self.digits_end(self.pos));
        self.byte_at(after_count) == Some(b'd')
    }

    /// Whether a `-` at the cursor opens a drop modifier rather than a
    /// subtraction: `-`, optional digits, then `h` or `l`.
    fn at_dash_modifier(&self) -> bool {
        if self.peek() != Some(b'-') {
            return false;
        }
        let after_dash = self.whitespace_end(self.pos + 1);
        let after_count = self.whitespace_end(self.digits_end(after_dash));
        matches!(self.byte_at(after_count), Some(b'h' | b'l'))
    }

    fn expression(mut self) -> Result<DiceExpression, RandomError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(self.error("empty dice notation"));
        }
        let mut terms = vec![self.term(Sign::Plus)?];
        let mut suffixes = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(op) = self.peek() else {
                break;
            };
            let op_pos = self.pos;
            match op {
                b'+' | b'-' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let sign = if op == b'+' { Sign::Plus } else { Sign::Minus };
                    if self.at_term() {
                        if !suffixes.is_empty() {
                            return Err(RandomError::parse(
                                op_pos,
                                "dice terms cannot follow an arithmetic suffix",
                            ));
                        }
                        if terms.last().is_some_and(|term: &DiceTerm| term.modifier.is_some()) {
                            return Err(RandomError::parse(
                                op_pos,
                                "a keep/drop modifier is only allowed on the final dice term",
                            ));
                        }
                        terms.push(self.term(sign)?);
                    } else {
                        let operand = self.suffix_operand()?;
                        suffixes.push(match sign {
                            Sign::Plus => Suffix::Add(operand),
                            Sign::Minus => Suffix::Subtract(operand),
                        });
                    }
                }
                b'*' | b'x' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    suffixes.push(Suffix::Multiply(self.suffix_operand()?));
                }
                b'/' => {
                    self.pos += 1;
                    self.skip_whitespace();
                    let operand_pos = self.pos;
                    let operand = self.suffix_operand()?;
                    if operand == 0 {
                        return Err(RandomError::parse(operand_pos, "division by zero"));
                    }
                    suffixes.push(Suffix::Divide(operand));
                }
                b'k' | b'd' => {
                    return Err(self.error("only one keep/drop modifier is allowed"));
                }
                _ => return Err(self.unexpected()),
            }
        }

        Ok(DiceExpression { terms, suffixes })
    }

    fn term(&mut self, sign: Sign) -> Result<DiceTerm, RandomError> {
        let count_pos = self.pos;
        let count = self.small_number()?.unwrap_or(1);
        if count == 0 {
            return Err(RandomError::parse(count_pos, "a dice term needs at least one die"));
        }
        self.skip_whitespace();
        if self.peek() != Some(b'd') {
            return Err(self.error("expected 'd'"));
        }
        self.pos += 1;
        self.skip_whitespace();
        let sides_pos = self.pos;
        let Some(sides) = self.small_number()? else {
            return Err(self.error("expected the number of sides"));
        };
        if sides < 2 {
            return Err(RandomError::parse(sides_pos, "dice need at least 2 sides"));
        }
        let modifier = self.modifier(count)?;
        Ok(DiceTerm {
            sign,
            count,
            sides,
            modifier,
        })
    }

    fn modifier(&mut self, count: u32) -> Result<Option<Modifier>, RandomError> {
        let resume = self.pos;
        self.skip_whitespace();
        let keep = match self.peek() {
            Some(b'k') => true,
            Some(b'd') => false,
            Some(b'-') if self.at_dash_modifier() => false,
            _ => {
                self.pos = resume;
                return Ok(None);
            }
        };
        let modifier_pos = self.pos;
        self.pos += 1;
        self.skip_whitespace();
        let n = self.small_number()?.unwrap_or(1);
        self.skip_whitespace();
        let highest = match self.peek() {
            Some(b'h') => true,
            Some(b'l') => false,
            _ => return Err(self.error("expected 'h' or 'l' to finish the keep/drop modifier")),
        };
        self.pos += 1;
        if n == 0 || n >= count {
            return Err(RandomError::parse(
                modifier_pos,
                format!("keep/drop count {n} must be at least 1 and below the dice count {count}"),
            ));
        }
        Ok(Some(match (keep, highest) {
            (true, true) => Modifier::KeepHighest(n),
            (true, false) => Modifier::KeepLowest(n),
            (false, true) => Modifier::DropHighest(n),
            (false, false) => Modifier::DropLowest(n),
        }))
    }

    fn suffix_operand(&mut self) -> Result<i64, RandomError> {
        let start = self.pos;
        let Some(value) = self.number()? else {
            return Err(self.error("expected a number"));
        };
        i64::try_from(value).map_err(|_| RandomError::parse(start, "number is too large"))
    }
}
