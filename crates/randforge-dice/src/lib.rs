//! Randforge Dice — compiles dice notation such as `4d6-1l-1` or `2d8+1d4*2`
//! into an immutable [`DiceExpression`] that can be evaluated any number of
//! times against an engine.
//!
//! ```text
//! dice     := term (('+' | '-') term)* suffix*
//! term     := count? 'd' sides modifier?
//! modifier := ('k' | 'd' | '-') count? ('h' | 'l')
//! suffix   := ('+' | '-' | '*' | 'x' | '/') number
//! ```
//!
//! Letters are case-insensitive and whitespace may separate any two tokens.

pub mod expression;
pub mod parser;
pub mod roll;

pub use expression::{DiceExpression, DiceTerm, Modifier, Sign, Suffix};
pub use parser::compile;
pub use roll::{DiceRoll, DieRoll, TermRoll};
