//! Error types.

use thiserror::Error;

/// Contract violations reported by engines, samplers and the dice compiler.
///
/// None of these are transient: each reflects a caller passing arguments
/// outside an operation's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// An argument was outside the operation's domain (empty range, zero
    /// total weight, empty collection, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Dice notation did not match the grammar.
    #[error("parse error at position {position}: {message}")]
    Parse {
        /// Byte offset into the notation where parsing failed.
        position: usize,
        /// What was expected or violated.
        message: String,
    },

    /// A destination sequence was too short to hold the source.
    #[error("capacity error: {required} elements required but destination holds {available}")]
    Capacity {
        /// Number of elements that must fit.
        required: usize,
        /// Number of elements the destination can hold.
        available: usize,
    },
}

impl RandomError {
    /// Shorthand for [`RandomError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for [`RandomError::Parse`].
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}
