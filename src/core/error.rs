//! Input validation errors
//!
//! Malformed words and mismatched lengths are caller bugs. They are reported
//! to the caller and never recovered from inside the evaluator.

use thiserror::Error;

/// Error returned when a word or a guess/secret pair is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("word must contain at least one letter")]
    Empty,

    #[error("invalid character {character:?} at position {position}; only letters A-Z are allowed")]
    InvalidCharacter { character: char, position: usize },

    #[error("guess has {guess} letters but the secret word has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}
