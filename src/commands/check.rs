//! Single-guess check command
//!
//! Evaluates one guess against a secret and returns the feedback.

use crate::core::{Evaluation, InvalidInputError, Word, evaluate};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Evaluate a raw guess against a secret word
///
/// # Errors
///
/// Returns an error if:
/// - The guess is empty or contains non-letters
/// - The guess length differs from the secret's
pub fn check_guess(guess: &str, secret: &Word) -> Result<CheckResult, InvalidInputError> {
    let guess = Word::new(guess.trim())?;
    let evaluation = evaluate(&guess, secret)?;
    Ok(CheckResult { guess, evaluation })
}
