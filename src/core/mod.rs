//! Core domain types for the puzzles
//!
//! Pure, deterministic types with no I/O: words, guess evaluation and the
//! aggregated keyboard state.

mod error;
mod evaluation;
pub mod keyboard;
mod word;

pub use error::InvalidInputError;
pub use evaluation::{Evaluation, LetterResult, evaluate, evaluate_str};
pub use keyboard::KeyboardState;
pub use word::Word;
