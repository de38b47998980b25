//! Scavenger-hunt puzzles
//!
//! Two independent static puzzles compiled into the binary. They share the
//! game machinery but keep their own secret word, length and reward.

mod reward;

pub use reward::Reward;

use crate::core::{InvalidInputError, Word};

/// Guesses allowed per round unless overridden
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// A static word puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    secret: &'static str,
    pub reward: Reward,
}

impl Puzzle {
    /// The secret word as a validated `Word`
    ///
    /// # Errors
    /// Returns `InvalidInputError` if the compiled-in secret is malformed.
    pub fn secret(&self) -> Result<Word, InvalidInputError> {
        Word::new(self.secret)
    }

    /// Number of letters per guess
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.secret.len()
    }
}

/// The 5-letter Christmas puzzle
pub const MERRY: Puzzle = Puzzle {
    id: "merry",
    title: "Christmas Wordle",
    description: "Guess the 5-letter Christmas word",
    secret: "MERRY",
    reward: Reward {
        title: "QR Puzzle",
        pieces: 8,
        final_message: &[
            "🎁 Congratulations! 🎁",
            "The QR code reveals: https://bit.ly/SecretSantaGiftList",
        ],
    },
};

/// The 6-letter spice puzzle
pub const NUTMEG: Puzzle = Puzzle {
    id: "nutmeg",
    title: "Spice Cabinet Wordle",
    description: "Guess the 6-letter festive spice",
    secret: "NUTMEG",
    reward: Reward {
        title: "Clue Puzzle",
        pieces: 8,
        final_message: &[
            "🎄 Well done! 🎄",
            "Your next clue is hidden behind the gingerbread house.",
        ],
    },
};

static PUZZLES: [Puzzle; 2] = [MERRY, NUTMEG];

/// All puzzles, in menu order
#[must_use]
pub fn all() -> &'static [Puzzle] {
    &PUZZLES
}

/// Look up a puzzle by id (case-insensitive)
#[must_use]
pub fn find(id: &str) -> Option<&'static Puzzle> {
    all().iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_valid_words() {
        for puzzle in all() {
            let secret = puzzle.secret().unwrap();
            assert_eq!(secret.len(), puzzle.word_len(), "{}", puzzle.id);
        }
    }

    #[test]
    fn word_lengths_differ() {
        assert_eq!(MERRY.word_len(), 5);
        assert_eq!(NUTMEG.word_len(), 6);
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("merry").map(|p| p.id), Some("merry"));
        assert_eq!(find("NUTMEG").map(|p| p.id), Some("nutmeg"));
        assert!(find("holly").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let ids: std::collections::HashSet<_> = all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all().len());
    }
}
