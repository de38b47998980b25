//! On-screen keyboard state
//!
//! Tracks the best-known result for every letter across all submitted
//! guesses. A letter only ever moves up: absent -> present -> correct.

use super::{Evaluation, LetterResult, Word};
use rustc_hash::FxHashMap;

/// Label of the submit key
pub const ENTER_KEY: &str = "ENTER";

/// Label of the delete key
pub const BACKSPACE_KEY: &str = "⌫";

/// QWERTY rows shown on the virtual keyboard
pub const LAYOUT: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Z", "X", "C", "V", "B", "N", "M", BACKSPACE_KEY, ENTER_KEY],
];

/// Best-known result per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterResult>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the results of one evaluated guess
    ///
    /// Guess and evaluation are zipped position by position; a stronger
    /// result replaces a weaker one, never the other way round.
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &result) in guess.letters().iter().zip(evaluation.results()) {
            self.letters
                .entry(letter)
                .and_modify(|known| *known = (*known).max(result))
                .or_insert(result);
        }
    }

    /// Best-known state of a letter, `None` if it has not been tried
    #[must_use]
    pub fn state_of(&self, letter: u8) -> Option<LetterResult> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn record(state: &mut KeyboardState, guess: &str, secret: &str) {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        let evaluation = evaluate(&guess, &secret).unwrap();
        state.record(&guess, &evaluation);
    }

    #[test]
    fn untried_letters_have_no_state() {
        let state = KeyboardState::new();
        assert_eq!(state.state_of(b'A'), None);
        assert_eq!(state, KeyboardState::default());
    }

    #[test]
    fn records_each_result() {
        let mut state = KeyboardState::new();
        record(&mut state, "MOTEL", "MERRY");

        assert_eq!(state.state_of(b'M'), Some(LetterResult::Correct));
        assert_eq!(state.state_of(b'E'), Some(LetterResult::Present));
        assert_eq!(state.state_of(b'O'), Some(LetterResult::Absent));
        assert_eq!(state.state_of(b'l'), Some(LetterResult::Absent));
        assert_eq!(state.state_of(b'Y'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut state = KeyboardState::new();
        record(&mut state, "MERIT", "MERRY");
        assert_eq!(state.state_of(b'R'), Some(LetterResult::Correct));

        // R now lands on a wrong position
        record(&mut state, "RAMEN", "MERRY");
        assert_eq!(state.state_of(b'R'), Some(LetterResult::Correct));
        assert_eq!(state.state_of(b'M'), Some(LetterResult::Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut state = KeyboardState::new();
        record(&mut state, "EMBER", "MERRY");
        assert_eq!(state.state_of(b'E'), Some(LetterResult::Present));

        record(&mut state, "BEADS", "MERRY");
        assert_eq!(state.state_of(b'E'), Some(LetterResult::Correct));
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best() {
        let mut state = KeyboardState::new();
        // Second E is absent, first E is correct
        record(&mut state, "BEEFS", "BEARS");
        assert_eq!(state.state_of(b'E'), Some(LetterResult::Correct));
    }

    #[test]
    fn layout_has_all_letters_once() {
        let letters: Vec<&str> = LAYOUT
            .iter()
            .flat_map(|row| row.iter().copied())
            .filter(|key| key.len() == 1)
            .collect();
        assert_eq!(letters.len(), 26);
    }
}
