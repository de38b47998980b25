//! Guess evaluation
//!
//! Classifies every letter of a guess as correct, present or absent relative
//! to the secret word, honouring repeated letters:
//! - Correct = letter in the right position
//! - Present = letter elsewhere in the word, while unclaimed occurrences remain
//! - Absent  = letter not in the word, or all its occurrences already claimed

use super::{InvalidInputError, Word};
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are ordered by strength so that `max` picks the best-known state
/// when merging results for the same letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Emoji tile for share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase tag used in plain-text output
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Ordered per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation(Vec<LetterResult>);

impl Evaluation {
    /// Per-position results, left to right
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count positions with the given result
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. Count the remaining occurrences of each letter in the secret
/// 2. First pass, left to right: exact position matches are correct and
///    consume one occurrence
/// 3. Second pass, left to right over the rest: present while occurrences
///    remain (consuming one), absent otherwise
///
/// # Errors
/// Returns `InvalidInputError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use hunt_wordle::core::{LetterResult::*, Word, evaluate};
///
/// let secret = Word::new("SPEED").unwrap();
/// let guess = Word::new("ERASE").unwrap();
/// let evaluation = evaluate(&guess, &secret).unwrap();
///
/// // No exact matches; both E's of ERASE claim the two E's of SPEED
/// assert_eq!(evaluation.results(), &[Present, Absent, Absent, Present, Present]);
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Evaluation, InvalidInputError> {
    if guess.len() != secret.len() {
        return Err(InvalidInputError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }

    let guess_letters = guess.letters();
    let secret_letters = secret.letters();
    let mut results = vec![LetterResult::Absent; guess_letters.len()];
    let mut remaining = secret.letter_counts();

    // First pass: exact position matches
    for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
        if g == s {
            results[i] = LetterResult::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position
    for (i, &g) in guess_letters.iter().enumerate() {
        if results[i] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            results[i] = LetterResult::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation(results))
}

/// Validate two raw strings and evaluate them
///
/// # Errors
/// Returns `InvalidInputError` if either string is not a valid word or the
/// lengths differ.
pub fn evaluate_str(guess: &str, secret: &str) -> Result<Evaluation, InvalidInputError> {
    evaluate(&Word::new(guess)?, &Word::new(secret)?)
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, secret: &str) -> Evaluation {
        evaluate_str(guess, secret).unwrap()
    }

    #[test]
    fn long_repeated_letter_words() {
        let word = "A".repeat(300);
        assert!(eval(&word, &word).is_win());

        let secret = format!("{}B", "A".repeat(299));
        let guess = format!("B{}", "A".repeat(299));
        let evaluation = eval(&guess, &secret);
        assert_eq!(evaluation.count(Correct), 298);
        assert_eq!(evaluation.count(Present), 2);
        assert_eq!(evaluation.results()[0], Present);
        assert_eq!(evaluation.results()[299], Present);
    }

    #[test]
    fn all_correct_on_exact_match() {
        let evaluation = eval("MERRY", "MERRY");
        assert_eq!(evaluation.results(), &[Correct; 5]);
        assert!(evaluation.is_win());
    }

    #[test]
    fn word_against_itself_always_wins() {
        for word in ["MERRY", "NUTMEG", "SPEED", "AAAAA", "Z"] {
            assert!(eval(word, word).is_win(), "{word} vs itself");
        }
    }

    #[test]
    fn all_absent() {
        let evaluation = eval("ABCDE", "FGHIJ");
        assert_eq!(evaluation.results(), &[Absent; 5]);
        assert!(!evaluation.is_win());
    }

    #[test]
    fn duplicate_letters_in_secret() {
        // SPEED has two E's, so both E's of ERASE are present
        let evaluation = eval("ERASE", "SPEED");
        assert_eq!(
            evaluation.results(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_correct_takes_priority() {
        // The second O of ROBOT is correct, so the first only gets the one left
        let evaluation = eval("ROBOT", "FLOOR");
        assert_eq!(
            evaluation.results(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_beyond_secret_count() {
        // MERRY has two R's: one claimed by the correct R, one by the leftmost
        let evaluation = eval("RRRXX", "MERRY");
        assert_eq!(
            evaluation.results(),
            &[Present, Absent, Correct, Absent, Absent]
        );
    }

    #[test]
    fn leftmost_occurrence_preferred_for_present() {
        let evaluation = eval("EEXXX", "ABCDE");
        assert_eq!(
            evaluation.results(),
            &[Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn six_letter_words() {
        let evaluation = eval("MUTTON", "NUTMEG");
        assert_eq!(
            evaluation.results(),
            &[Present, Correct, Correct, Absent, Absent, Present]
        );
    }

    #[test]
    fn lowercase_input_normalized() {
        assert!(eval("merry", "MERRY").is_win());
    }

    #[test]
    fn length_mismatch_is_error() {
        assert_eq!(
            evaluate_str("GUMBO", "NUTMEG"),
            Err(InvalidInputError::LengthMismatch {
                guess: 5,
                secret: 6
            })
        );
    }

    #[test]
    fn non_letter_input_is_error() {
        assert!(matches!(
            evaluate_str("MER1Y", "MERRY"),
            Err(InvalidInputError::InvalidCharacter { character: '1', .. })
        ));
        assert!(matches!(
            evaluate_str("MERRY", ""),
            Err(InvalidInputError::Empty)
        ));
    }

    #[test]
    fn correct_implies_same_letter() {
        let pairs = [
            ("ERASE", "SPEED"),
            ("ROBOT", "FLOOR"),
            ("MUTTON", "NUTMEG"),
            ("EMBER", "MERRY"),
        ];
        for (guess, secret) in pairs {
            let evaluation = eval(guess, secret);
            for (i, result) in evaluation.results().iter().enumerate() {
                if *result == Correct {
                    assert_eq!(guess.as_bytes()[i], secret.as_bytes()[i]);
                }
            }
        }
    }

    #[test]
    fn marked_count_never_exceeds_occurrences() {
        let secrets = ["MERRY", "SPEED", "LLAMA"];
        let guesses = ["RRRRR", "EEEEE", "ERRED", "LLLLL", "ALALA", "MAMMA"];

        for secret in secrets {
            for guess in guesses {
                let evaluation = eval(guess, secret);
                for letter in guess.bytes() {
                    let marked = guess
                        .bytes()
                        .zip(evaluation.results())
                        .filter(|&(g, &r)| g == letter && r != Absent)
                        .count();
                    let occurrences = secret.bytes().filter(|&s| s == letter).count();
                    assert!(
                        marked <= occurrences,
                        "{guess} vs {secret}: {} marked {marked} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let secret = Word::new("SPEED").unwrap();
        let guess = Word::new("ERASE").unwrap();
        let first = evaluate(&guess, &secret).unwrap();
        let second = evaluate(&guess, &secret).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn counts_and_emoji() {
        let evaluation = eval("ERASE", "SPEED");
        assert_eq!(evaluation.count(Correct), 0);
        assert_eq!(evaluation.count(Present), 3);
        assert_eq!(evaluation.count(Absent), 2);
        assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn letter_result_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
    }
}
