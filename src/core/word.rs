//! Puzzle word representation
//!
//! A Word stores an uppercase letter sequence of any non-zero length, so the
//! same type serves both the 5-letter and the 6-letter puzzle.

use super::InvalidInputError;
use rustc_hash::FxHashMap;
use std::fmt;

/// An immutable, validated sequence of uppercase letters A-Z
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// ASCII lowercase letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `InvalidInputError` if:
    /// - The string is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use hunt_wordle::core::Word;
    ///
    /// let word = Word::new("merry").unwrap();
    /// assert_eq!(word.text(), "MERRY");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("n0pe").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, InvalidInputError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(InvalidInputError::Empty);
        }

        if let Some((position, character)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            return Err(InvalidInputError::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the evaluator to account for repeated letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
