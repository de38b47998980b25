//! Formatting utilities for terminal output

use crate::core::{Evaluation, KeyboardState, LetterResult, Word, keyboard::LAYOUT};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " M " on green
#[must_use]
pub fn tile(letter: u8, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {} ", letter as char);
    match result {
        Some(LetterResult::Correct) => text.black().on_green().bold(),
        Some(LetterResult::Present) => text.black().on_yellow().bold(),
        Some(LetterResult::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a whole evaluated guess as colored tiles
#[must_use]
pub fn guess_tiles(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .letters()
        .iter()
        .zip(evaluation.results())
        .map(|(&letter, &result)| tile(letter, Some(result)).to_string())
        .collect()
}

/// Per-position tags, e.g. "present absent correct"
#[must_use]
pub fn evaluation_tags(evaluation: &Evaluation) -> String {
    evaluation
        .results()
        .iter()
        .map(|r| r.tag())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the virtual keyboard, one line per row, letters colored by state
#[must_use]
pub fn keyboard_lines(state: &KeyboardState) -> Vec<String> {
    LAYOUT
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .iter()
                .filter(|key| key.len() == 1)
                .map(|key| {
                    let letter = key.as_bytes()[0];
                    tile(letter, state.state_of(letter)).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}
