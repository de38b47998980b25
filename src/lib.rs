//! Hunt Wordle
//!
//! Word-guessing puzzles for a holiday scavenger hunt: guess the secret word,
//! unlock the reward.
//!
//! # Quick Start
//!
//! ```rust
//! use hunt_wordle::core::{LetterResult, Word, evaluate};
//!
//! let secret = Word::new("MERRY").unwrap();
//! let guess = Word::new("EMBER").unwrap();
//!
//! let evaluation = evaluate(&guess, &secret).unwrap();
//! assert_eq!(evaluation.results()[0], LetterResult::Present);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round state and presentation seam
pub mod game;

// Static puzzle variants
pub mod puzzles;

// Runtime configuration and logging
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
