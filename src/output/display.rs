//! Display functions for command results

use super::formatters::{evaluation_tags, guess_tiles, keyboard_lines};
use crate::commands::CheckResult;
use crate::core::LetterResult;
use crate::game::GameSession;
use crate::puzzles::Puzzle;
use colored::Colorize;

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}  ({} letters)",
        result.guess.text().bright_yellow().bold(),
        result.guess.len()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_tiles(&result.guess, &result.evaluation));
    println!("  {}", result.evaluation.to_emoji());
    println!("  {}", evaluation_tags(&result.evaluation).bright_black());

    println!();
    if result.evaluation.is_win() {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!(
            "{} correct, {} present",
            result.evaluation.count(LetterResult::Correct),
            result.evaluation.count(LetterResult::Present)
        );
    }
}

/// Print the available puzzles
pub fn print_puzzle_list(puzzles: &[Puzzle]) {
    println!("\n{}", "Available puzzles:".bright_cyan().bold());
    for puzzle in puzzles {
        println!(
            "  {:<8} {} letters  {}",
            puzzle.id.bright_yellow(),
            puzzle.word_len(),
            puzzle.description
        );
    }
    println!();
}

/// Print the board and keyboard of a session
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows() {
        println!("  {}", guess_tiles(&row.guess, &row.evaluation));
    }
    println!();
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the reward stage with its piece placeholders
pub fn print_reward(puzzle: &Puzzle) {
    let reward = &puzzle.reward;
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", reward.title.bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    for (i, asset) in reward.piece_assets().iter().enumerate() {
        println!("  🧩 Piece {}: {}", i + 1, asset.bright_black());
    }
    println!();
}

/// Print the message revealed once the reward puzzle is checked
pub fn print_final_message(puzzle: &Puzzle) {
    println!();
    for line in puzzle.reward.final_message {
        println!("  {}", line.bright_green().bold());
    }
    println!();
}

/// Print the shareable summary of a finished round
pub fn print_share(session: &GameSession, puzzle: &Puzzle) {
    println!("{}", "Share your result:".bright_cyan());
    println!("{}\n", session.share_text(puzzle.title));
}
