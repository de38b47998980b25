//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::config::GameConfig;
use crate::core::LetterResult;
use crate::game::{GameSession, GameStatus, Presenter, SubmitOutcome, TilePosition};
use crate::output::formatters::tile;
use crate::output::{print_board, print_final_message, print_reward, print_share};
use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Pause between the win message and the reward stage
pub const REWARD_DELAY: Duration = Duration::from_secs(2);

/// Prints each tile as soon as it is evaluated
struct TilePrinter;

impl Presenter for TilePrinter {
    fn render(&mut self, position: TilePosition, letter: u8, result: LetterResult) {
        if position.col == 0 {
            print!("  ");
        }
        print!("{}", tile(letter, Some(result)));
        if let Err(e) = io::stdout().flush() {
            debug!("stdout flush failed: {e}");
        }
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or the puzzle secret is invalid.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    play_lines(config, stdin.lock(), REWARD_DELAY)?;
    Ok(())
}

/// Play rounds reading guesses from `input` until it ends or the player quits
///
/// Returns the last session so callers can inspect how the round ended.
///
/// # Errors
///
/// Returns an error if reading input fails or the puzzle secret is invalid.
pub fn play_lines<R: BufRead>(
    config: &GameConfig,
    mut input: R,
    reward_delay: Duration,
) -> Result<GameSession> {
    let puzzle = config.puzzle;
    let mut session = GameSession::for_puzzle(puzzle, config.max_guesses)
        .with_context(|| format!("puzzle '{}' has an invalid secret", puzzle.id))?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║{:^62}║", puzzle.title);
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("{}.", puzzle.description);
    println!("Type a {}-letter guess and press Enter.", session.word_len());
    println!("Commands: '?' to show the board, 'quit' to exit\n");
    info!("starting {} ({} letters)", puzzle.id, session.word_len());

    loop {
        while let Some(row) = session.active_row() {
            let prompt = format!("Guess {}/{}", row + 1, session.max_guesses());
            let Some(line) = read_line(&mut input, &prompt)? else {
                return Ok(session);
            };

            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(session);
                }
                "?" => {
                    print_board(&session);
                    continue;
                }
                _ => {}
            }

            if let Some(problem) = validate_guess(&line, session.word_len()) {
                println!("❌ {problem}\n");
                continue;
            }

            for c in line.chars() {
                session.push_letter(c);
            }
            match session.submit(&mut TilePrinter)? {
                SubmitOutcome::Evaluated(evaluation) => {
                    println!("   {}\n", evaluation.to_emoji());
                }
                outcome => debug!("unexpected submit outcome {outcome:?}"),
            }
        }

        match session.status() {
            GameStatus::Won { .. } => {
                let secret = session.revealed_secret().map(ToString::to_string);
                println!(
                    "{}",
                    format!(
                        "🎉 Correct! The word is {}! 🎉",
                        secret.unwrap_or_default()
                    )
                    .bright_green()
                    .bold()
                );
                println!("Loading next puzzle...");
                thread::sleep(reward_delay);

                print_reward(puzzle);
                if read_line(&mut input, "Press Enter to check the puzzle")?.is_some() {
                    print_final_message(puzzle);
                }
            }
            GameStatus::Lost => {
                let secret = session.revealed_secret().map(ToString::to_string);
                println!(
                    "{}",
                    format!("Game Over! The word was: {}", secret.unwrap_or_default())
                        .red()
                        .bold()
                );
            }
            GameStatus::InProgress => {}
        }
        print_share(&session, puzzle);

        match read_line(&mut input, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                session.reset();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(session);
            }
        }
    }
}

/// Caller-side check of a typed guess, returning a message on failure
fn validate_guess(line: &str, word_len: usize) -> Option<String> {
    if !line.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some("Use letters A-Z only".to_string());
    }
    let len = line.chars().count();
    if len != word_len {
        return Some(format!("Guess must be exactly {word_len} letters, got {len}"));
    }
    None
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
