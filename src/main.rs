//! Hunt Wordle - CLI
//!
//! Scavenger-hunt word puzzles with TUI and line-based play modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hunt_wordle::{
    commands::{check_guess, run_simple},
    config::GameConfig,
    core::Word,
    game::GameStatus,
    interactive::{App, run_tui},
    output::{print_check_result, print_puzzle_list},
    puzzles::{self, DEFAULT_MAX_GUESSES},
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hunt_wordle",
    about = "Holiday scavenger-hunt word puzzles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle to play: merry (5 letters, default) or nutmeg (6 letters)
    #[arg(short, long, global = true, default_value = "merry")]
    puzzle: String,

    /// Number of guesses allowed
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Evaluate a single guess and print the feedback
    Check {
        /// The guess to evaluate
        guess: String,

        /// Compare against this word instead of the puzzle's secret
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// List the available puzzles
    Puzzles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(&cli.puzzle, cli.max_guesses, cli.log_file, cli.verbose)?;
    config.init_logging()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Check { guess, secret } => run_check_command(&config, &guess, secret.as_deref()),
        Commands::Puzzles => {
            print_puzzle_list(puzzles::all());
            Ok(())
        }
    }
}

fn run_check_command(config: &GameConfig, guess: &str, secret: Option<&str>) -> Result<()> {
    let secret = match secret {
        Some(text) => Word::new(text).context("invalid --secret word")?,
        None => config.puzzle.secret()?,
    };

    let result = check_guess(guess, &secret).context("cannot evaluate guess")?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    info!(
        "launching TUI for {} with {} guesses",
        config.puzzle.id, config.max_guesses
    );

    let app = run_tui(App::new(config)?)?;

    // Summary once the terminal is back to normal
    if app.session.status().is_over() {
        println!("{}\n", app.session.share_text(app.puzzle.title));
    }
    if app.session.status() == GameStatus::Lost
        && let Some(secret) = app.session.revealed_secret()
    {
        println!("The word was: {secret}");
    }
    Ok(())
}
