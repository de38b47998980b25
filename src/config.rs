//! Runtime configuration
//!
//! Resolved once from the command line in `main` and passed down.

use crate::puzzles::{self, DEFAULT_MAX_GUESSES, Puzzle};
use anyhow::{Context, Result, anyhow};
use env_logger::{Env, Target};
use log::LevelFilter;
use std::fs::File;
use std::path::PathBuf;

/// Settings for a run
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub puzzle: &'static Puzzle,
    pub max_guesses: usize,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

impl GameConfig {
    /// Build a config from raw CLI values
    ///
    /// # Errors
    /// Returns an error if the puzzle id is unknown or `max_guesses` is zero.
    pub fn new(
        puzzle_id: &str,
        max_guesses: usize,
        log_file: Option<PathBuf>,
        verbosity: u8,
    ) -> Result<Self> {
        let puzzle = puzzles::find(puzzle_id).ok_or_else(|| {
            let known: Vec<&str> = puzzles::all().iter().map(|p| p.id).collect();
            anyhow!(
                "unknown puzzle '{puzzle_id}' (available: {})",
                known.join(", ")
            )
        })?;

        if max_guesses == 0 {
            return Err(anyhow!("max guesses must be at least 1"));
        }

        Ok(Self {
            puzzle,
            max_guesses,
            log_file,
            verbosity,
        })
    }

    /// Log level implied by the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Install the global logger
    ///
    /// `RUST_LOG` takes precedence over `-v`. With a log file configured all
    /// output goes there, leaving the terminal to the game.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be created.
    pub fn init_logging(&self) -> Result<()> {
        let default_filter = self.log_level().to_string().to_lowercase();
        let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

        if let Some(path) = &self.log_file {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }

        // A logger may already be installed (tests); keep the existing one
        let _ = builder.try_init();
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            puzzle: &puzzles::MERRY,
            max_guesses: DEFAULT_MAX_GUESSES,
            log_file: None,
            verbosity: 0,
        }
    }
}
