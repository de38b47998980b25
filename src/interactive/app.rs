//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::LetterResult;
use crate::game::{GameSession, GameStatus, Key, KeyOutcome, Presenter, SubmitOutcome, TilePosition};
use crate::puzzles::Puzzle;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// Event poll timeout; one pending tile is revealed per tick
pub const TICK: Duration = Duration::from_millis(150);

/// Pause between the win message and the reward screen
pub const REWARD_DELAY: Duration = Duration::from_secs(2);

/// Staggered tile reveal
///
/// Tiles arrive from the session all at once and are uncovered one per tick.
#[derive(Debug, Default)]
pub struct RevealQueue {
    pending: VecDeque<TilePosition>,
    revealed: FxHashSet<TilePosition>,
}

impl RevealQueue {
    /// Uncover the next pending tile; returns false if none was waiting
    pub fn tick(&mut self) -> bool {
        match self.pending.pop_front() {
            Some(position) => {
                self.revealed.insert(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, position: TilePosition) -> bool {
        self.revealed.contains(&position)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Uncover everything still pending
    pub fn flush(&mut self) {
        while self.tick() {}
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.revealed.clear();
    }
}

impl Presenter for RevealQueue {
    fn render(&mut self, position: TilePosition, _letter: u8, _result: LetterResult) {
        self.pending.push_back(position);
    }
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Board,
    Reward { checked: bool },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub puzzle: &'static Puzzle,
    pub session: GameSession,
    pub reveals: RevealQueue,
    pub screen: Screen,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    won_at: Option<Instant>,
}

impl App {
    /// Build the app for the configured puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle's secret is malformed.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let puzzle = config.puzzle;
        let session = GameSession::for_puzzle(puzzle, config.max_guesses)
            .with_context(|| format!("puzzle '{}' has an invalid secret", puzzle.id))?;
        let word_len = session.word_len();

        let mut app = Self {
            puzzle,
            session,
            reveals: RevealQueue::default(),
            screen: Screen::Board,
            messages: Vec::new(),
            should_quit: false,
            won_at: None,
        };
        app.add_message(
            &format!("{} ({word_len} letters)", puzzle.description),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error if the session rejects a submitted row.
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Reward { checked: false } if code == KeyCode::Enter => {
                self.screen = Screen::Reward { checked: true };
                info!("reward checked for {}", self.puzzle.id);
            }
            Screen::Reward { .. } => {}
            Screen::Board if modifiers.contains(KeyModifiers::CONTROL) => {}
            Screen::Board => self.on_board_key(code)?,
        }
        Ok(())
    }

    fn on_board_key(&mut self, code: KeyCode) -> Result<()> {
        let key = match code {
            KeyCode::Char(c) => Key::Letter(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            _ => return Ok(()),
        };
        self.on_board_input(key)
    }

    /// Handle a click on an on-screen keyboard label
    ///
    /// # Errors
    ///
    /// Returns an error if the session rejects a submitted row.
    pub fn on_click(&mut self, label: &str) -> Result<()> {
        if self.screen != Screen::Board {
            return Ok(());
        }
        match Key::from_label(label) {
            Some(key) => self.on_board_input(key),
            None => Ok(()),
        }
    }

    fn on_board_input(&mut self, key: Key) -> Result<()> {
        if self.session.status() == GameStatus::Lost && key == Key::Enter {
            self.new_game();
            return Ok(());
        }

        match self.session.handle_key(key, &mut self.reveals)? {
            KeyOutcome::Submitted(SubmitOutcome::Incomplete) => {
                self.add_message(
                    &format!("Not enough letters ({} needed)", self.session.word_len()),
                    MessageStyle::Error,
                );
            }
            KeyOutcome::Submitted(SubmitOutcome::Evaluated(_)) => self.after_guess(),
            KeyOutcome::Submitted(SubmitOutcome::Finished)
            | KeyOutcome::Changed
            | KeyOutcome::Ignored => {}
        }
        Ok(())
    }

    fn after_guess(&mut self) {
        let secret = self
            .session
            .revealed_secret()
            .map(ToString::to_string)
            .unwrap_or_default();

        match self.session.status() {
            GameStatus::Won { guesses } => {
                self.won_at = Some(Instant::now());
                self.add_message(
                    &format!("🎉 Correct! The word is {secret}! 🎉"),
                    MessageStyle::Success,
                );
                self.add_message("Loading next puzzle...", MessageStyle::Info);
                debug!("won in {guesses}, reward in {REWARD_DELAY:?}");
            }
            GameStatus::Lost => {
                self.add_message(
                    &format!("Game Over! The word was: {secret}"),
                    MessageStyle::Error,
                );
                self.add_message("Press Enter to try again.", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    /// Advance timers: tile reveals, then the delayed reward screen
    pub fn on_tick(&mut self, now: Instant) {
        self.reveals.tick();

        if self.screen == Screen::Board
            && self.reveals.is_idle()
            && let Some(won_at) = self.won_at
            && now.duration_since(won_at) >= REWARD_DELAY
        {
            self.screen = Screen::Reward { checked: false };
            self.add_message("Press Enter to check the puzzle", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.reveals.clear();
        self.screen = Screen::Board;
        self.won_at = None;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the final app state so the caller can print a summary after the
/// terminal is restored.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<App> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key.code, key.modifiers)?;
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    if let Some(label) = super::rendering::key_at(frame, column, row) {
                        debug!("clicked {label}");
                        app.on_click(label)?;
                    }
                }
                _ => {}
            }
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
