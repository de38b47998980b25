//! Game session state
//!
//! One round of a puzzle: the board rows submitted so far, the guess being
//! typed, the keyboard summary and the round status. The front-end owns the
//! session and feeds it keys; nothing here touches the terminal.

use super::presenter::{Presenter, TilePosition};
use crate::core::{Evaluation, InvalidInputError, KeyboardState, Word, evaluate, keyboard};
use crate::puzzles::Puzzle;
use log::{debug, info};

/// A key press, from either the physical or the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Map an on-screen keyboard label to a key
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            keyboard::ENTER_KEY => Some(Self::Enter),
            keyboard::BACKSPACE_KEY => Some(Self::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { guesses: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Result of pressing Enter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer letters than the word length; nothing happened
    Incomplete,
    /// The round is already over; nothing happened
    Finished,
    Evaluated(Evaluation),
}

/// Result of handling a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Changed,
    Ignored,
    Submitted(SubmitOutcome),
}

/// State of one round
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    max_guesses: usize,
    rows: Vec<Row>,
    current: String,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl GameSession {
    /// Start a round against `secret` with `max_guesses` rows
    #[must_use]
    pub fn new(secret: Word, max_guesses: usize) -> Self {
        Self {
            secret,
            max_guesses,
            rows: Vec::with_capacity(max_guesses),
            current: String::new(),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a round of a static puzzle
    ///
    /// # Errors
    /// Returns `InvalidInputError` if the puzzle's secret is malformed.
    pub fn for_puzzle(puzzle: &Puzzle, max_guesses: usize) -> Result<Self, InvalidInputError> {
        Ok(Self::new(puzzle.secret()?, max_guesses))
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Only revealed once the round is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.secret)
    }

    /// Index of the row being typed, if any rows remain
    #[must_use]
    pub fn active_row(&self) -> Option<usize> {
        (!self.status.is_over() && self.rows.len() < self.max_guesses).then_some(self.rows.len())
    }

    /// Append a letter if the row has room
    ///
    /// Returns false for non-letters, a full row or a finished round.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.status.is_over()
            || !letter.is_ascii_alphabetic()
            || self.current.len() >= self.word_len()
        {
            return false;
        }
        self.current.push(letter.to_ascii_uppercase());
        true
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) -> bool {
        !self.status.is_over() && self.current.pop().is_some()
    }

    /// Dispatch one key press
    ///
    /// # Errors
    /// Propagates `InvalidInputError` from `submit`.
    pub fn handle_key(
        &mut self,
        key: Key,
        presenter: &mut impl Presenter,
    ) -> Result<KeyOutcome, InvalidInputError> {
        let changed = match key {
            Key::Letter(c) => self.push_letter(c),
            Key::Backspace => self.pop_letter(),
            Key::Enter => return Ok(KeyOutcome::Submitted(self.submit(presenter)?)),
        };
        Ok(if changed {
            KeyOutcome::Changed
        } else {
            KeyOutcome::Ignored
        })
    }

    /// Evaluate the current row
    ///
    /// Incomplete rows and finished rounds are left untouched. Otherwise the
    /// row is recorded, the keyboard updated and every tile handed to the
    /// presenter from left to right.
    ///
    /// # Errors
    /// Returns `InvalidInputError` if the typed row cannot form a valid word.
    /// Rows are built from letters only and capped at the word length, so
    /// this indicates a bug in the caller.
    pub fn submit(
        &mut self,
        presenter: &mut impl Presenter,
    ) -> Result<SubmitOutcome, InvalidInputError> {
        if self.status.is_over() {
            return Ok(SubmitOutcome::Finished);
        }
        if self.current.len() < self.word_len() {
            debug!(
                "ignoring incomplete guess {:?} ({}/{})",
                self.current,
                self.current.len(),
                self.word_len()
            );
            return Ok(SubmitOutcome::Incomplete);
        }

        let guess = Word::new(&self.current)?;
        let evaluation = evaluate(&guess, &self.secret)?;
        let row = self.rows.len();

        for (col, (&letter, &result)) in guess
            .letters()
            .iter()
            .zip(evaluation.results())
            .enumerate()
        {
            presenter.render(TilePosition::new(row, col), letter, result);
        }

        self.keyboard.record(&guess, &evaluation);
        debug!("guess {} -> {}", guess, evaluation.to_emoji());

        self.rows.push(Row {
            guess,
            evaluation: evaluation.clone(),
        });
        self.current.clear();

        if evaluation.is_win() {
            self.status = GameStatus::Won {
                guesses: self.rows.len(),
            };
            info!("solved in {}/{}", self.rows.len(), self.max_guesses);
        } else if self.rows.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
            info!("out of guesses after {} rows", self.rows.len());
        }

        Ok(SubmitOutcome::Evaluated(evaluation))
    }

    /// Start the same puzzle over
    pub fn reset(&mut self) {
        self.rows.clear();
        self.current.clear();
        self.keyboard.clear();
        self.status = GameStatus::InProgress;
    }

    /// Spoiler-free summary: a header line and one emoji row per guess
    ///
    /// # Examples
    /// ```
    /// use hunt_wordle::core::Word;
    /// use hunt_wordle::game::{GameSession, NullPresenter};
    ///
    /// let mut session = GameSession::new(Word::new("MERRY").unwrap(), 6);
    /// for c in "MERRY".chars() {
    ///     session.push_letter(c);
    /// }
    /// session.submit(&mut NullPresenter).unwrap();
    ///
    /// assert_eq!(session.share_text("Christmas Wordle"), "Christmas Wordle 1/6\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self, title: &str) -> String {
        let score = match self.status {
            GameStatus::Won { guesses } => guesses.to_string(),
            GameStatus::Lost => "X".to_string(),
            GameStatus::InProgress => "-".to_string(),
        };

        let mut text = format!("{title} {score}/{}", self.max_guesses);
        for row in &self.rows {
            text.push('\n');
            text.push_str(&row.evaluation.to_emoji());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult;
    use crate::game::presenter::{NullPresenter, RecordingPresenter};
    use crate::puzzles::{MERRY, NUTMEG};

    fn type_word(session: &mut GameSession, word: &str) {
        for c in word.chars() {
            session.push_letter(c);
        }
    }

    fn guess(session: &mut GameSession, word: &str) -> SubmitOutcome {
        type_word(session, word);
        session.submit(&mut NullPresenter).unwrap()
    }

    fn merry() -> GameSession {
        GameSession::for_puzzle(&MERRY, 6).unwrap()
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let mut session = merry();
        type_word(&mut session, "abcdefg");
        assert_eq!(session.current(), "ABCDE");
        assert!(!session.push_letter('x'));
    }

    #[test]
    fn non_letters_ignored() {
        let mut session = merry();
        assert!(!session.push_letter('1'));
        assert!(!session.push_letter(' '));
        assert_eq!(session.current(), "");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut session = merry();
        type_word(&mut session, "MER");
        assert!(session.pop_letter());
        assert_eq!(session.current(), "ME");

        let mut empty = merry();
        assert!(!empty.pop_letter());
    }

    #[test]
    fn incomplete_submit_is_noop() {
        let mut session = merry();
        assert_eq!(guess(&mut session, "MER"), SubmitOutcome::Incomplete);
        assert!(session.rows().is_empty());
        assert_eq!(session.current(), "MER");
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn winning_guess() {
        let mut session = merry();
        guess(&mut session, "HOLLY");
        let outcome = guess(&mut session, "merry");

        assert!(matches!(outcome, SubmitOutcome::Evaluated(ref e) if e.is_win()));
        assert_eq!(session.status(), GameStatus::Won { guesses: 2 });
        assert_eq!(session.revealed_secret().map(Word::text), Some("MERRY"));
        assert_eq!(session.active_row(), None);
    }

    #[test]
    fn losing_after_max_guesses() {
        let mut session = GameSession::for_puzzle(&MERRY, 2).unwrap();
        guess(&mut session, "HOLLY");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.revealed_secret(), None);

        guess(&mut session, "BELLS");
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(session.revealed_secret().is_some());
    }

    #[test]
    fn finished_round_ignores_input() {
        let mut session = merry();
        guess(&mut session, "MERRY");
        assert!(!session.push_letter('A'));
        assert_eq!(guess(&mut session, "HOLLY"), SubmitOutcome::Finished);
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn presenter_sees_each_tile_in_order() {
        let mut session = merry();
        type_word(&mut session, "EMBER");
        let mut presenter = RecordingPresenter::default();
        session.submit(&mut presenter).unwrap();

        let cols: Vec<usize> = presenter.tiles.iter().map(|(p, _, _)| p.col).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        assert!(presenter.tiles.iter().all(|(p, _, _)| p.row == 0));
        assert_eq!(presenter.tiles[0].1, b'E');
        assert_eq!(presenter.tiles[0].2, LetterResult::Present);
        assert_eq!(presenter.tiles[2].2, LetterResult::Absent);
    }

    #[test]
    fn keyboard_updated_on_submit() {
        let mut session = merry();
        guess(&mut session, "MOTEL");
        assert_eq!(
            session.keyboard().state_of(b'M'),
            Some(LetterResult::Correct)
        );
        assert_eq!(session.keyboard().state_of(b'O'), Some(LetterResult::Absent));
    }

    #[test]
    fn handle_key_dispatch() {
        let mut session = merry();
        let mut presenter = NullPresenter;
        for c in "MERR".chars() {
            assert_eq!(
                session.handle_key(Key::Letter(c), &mut presenter).unwrap(),
                KeyOutcome::Changed
            );
        }
        assert_eq!(
            session.handle_key(Key::Enter, &mut presenter).unwrap(),
            KeyOutcome::Submitted(SubmitOutcome::Incomplete)
        );
        session.handle_key(Key::Letter('y'), &mut presenter).unwrap();
        assert_eq!(
            session.handle_key(Key::Letter('z'), &mut presenter).unwrap(),
            KeyOutcome::Ignored
        );
        let outcome = session.handle_key(Key::Enter, &mut presenter).unwrap();
        assert!(matches!(
            outcome,
            KeyOutcome::Submitted(SubmitOutcome::Evaluated(_))
        ));
    }

    #[test]
    fn six_letter_puzzle() {
        let mut session = GameSession::for_puzzle(&NUTMEG, 6).unwrap();
        type_word(&mut session, "MUTTONS");
        assert_eq!(session.current(), "MUTTON");
        guess(&mut session, "");
        assert_eq!(session.rows().len(), 1);
        assert_eq!(session.rows()[0].evaluation.len(), 6);
    }

    #[test]
    fn share_text_for_loss() {
        let mut session = GameSession::for_puzzle(&MERRY, 1).unwrap();
        guess(&mut session, "EMBER");
        assert_eq!(session.share_text("Christmas Wordle"), "Christmas Wordle X/1\n🟨🟨⬜⬜🟨");
    }

    #[test]
    fn reset_starts_over() {
        let mut session = merry();
        guess(&mut session, "MERRY");
        session.reset();
        assert!(session.rows().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.keyboard().state_of(b'M'), None);
        assert_eq!(session.active_row(), Some(0));
    }

    #[test]
    fn key_from_label() {
        assert_eq!(Key::from_label("ENTER"), Some(Key::Enter));
        assert_eq!(Key::from_label("⌫"), Some(Key::Backspace));
        assert_eq!(Key::from_label("Q"), Some(Key::Letter('Q')));
        assert_eq!(Key::from_label("QQ"), None);
        assert_eq!(Key::from_label("1"), None);
    }
}
