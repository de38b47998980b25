//! Reward shown after a puzzle is solved

/// Directory the QR piece images are served from
pub const PIECE_DIR: &str = "qr-pieces";

/// Reward stage content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub title: &'static str,
    pub pieces: u8,
    pub final_message: &'static [&'static str],
}

impl Reward {
    /// Asset paths of the puzzle pieces, numbered from 1
    ///
    /// # Examples
    /// ```
    /// use hunt_wordle::puzzles::MERRY;
    ///
    /// let pieces = MERRY.reward.piece_assets();
    /// assert_eq!(pieces[0], "qr-pieces/piece1.png");
    /// ```
    #[must_use]
    pub fn piece_assets(&self) -> Vec<String> {
        (1..=self.pieces)
            .map(|i| format!("{PIECE_DIR}/piece{i}.png"))
            .collect()
    }
}
