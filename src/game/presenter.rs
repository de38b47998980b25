//! Presentation seam between the session and a front-end
//!
//! The session decides what each tile shows; the presenter decides how and
//! when it appears (colored text, timed reveal, nothing at all).

use crate::core::LetterResult;

/// Board coordinates of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePosition {
    pub row: usize,
    pub col: usize,
}

impl TilePosition {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Receives evaluated tiles, one call per tile, left to right
pub trait Presenter {
    fn render(&mut self, position: TilePosition, letter: u8, result: LetterResult);
}

/// Presenter that discards every tile
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _position: TilePosition, _letter: u8, _result: LetterResult) {}
}

/// Presenter that records every call, in order
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub tiles: Vec<(TilePosition, u8, LetterResult)>,
}

#[cfg(test)]
impl Presenter for RecordingPresenter {
    fn render(&mut self, position: TilePosition, letter: u8, result: LetterResult) {
        self.tiles.push((position, letter, result));
    }
}
