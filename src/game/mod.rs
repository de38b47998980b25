//! Round state and the presentation seam shared by both front-ends

mod presenter;
mod session;

pub use presenter::{NullPresenter, Presenter, TilePosition};
pub use session::{GameSession, GameStatus, Key, KeyOutcome, Row, SubmitOutcome};
