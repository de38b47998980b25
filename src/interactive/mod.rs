//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, RevealQueue, Screen, run_tui};
