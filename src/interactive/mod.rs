//! Interactive TUI interface

mod app;
pub mod input;
pub mod layout;
mod rendering;

pub use app::{App, Message, PuzzleView, run_tui};
pub use rendering::state_color;
