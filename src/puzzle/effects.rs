//! Deferred presentation effects
//!
//! The puzzle never owns a timer. Every transition returns the effects the
//! host should run, each with a delay relative to the moment of the
//! transition; the host executes them in delay order.

use super::KeyboardState;
use std::time::Duration;

/// Something the presentation layer should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the classification of one tile
    RevealTile { row: usize, col: usize },
    /// Recolor the on-screen keyboard to this snapshot
    RevealKeyboard(KeyboardState),
    /// Feedback animation finished; the puzzle accepts input again
    Settle,
    /// Transient message
    ShowMessage { text: String, duration: Duration },
    /// Shake a row
    Shake { row: usize, duration: Duration },
    /// Bounce one tile of the winning row
    Celebrate { row: usize, col: usize },
    /// Leave the puzzle for the main content; carries the answer on a loss
    RevealMainContent { disclosed: Option<String> },
    /// Welcome fade finished; show a fresh puzzle
    EnterPuzzle,
}

/// An effect with its delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub effect: Effect,
}

impl Scheduled {
    #[must_use]
    pub const fn now(effect: Effect) -> Self {
        Self {
            delay: Duration::ZERO,
            effect,
        }
    }

    #[must_use]
    pub const fn after(delay: Duration, effect: Effect) -> Self {
        Self { delay, effect }
    }
}
