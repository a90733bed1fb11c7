//! The word puzzle gating the main content
//!
//! [`Puzzle`] is the state machine; [`Grid`] and [`KeyboardState`] are the
//! state it exposes for rendering; [`Effect`]s describe the deferred
//! presentation work each transition asks for.

mod effects;
mod grid;
mod key;
mod keyboard;
mod machine;

pub use effects::{Effect, Scheduled};
pub use grid::{Grid, Row, Tile};
pub use key::Key;
pub use keyboard::KeyboardState;
pub use machine::{INCOMPLETE_MESSAGE, Phase, Puzzle, PuzzleError, Submission};
