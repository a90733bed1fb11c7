//! Core domain types for the word puzzle
//!
//! This module contains the fundamental domain types with no terminal or timing concerns.
//! All types here are pure and testable.

mod feedback;
mod letter_state;
mod word;

pub use feedback::Feedback;
pub use letter_state::LetterState;
pub use word::{MAX_GUESSES, TARGET_WORD, WORD_LENGTH, Word, WordError};
