//! Keyboard classification state
//!
//! Accumulates the best classification seen for every letter across all
//! submitted guesses. A key never drops back to a lower state.

use crate::core::{Feedback, LetterState, Word};
use std::fmt;

/// Classification of every key A-Z
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [LetterState; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification of `letter` (either case); `Unset` for non-letters
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        Self::index(letter).map_or(LetterState::Unset, |i| self.keys[i])
    }

    /// Fold one evaluated guess into the key states
    pub fn merge(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            if let Some(i) = Self::index(letter) {
                self.keys[i] = self.keys[i].merged_with(state);
            }
        }
    }

    /// Letters that carry any classification, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        (b'A'..=b'Z')
            .zip(self.keys.iter())
            .filter(|(_, s)| !s.is_unset())
            .map(|(l, &s)| (char::from(l), s))
    }

    fn index(letter: u8) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| usize::from(upper - b'A'))
    }
}

/// Plain summary such as `"B:correct R:present Z:absent"`
impl fmt::Display for KeyboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, state)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}:{state}")?;
        }
        Ok(())
    }
}
