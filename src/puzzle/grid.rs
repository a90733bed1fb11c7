//! Grid of letter tiles
//!
//! The grid is the single source of truth for entered letters and their
//! classifications; rendering only ever reads from it.

use crate::core::{Feedback, LetterState, MAX_GUESSES, WORD_LENGTH, Word};

/// One letter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<u8>,
    pub state: LetterState,
}

impl Tile {
    /// Letter as a displayable char
    #[must_use]
    pub fn letter_char(&self) -> Option<char> {
        self.letter.map(char::from)
    }
}

pub type Row = [Tile; WORD_LENGTH];

/// `MAX_GUESSES` rows of `WORD_LENGTH` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Row; MAX_GUESSES],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: [[Tile::default(); WORD_LENGTH]; MAX_GUESSES],
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// # Panics
    /// Panics if `row >= MAX_GUESSES`
    #[must_use]
    pub fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    /// # Panics
    /// Panics if either index is out of range
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.rows[row][col]
    }

    pub(crate) fn set_letter(&mut self, row: usize, col: usize, letter: u8) {
        self.rows[row][col].letter = Some(letter);
    }

    pub(crate) fn clear_letter(&mut self, row: usize, col: usize) {
        self.rows[row][col].letter = None;
    }

    /// The row's letters as a word, if every tile is filled
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(&self.rows[row]) {
            *slot = tile.letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// Assign classifications to a submitted row
    ///
    /// Classifications are written once; a row that already carries feedback
    /// is left untouched.
    pub(crate) fn apply_feedback(&mut self, row: usize, feedback: &Feedback) {
        let tiles = &mut self.rows[row];
        if tiles.iter().any(|t| !t.state.is_unset()) {
            return;
        }
        for (tile, &state) in tiles.iter_mut().zip(feedback.states()) {
            tile.state = state;
        }
    }
}
