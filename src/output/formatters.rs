//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Word};
use crate::puzzle::KeyboardState;
use colored::{ColoredString, Colorize};

/// Keyboard rows as laid out on screen
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color one letter according to its classification
#[must_use]
pub fn colored_letter(letter: char, state: LetterState) -> ColoredString {
    let cell = format!(" {letter} ");
    match state {
        LetterState::Correct => cell.black().on_green().bold(),
        LetterState::Present => cell.black().on_yellow().bold(),
        LetterState::Absent => cell.white().on_bright_black(),
        LetterState::Unset => cell.bold(),
    }
}

/// A submitted guess as colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| colored_letter(char::from(letter), state).to_string())
        .collect()
}

/// The keyboard rows with each letter colored by its accumulated state
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|b| colored_letter(char::from(b), keyboard.get(b)).to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_rows_cover_alphabet_once() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'A'..=b'Z').collect::<Vec<_>>());
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("BOBBLES").unwrap();
        let feedback = Feedback::evaluate(&guess, &Word::target());
        assert_eq!(colored_guess(&guess, &feedback), " B  O  B  B  L  E  S ");
    }
}
