//! Puzzle input keys
//!
//! Physical key presses and clicks on the on-screen keyboard both reduce to
//! a [`Key`] before reaching the puzzle.

use std::fmt;

/// A discrete puzzle input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(char),
    Submit,
    Delete,
}

impl Key {
    /// Parse a key identifier: `"Enter"`, `"Backspace"` or a single character
    ///
    /// # Examples
    /// ```
    /// use birthday_gate::puzzle::Key;
    ///
    /// assert_eq!(Key::parse("Enter"), Some(Key::Submit));
    /// assert_eq!(Key::parse("q"), Some(Key::Letter('q')));
    /// assert_eq!(Key::parse("Shift"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Letter(c)),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Self::Submit => f.write_str("ENTER"),
            Self::Delete => f.write_str("⌫"),
        }
    }
}
