//! Puzzle word representation
//!
//! A Word stores a `WORD_LENGTH`-letter uppercase word as bytes.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every guess and in the target
pub const WORD_LENGTH: usize = 7;

/// Number of rows in the grid
pub const MAX_GUESSES: usize = 5;

/// The fixed answer for the session
pub const TARGET_WORD: &str = "COBBLER";

/// A `WORD_LENGTH`-letter word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use birthday_gate::core::Word;
    ///
    /// let word = Word::new("cobbler").unwrap();
    /// assert_eq!(word.text(), "COBBLER");
    ///
    /// assert!(Word::new("cobble").is_err());
    /// assert!(Word::new("c0bbler").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Build a word from already-entered letters
    ///
    /// # Errors
    /// Same validation as [`Word::new`].
    pub fn from_letters(letters: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        let text: String = letters.iter().map(|&b| char::from(b)).collect();
        Self::new(text)
    }

    /// The session's answer
    #[must_use]
    pub fn target() -> Self {
        Self {
            text: TARGET_WORD.to_string(),
            chars: *b"COBBLER",
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback evaluation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("COBBLER").unwrap();
        assert_eq!(word.text(), "COBBLER");
        assert_eq!(word.chars(), b"COBBLER");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("cobbler").unwrap().text(), "COBBLER");
        assert_eq!(Word::new("CoBbLeR").unwrap(), Word::target());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("cobblers"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("robber"), Err(WordError::InvalidLength(6))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cobb3er"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("cob ler").is_err());
        assert!(matches!(Word::new("cöbbler"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_from_letters() {
        let word = Word::from_letters(*b"ABCDEFG").unwrap();
        assert_eq!(word.text(), "ABCDEFG");
        assert!(Word::from_letters([0u8; WORD_LENGTH]).is_err());
    }

    #[test]
    fn target_matches_constant() {
        let target = Word::target();
        assert_eq!(target.text(), TARGET_WORD);
        assert_eq!(Word::new(TARGET_WORD).unwrap(), target);
    }

    #[test]
    fn word_char_counts_duplicates() {
        let counts = Word::target().char_counts();
        assert_eq!(counts.get(&b'B'), Some(&2));
        assert_eq!(counts.get(&b'C'), Some(&1));
        assert_eq!(counts.len(), 6);
    }

    #[test]
    fn word_display() {
        assert_eq!(format!("{}", Word::target()), "COBBLER");
    }
}
