//! Guess feedback evaluation and representation
//!
//! Feedback is one [`LetterState`] per position of the guess:
//! - Correct: right letter, right position
//! - Present: letter in the target at another position
//! - Absent: letter not in the target, or all its copies already claimed

use super::{LetterState, WORD_LENGTH, Word};
use std::str::FromStr;

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the target)
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Per-position classifications, left to right
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Evaluate `guess` against `target`
    ///
    /// Duplicate letters are handled with two passes over a remaining-count
    /// table built from the target:
    /// 1. Mark exact matches and remove them from the pool
    /// 2. Mark the rest present while copies remain in the pool, absent otherwise
    ///
    /// The first pass must finish before the second, so an exact match is
    /// never starved by an earlier out-of-place copy of the same letter.
    ///
    /// # Examples
    /// ```
    /// use birthday_gate::core::{Feedback, Word};
    ///
    /// let guess = Word::new("bobbles").unwrap();
    /// let target = Word::target();
    ///
    /// // The leading B is absent: both B's of COBBLER are matched in place
    /// assert_eq!(Feedback::evaluate(&guess, &target).to_emoji(), "⬜🟩🟩🟩🟩🟩⬜");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut target_available = target.char_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterState::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨⬜🟩🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Parse feedback from a string like "GY-GY--" or "🟩🟨⬜🟩🟨⬜⬜"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid feedback string: {s}");
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(invalid());
        }

        let mut states = [LetterState::Unset; WORD_LENGTH];
        for (slot, ch) in states.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return Err(invalid()),
            };
        }

        Ok(Self(states))
    }
}
