//! Per-tile and per-key classification

use std::fmt;

/// Feedback classification for a tile or a keyboard key
///
/// Variants are declared in promotion order, so `Ord` ranks
/// `Unset < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    /// No feedback yet
    #[default]
    Unset,
    /// Letter not in the target (after accounting for duplicates)
    Absent,
    /// Letter in the target, wrong position
    Present,
    /// Letter in the right position
    Correct,
}

impl LetterState {
    /// Combine a prior keyboard classification with a newly observed one
    ///
    /// `Correct` always wins, `Present` wins over anything but `Correct`,
    /// and `Absent` is only recorded over `Unset`.
    ///
    /// # Examples
    /// ```
    /// use birthday_gate::core::LetterState;
    ///
    /// assert_eq!(LetterState::Correct.merged_with(LetterState::Absent), LetterState::Correct);
    /// assert_eq!(LetterState::Absent.merged_with(LetterState::Present), LetterState::Present);
    /// ```
    #[must_use]
    pub const fn merged_with(self, new: Self) -> Self {
        match (self, new) {
            (_, Self::Correct) => Self::Correct,
            (Self::Correct, _) => Self::Correct,
            (_, Self::Present) => Self::Present,
            (Self::Unset, Self::Absent) => Self::Absent,
            (prior, _) => prior,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_unset(self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Emoji square used in shareable feedback strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent | Self::Unset => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unset => "unset",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
