//! Check a single guess against the target

use crate::core::{Feedback, Word, WordError};

/// Evaluate one guess against the session's target
///
/// # Errors
///
/// Returns `WordError` if the guess is not a valid word.
///
/// # Examples
/// ```
/// use birthday_gate::commands::check_guess;
///
/// let (guess, feedback) = check_guess("lobbers").unwrap();
/// assert_eq!(guess.text(), "LOBBERS");
/// assert_eq!(feedback.count_correct(), 3);
/// ```
pub fn check_guess(word: &str) -> Result<(Word, Feedback), WordError> {
    let guess = Word::new(word.trim())?;
    let feedback = Feedback::evaluate(&guess, &Word::target());
    Ok((guess, feedback))
}

/// Compare the feedback a guess got with the feedback the caller predicted
///
/// # Errors
///
/// Returns both patterns as emoji when they differ.
///
/// # Examples
/// ```
/// use birthday_gate::commands::{check_guess, verify_expected};
///
/// let (_, feedback) = check_guess("bobbles").unwrap();
/// assert!(verify_expected(&feedback, &"-GGGGG-".parse().unwrap()).is_ok());
/// ```
pub fn verify_expected(actual: &Feedback, expected: &Feedback) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!(
            "expected {} but the guess scored {}",
            expected.to_emoji(),
            actual.to_emoji()
        ))
    }
}
