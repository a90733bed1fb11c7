//! Puzzle state machine
//!
//! Owns the grid, the cursor, the keyboard state and the game-over latch.
//! Every input goes through [`Puzzle::handle_key`], which returns the
//! presentation effects to schedule.

use super::{Effect, Grid, Key, KeyboardState, Scheduled};
use crate::config::{GameConfig, Timings};
use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};
use log::{debug, info};
use std::fmt;

/// Shown when Enter is pressed on a partly filled row
pub const INCOMPLETE_MESSAGE: &str = "Not enough letters!";

/// Where the puzzle is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting letters and deletes on the active row
    Entering,
    /// A guess was submitted and its feedback is still being revealed
    Evaluating,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Rejected submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// The active row is not full
    IncompleteGuess,
    /// The puzzle is over or still revealing the previous guess
    NotAccepting,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteGuess => f.write_str(INCOMPLETE_MESSAGE),
            Self::NotAccepting => write!(f, "The puzzle is not accepting guesses"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub phase: Phase,
    pub effects: Vec<Scheduled>,
}

/// The word puzzle
#[derive(Debug, Clone)]
pub struct Puzzle {
    target: Word,
    timings: Timings,
    grid: Grid,
    keyboard: KeyboardState,
    guesses: Vec<Word>,
    current_row: usize,
    current_tile: usize,
    phase: Phase,
    game_over: bool,
}

impl Puzzle {
    /// Fresh puzzle for the session's target word
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_target(Word::target(), config)
    }

    #[must_use]
    pub fn with_target(target: Word, config: &GameConfig) -> Self {
        Self {
            target,
            timings: config.timings,
            grid: Grid::new(),
            keyboard: KeyboardState::new(),
            guesses: Vec::with_capacity(MAX_GUESSES),
            current_row: 0,
            current_tile: 0,
            phase: Phase::Entering,
            game_over: false,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_tile(&self) -> usize {
        self.current_tile
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The answer, once it has been given away by a loss
    #[must_use]
    pub fn disclosed_target(&self) -> Option<&str> {
        (self.phase == Phase::Lost).then(|| self.target.text())
    }

    /// Single entry point for physical and on-screen keys
    ///
    /// Invalid input is ignored and yields no effects. An incomplete
    /// submission yields a message and a shake of the active row.
    pub fn handle_key(&mut self, key: Key) -> Vec<Scheduled> {
        if self.game_over {
            return Vec::new();
        }

        match key {
            Key::Letter(ch) => {
                self.enter_letter(ch);
                Vec::new()
            }
            Key::Delete => {
                self.delete_letter();
                Vec::new()
            }
            Key::Submit => match self.submit_guess() {
                Ok(submission) => submission.effects,
                Err(PuzzleError::IncompleteGuess) => self.incomplete_effects(),
                Err(PuzzleError::NotAccepting) => Vec::new(),
            },
        }
    }

    /// Write a letter at the cursor; returns whether anything changed
    pub fn enter_letter(&mut self, ch: char) -> bool {
        if self.phase != Phase::Entering || self.current_tile >= WORD_LENGTH {
            return false;
        }
        if !ch.is_ascii_alphabetic() {
            return false;
        }

        self.grid
            .set_letter(self.current_row, self.current_tile, ch.to_ascii_uppercase() as u8);
        self.current_tile += 1;
        true
    }

    /// Remove the letter before the cursor; returns whether anything changed
    pub fn delete_letter(&mut self) -> bool {
        if self.phase != Phase::Entering || self.current_tile == 0 {
            return false;
        }

        self.current_tile -= 1;
        self.grid.clear_letter(self.current_row, self.current_tile);
        true
    }

    /// Submit the active row
    ///
    /// `NotAccepting` takes precedence over `IncompleteGuess`: Enter on the
    /// fresh row while the previous guess is still being revealed is ignored
    /// silently, without a message or shake.
    ///
    /// # Errors
    /// - `PuzzleError::NotAccepting` after game over or while the previous
    ///   guess is still being revealed
    /// - `PuzzleError::IncompleteGuess` if the row is not full; nothing changes
    pub fn submit_guess(&mut self) -> Result<Submission, PuzzleError> {
        if self.game_over || self.phase != Phase::Entering {
            return Err(PuzzleError::NotAccepting);
        }
        if self.current_tile != WORD_LENGTH {
            return Err(PuzzleError::IncompleteGuess);
        }

        let row = self.current_row;
        let guess = self
            .grid
            .row_word(row)
            .ok_or(PuzzleError::IncompleteGuess)?;

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.grid.apply_feedback(row, &feedback);
        self.keyboard.merge(&guess, &feedback);
        self.guesses.push(guess.clone());

        debug!("row {row}: {guess} {}", feedback.to_emoji());
        debug!("keyboard: {}", self.keyboard);

        let mut effects = self.reveal_effects(row);

        if feedback.is_perfect() {
            self.game_over = true;
            self.phase = Phase::Won;
            info!("puzzle won on guess {}", row + 1);
            effects.extend(self.win_effects(row));
        } else if row + 1 == MAX_GUESSES {
            self.game_over = true;
            self.phase = Phase::Lost;
            info!("puzzle lost, target was {}", self.target);
            effects.extend(self.lose_effects());
        } else {
            self.current_row += 1;
            self.current_tile = 0;
            self.phase = Phase::Evaluating;
            effects.push(Scheduled::after(
                self.timings.keyboard_delay(),
                Effect::Settle,
            ));
        }

        Ok(Submission {
            row,
            guess,
            feedback,
            phase: self.phase,
            effects,
        })
    }

    /// End the feedback reveal and accept input again
    ///
    /// Returns whether the phase changed.
    pub fn settle(&mut self) -> bool {
        if self.phase != Phase::Evaluating {
            return false;
        }
        self.phase = Phase::Entering;
        true
    }

    fn incomplete_effects(&self) -> Vec<Scheduled> {
        vec![
            Scheduled::now(Effect::ShowMessage {
                text: INCOMPLETE_MESSAGE.to_string(),
                duration: self.timings.message_duration,
            }),
            Scheduled::now(Effect::Shake {
                row: self.current_row,
                duration: self.timings.shake_duration,
            }),
        ]
    }

    fn reveal_effects(&self, row: usize) -> Vec<Scheduled> {
        let mut effects: Vec<Scheduled> = (0..WORD_LENGTH)
            .map(|col| {
                Scheduled::after(
                    self.timings.tile_stagger * col as u32,
                    Effect::RevealTile { row, col },
                )
            })
            .collect();
        effects.push(Scheduled::after(
            self.timings.keyboard_delay(),
            Effect::RevealKeyboard(self.keyboard),
        ));
        effects
    }

    fn win_effects(&self, row: usize) -> Vec<Scheduled> {
        let announce = self.timings.result_delay;
        let mut effects = vec![Scheduled::after(
            announce,
            Effect::ShowMessage {
                text: format!("🎉 You got it! {}! 💖", self.target),
                duration: self.timings.message_duration,
            },
        )];
        effects.extend((0..WORD_LENGTH).map(|col| {
            Scheduled::after(
                announce + self.timings.celebrate_stagger * col as u32,
                Effect::Celebrate { row, col },
            )
        }));
        effects.push(self.main_content_effect(None));
        effects
    }

    fn lose_effects(&self) -> Vec<Scheduled> {
        vec![
            Scheduled::after(
                self.timings.result_delay,
                Effect::ShowMessage {
                    text: format!("The word was {}! 💕", self.target),
                    duration: self.timings.message_duration,
                },
            ),
            self.main_content_effect(Some(self.target.text().to_string())),
        ]
    }

    fn main_content_effect(&self, disclosed: Option<String>) -> Scheduled {
        let t = &self.timings;
        let delay = (t.result_delay + t.transition_delay)
            .max(t.keyboard_delay())
            .max(t.result_delay + t.celebrate_stagger * WORD_LENGTH as u32);
        Scheduled::after(delay, Effect::RevealMainContent { disclosed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use std::time::Duration;

    fn puzzle() -> Puzzle {
        Puzzle::new(&GameConfig::default())
    }

    fn type_word(p: &mut Puzzle, word: &str) {
        for ch in word.chars() {
            p.handle_key(Key::Letter(ch));
        }
    }

    fn play(p: &mut Puzzle, word: &str) -> Vec<Scheduled> {
        type_word(p, word);
        let effects = p.handle_key(Key::Submit);
        p.settle();
        effects
    }

    #[test]
    fn starts_entering_on_row_zero() {
        let p = puzzle();
        assert_eq!(p.phase(), Phase::Entering);
        assert_eq!((p.current_row(), p.current_tile()), (0, 0));
        assert!(!p.is_game_over());
        assert!(p.guesses().is_empty());
    }

    #[test]
    fn letters_are_uppercased_and_advance_cursor() {
        let mut p = puzzle();
        assert!(p.enter_letter('c'));
        assert!(p.enter_letter('O'));
        assert_eq!(p.current_tile(), 2);
        assert_eq!(p.grid().tile(0, 0).letter_char(), Some('C'));
        assert_eq!(p.grid().tile(0, 1).letter_char(), Some('O'));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut p = puzzle();
        for ch in ['1', ' ', '!', 'é', 'ß'] {
            assert!(!p.enter_letter(ch));
        }
        assert_eq!(p.current_tile(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut p = puzzle();
        assert!(!p.delete_letter());
        assert_eq!(p.current_tile(), 0);

        type_word(&mut p, "ABCDEFGHIJ");
        assert_eq!(p.current_tile(), WORD_LENGTH);
        assert_eq!(p.grid().row_word(0).unwrap().text(), "ABCDEFG");

        for _ in 0..10 {
            p.handle_key(Key::Delete);
        }
        assert_eq!(p.current_tile(), 0);
        assert!(p.grid().row(0).iter().all(|t| t.letter.is_none()));
    }

    #[test]
    fn delete_clears_previous_tile() {
        let mut p = puzzle();
        type_word(&mut p, "COB");
        assert!(p.delete_letter());
        assert_eq!(p.current_tile(), 2);
        assert_eq!(p.grid().tile(0, 2).letter, None);
        assert_eq!(p.grid().tile(0, 1).letter_char(), Some('O'));
    }

    #[test]
    fn incomplete_submission_is_rejected_without_change() {
        let mut p = puzzle();
        type_word(&mut p, "COBBLE");
        let before = p.grid().clone();

        assert_eq!(p.submit_guess(), Err(PuzzleError::IncompleteGuess));
        assert_eq!((p.current_row(), p.current_tile()), (0, 6));
        assert_eq!(p.grid(), &before);
        assert!(p.guesses().is_empty());
    }

    #[test]
    fn incomplete_submission_reports_message_and_shake() {
        let mut p = puzzle();
        type_word(&mut p, "COB");
        let effects = p.handle_key(Key::Submit);

        assert_eq!(effects.len(), 2);
        assert!(effects.iter().all(|s| s.delay == Duration::ZERO));
        assert!(matches!(
            &effects[0].effect,
            Effect::ShowMessage { text, .. } if text == INCOMPLETE_MESSAGE
        ));
        assert_eq!(
            effects[1].effect,
            Effect::Shake {
                row: 0,
                duration: Duration::from_millis(500)
            }
        );
    }

    #[test]
    fn wrong_guess_moves_to_next_row_after_settling() {
        let mut p = puzzle();
        type_word(&mut p, "ABCDEFG");
        let submission = p.submit_guess().unwrap();

        assert_eq!(submission.row, 0);
        assert_eq!(submission.phase, Phase::Evaluating);
        assert_eq!((p.current_row(), p.current_tile()), (1, 0));
        assert_eq!(p.grid().tile(0, 1).state, LetterState::Present);
        assert_eq!(p.keyboard().get(b'A'), LetterState::Absent);

        // Input is held back until the reveal is over
        assert!(!p.enter_letter('X'));
        assert!(p.settle());
        assert!(!p.settle());
        assert!(p.enter_letter('X'));
    }

    #[test]
    fn submission_effects_are_staggered() {
        let mut p = puzzle();
        type_word(&mut p, "ABCDEFG");
        let effects = p.handle_key(Key::Submit);

        let tile_delays: Vec<Duration> = effects
            .iter()
            .filter(|s| matches!(s.effect, Effect::RevealTile { .. }))
            .map(|s| s.delay)
            .collect();
        assert_eq!(tile_delays.len(), WORD_LENGTH);
        assert!(tile_delays.windows(2).all(|w| w[0] < w[1]));

        let keyboard = effects
            .iter()
            .find(|s| matches!(s.effect, Effect::RevealKeyboard(_)))
            .unwrap();
        assert!(keyboard.delay >= *tile_delays.last().unwrap());
        assert_eq!(keyboard.delay, Duration::from_millis(2100));

        let settle = effects
            .iter()
            .find(|s| s.effect == Effect::Settle)
            .unwrap();
        assert_eq!(settle.delay, keyboard.delay);
    }

    #[test]
    fn keyboard_snapshot_matches_state_at_submission() {
        let mut p = puzzle();
        let effects = play(&mut p, "REBBOLZ");
        let snapshot = effects
            .iter()
            .find_map(|s| match &s.effect {
                Effect::RevealKeyboard(k) => Some(*k),
                _ => None,
            })
            .unwrap();
        assert_eq!(&snapshot, p.keyboard());
    }

    #[test]
    fn win_on_first_guess() {
        let mut p = puzzle();
        let effects = play(&mut p, "cobbler");

        assert_eq!(p.phase(), Phase::Won);
        assert!(p.is_game_over());
        assert_eq!(p.current_row(), 0);
        assert_eq!(p.disclosed_target(), None);
        assert!(p.grid().row(0).iter().all(|t| t.state == LetterState::Correct));

        let last = effects.iter().max_by_key(|s| s.delay).unwrap();
        assert_eq!(last.effect, Effect::RevealMainContent { disclosed: None });
        assert_eq!(last.delay, Duration::from_millis(4500));
        assert_eq!(
            effects
                .iter()
                .filter(|s| matches!(s.effect, Effect::Celebrate { row: 0, .. }))
                .count(),
            WORD_LENGTH
        );
        assert!(!effects.iter().any(|s| s.effect == Effect::Settle));
    }

    #[test]
    fn lose_after_last_row() {
        let mut p = puzzle();
        for guess in ["ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB"] {
            play(&mut p, guess);
            assert!(!p.is_game_over());
        }
        let effects = play(&mut p, "BOBBLES");

        assert_eq!(p.phase(), Phase::Lost);
        assert!(p.is_game_over());
        assert_eq!(p.current_row(), MAX_GUESSES - 1);
        assert_eq!(p.disclosed_target(), Some("COBBLER"));
        assert!(effects.contains(&Scheduled::after(
            Duration::from_millis(4500),
            Effect::RevealMainContent {
                disclosed: Some("COBBLER".to_string())
            }
        )));
        assert!(effects.iter().any(|s| matches!(
            &s.effect,
            Effect::ShowMessage { text, .. } if text.contains("COBBLER")
        )));
    }

    #[test]
    fn latch_blocks_all_further_input() {
        let mut p = puzzle();
        play(&mut p, "COBBLER");
        let grid = p.grid().clone();
        let cursor = (p.current_row(), p.current_tile());

        for key in [Key::Letter('A'), Key::Delete, Key::Submit] {
            assert!(p.handle_key(key).is_empty());
        }
        assert!(!p.enter_letter('A'));
        assert!(!p.delete_letter());
        assert_eq!(p.submit_guess(), Err(PuzzleError::NotAccepting));
        assert!(!p.settle());

        assert_eq!(p.grid(), &grid);
        assert_eq!((p.current_row(), p.current_tile()), cursor);
        assert_eq!(p.guesses().len(), 1);
    }

    #[test]
    fn instant_timings_schedule_everything_now() {
        let mut p = Puzzle::new(&GameConfig::with_speed(0.0));
        let effects = play(&mut p, "COBBLER");
        assert!(effects.iter().all(|s| s.delay == Duration::ZERO));
    }

    #[test]
    fn other_targets_of_same_length() {
        let target = Word::new("BIRTHDY").unwrap();
        let mut p = Puzzle::with_target(target, &GameConfig::default());
        play(&mut p, "COBBLER");
        assert_eq!(p.phase(), Phase::Entering);
        play(&mut p, "BIRTHDY");
        assert_eq!(p.phase(), Phase::Won);
    }

    #[test]
    fn submit_while_revealing_is_silent() {
        let mut puzzle = Puzzle::new(&GameConfig::default());
        for ch in "ROBBERS".chars() {
            puzzle.enter_letter(ch);
        }
        puzzle.submit_guess().unwrap();
        assert_eq!(puzzle.phase(), Phase::Evaluating);

        assert_eq!(puzzle.submit_guess(), Err(PuzzleError::NotAccepting));
        assert!(puzzle.handle_key(Key::Submit).is_empty());

        puzzle.settle();
        assert_eq!(puzzle.submit_guess(), Err(PuzzleError::IncompleteGuess));
        assert_eq!(puzzle.handle_key(Key::Submit).len(), 2);
    }
}
