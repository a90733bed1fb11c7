//! Game configuration
//!
//! Timing constants for the staggered reveal, transient messages and screen
//! transitions. The defaults are the pacing of the greeting page.

use std::time::Duration;

/// Delays used when scheduling presentation effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Gap between consecutive tile reveals of a submitted row
    pub tile_stagger: Duration,
    /// Gap between consecutive tile bounces of the winning row
    pub celebrate_stagger: Duration,
    /// Wait after a terminal submission before the result is announced
    pub result_delay: Duration,
    /// Wait after the announcement before the main content is revealed
    pub transition_delay: Duration,
    /// How long a transient message stays visible
    pub message_duration: Duration,
    /// How long a row shakes after an incomplete submission
    pub shake_duration: Duration,
    /// Welcome screen fade-out before the puzzle appears
    pub welcome_fade: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tile_stagger: Duration::from_millis(300),
            celebrate_stagger: Duration::from_millis(100),
            result_delay: Duration::from_millis(1500),
            transition_delay: Duration::from_millis(3000),
            message_duration: Duration::from_millis(2000),
            shake_duration: Duration::from_millis(500),
            welcome_fade: Duration::from_millis(800),
        }
    }
}

impl Timings {
    /// Every delay set to zero
    pub const INSTANT: Self = Self {
        tile_stagger: Duration::ZERO,
        celebrate_stagger: Duration::ZERO,
        result_delay: Duration::ZERO,
        transition_delay: Duration::ZERO,
        message_duration: Duration::ZERO,
        shake_duration: Duration::ZERO,
        welcome_fade: Duration::ZERO,
    };

    /// Scale every delay by `1 / speed`
    ///
    /// A speed of `2.0` plays twice as fast; `0.0` (or anything non-positive
    /// or non-finite) makes every effect immediate.
    #[must_use]
    pub fn scaled(self, speed: f64) -> Self {
        if !speed.is_finite() || speed <= 0.0 {
            return Self::INSTANT;
        }
        let scale = |d: Duration| d.div_f64(speed);
        Self {
            tile_stagger: scale(self.tile_stagger),
            celebrate_stagger: scale(self.celebrate_stagger),
            result_delay: scale(self.result_delay),
            transition_delay: scale(self.transition_delay),
            message_duration: scale(self.message_duration),
            shake_duration: scale(self.shake_duration),
            welcome_fade: scale(self.welcome_fade),
        }
    }

    /// Delay of the keyboard recolor: after the last tile of a row
    #[must_use]
    pub fn keyboard_delay(&self) -> Duration {
        self.tile_stagger * crate::core::WORD_LENGTH as u32
    }
}

/// Configuration for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub timings: Timings,
}

impl GameConfig {
    /// Configuration with timings scaled by `speed`
    #[must_use]
    pub fn with_speed(speed: f64) -> Self {
        Self {
            timings: Timings::default().scaled(speed),
        }
    }
}
