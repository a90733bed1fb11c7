//! Screen transitions
//!
//! `Welcome -> Puzzle -> MainContent`, one way only. The puzzle is created
//! when the welcome screen has faded out and is kept around afterwards so
//! the main content can show how it went.

use crate::config::GameConfig;
use crate::puzzle::{Effect, Key, Puzzle, Scheduled};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Puzzle,
    MainContent,
}

/// The two equivalent buttons on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    Definitely,
}

/// Owns the current screen and, once created, the puzzle
#[derive(Debug, Clone)]
pub struct ScreenController {
    config: GameConfig,
    screen: Screen,
    fading: bool,
    puzzle: Option<Puzzle>,
    disclosed: Option<String>,
    surprise_revealed: bool,
}

impl ScreenController {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            screen: Screen::Welcome,
            fading: false,
            puzzle: None,
            disclosed: None,
            surprise_revealed: false,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the welcome screen is fading out
    #[must_use]
    pub const fn is_fading(&self) -> bool {
        self.fading
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Answer given away on the way to the main content (loss only)
    #[must_use]
    pub fn disclosed(&self) -> Option<&str> {
        self.disclosed.as_deref()
    }

    #[must_use]
    pub const fn is_surprise_revealed(&self) -> bool {
        self.surprise_revealed
    }

    /// Accept the welcome prompt
    ///
    /// Starts the fade-out and schedules the puzzle. Ignored once fading or
    /// past the welcome screen.
    pub fn confirm(&mut self, confirmation: Confirmation) -> Vec<Scheduled> {
        if self.screen != Screen::Welcome || self.fading {
            return Vec::new();
        }
        info!("welcome confirmed ({confirmation:?})");
        self.fading = true;
        vec![Scheduled::after(
            self.config.timings.welcome_fade,
            Effect::EnterPuzzle,
        )]
    }

    /// Show a fresh puzzle; only valid after a confirmation
    pub fn enter_puzzle(&mut self) -> bool {
        if self.screen != Screen::Welcome || !self.fading {
            return false;
        }
        info!("entering puzzle");
        self.screen = Screen::Puzzle;
        self.fading = false;
        self.puzzle = Some(Puzzle::new(&self.config));
        true
    }

    /// Forward a key to the puzzle; ignored on other screens
    pub fn handle_key(&mut self, key: Key) -> Vec<Scheduled> {
        match (self.screen, self.puzzle.as_mut()) {
            (Screen::Puzzle, Some(puzzle)) => puzzle.handle_key(key),
            _ => Vec::new(),
        }
    }

    /// End of the feedback reveal
    pub fn settle(&mut self) {
        if let Some(puzzle) = self.puzzle.as_mut() {
            puzzle.settle();
        }
    }

    /// Leave the puzzle; honored only once it has been won or lost
    pub fn reveal_main_content(&mut self, disclosed: Option<String>) -> bool {
        let finished = self.puzzle.as_ref().is_some_and(Puzzle::is_game_over);
        if self.screen != Screen::Puzzle || !finished {
            return false;
        }
        info!("revealing main content");
        self.screen = Screen::MainContent;
        self.disclosed = disclosed;
        true
    }

    /// One-shot surprise on the main content; true only the first time
    pub fn reveal_surprise(&mut self) -> bool {
        if self.screen != Screen::MainContent || self.surprise_revealed {
            return false;
        }
        info!("surprise revealed");
        self.surprise_revealed = true;
        true
    }
}
