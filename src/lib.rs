//! Birthday Gate
//!
//! A birthday greeting gated behind a seven-letter word puzzle: a welcome
//! prompt, the puzzle, then the main content.
//!
//! # Quick Start
//!
//! ```rust
//! use birthday_gate::config::GameConfig;
//! use birthday_gate::puzzle::{Key, Phase, Puzzle};
//!
//! let mut puzzle = Puzzle::new(&GameConfig::default());
//! for ch in "cobbler".chars() {
//!     puzzle.handle_key(Key::Letter(ch));
//! }
//! let effects = puzzle.handle_key(Key::Submit);
//!
//! assert_eq!(puzzle.phase(), Phase::Won);
//! assert!(!effects.is_empty());
//! ```

// Core domain types
pub mod core;

// Puzzle state machine
pub mod puzzle;

// Welcome / puzzle / main content transitions
pub mod screen;

// Deferred effect queue
pub mod schedule;

// Timings
pub mod config;

// Greeting copy
pub mod greeting;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File logger
pub mod logging;
