//! Keyboard handling for the TUI

use crate::puzzle::Key;
use crate::screen::{Confirmation, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a terminal key press means on the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Confirm(Confirmation),
    Puzzle(Key),
    Surprise,
}

/// Map a terminal key press to an action
///
/// Every printable character goes to the puzzle while it is shown, so only
/// Esc and Ctrl-C quit from there.
#[must_use]
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Welcome => match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::Confirm(Confirmation::Yes)),
            KeyCode::Char('d' | 'D') => Some(Action::Confirm(Confirmation::Definitely)),
            KeyCode::Char('q' | 'Q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Puzzle => key_name(key.code)
            .as_deref()
            .and_then(Key::parse)
            .map(Action::Puzzle),
        Screen::MainContent => match key.code {
            KeyCode::Char('s' | 'S' | ' ') | KeyCode::Enter => Some(Action::Surprise),
            KeyCode::Char('q' | 'Q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Identifier of a terminal key, in the form [`Key::parse`] accepts
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}
