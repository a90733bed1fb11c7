//! Screen geometry shared by rendering and mouse hit-testing

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::puzzle::Key;
use crate::screen::Confirmation;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const TILE_WIDTH: u16 = 5;
pub const TILE_HEIGHT: u16 = 3;
pub const KEY_WIDTH: u16 = 5;
pub const WIDE_KEY_WIDTH: u16 = 8;
pub const KEY_HEIGHT: u16 = 3;
/// Fits "Definitely! (d)" between the borders with a space either side
pub const BUTTON_WIDTH: u16 = 19;
const GAP: u16 = 1;

/// Rectangle of `width` x `height` centered in `area`, clipped to it
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height).intersection(area)
}

/// Regions of the puzzle screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleLayout {
    pub header: Rect,
    pub grid: Rect,
    pub message: Rect,
    pub keyboard: Rect,
    pub help: Rect,
}

#[must_use]
pub fn puzzle_layout(area: Rect) -> PuzzleLayout {
    let grid_height = MAX_GUESSES as u16 * TILE_HEIGHT;
    let keyboard_height = KEYBOARD_ROWS.len() as u16 * KEY_HEIGHT;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(grid_height),     // Grid
            Constraint::Length(1),               // Message
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Min(1),                  // Help
        ])
        .split(area);

    let grid_width = WORD_LENGTH as u16 * TILE_WIDTH + (WORD_LENGTH as u16 - 1) * GAP;
    PuzzleLayout {
        header: chunks[0],
        grid: centered(chunks[1], grid_width, grid_height),
        message: chunks[2],
        keyboard: chunks[3],
        help: chunks[4],
    }
}

/// Position of one tile inside the grid region
#[must_use]
pub fn tile_rect(grid: Rect, row: usize, col: usize) -> Rect {
    Rect::new(
        grid.x + col as u16 * (TILE_WIDTH + GAP),
        grid.y + row as u16 * TILE_HEIGHT,
        TILE_WIDTH,
        TILE_HEIGHT,
    )
    .intersection(grid)
}

/// Every on-screen key with its rectangle
///
/// The bottom row is flanked by Enter and Backspace.
#[must_use]
pub fn keyboard_keys(area: Rect) -> Vec<(Rect, Key)> {
    let mut keys = Vec::with_capacity(28);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut names: Vec<String> = row.chars().map(String::from).collect();
        if i == KEYBOARD_ROWS.len() - 1 {
            names.insert(0, "Enter".to_string());
            names.push("Backspace".to_string());
        }
        let row_keys: Vec<(u16, Key)> = names
            .iter()
            .filter_map(|name| Key::parse(name))
            .map(|key| (key_width(key), key))
            .collect();

        let row_width: u16 = row_keys.iter().map(|(w, _)| w + GAP).sum::<u16>() - GAP;
        let row_area = Rect::new(area.x, area.y + i as u16 * KEY_HEIGHT, area.width, KEY_HEIGHT)
            .intersection(area);
        let mut x = centered(row_area, row_width, KEY_HEIGHT).x;

        for (width, key) in row_keys {
            let rect = Rect::new(x, row_area.y, width, KEY_HEIGHT).intersection(row_area);
            if !rect.is_empty() {
                keys.push((rect, key));
            }
            x += width + GAP;
        }
    }

    keys
}

fn key_width(key: Key) -> u16 {
    match key {
        Key::Letter(_) => KEY_WIDTH,
        Key::Submit | Key::Delete => WIDE_KEY_WIDTH,
    }
}

/// The on-screen key under a mouse position
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Key> {
    keyboard_keys(area)
        .into_iter()
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, key)| key)
}

/// Regions of the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeLayout {
    pub panel: Rect,
    pub text: Rect,
    pub buttons: [(Rect, Confirmation); 2],
}

#[must_use]
pub fn welcome_layout(area: Rect) -> WelcomeLayout {
    let panel = centered(area, 50, 12);
    let inner = Rect::new(
        panel.x + 1,
        panel.y + 1,
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3), Constraint::Length(1)])
        .split(inner);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    WelcomeLayout {
        panel,
        text: chunks[0],
        buttons: [
            (centered(halves[0], BUTTON_WIDTH, 3), Confirmation::Yes),
            (centered(halves[1], BUTTON_WIDTH, 3), Confirmation::Definitely),
        ],
    }
}

/// The welcome button under a mouse position
#[must_use]
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Confirmation> {
    welcome_layout(area)
        .buttons
        .into_iter()
        .find(|(rect, _)| rect.contains(Position::new(column, row)))
        .map(|(_, confirmation)| confirmation)
}

/// Regions of the main content screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub hearts: Rect,
    pub hero: Rect,
    pub message: Rect,
    pub surprise: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Hearts
            Constraint::Length(5), // Hero
            Constraint::Min(5),    // Message
            Constraint::Length(3), // Surprise
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        hearts: chunks[0],
        hero: chunks[1],
        message: chunks[2],
        surprise: centered(chunks[3], 40, 3),
        footer: chunks[4],
    }
}
