//! TUI rendering with ratatui
//!
//! A one-way projection of the screen controller and the puzzle view; nothing
//! here is read back into the game.

use super::app::App;
use super::layout::{
    keyboard_keys, main_layout, puzzle_layout, tile_rect, welcome_layout,
};
use crate::core::{LetterState, MAX_GUESSES, WORD_LENGTH};
use crate::greeting;
use crate::puzzle::{Key, Puzzle, Tile};
use crate::screen::{Confirmation, Screen};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

const PINK: Color = Color::Rgb(255, 65, 145);
const MAGENTA: Color = Color::Rgb(233, 0, 116);
const BLUSH: Color = Color::Rgb(255, 228, 236);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    match app.screen() {
        Screen::Welcome => render_welcome(f, app),
        Screen::Puzzle => render_puzzle(f, app, now),
        Screen::MainContent => render_main_content(f, app),
    }
}

/// Fill color for a classification
#[must_use]
pub fn state_color(state: LetterState) -> Option<Color> {
    match state {
        LetterState::Correct => Some(Color::Green),
        LetterState::Present => Some(Color::Yellow),
        LetterState::Absent => Some(Color::DarkGray),
        LetterState::Unset => None,
    }
}

fn render_welcome(f: &mut Frame, app: &App) {
    let layout = welcome_layout(f.area());
    let fading = app.controller.is_fading();
    let accent = if fading { Color::DarkGray } else { PINK };

    f.render_widget(Clear, layout.panel);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(accent)),
        layout.panel,
    );

    let text = vec![
        Line::from(Span::styled(
            greeting::WELCOME_TITLE,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(greeting::WELCOME_PROMPT),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout.text,
    );

    for (rect, confirmation) in layout.buttons {
        let (label, hint) = match confirmation {
            Confirmation::Yes => (greeting::YES_LABEL, "y"),
            Confirmation::Definitely => (greeting::DEFINITELY_LABEL, "d"),
        };
        let button = Paragraph::new(format!("{label} ({hint})"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        f.render_widget(button, rect);
    }
}

fn render_puzzle(f: &mut Frame, app: &App, now: Instant) {
    let Some(puzzle) = app.controller.puzzle() else {
        return;
    };
    let layout = puzzle_layout(f.area());

    let header = Paragraph::new(greeting::PUZZLE_TITLE)
        .style(Style::default().fg(PINK).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(PINK)),
        );
    f.render_widget(header, layout.header);

    render_grid(f, app, puzzle, layout.grid, now);

    if let Some(message) = &app.view.message {
        let line = Paragraph::new(message.text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(BLUSH).add_modifier(Modifier::BOLD));
        f.render_widget(line, layout.message);
    }

    render_keyboard(f, app, layout.keyboard);

    let help = Paragraph::new("Type or click letters | Enter: Submit | Backspace: Delete | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, layout.help);
}

fn render_grid(f: &mut Frame, app: &App, puzzle: &Puzzle, grid: Rect, now: Instant) {
    for row in 0..MAX_GUESSES {
        // Shaking rows jitter one cell left and right
        let offset = if app.view.is_shaking(row) {
            let phase = app
                .view
                .shake
                .map_or(0, |(_, until)| until.saturating_duration_since(now).as_millis() / 50);
            if phase % 2 == 0 { 1 } else { 0 }
        } else {
            0
        };

        for col in 0..WORD_LENGTH {
            let mut rect = tile_rect(grid, row, col);
            rect.x = (rect.x + offset).min(grid.right().saturating_sub(rect.width));
            let tile = puzzle.grid().tile(row, col);
            let revealed = app.view.revealed[row][col];
            let celebrating = app.view.celebrating[row][col];
            let active = row == puzzle.current_row() && !puzzle.is_game_over();
            f.render_widget(tile_widget(tile, revealed, celebrating, active), rect);
        }
    }
}

fn tile_widget(tile: Tile, revealed: bool, celebrating: bool, active: bool) -> Paragraph<'static> {
    let letter = tile.letter_char().map(String::from).unwrap_or_default();
    let fill = if revealed { state_color(tile.state) } else { None };

    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(color) = fill {
        style = style.bg(color).fg(Color::Black);
    }

    let border = if celebrating {
        Style::default().fg(PINK).add_modifier(Modifier::BOLD)
    } else if tile.letter.is_some() {
        Style::default().fg(Color::White)
    } else if active {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(letter)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if celebrating {
                    BorderType::Double
                } else {
                    BorderType::Plain
                })
                .border_style(border),
        )
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (rect, key) in keyboard_keys(area) {
        let state = match key {
            Key::Letter(c) => app.view.keyboard.get(c as u8),
            Key::Submit | Key::Delete => LetterState::Unset,
        };
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if let Some(color) = state_color(state) {
            style = style.bg(color).fg(Color::Black);
        }
        let widget = Paragraph::new(key.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Gray)),
            );
        f.render_widget(widget, rect);
    }
}

fn render_main_content(f: &mut Frame, app: &App) {
    let layout = main_layout(f.area());

    let hearts = "❤ ".repeat(usize::from(layout.hearts.width / 2));
    f.render_widget(
        Paragraph::new(hearts).style(Style::default().fg(PINK)),
        layout.hearts,
    );

    let mut hero = vec![Line::from(Span::styled(
        greeting::HERO_TITLE,
        Style::default().fg(MAGENTA).add_modifier(Modifier::BOLD),
    ))];
    if let Some(word) = app.controller.disclosed() {
        hero.push(Line::from(format!("(The word was {word})")));
    }
    f.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(MAGENTA)),
        ),
        layout.hero,
    );

    let message: Vec<Line> = greeting::MESSAGE
        .iter()
        .flat_map(|p| [Line::from(*p), Line::from("")])
        .collect();
    f.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(BLUSH)),
        layout.message,
    );

    let surprise = if app.controller.is_surprise_revealed() {
        Paragraph::new(greeting::SURPRISE)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Paragraph::new("🎁 Open your surprise (s)")
            .style(Style::default().fg(PINK).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
    };
    f.render_widget(surprise.alignment(Alignment::Center), layout.surprise);

    let footer = Paragraph::new(format!("{} | q: Quit", greeting::SIGNATURE))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, layout.footer);
}
