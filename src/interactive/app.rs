//! TUI application state and event loop

use super::input::{Action, map_key};
use super::layout::{button_at, key_at, main_layout, puzzle_layout};
use crate::config::GameConfig;
use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::puzzle::{Effect, KeyboardState, Scheduled};
use crate::schedule::Scheduler;
use crate::screen::{Screen, ScreenController};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Longest the loop sleeps when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// A transient message and when it disappears
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub expires: Instant,
}

/// What the puzzle screen currently shows
///
/// This trails the puzzle's own state: tiles and keys only change color when
/// their reveal effect fires.
#[derive(Debug, Clone, Default)]
pub struct PuzzleView {
    pub revealed: [[bool; WORD_LENGTH]; MAX_GUESSES],
    pub celebrating: [[bool; WORD_LENGTH]; MAX_GUESSES],
    pub keyboard: KeyboardState,
    pub message: Option<Message>,
    pub shake: Option<(usize, Instant)>,
}

impl PuzzleView {
    /// Drop the message and shake once they have run their course
    pub fn expire(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| m.expires <= now) {
            self.message = None;
        }
        if self.shake.is_some_and(|(_, until)| until <= now) {
            self.shake = None;
        }
    }

    #[must_use]
    pub fn is_shaking(&self, row: usize) -> bool {
        self.shake.is_some_and(|(r, _)| r == row)
    }
}

/// Application state
pub struct App {
    pub controller: ScreenController,
    pub scheduler: Scheduler,
    pub view: PuzzleView,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            controller: ScreenController::new(config),
            scheduler: Scheduler::new(),
            view: PuzzleView::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.controller.screen()
    }

    /// Handle one action from either input source
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Confirm(confirmation) => {
                let effects = self.controller.confirm(confirmation);
                self.dispatch(effects, now);
            }
            Action::Puzzle(key) => {
                let effects = self.controller.handle_key(key);
                self.dispatch(effects, now);
            }
            Action::Surprise => {
                self.controller.reveal_surprise();
            }
        }
    }

    /// Handle a left click at a terminal cell, given the frame area
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16, now: Instant) {
        let action = match self.screen() {
            Screen::Welcome => button_at(area, column, row).map(Action::Confirm),
            Screen::Puzzle => key_at(puzzle_layout(area).keyboard, column, row).map(Action::Puzzle),
            Screen::MainContent => main_layout(area)
                .surprise
                .contains(Position::new(column, row))
                .then_some(Action::Surprise),
        };
        if let Some(action) = action {
            self.handle_action(action, now);
        }
    }

    /// Queue effects and run the ones already due
    pub fn dispatch(&mut self, effects: Vec<Scheduled>, now: Instant) {
        self.scheduler.schedule(now, effects);
        self.tick(now);
    }

    /// Run due effects and expire transient state
    pub fn tick(&mut self, now: Instant) {
        for effect in self.scheduler.drain_due(now) {
            self.apply_effect(effect, now);
        }
        self.view.expire(now);
    }

    fn apply_effect(&mut self, effect: Effect, now: Instant) {
        debug!("applying {effect:?}");
        match effect {
            Effect::RevealTile { row, col } => self.view.revealed[row][col] = true,
            Effect::RevealKeyboard(keyboard) => self.view.keyboard = keyboard,
            Effect::Settle => self.controller.settle(),
            Effect::ShowMessage { text, duration } => {
                self.view.message = Some(Message {
                    text,
                    expires: now + duration,
                });
            }
            Effect::Shake { row, duration } => self.view.shake = Some((row, now + duration)),
            Effect::Celebrate { row, col } => self.view.celebrating[row][col] = true,
            Effect::RevealMainContent { disclosed } => {
                self.controller.reveal_main_content(disclosed);
            }
            Effect::EnterPuzzle => {
                if self.controller.enter_puzzle() {
                    self.view = PuzzleView::default();
                }
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Wake up for the next scheduled effect even without input
        if !event::poll(app.scheduler.timeout(now, IDLE_POLL))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(app.screen(), key) {
                    app.handle_action(action, Instant::now());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                app.handle_click(area, mouse.column, mouse.row, Instant::now());
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
