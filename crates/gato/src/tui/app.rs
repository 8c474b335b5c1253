//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use gato_tictactoe::{GameState, MoveOutcome, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::{move_cursor, step_selection};
use super::layout::{Hit, Regions};
use crate::config::GatoConfig;
use crate::view::{GameView, Intent, dispatch, render};

/// Which control receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the move list.
    Moves,
}

impl Focus {
    /// Switches between board and move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the one [`GameState`]; cursors and focus are front-end state only.
#[derive(Debug, Getters)]
pub struct App {
    game: GameState,
    title: String,
    cursor: Position,
    focus: Focus,
    /// Highlighted move-list row, in display order.
    move_cursor: usize,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GatoConfig) -> Self {
        Self {
            game: GameState::with_move_order(config.move_order()),
            title: config.title().clone(),
            cursor: Position::Center,
            focus: Focus::Board,
            move_cursor: 0,
        }
    }

    /// Builds the view tree for the current state.
    pub fn view(&self) -> GameView {
        render(&self.game, &self.title)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Flow::Quit;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.apply(Intent::ToggleOrder),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(cell) = c.to_digit(10) {
                    self.cursor = Position::from_index(cell as usize - 1).unwrap_or(self.cursor);
                    self.apply(Intent::CellClicked(cell as usize - 1));
                }
            }
            code => match self.focus {
                Focus::Board => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        self.apply(Intent::CellClicked(self.cursor.to_index()))
                    }
                    _ => self.cursor = move_cursor(self.cursor, code),
                },
                Focus::Moves => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if let Some(entry) = self.view().moves().get(self.move_cursor) {
                            self.apply(entry.intent());
                        }
                    }
                    _ => {
                        let len = self.game.history().len();
                        self.move_cursor = step_selection(self.move_cursor, len, code);
                    }
                },
            },
        }
        Flow::Continue
    }

    /// Handles a mouse event against the layout of a frame of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Flow {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Flow::Continue;
        }
        let regions = Regions::compute(area);
        match regions.hit(mouse.column, mouse.row) {
            Some(Hit::Cell(cell)) => {
                self.focus = Focus::Board;
                self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
                self.apply(Intent::CellClicked(cell));
            }
            Some(Hit::MoveRow(row)) => {
                let entry_index = row + regions.move_offset(self.list_selection());
                if let Some(entry) = self.view().moves().get(entry_index) {
                    self.focus = Focus::Moves;
                    self.apply(entry.intent());
                }
            }
            Some(Hit::Toggle) => self.apply(Intent::ToggleOrder),
            None => {}
        }
        Flow::Continue
    }

    /// Highlighted move-list row, when the list has focus.
    pub fn list_selection(&self) -> Option<usize> {
        (self.focus == Focus::Moves).then_some(self.move_cursor)
    }

    /// Dispatches an intent and re-syncs the move-list cursor.
    fn apply(&mut self, intent: Intent) {
        if let Some(MoveOutcome::Applied { player, position }) = dispatch(&mut self.game, intent) {
            info!(%player, %position, "Mark placed");
        }
        self.move_cursor = self
            .view()
            .moves()
            .iter()
            .position(|m| *m.selected())
            .unwrap_or(0);
    }
}
