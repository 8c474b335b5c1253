//! Screen regions shared by drawing and mouse hit testing.

use derive_getters::Getters;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    widgets::{Block, Borders},
};
use tracing::instrument;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// What a screen coordinate points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Board cell 0-8.
    Cell(usize),
    /// Row of the move list, in display order.
    MoveRow(usize),
    /// The order toggle button.
    Toggle,
}

/// Rectangles for every control on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Regions {
    title: Rect,
    status: Rect,
    board: Rect,
    cells: [Rect; 9],
    moves: Rect,
    toggle: Rect,
    help: Rect,
}

impl Regions {
    /// Lays the screen out for a frame of the given size.
    #[instrument]
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Status
                Constraint::Min(13),   // Board and moves
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH * 3 + 4), Constraint::Min(24)])
            .split(chunks[2]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(body[1]);

        let board = body[0];
        let grid = center_rect(
            Block::default().borders(Borders::ALL).inner(board),
            CELL_WIDTH * 3,
            CELL_HEIGHT * 3,
        );
        let cells = std::array::from_fn(|i| {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            Rect::new(
                grid.x + col * CELL_WIDTH,
                grid.y + row * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title: chunks[0],
            status: chunks[1],
            board,
            cells,
            moves: side[0],
            toggle: side[1],
            help: chunks[3],
        }
    }

    /// Area inside the move list border; row `n` holds display entry `n`.
    pub fn move_rows(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.moves)
    }

    /// First move-list entry shown when display entry `selected` is
    /// highlighted.
    ///
    /// Scrolls just far enough to keep the selection on the last visible
    /// row; drawing passes this to the list and hit testing adds it back.
    pub fn move_offset(&self, selected: Option<usize>) -> usize {
        let visible = usize::from(self.move_rows().height);
        match selected {
            Some(s) if visible > 0 && s >= visible => s + 1 - visible,
            _ => 0,
        }
    }

    /// Finds the control under a screen coordinate.
    ///
    /// [`Hit::MoveRow`] is the visible row; add [`Regions::move_offset`]
    /// to get the display entry.
    #[instrument(skip(self))]
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ScreenPosition::new(column, row);

        if let Some(cell) = self.cells.iter().position(|r| r.contains(point)) {
            return Some(Hit::Cell(cell));
        }
        if self.toggle.contains(point) {
            return Some(Hit::Toggle);
        }
        let rows = self.move_rows();
        if rows.contains(point) {
            return Some(Hit::MoveRow(usize::from(row - rows.y)));
        }
        None
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
