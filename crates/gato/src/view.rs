//! Pure view tree built from game state, plus the intents it emits.
//!
//! [`render`] maps a [`GameState`] to a [`GameView`] without touching the
//! state. Front ends draw the view and feed user actions back through
//! [`dispatch`].

use derive_getters::Getters;
use gato_tictactoe::{GameState, MoveOutcome, Position, Square, rules::winning_line};
use serde::Serialize;
use tracing::{debug, instrument};

/// Label of the order toggle control.
pub const TOGGLE_LABEL: &str = "Toggle Moves Order";

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Where the cell sits.
    position: Position,
    /// What it holds.
    square: Square,
    /// Part of the winning triple.
    winning: bool,
}

impl CellView {
    /// Text drawn inside the cell.
    pub fn mark(&self) -> String {
        self.square.player().map(|p| p.to_string()).unwrap_or_default()
    }

    /// Intent emitted when the cell is clicked.
    pub fn intent(&self) -> Intent {
        Intent::CellClicked(self.position.to_index())
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntryView {
    /// History index this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the step on the board.
    selected: bool,
}

impl MoveEntryView {
    /// Intent emitted when the entry is clicked.
    pub fn intent(&self) -> Intent {
        Intent::HistoryClicked(self.step)
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Heading.
    title: String,
    /// `Winner: X` or `Next Player: O`.
    status: String,
    /// The nine cells, row-major.
    cells: [CellView; 9],
    /// Move list in display order.
    moves: Vec<MoveEntryView>,
    /// Order toggle control text.
    toggle_label: String,
}

impl GameView {
    /// Plain-text rendering, one control per line.
    #[instrument(skip(self))]
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.title.clone(), self.status.clone(), String::new()];
        lines.extend(self.cells.chunks(3).map(|row| {
            row.iter()
                .map(|cell| match cell.square.player() {
                    Some(player) => player.to_string(),
                    None => ".".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")
        }));
        lines.push(String::new());
        lines.extend(self.moves.iter().map(|entry| {
            let marker = if entry.selected { '>' } else { ' ' };
            format!("{} {}. {}", marker, entry.step, entry.label)
        }));
        lines.push(String::new());
        lines.push(format!("[{}]", self.toggle_label));
        lines.join("\n")
    }
}

/// User actions the view can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A board cell (0-8) was clicked.
    CellClicked(usize),
    /// A move-list entry for this step was clicked.
    HistoryClicked(usize),
    /// The order toggle was clicked.
    ToggleOrder,
}

/// Label for the move-list entry of `step`.
#[instrument]
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Status line for the current snapshot.
///
/// A full board without a winner still reports the next player.
#[instrument(skip(state))]
pub fn status_line(state: &GameState) -> String {
    match state.winner() {
        Some(winner) => format!("Winner: {}", winner),
        None => format!("Next Player: {}", state.next_player()),
    }
}

/// Builds the view tree for `state`.
#[instrument(skip(state, title), fields(step = *state.current_step()))]
pub fn render(state: &GameState, title: &str) -> GameView {
    let board = state.current();
    let line = winning_line(board).map(|(_, line)| line);

    let cells = Position::ALL.map(|position| CellView {
        position,
        square: board.get(position),
        winning: line.is_some_and(|l| l.contains(&position)),
    });

    let mut moves: Vec<MoveEntryView> = (0..state.history().len())
        .map(|step| MoveEntryView {
            step,
            label: move_label(step),
            selected: step == *state.current_step(),
        })
        .collect();
    if !state.move_order().is_ascending() {
        moves.sort_by(|a, b| b.step.cmp(&a.step));
    }

    GameView {
        title: title.to_string(),
        status: status_line(state),
        cells,
        moves,
        toggle_label: TOGGLE_LABEL.to_string(),
    }
}

/// Applies an intent to the game.
///
/// Returns the move outcome for cell clicks, `None` otherwise.
#[instrument(skip(state))]
pub fn dispatch(state: &mut GameState, intent: Intent) -> Option<MoveOutcome> {
    debug!(?intent, "Dispatching intent");
    match intent {
        Intent::CellClicked(cell) => Some(state.apply_move(cell)),
        Intent::HistoryClicked(step) => {
            state.jump_to(step);
            None
        }
        Intent::ToggleOrder => {
            state.toggle_move_order();
            None
        }
    }
}

/// Replays cell clicks from a fresh game.
#[instrument(skip(state))]
pub fn replay(state: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        dispatch(state, Intent::CellClicked(cell));
    }
}
