//! Game state with a time-travelling move history.

use crate::rules::calculate_winner;
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board as it stood after this step.
    squares: Board,
}

impl HistoryEntry {
    /// Wraps a snapshot.
    pub fn new(squares: Board) -> Self {
        Self { squares }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this order.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether the list is shown oldest first.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// Cell index outside 0-8.
    #[display("cell {} is off the board", _0)]
    OutOfBounds(usize),
    /// The current snapshot already has a winner.
    #[display("{} has already won", _0)]
    GameWon(Player),
    /// The target square is taken.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameState::apply_move`].
///
/// Ignored moves are not errors; callers are free to drop the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded as a new history step.
    Applied {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// State is untouched.
    Ignored(IgnoredMove),
}

/// Complete game state: history, viewed step and move-list order.
///
/// History is never empty and `current_step` always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// Snapshots; index 0 is the empty board.
    #[getter(skip)]
    history: Vec<HistoryEntry>,
    /// Step currently shown on the board.
    current_step: usize,
    /// Move-list display order.
    move_order: MoveOrder,
}

impl GameState {
    /// Creates a new game at step 0 on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_move_order(MoveOrder::default())
    }

    /// Creates a new game with the given initial move-list order.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new())],
            current_step: 0,
            move_order,
        }
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the snapshot at the current step.
    pub fn current(&self) -> &Board {
        self.history[self.current_step].squares()
    }

    /// Returns the player to move, derived from step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner of the current snapshot, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current())
    }

    /// Plays the next player's mark at `cell` (0-8).
    ///
    /// Off-board cells, occupied squares and already-won boards leave the
    /// state untouched. Playing from an earlier step discards every later
    /// step before recording the new one.
    #[instrument(skip(self), fields(current_step = self.current_step))]
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let Some(position) = Position::from_index(cell) else {
            return MoveOutcome::Ignored(IgnoredMove::OutOfBounds(cell));
        };
        if let Some(winner) = self.winner() {
            return MoveOutcome::Ignored(IgnoredMove::GameWon(winner));
        }
        if !self.current().is_empty(position) {
            return MoveOutcome::Ignored(IgnoredMove::SquareOccupied(position));
        }

        let player = self.next_player();
        let next = self.current().with_mark(position, player);
        let discarded = self.history.len() - (self.current_step + 1);

        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::new(next));
        self.current_step = self.history.len() - 1;

        debug!(
            %player,
            %position,
            step = self.current_step,
            discarded,
            "Move applied"
        );
        MoveOutcome::Applied { player, position }
    }

    /// Shows the board as it was at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into the history. Steps are only
    /// ever offered for existing entries, so this is a caller bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump_to({step}) outside history of length {}",
            self.history.len()
        );
        self.current_step = step;
        debug!(step, "Jumped to step");
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order = self.move_order.toggle();
        debug!(order = self.move_order.label(), "Move order toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game_starts_at_empty_board() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(*game.current_step(), 0);
        assert_eq!(game.current(), &Board::new());
        assert_eq!(game.next_player(), Player::X);
        assert!(game.move_order().is_ascending());
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = GameState::new();
        let before = game.clone();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Ignored(IgnoredMove::OutOfBounds(9))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = GameState::new();
        game.apply_move(4);
        let before = game.clone();

        assert_eq!(
            game.apply_move(4),
            MoveOutcome::Ignored(IgnoredMove::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_earlier_snapshots_are_never_rewritten() {
        let mut game = GameState::new();
        game.apply_move(0);
        game.apply_move(1);

        assert_eq!(game.history()[0].squares(), &Board::new());
        assert_eq!(
            game.history()[1].squares().get(Position::TopCenter),
            Square::Empty
        );
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameState::new();
        game.apply_move(0);
        game.apply_move(1);
        game.jump_to(1);

        assert_eq!(*game.current_step(), 1);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    #[should_panic(expected = "outside history")]
    fn test_jump_past_history_panics() {
        let mut game = GameState::new();
        game.jump_to(1);
    }

    #[test]
    fn test_toggle_touches_only_order() {
        let mut game = GameState::new();
        game.apply_move(2);
        let before = game.clone();

        game.toggle_move_order();
        assert_eq!(*game.move_order(), MoveOrder::Descending);
        assert_eq!(game.history(), before.history());
        assert_eq!(game.current_step(), before.current_step());

        game.toggle_move_order();
        assert_eq!(game, before);
    }

    #[test]
    fn test_state_serializes_history() {
        let mut game = GameState::new();
        game.apply_move(0);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["move_order"], "Ascending");
    }
}
