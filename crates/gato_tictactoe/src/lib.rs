//! Pure tic-tac-toe game logic with time travel.
//!
//! A [`GameState`] records every board snapshot the game has passed
//! through. Moves append a new snapshot, [`GameState::jump_to`] rewinds the
//! viewed step without touching history, and a move made from a rewound
//! step replaces the abandoned future.
//!
//! # Example
//!
//! ```
//! use gato_tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//!
//! game.jump_to(0);
//! assert_eq!(game.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, HistoryEntry, IgnoredMove, MoveOrder, MoveOutcome};
pub use position::Position;
pub use types::{Board, Player, Square};
