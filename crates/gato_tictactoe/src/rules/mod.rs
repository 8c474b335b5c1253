//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot, separated from history storage.

pub mod win;

pub use win::{LINES, calculate_winner, winning_line};
