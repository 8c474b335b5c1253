//! Gato - tic-tac-toe with time travel.
//!
//! Game rules and history live in [`gato_tictactoe`]. This crate adds the
//! view tree, the terminal front end that mounts it, and configuration.
//!
//! # Architecture
//!
//! - **View**: pure `GameState -> GameView` rendering and intent dispatch
//! - **TUI**: ratatui/crossterm front end with keyboard and mouse input
//! - **Headless**: replay clicks and print the view as text or JSON
//! - **Config**: optional TOML file, `.env` and CLI flags
//!
//! # Example
//!
//! ```
//! use gato::{GatoConfig, replay_view};
//!
//! let view = replay_view(&GatoConfig::default(), &[0, 3, 1, 4, 2], None, false)?;
//! assert_eq!(view.status(), "Winner: X");
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod headless;
mod logging;
pub mod tui;
pub mod view;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GatoConfig};
pub use headless::{format_view, replay_view};
pub use logging::{init_file_logging, init_stderr_logging};
pub use view::{CellView, GameView, Intent, MoveEntryView, dispatch, render};
