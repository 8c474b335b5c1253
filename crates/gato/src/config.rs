//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gato_tictactoe::MoveOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// User-facing settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GatoConfig {
    /// Heading shown above the board.
    #[serde(default = "default_title")]
    title: String,

    /// Start with the move list in descending order.
    #[serde(default)]
    descending_moves: bool,

    /// File that receives logs while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_title() -> String {
    "😺 G A T O 😺".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("gato.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GatoConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            descending_moves: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GatoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Initial move-list order for new games.
    pub fn move_order(&self) -> MoveOrder {
        if self.descending_moves {
            MoveOrder::Descending
        } else {
            MoveOrder::Ascending
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
