//! Command-line interface for gato.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gato - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "gato")]
#[command(about = "Tic-tac-toe with a time-travelling move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay cell clicks and print the resulting screen
    Render {
        /// Cells to click, 0-8, comma separated
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Click the order toggle before printing
        #[arg(long)]
        toggle: bool,

        /// Print the view tree as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["gato"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_render_arguments() {
        let cli = Cli::try_parse_from([
            "gato", "render", "--moves", "0,3,1", "--jump", "1", "--json", "-c", "gato.toml",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("gato.toml")));
        assert_eq!(
            cli.command,
            Some(Command::Render {
                moves: vec![0, 3, 1],
                jump: Some(1),
                toggle: false,
                json: true,
            })
        );
    }

    #[test]
    fn test_rejects_non_numeric_moves() {
        assert!(Cli::try_parse_from(["gato", "render", "--moves", "a,b"]).is_err());
    }
}
