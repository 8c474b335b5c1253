//! Gato - unified CLI.

use anyhow::Result;
use clap::Parser;
use gato::{
    Cli, Command, GatoConfig, format_view, init_file_logging, init_stderr_logging, replay_view,
    tui::run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GatoConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Render {
            moves,
            jump,
            toggle,
            json,
        } => {
            init_stderr_logging(&config);
            info!(?moves, ?jump, toggle, "Rendering replay");
            let view = replay_view(&config, &moves, jump, toggle)?;
            println!("{}", format_view(&view, json)?);
            Ok(())
        }
    }
}
