//! Headless rendering: replay clicks and print the view tree.

use anyhow::{Result, bail};
use gato_tictactoe::GameState;
use tracing::{info, instrument};

use crate::config::GatoConfig;
use crate::view::{GameView, Intent, dispatch, render, replay};

/// Replays `moves` on a fresh game and returns the resulting view.
///
/// `jump` is user input here, so an out-of-range step is an error rather
/// than a contract violation.
#[instrument(skip(config))]
pub fn replay_view(
    config: &GatoConfig,
    moves: &[usize],
    jump: Option<usize>,
    toggle: bool,
) -> Result<GameView> {
    let mut state = GameState::with_move_order(config.move_order());
    replay(&mut state, moves);

    if let Some(step) = jump {
        let len = state.history().len();
        if step >= len {
            bail!("Cannot jump to step {}: history has {} entries", step, len);
        }
        dispatch(&mut state, Intent::HistoryClicked(step));
    }
    if toggle {
        dispatch(&mut state, Intent::ToggleOrder);
    }

    info!(
        steps = state.history().len(),
        current_step = *state.current_step(),
        "Replay finished"
    );
    Ok(render(&state, config.title()))
}

/// Formats a view as text or pretty JSON.
#[instrument(skip(view))]
pub fn format_view(view: &GameView, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(view)?)
    } else {
        Ok(view.to_text())
    }
}
