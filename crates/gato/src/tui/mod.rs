//! Terminal front end: mounts the view tree into a full-screen terminal.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Flow, Focus};
pub use layout::{Hit, Regions};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tracing::{debug, error, info, instrument, warn};

use crate::config::GatoConfig;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned, including one
/// raised while setting the terminal up.
#[instrument(skip(config))]
pub fn run_tui(config: &GatoConfig) -> Result<()> {
    info!("Starting Gato TUI");

    let mut guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    guard.restore()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(steps = app.game().history().len(), "Gato TUI exited");
    res
}

/// Raw mode plus alternate screen, undone on drop.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Switches the terminal into raw mode and the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on an early return drops the guard and restores.
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restores the terminal, reporting any failure.
    fn restore(&mut self) -> io::Result<()> {
        self.restored = true;
        disable_raw_mode()?;
        leave_screen(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        debug!("Restoring terminal after early exit");
        if let Err(err) = self.restore() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves the alternate screen and shows the cursor again.
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Draw, wait for one input event, dispatch it; repeat.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| draw(f, app))?.area;

        let flow = match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            other => {
                debug!(event = ?other, "Ignoring event");
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}
