//! Terminal UI: the gated landing page with the embedded game.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, Flow};
pub use input::move_cursor;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}};
use std::io;
use std::path::Path;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::auth::{AuthGate, AuthProvider, SimulatedProvider};
use crate::config::{AppConfig, DEFAULT_LOG_FILTER};
use terminal::{TerminalGuard, restore_terminal};

/// Runs the terminal UI until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    init_file_tracing(config.log_file())?;

    info!(brand = %config.brand(), "Starting terminal UI");

    let provider = SimulatedProvider::new(config.auth().clone());
    let mut app = App::new(AuthGate::new(provider), config.brand().clone());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, &mut app).await;
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    restored.context("Failed to restore terminal")?;
    info!("Terminal UI stopped");
    res
}

/// Draw, wait briefly for one key, handle it to completion, tick the provider.
#[instrument(skip_all)]
pub async fn run_app<B: Backend, P: AuthProvider>(
    terminal: &mut Terminal<B>,
    app: &mut App<P>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && app.handle_key(key) == Flow::Quit
        {
            return Ok(());
        }

        app.tick();
        sleep(Duration::from_millis(10)).await;
    }
}

/// Sends logs to `path` so they never interleave with the screen.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
