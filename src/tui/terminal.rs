//! Terminal mode restoration.

use crossterm::{
    cursor, execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a restore action exactly once: on [`TerminalGuard::restore`], or on
/// drop if the guard goes out of scope first (early `?` return or panic).
pub(crate) struct TerminalGuard<F: FnOnce() -> io::Result<()>> {
    restore: Option<F>,
}

impl<F: FnOnce() -> io::Result<()>> TerminalGuard<F> {
    pub(crate) fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Restores now and reports the result.
    pub(crate) fn restore(mut self) -> io::Result<()> {
        match self.restore.take() {
            Some(restore) => restore(),
            None => Ok(()),
        }
    }
}

impl<F: FnOnce() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            debug!("Restoring terminal from guard");
            if let Err(err) = restore() {
                warn!(error = %err, "Failed to restore terminal");
            }
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Safe to call when the alternate screen was never entered.
pub(crate) fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}
