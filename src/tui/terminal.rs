//! Terminal mode restoration.

use crossterm::{
    cursor::Show, event::DisableMouseCapture, execute, terminal::LeaveAlternateScreen,
    terminal::disable_raw_mode,
};
use std::io::Write;
use tracing::{debug, warn};

/// Restores the terminal on drop.
///
/// Created right after raw mode is enabled, so every exit path, setup
/// failures included, leaves raw mode, the alternate screen and mouse
/// capture.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Guards the terminal written through `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to restore terminal screen");
        }
    }
}
