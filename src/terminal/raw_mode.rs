//! Raw mode for prompt editing, scoped to a guard.

use std::mem;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

use super::stdin_is_tty;

/// Holds the terminal in raw mode until released or dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode if stdin is a terminal that allows it.
    ///
    /// `None` means the caller should read plain lines instead.
    pub fn on_tty() -> Option<Self> {
        if !stdin_is_tty() {
            return None;
        }
        match enable_raw_mode() {
            Ok(()) => Some(Self { active: true }),
            Err(e) => {
                debug!(error = %e, "raw mode unavailable, reading plain lines");
                None
            }
        }
    }

    /// Restore cooked mode now. Later calls and the drop do nothing.
    pub fn release(&mut self) {
        if mem::take(&mut self.active) {
            let _ = disable_raw_mode();
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
