//! Centralized warning and status messages. All go to stderr.

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Plain status line, suppressed in quiet mode.
pub fn status(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn settings_saved(path: &str) {
    status(&format!("Defaults saved \u{2192} {path}"));
}
