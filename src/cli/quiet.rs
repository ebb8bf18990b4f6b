//! Global quiet mode state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings and non-essential output.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}
