//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, TTY detection and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;

/// True when stdin is a TTY.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// True when stdout is a TTY.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}
