//! Exit handling: signal handlers and terminal cleanup.

use crate::terminal;

/// Restore canonical mode and echo using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every normal exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    if terminal::stdout_is_tty() {
        let reset = b"\x1b[0m";
        unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                reset.as_ptr() as *const libc::c_void,
                reset.len(),
            );
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: report the abort and exit, letting atexit clean up.
extern "C" fn signal_handler(_: libc::c_int) {
    let msg = b"\r\nAborted.\r\n";
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            msg.as_ptr() as *const libc::c_void,
            msg.len(),
        );
        libc::exit(ABORTED);
    }
}

/// Exit status after an interrupt.
pub const ABORTED: i32 = 130;

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep the process out of core dumps so passwords cannot leak through them.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
