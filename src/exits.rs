//! Exit handling: terminal restore and signal handlers.

/// Put the tty back in cooked mode with echo, whatever state we left it in.
pub fn reset_terminal() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    reset_terminal();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT - restore the tty, then re-raise for the default action
extern "C" fn crash_handler(sig: libc::c_int) {
    reset_terminal();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    let exit_handler = signal_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;
    let crash = crash_handler as extern "C" fn(libc::c_int) as libc::sighandler_t;

    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, exit_handler);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash);
        }
    }
}
