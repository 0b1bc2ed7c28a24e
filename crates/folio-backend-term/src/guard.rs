//! Raw-mode and alternate-screen lifetime.

use std::io;
use std::sync::Once;

use crossterm::ExecutableCommand;
use crossterm::cursor;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};

static PANIC_HOOK_SET: Once = Once::new();

/// Puts the terminal into raw mode on the alternate screen and restores it
/// on drop, or on panic.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        set_panic_hook();
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = io::stdout().execute(cursor::Show);
    let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}
