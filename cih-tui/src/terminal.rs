//! Terminal session for the interactive app.
//!
//! [`TerminalSession`] owns raw mode and the alternate screen for as long as
//! it lives. Dropping it, returning early with `?`, or panicking (with the
//! hook from [`install_panic_hook`]) all hand the terminal back in the state
//! the shell expects.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the interactive app.
pub type CihTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal that is restored when dropped.
pub struct TerminalSession {
    terminal: CihTerminal,
    active: bool,
}

impl TerminalSession {
    /// Switches the terminal into raw mode on the alternate screen.
    ///
    /// If entering the alternate screen fails, raw mode is switched off
    /// again before the error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(err) => {
                let _ = leave(&mut io::stdout());
                Err(err)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut CihTerminal {
        &mut self.terminal
    }

    /// Restores the terminal and reports any error doing so.
    pub fn close(mut self) -> io::Result<()> {
        self.active = false;
        leave(self.terminal.backend_mut())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = leave(self.terminal.backend_mut());
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor again.
///
/// Every step runs even if an earlier one fails; the first error wins.
fn leave(out: &mut impl io::Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Installs a panic hook that restores the terminal before the panic
/// message is printed.
///
/// Call once at startup, before [`TerminalSession::enter`].
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = leave(&mut io::stdout());
        original_hook(panic_info);
    }));
}
