//! Terminal setup and teardown for sidenav TUI.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used throughout the TUI.
pub type SidenavTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Sets up the terminal for TUI rendering.
///
/// Enables raw mode, enters the alternate screen and, when `mouse` is set,
/// turns on mouse capture. Pass the same flag to `restore_terminal`.
pub fn setup_terminal(mouse: bool) -> io::Result<SidenavTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its normal state.
pub fn restore_terminal(terminal: &mut SidenavTerminal, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal on crash.
///
/// Call once at startup before entering the TUI.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Best-effort; the original hook still prints the message.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_and_restore_functions_have_correct_signatures() {
        // A real TTY is needed to exercise these.
        fn _check_setup() -> io::Result<SidenavTerminal> {
            setup_terminal(true)
        }

        fn _check_restore(t: &mut SidenavTerminal) -> io::Result<()> {
            restore_terminal(t, true)
        }
    }
}
