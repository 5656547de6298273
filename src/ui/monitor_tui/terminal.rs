use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

/// A terminal taken over for the lifetime of the dashboard
pub trait TerminalSession {
    type Backend: Backend;

    fn terminal(&mut self) -> &mut Terminal<Self::Backend>;

    /// Give the terminal back. Calling it more than once is harmless.
    fn restore(&mut self) -> crate::Result<()>;
}

/// Raw-mode, alternate-screen session on stdout
///
/// Dropping the session restores the terminal, as does a panic while it is
/// active.
pub struct CrosstermSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl CrosstermSession {
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        Self::setup().map_err(|e| {
            let _ = restore_terminal();
            e
        })
    }

    fn setup() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        Ok(Self {
            terminal,
            active: true,
        })
    }
}

impl TerminalSession for CrosstermSession {
    type Backend = CrosstermBackend<Stdout>;

    fn terminal(&mut self) -> &mut Terminal<Self::Backend> {
        &mut self.terminal
    }

    fn restore(&mut self) -> crate::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()?;
        log::debug!("Terminal restored");
        Ok(())
    }
}

impl Drop for CrosstermSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Leave raw mode and the alternate screen, show the cursor
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));
}
