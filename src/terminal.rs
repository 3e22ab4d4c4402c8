use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Raw-mode alternate screen that is handed back to the shell on drop.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(setup_panic_hook);
        enable_raw_mode()?;
        or_restore(io::stdout().execute(EnterAlternateScreen))?;
        let terminal = or_restore(Terminal::new(CrosstermBackend::new(io::stdout())))?;
        debug!("terminal: entered alternate screen");
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            warn!("terminal: failed to restore: {}", err);
        }
        let _ = self.terminal.show_cursor();
        debug!("terminal: restored");
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Hand the terminal back before propagating a setup failure, since no
/// `TerminalSession` exists yet to do it on drop.
fn or_restore<T>(result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
