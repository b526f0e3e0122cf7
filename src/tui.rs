use std::{io, panic};

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Frame;

use crate::{
    event::{CountdownEvent, EventHandler},
    result::{CountdownError, Result},
};

pub type CrosstermTerminal = ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>;

/// Representation of a terminal user interface.
///
/// It is responsible for setting up the terminal,
/// initializing the interface and handling the draw events.
/// The terminal is restored when the `Tui` is dropped, and the event
/// handler's timer thread is stopped along with it.
pub struct Tui {
    /// Interface to the Terminal.
    terminal: CrosstermTerminal,
    /// Terminal event handler.
    events: EventHandler,
    entered: bool,
}

impl Tui {
    pub fn new(terminal: CrosstermTerminal, events: EventHandler) -> Self {
        Self { terminal, events, entered: false }
    }

    pub fn draw(&mut self, render_ui: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(render_ui)
            .map_err(|e| CountdownError::Terminal(format!("failed to draw UI: {e}").into()))?;
        Ok(())
    }

    /// iterates over all currently available events; waits
    /// until at least one event is available.
    pub fn receive_events<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(CountdownEvent),
    {
        let event = self
            .events
            .next()
            .map_err(|_| CountdownError::GeneralError("event channel closed".into()))?;

        f(event);
        while let Some(event) = self.events.try_next() {
            f(event)
        }

        Ok(())
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()
            .map_err(|_| CountdownError::Terminal("failed to initialize raw mode".into()))?;

        crossterm::execute!(io::stdout(), EnterAlternateScreen)
            .map_err(|_| CountdownError::Terminal("failed to enter alternate screen".into()))?;
        self.entered = true;

        // Reset the terminal before the panic message is printed.
        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            let _ = Self::reset();
            panic_hook(panic);
        }));

        self.terminal
            .hide_cursor()
            .map_err(|_| CountdownError::Terminal("failed to hide cursor".into()))?;
        self.terminal
            .clear()
            .map_err(|_| CountdownError::Terminal("failed to clear the screen".into()))?;
        Ok(())
    }

    fn reset() -> Result<()> {
        terminal::disable_raw_mode()
            .map_err(|_| CountdownError::Terminal("failed to disable raw mode".into()))?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen)
            .map_err(|_| CountdownError::Terminal("failed to leave alternate screen".into()))?;

        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }

        self.entered = false;
        Self::reset()?;
        self.terminal
            .show_cursor()
            .map_err(|_| CountdownError::Terminal("failed to show cursor".into()))?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
