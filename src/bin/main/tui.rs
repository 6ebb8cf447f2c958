//! The terminal setup and teardown.

use crate::event::EventHandler;
use color_eyre::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::Backend, Frame, Terminal};
use std::{io, panic};

/// Anything that can draw itself into a frame.
pub trait Render {
    fn render(&mut self, frame: &mut Frame);
}

/// The terminal user interface: the terminal itself and the source of its events.
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    pub events: EventHandler,
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Tui { terminal, events }
    }

    /// Switches the terminal into the raw mode and the alternate screen.
    ///
    /// A panic hook is installed as well, so that a panic doesn't leave the terminal in a broken state.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stderr(), EnterAlternateScreen)?;

        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = reset_terminal();
            panic_hook(info);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restores the terminal.
    pub fn exit(&mut self) -> Result<()> {
        reset_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw<R: Render>(&mut self, app: &mut R) -> Result<()> {
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }
}

fn reset_terminal() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stderr(), LeaveAlternateScreen)?;
    Ok(())
}
