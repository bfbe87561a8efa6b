//! Terminal guard: raw mode, alternate screen and painting.
//!
//! Everything set up in [`Terminal::enter`] is undone on drop, also when the
//! main loop leaves through an error.

use crate::config::RuntimeConfig;
use crate::render::{Frame, OutputBuffer};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};

/// An initialized terminal.
pub struct Terminal {
    stdout: Stdout,
    output: OutputBuffer,
    alternate_screen: bool,
    width: u16,
    height: u16,
    needs_clear: bool,
}

impl Terminal {
    /// Enter raw mode and, if configured, the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be queried or configured.
    pub fn enter(config: &RuntimeConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        // From here on `Drop` restores whatever was already enabled.
        let mut term = Self {
            stdout: io::stdout(),
            output: OutputBuffer::with_capacity(usize::from(width) * usize::from(height) * 4),
            alternate_screen: config.alternate_screen,
            width,
            height,
            needs_clear: true,
        };

        if config.alternate_screen {
            execute!(term.stdout, EnterAlternateScreen)?;
        }
        execute!(term.stdout, EnableBracketedPaste, cursor::Hide)?;
        Ok(term)
    }

    /// Current size in columns and rows.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Record a new size; the next draw clears the screen first.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.needs_clear = true;
    }

    /// Paint a frame and flush it in one write.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.output.clear();
        self.output.paint(frame, self.needs_clear);
        self.needs_clear = false;
        self.output.flush_to(&mut self.stdout)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, DisableBracketedPaste, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(self.stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
