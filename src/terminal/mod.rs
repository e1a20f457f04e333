#[cfg(feature = "crossterm")]
pub mod tty;

use crate::core::TerminalSize;
use crate::error::Result;

#[cfg(feature = "crossterm")]
pub use tty::CrosstermTerminal;

/// The display the animators draw on.
pub trait Terminal {
    /// Current size; read once per cycle.
    fn size(&self) -> Result<TerminalSize>;

    /// Blanks the screen and homes the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Writes `text` at the cursor. `\n` starts a new row at column 0.
    fn write(&mut self, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

/// In-memory terminal that records everything written to it.
#[derive(Debug, Clone, Default)]
pub struct HeadlessTerminal {
    size: TerminalSize,
    screen: String,
    writes: Vec<String>,
    clears: usize,
    flushes: usize,
}

impl HeadlessTerminal {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            size: TerminalSize::new(width, height),
            ..Default::default()
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.size = TerminalSize::new(width, height);
    }

    /// Text written since the last clear.
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Rows of the current screen, as they would be laid out from the top.
    pub fn rows(&self) -> Vec<&str> {
        self.screen.split('\n').collect()
    }

    /// Every individual `write` call, in order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl Terminal for HeadlessTerminal {
    fn size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn clear(&mut self) -> Result<()> {
        self.screen.clear();
        self.clears += 1;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.screen.push_str(text);
        self.writes.push(text.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
