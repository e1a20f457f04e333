use crate::error::Result;
use crate::terminal::Terminal;
use crate::timing::Sleeper;
use std::time::Duration;

/// Writes text one character at a time, like someone typing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypingEffect {
    char_delay: Duration,
}

impl TypingEffect {
    pub fn new(char_delay: Duration) -> Self {
        Self { char_delay }
    }

    /// Writes `text` left to right, top to bottom, flushing after every
    /// character. Line breaks are written without a pause. Returns once the
    /// whole block is on screen.
    pub fn type_out(
        &self,
        terminal: &mut dyn Terminal,
        text: &str,
        sleeper: &dyn Sleeper,
    ) -> Result<()> {
        let mut buf = [0u8; 4];
        for c in text.chars() {
            terminal.write(c.encode_utf8(&mut buf))?;
            terminal.flush()?;

            if c != '\n' && !self.char_delay.is_zero() {
                sleeper.sleep(self.char_delay);
            }
        }
        Ok(())
    }
}
