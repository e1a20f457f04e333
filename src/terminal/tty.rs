use super::Terminal;
use crate::core::TerminalSize;
use crate::error::Result;
use ::crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use std::borrow::Cow;
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// A real terminal driven through crossterm.
///
/// `enter` switches to raw mode on the alternate screen with the cursor
/// hidden; `leave` (or drop) restores the user's screen.
pub struct CrosstermTerminal<W: Write = Stdout> {
    out: W,
    active: bool,
}

impl CrosstermTerminal<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out, active: false }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        self.active = true;
        debug!("entered alternate screen");
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        debug!("left alternate screen");
        Ok(())
    }

    /// Drains pending input and reports whether the user asked to quit.
    pub fn cancel_requested(&mut self) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_cancel_key(&key) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?.into())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let text = if self.active {
            raw_line_breaks(text)
        } else {
            Cow::Borrowed(text)
        };
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for CrosstermTerminal<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Raw mode does not return the carriage on `\n`.
fn raw_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', "\r\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn is_cancel_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_line_breaks() {
        assert_eq!(raw_line_breaks("a\nb"), "a\r\nb");
        assert!(matches!(raw_line_breaks("ab"), Cow::Borrowed("ab")));
    }

    #[test]
    fn test_cancel_keys() {
        assert!(is_cancel_key(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_cancel_key(&KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
        assert!(is_cancel_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_cancel_key(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!is_cancel_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_inactive_terminal_writes_verbatim() {
        let mut term = CrosstermTerminal::new(Vec::new());
        term.write("a\nb").unwrap();
        term.flush().unwrap();
        assert_eq!(term.out, b"a\nb");
    }
}
