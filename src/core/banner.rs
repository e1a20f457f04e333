use super::text;
use crate::error::{Result, SaverError};
use log::debug;

/// A rectangular block of rendered banner text.
///
/// Every line is exactly `width` display columns wide, which is what lets
/// the animators slice and pad lines without special-casing ragged rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    lines: Vec<String>,
    width: usize,
}

impl Banner {
    /// Builds a banner from raw renderer output.
    ///
    /// One trailing line break and any carriage returns are dropped; short
    /// lines are right-padded with spaces to the widest line.
    pub fn build(raw_text: &str) -> Result<Self> {
        let body = raw_text
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(raw_text);
        if body.is_empty() {
            return Err(SaverError::EmptyRender);
        }

        let raw_lines: Vec<&str> = body
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let width = raw_lines.iter().map(|l| text::width(l)).max().unwrap_or(0);
        let lines: Vec<String> = raw_lines
            .into_iter()
            .map(|l| text::pad_right(l, width))
            .collect();

        debug!("built banner {}x{}", width, lines.len());
        Ok(Self { lines, width })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the whole banner fits inside `cols` x `rows`.
    pub fn fits(&self, cols: usize, rows: usize) -> bool {
        self.width <= cols && self.height() <= rows
    }
}
