//! Column-based string helpers.
//!
//! Banner art is laid out in terminal columns, not bytes or chars, so every
//! slice taken out of a banner line goes through these helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal columns.
#[inline]
pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pads `line` with spaces up to `columns` display columns.
pub fn pad_right(line: &str, columns: usize) -> String {
    let current = width(line);
    let mut out = String::with_capacity(line.len() + columns.saturating_sub(current));
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', columns.saturating_sub(current)));
    out
}

/// Drops the first `columns` display columns of `line`.
///
/// A wide character split by the cut leaves a space for its visible half,
/// so the result is always `width(line) - columns` columns wide.
pub fn skip_columns(line: &str, columns: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut seen = 0;
    for c in line.chars() {
        if seen >= columns {
            out.push(c);
            continue;
        }
        seen += c.width().unwrap_or(0);
        if seen > columns {
            out.extend(std::iter::repeat_n(' ', seen - columns));
        }
    }
    out
}

/// Keeps at most the first `columns` display columns of `line`.
pub fn take_columns(line: &str, columns: usize) -> String {
    let mut out = String::with_capacity(line.len().min(columns * 4));
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
