pub mod figlet;

use crate::error::{Result, SaverError};
use std::collections::BTreeSet;

pub use figlet::FigletRenderer;

/// Turns a word into a block of banner art.
pub trait BannerRenderer {
    /// Renders `text` in `font`, wrapping at `max_width` columns.
    fn render(&self, text: &str, font: &str, max_width: usize) -> Result<String>;

    /// Every font name `render` accepts.
    fn list_fonts(&self) -> Result<BTreeSet<String>>;
}

/// Renderer that returns the same block for every word, for tests and demos.
#[derive(Debug, Clone)]
pub struct StaticRenderer {
    art: String,
    fonts: BTreeSet<String>,
}

impl StaticRenderer {
    pub fn new(art: impl Into<String>) -> Self {
        Self {
            art: art.into(),
            fonts: BTreeSet::from(["standard".to_string()]),
        }
    }

    pub fn with_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fonts = fonts.into_iter().map(Into::into).collect();
        self
    }
}

impl BannerRenderer for StaticRenderer {
    fn render(&self, _text: &str, font: &str, _max_width: usize) -> Result<String> {
        if !self.fonts.contains(font) {
            return Err(SaverError::FontNotFound(font.to_string()));
        }
        Ok(self.art.clone())
    }

    fn list_fonts(&self) -> Result<BTreeSet<String>> {
        Ok(self.fonts.clone())
    }
}
