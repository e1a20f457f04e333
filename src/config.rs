//! Animator settings and their validation.

use crate::error::{Result, SaverError};
use crate::renderer::BannerRenderer;
use crate::timing;
use std::fmt;
use std::time::Duration;

pub const APP_NAME: &str = "figsaver";
pub const APP_TITLE: &str = "Figsaver";
pub const DEFAULT_FONT: &str = "standard";

/// Frame delay of the fly screen, in seconds.
pub const FLY_DELAY: f64 = 0.05;
/// Per-character typing delay of the stat screen, in seconds.
pub const STAT_TYPING_DELAY: f64 = 0.005;
/// How long the stat screen keeps a word on screen, in seconds.
pub const FREEZE_WORD_DELAY: f64 = 3.0;

/// The two available screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Banner drifting left to right.
    Fly,
    /// Banner typed at a random spot, then frozen.
    Stat,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 2] = [ScreenKind::Fly, ScreenKind::Stat];

    pub fn name(self) -> &'static str {
        match self {
            ScreenKind::Fly => "figlet-fly",
            ScreenKind::Stat => "figlet-stat",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScreenKind::Fly => "displays flying text",
            ScreenKind::Stat => "displays word in random places on screen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    pub font: String,
    pub word: String,
    /// Seconds between drift frames, or between typed characters.
    pub delay: f64,
    /// Seconds a scattered word stays frozen.
    pub freeze_delay: f64,
}

impl AnimatorConfig {
    /// Defaults for `kind`.
    pub fn for_screen(kind: ScreenKind) -> Self {
        let delay = match kind {
            ScreenKind::Fly => FLY_DELAY,
            ScreenKind::Stat => STAT_TYPING_DELAY,
        };
        Self {
            font: DEFAULT_FONT.to_string(),
            word: APP_TITLE.to_string(),
            delay,
            freeze_delay: FREEZE_WORD_DELAY,
        }
    }

    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = word.into();
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_freeze_delay(mut self, freeze_delay: f64) -> Self {
        self.freeze_delay = freeze_delay;
        self
    }

    pub fn delay(&self) -> Duration {
        timing::seconds(self.delay)
    }

    pub fn freeze_delay(&self) -> Duration {
        timing::seconds(self.freeze_delay)
    }

    /// Checks every field, asking `renderer` for the known fonts.
    pub fn validate(&self, renderer: &dyn BannerRenderer) -> Result<()> {
        validate_word(&self.word)?;
        validate_delay("delay", self.delay)?;
        validate_delay("freeze-delay", self.freeze_delay)?;

        let fonts = renderer.list_fonts()?;
        if !fonts.contains(&self.font) {
            return Err(SaverError::FontNotFound(self.font.clone()));
        }
        Ok(())
    }
}

pub fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(SaverError::config("word", "must not be empty"));
    }
    Ok(())
}

fn validate_delay(option: &'static str, delay: f64) -> Result<()> {
    if !delay.is_finite() || delay <= 0.0 {
        return Err(SaverError::config(
            option,
            format!("`{}` is not a positive number of seconds", delay),
        ));
    }
    Duration::try_from_secs_f64(delay).map_err(|e| {
        SaverError::config(option, format!("`{}` seconds is out of range: {}", delay, e))
    })?;
    Ok(())
}

/// Parses a command-line delay such as `0.05`.
pub fn parse_delay(value: &str) -> Result<f64> {
    let delay = value
        .trim()
        .parse::<f64>()
        .map_err(|_| SaverError::config("delay", format!("`{}` is not a number", value)))?;
    validate_delay("delay", delay)?;
    Ok(delay)
}
