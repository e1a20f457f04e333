use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaverError {
    #[error("invalid value for option `{option}`: {reason}")]
    Configuration {
        option: &'static str,
        reason: String,
    },

    #[error("could not execute `{command}`: {source}. Make sure you have figlet installed!")]
    RenderUnavailable {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    RenderFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("font `{0}` does not exist (see --help-fonts)")]
    FontNotFound(String),

    #[error("banner renderer produced no output")]
    EmptyRender,

    #[error(
        "the word you are trying to print is just too big: banner is {height} rows tall, terminal has {rows}"
    )]
    BannerTooTall { height: usize, rows: usize },

    #[error(
        "the word you are trying to print is just too big: banner is {width}x{height}, terminal is {cols}x{rows}"
    )]
    BannerTooBig {
        width: usize,
        height: usize,
        cols: usize,
        rows: usize,
    },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl SaverError {
    pub(crate) fn config(option: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            option,
            reason: reason.into(),
        }
    }

    /// Errors the user can only fix by changing the word, font or terminal.
    pub fn is_fatal_geometry(&self) -> bool {
        matches!(self, Self::BannerTooTall { .. } | Self::BannerTooBig { .. })
    }
}

pub type Result<T> = std::result::Result<T, SaverError>;
