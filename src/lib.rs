//! # figsaver
//!
//! Terminal screensaver screens built on figlet banners.
//!
//! - [`core`]: banner geometry and column-based clipping
//! - [`screen`]: the drifting and scattering animators and the frame loop
//! - [`renderer`]: the figlet-backed banner renderer
//! - [`terminal`]: the display the screens draw on
//!
//! ## Features
//!
//! - `crossterm` (default) - real terminal support via crossterm

pub mod config;
pub mod core;
pub mod error;
pub mod renderer;
pub mod screen;
pub mod terminal;
pub mod timing;


pub use config::{AnimatorConfig, ScreenKind};
pub use crate::core::{Banner, Position, TerminalSize};
pub use error::{Result, SaverError};
pub use renderer::{BannerRenderer, FigletRenderer, StaticRenderer};
pub use screen::{Animator, DriftAnimator, FrameCycle, ScatterAnimator, TypingEffect};
pub use terminal::{HeadlessTerminal, Terminal};
pub use timing::{MockSleeper, Sleeper, ThreadSleeper};

#[cfg(feature = "crossterm")]
pub use terminal::CrosstermTerminal;
