//! Screens and the loop that drives them.
//!
//! Each screen is an [`Animator`]: one call to `run_cycle` computes a frame,
//! draws it and sleeps. [`FrameCycle`] owns the repetition, clearing the
//! terminal between cycles and checking for cancellation only between
//! them, never in the middle of one.

pub mod drift;
pub mod scatter;
pub mod typing;

pub use drift::DriftAnimator;
pub use scatter::{ScatterAnimator, ScatterState};
pub use typing::TypingEffect;

use crate::config::{AnimatorConfig, ScreenKind};
use crate::core::{Banner, TerminalSize};
use crate::error::Result;
use crate::renderer::BannerRenderer;
use crate::terminal::Terminal;
use log::info;

pub trait Animator {
    fn kind(&self) -> ScreenKind;

    /// Whether the terminal is cleared before every cycle.
    fn cleanup_per_cycle(&self) -> bool {
        true
    }

    /// Performs exactly one frame transition, including its delays.
    fn run_cycle(&mut self, terminal: &mut dyn Terminal) -> Result<()>;
}

/// Builds the animator for `kind` with real sleeps and an entropy-seeded rng.
pub fn build_animator(
    kind: ScreenKind,
    config: AnimatorConfig,
    renderer: Box<dyn BannerRenderer>,
) -> Box<dyn Animator> {
    match kind {
        ScreenKind::Fly => Box::new(DriftAnimator::new(config, renderer)),
        ScreenKind::Stat => Box::new(ScatterAnimator::new(config, renderer)),
    }
}

/// Renders the configured word for a terminal of `size`.
pub(crate) fn render_banner(
    renderer: &dyn BannerRenderer,
    config: &AnimatorConfig,
    size: TerminalSize,
) -> Result<Banner> {
    let raw = renderer.render(&config.word, &config.font, size.width)?;
    Banner::build(&raw)
}

/// Joins frame rows, pushed down by `top` blank lines.
pub(crate) fn compose_frame<I>(rows: I, top: usize) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut frame = "\n".repeat(top);
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            frame.push('\n');
        }
        frame.push_str(&row);
    }
    frame
}

/// Repeats an animator's cycle until cancelled.
#[derive(Debug, Default)]
pub struct FrameCycle {
    cycles: u64,
}

impl FrameCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total cycles completed by this loop.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// One cycle: optional clear, then the animator's transition.
    pub fn step<T: Terminal>(&mut self, animator: &mut dyn Animator, terminal: &mut T) -> Result<()> {
        if animator.cleanup_per_cycle() {
            terminal.clear()?;
        }
        animator.run_cycle(terminal)?;
        self.cycles += 1;
        Ok(())
    }

    /// Runs cycles until `cancelled` returns true; it is asked before each
    /// cycle. Returns the number of cycles run by this call.
    pub fn run<T, F>(
        &mut self,
        animator: &mut dyn Animator,
        terminal: &mut T,
        mut cancelled: F,
    ) -> Result<u64>
    where
        T: Terminal,
        F: FnMut(&mut T) -> Result<bool>,
    {
        info!("starting {} loop", animator.kind());
        let start = self.cycles;
        while !cancelled(&mut *terminal)? {
            self.step(&mut *animator, &mut *terminal)?;
        }
        let ran = self.cycles - start;
        info!("{} loop stopped after {} cycles", animator.kind(), ran);
        Ok(ran)
    }
}
