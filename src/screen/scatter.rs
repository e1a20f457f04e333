use super::{Animator, TypingEffect, compose_frame, render_banner};
use crate::config::{AnimatorConfig, ScreenKind};
use crate::core::{Banner, Position, TerminalSize};
use crate::error::{Result, SaverError};
use crate::renderer::BannerRenderer;
use crate::terminal::Terminal;
use crate::timing::{Sleeper, ThreadSleeper};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterState {
    /// Choosing a new spot and typing the banner there.
    Randomizing,
    /// Banner fully shown and frozen.
    Displaying,
}

/// Types the banner at a random spot, holds it, then moves on.
pub struct ScatterAnimator<R: Rng = StdRng> {
    config: AnimatorConfig,
    renderer: Box<dyn BannerRenderer>,
    sleeper: Box<dyn Sleeper>,
    rng: R,
    typing: TypingEffect,
    state: ScatterState,
    position: Position,
    size: TerminalSize,
    banner: Option<Banner>,
}

impl ScatterAnimator<StdRng> {
    pub fn new(config: AnimatorConfig, renderer: Box<dyn BannerRenderer>) -> Self {
        Self::with_parts(
            config,
            renderer,
            Box::new(ThreadSleeper),
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> ScatterAnimator<R> {
    pub fn with_parts(
        config: AnimatorConfig,
        renderer: Box<dyn BannerRenderer>,
        sleeper: Box<dyn Sleeper>,
        rng: R,
    ) -> Self {
        let typing = TypingEffect::new(config.delay());
        Self {
            config,
            renderer,
            sleeper,
            rng,
            typing,
            state: ScatterState::Randomizing,
            position: Position::default(),
            size: TerminalSize::default(),
            banner: None,
        }
    }

    pub fn state(&self) -> ScatterState {
        self.state
    }

    /// 0-based offset chosen by the last placement.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Picks a new spot where the whole banner is visible and returns the
    /// block to type there.
    pub fn place(&mut self, size: TerminalSize) -> Result<String> {
        self.state = ScatterState::Randomizing;
        self.size = size;
        let banner = render_banner(self.renderer.as_ref(), &self.config, size)?;

        if !banner.fits(size.width, size.height) {
            return Err(SaverError::BannerTooBig {
                width: banner.width(),
                height: banner.height(),
                cols: size.width,
                rows: size.height,
            });
        }

        let x = self.rng.gen_range(0..=size.width - banner.width());
        let y = self.rng.gen_range(0..=size.height - banner.height());
        self.position = Position::new(x, y);
        debug!("scatter placed banner at {:?}", self.position);

        let indent = " ".repeat(x);
        let rows = banner.lines().iter().map(|line| format!("{}{}", indent, line));
        let block = compose_frame(rows, y);

        self.banner = Some(banner);
        Ok(block)
    }
}

impl<R: Rng> Animator for ScatterAnimator<R> {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Stat
    }

    fn run_cycle(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        let size = terminal.size()?;
        let block = self.place(size)?;
        self.typing
            .type_out(terminal, &block, self.sleeper.as_ref())?;
        self.state = ScatterState::Displaying;
        self.sleeper.sleep(self.config.freeze_delay());
        Ok(())
    }
}
