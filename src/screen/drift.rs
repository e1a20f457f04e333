use super::{Animator, compose_frame, render_banner};
use crate::config::{AnimatorConfig, ScreenKind};
use crate::core::{Banner, Position, TerminalSize, text};
use crate::error::{Result, SaverError};
use crate::renderer::BannerRenderer;
use crate::terminal::Terminal;
use crate::timing::{Sleeper, ThreadSleeper};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Moves the banner left to right across the terminal.
///
/// `position.x` is the 1-based column of the banner's right edge: the banner
/// enters from the left at `x = 1` and has fully left the screen once `x`
/// reaches `terminal width + banner width`, at which point it restarts from
/// the left on a random row.
pub struct DriftAnimator<R: Rng = StdRng> {
    config: AnimatorConfig,
    renderer: Box<dyn BannerRenderer>,
    sleeper: Box<dyn Sleeper>,
    rng: R,
    position: Position,
    size: TerminalSize,
    banner: Option<Banner>,
}

impl DriftAnimator<StdRng> {
    pub fn new(config: AnimatorConfig, renderer: Box<dyn BannerRenderer>) -> Self {
        Self::with_parts(
            config,
            renderer,
            Box::new(ThreadSleeper),
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> DriftAnimator<R> {
    pub fn with_parts(
        config: AnimatorConfig,
        renderer: Box<dyn BannerRenderer>,
        sleeper: Box<dyn Sleeper>,
        rng: R,
    ) -> Self {
        Self {
            config,
            renderer,
            sleeper,
            rng,
            position: Position::default(),
            size: TerminalSize::default(),
            banner: None,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.size
    }

    /// Banner drawn by the last cycle.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Moves one column to the right and returns the frame to draw.
    pub fn advance(&mut self, size: TerminalSize) -> Result<String> {
        self.size = size;
        let banner = render_banner(self.renderer.as_ref(), &self.config, size)?;

        if banner.height() > size.height {
            return Err(SaverError::BannerTooTall {
                height: banner.height(),
                rows: size.height,
            });
        }

        if self.position.x >= size.width + banner.width() {
            let max_y = size.height.saturating_sub(banner.height()).max(1);
            self.position = Position::new(1, self.rng.gen_range(1..=max_y));
            debug!("drift wrapped to row {}", self.position.y);
        }
        self.position.x += 1;
        trace!("drift frame at {:?}", self.position);

        let x = self.position.x;
        let rows = banner
            .lines()
            .iter()
            .map(|line| clip_line(line, x, banner.width(), size.width));
        let frame = compose_frame(rows, self.position.y);

        self.banner = Some(banner);
        Ok(frame)
    }
}

impl<R: Rng> Animator for DriftAnimator<R> {
    fn kind(&self) -> ScreenKind {
        ScreenKind::Fly
    }

    fn run_cycle(&mut self, terminal: &mut dyn Terminal) -> Result<()> {
        let size = terminal.size()?;
        let frame = self.advance(size)?;
        terminal.write(&frame)?;
        terminal.flush()?;
        self.sleeper.sleep(self.config.delay());
        Ok(())
    }
}

/// Visible part of one banner line whose right edge sits at column `x`.
pub fn clip_line(line: &str, x: usize, banner_width: usize, term_width: usize) -> String {
    if x < banner_width {
        // entering: only the trailing `x` columns are on screen
        let visible = text::skip_columns(line, banner_width - x);
        return text::take_columns(&visible, term_width);
    }

    let pad = x - banner_width;
    let mut out = " ".repeat(pad);
    if x > term_width {
        // leaving: the last `x - term_width` columns are past the right edge
        out.push_str(&text::take_columns(
            line,
            banner_width.saturating_sub(x - term_width),
        ));
    } else {
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::StaticRenderer;
    use crate::terminal::HeadlessTerminal;
    use crate::timing::MockSleeper;
    use rand::rngs::mock::StepRng;
    use std::sync::Arc;
    use std::time::Duration;

    const ART: &str = "abcde\nfghij";

    fn animator(art: &str) -> DriftAnimator<StdRng> {
        DriftAnimator::with_parts(
            AnimatorConfig::for_screen(ScreenKind::Fly),
            Box::new(StaticRenderer::new(art)),
            Box::new(MockSleeper::new()),
            StdRng::seed_from_u64(7),
        )
    }

    #[test]
    fn test_clip_entering() {
        assert_eq!(clip_line("abcde", 1, 5, 20), "e");
        assert_eq!(clip_line("abcde", 3, 5, 20), "cde");
    }

    #[test]
    fn test_clip_fully_entered_is_unchanged() {
        assert_eq!(clip_line("abcde", 5, 5, 20), "abcde");
    }

    #[test]
    fn test_clip_on_screen() {
        assert_eq!(clip_line("abcde", 8, 5, 20), "   abcde");
        assert_eq!(clip_line("abcde", 20, 5, 20), format!("{}abcde", " ".repeat(15)));
    }

    #[test]
    fn test_clip_leaving() {
        assert_eq!(clip_line("abcde", 22, 5, 20), format!("{}abc", " ".repeat(17)));
        assert_eq!(clip_line("abcde", 25, 5, 20), " ".repeat(20));
    }

    #[test]
    fn test_clip_never_exceeds_terminal() {
        for x in 1..=25 {
            assert!(text::width(&clip_line("abcde", x, 5, 20)) <= 20, "x = {}", x);
        }
    }

    #[test]
    fn test_advance_moves_right() {
        let mut drift = animator(ART).with_position(Position::new(3, 2));
        let frame = drift.advance(TerminalSize::new(20, 10)).unwrap();

        assert_eq!(drift.position(), Position::new(4, 2));
        assert_eq!(frame, "\n\nbcde\nghij");
    }

    #[test]
    fn test_wraps_after_leaving_right_edge() {
        let mut drift = animator(ART).with_position(Position::new(25, 3));
        drift.advance(TerminalSize::new(20, 10)).unwrap();

        let pos = drift.position();
        assert_eq!(pos.x, 2);
        assert!((1..=8).contains(&pos.y), "y = {}", pos.y);
    }

    #[test]
    fn test_wraps_when_terminal_shrank() {
        let mut drift = animator(ART).with_position(Position::new(60, 3));
        drift.advance(TerminalSize::new(20, 10)).unwrap();
        assert_eq!(drift.position().x, 2);
    }

    #[test]
    fn test_full_height_banner_uses_first_row() {
        let mut drift = DriftAnimator::with_parts(
            AnimatorConfig::for_screen(ScreenKind::Fly),
            Box::new(StaticRenderer::new(ART)),
            Box::new(MockSleeper::new()),
            StepRng::new(u64::MAX / 2, 1),
        )
        .with_position(Position::new(25, 0));

        drift.advance(TerminalSize::new(20, 2)).unwrap();
        assert_eq!(drift.position(), Position::new(2, 1));
    }

    #[test]
    fn test_too_tall() {
        let mut drift = animator(ART);
        let err = drift.advance(TerminalSize::new(20, 1)).unwrap_err();
        assert!(matches!(err, SaverError::BannerTooTall { height: 2, rows: 1 }));
        assert_eq!(drift.position(), Position::default());
    }

    #[test]
    fn test_run_cycle_writes_frame_and_sleeps() {
        let sleeper = Arc::new(MockSleeper::new());
        let mut drift = DriftAnimator::with_parts(
            AnimatorConfig::for_screen(ScreenKind::Fly).with_delay(0.2),
            Box::new(StaticRenderer::new(ART)),
            Box::new(Arc::clone(&sleeper)),
            StdRng::seed_from_u64(1),
        );
        let mut term = HeadlessTerminal::new(20, 10);

        drift.run_cycle(&mut term).unwrap();

        assert_eq!(term.rows(), vec!["e", "j"]);
        assert_eq!(term.flush_count(), 1);
        assert_eq!(sleeper.durations(), vec![Duration::from_millis(200)]);
        assert_eq!(drift.banner().map(Banner::width), Some(5));
    }
}
