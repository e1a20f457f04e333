use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use figsaver::config::{self, AnimatorConfig, ScreenKind};
use figsaver::screen::{FrameCycle, build_animator};
use figsaver::{BannerRenderer, CrosstermTerminal, FigletRenderer, SaverError};
use log::{error, info};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Column at which `--help-fonts` wraps the font list.
pub const FONT_LIST_WIDTH: usize = 50;

const FLY_EXAMPLES: &str = "\
Examples:

    $ figsaver figlet-fly
    Displays the default word flying across the screen.

    $ figsaver figlet-fly -w FooBar -f lean -d 0.005
    Displays the word FooBar in the \"lean\" figlet font, moving one
    column every 0.005 seconds (fast).

Press Ctrl-C, Esc or q to quit.";

const STAT_EXAMPLES: &str = "\
Examples:

    $ figsaver figlet-stat
    Displays the default word in random places of the screen.

    $ figsaver figlet-stat -w FooBar -f lean -d 5
    Displays the word FooBar in the \"lean\" figlet font, moving it to
    a new random place every 5 seconds.

Press Ctrl-C, Esc or q to quit.";

#[derive(Parser, Debug)]
#[command(name = "figsaver", version, about = "Terminal screensavers built on figlet banners")]
pub struct Cli {
    /// figlet program used to render banners
    #[arg(long, env = "FIGSAVER_FIGLET", default_value = "figlet", global = true)]
    pub figlet: PathBuf,

    #[command(subcommand)]
    pub screen: Screen,
}

#[derive(Subcommand, Debug)]
pub enum Screen {
    /// displays flying text
    #[command(name = "figlet-fly", after_help = FLY_EXAMPLES)]
    Fly(ScreenArgs),

    /// displays word in random places on screen
    #[command(name = "figlet-stat", after_help = STAT_EXAMPLES)]
    Stat(ScreenArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScreenArgs {
    /// Word to display; quote it if it contains spaces [default: Figsaver]
    #[arg(short, long, env = "FIGSAVER_WORD", value_parser = parse_word)]
    pub word: Option<String>,

    /// figlet-fly: seconds between frames (0.01 to 0.1 advised, default 0.05).
    /// figlet-stat: seconds a word stays put (default 3)
    #[arg(short, long, value_parser = config::parse_delay)]
    pub delay: Option<f64>,

    /// figlet font to use, see --help-fonts [default: standard]
    #[arg(short, long, env = "FIGSAVER_FONT")]
    pub font: Option<String>,

    /// Lists the fonts usable with -f/--font
    #[arg(long)]
    pub help_fonts: bool,
}

fn parse_word(value: &str) -> std::result::Result<String, SaverError> {
    config::validate_word(value)?;
    Ok(value.to_string())
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Fly(_) => ScreenKind::Fly,
            Screen::Stat(_) => ScreenKind::Stat,
        }
    }

    pub fn args(&self) -> &ScreenArgs {
        match self {
            Screen::Fly(args) | Screen::Stat(args) => args,
        }
    }
}

impl ScreenArgs {
    /// Applies the options over the defaults of `kind`.
    ///
    /// `-d` is the frame delay for figlet-fly and the freeze delay for
    /// figlet-stat.
    pub fn to_config(&self, kind: ScreenKind) -> AnimatorConfig {
        let mut config = AnimatorConfig::for_screen(kind);
        if let Some(word) = &self.word {
            config = config.with_word(word.clone());
        }
        if let Some(font) = &self.font {
            config = config.with_font(font.clone());
        }
        if let Some(delay) = self.delay {
            config = match kind {
                ScreenKind::Fly => config.with_delay(delay),
                ScreenKind::Stat => config.with_freeze_delay(delay),
            };
        }
        config
    }
}

/// Comma separated font names, wrapped and tab indented.
pub fn format_font_list(fonts: &BTreeSet<String>) -> String {
    let mut rows: Vec<String> = Vec::new();
    let mut row = String::new();

    for (i, font) in fonts.iter().enumerate() {
        let item = if i + 1 < fonts.len() {
            format!("{},", font)
        } else {
            font.clone()
        };
        if !row.is_empty() && row.len() + 1 + item.len() > FONT_LIST_WIDTH {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(&item);
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows.iter()
        .map(|r| format!("\t{}", r))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn help_fonts_text(fonts: &BTreeSet<String>) -> String {
    format!(
        "Here is the list of all available figlet fonts that are\n\
         supported in your system:\n\n\
         {}\n\n\
         You may try to use them with the option -f/--font. See --help for details.",
        format_font_list(fonts)
    )
}

pub fn run(cli: Cli) -> Result<()> {
    let renderer = FigletRenderer::with_program(&cli.figlet);
    let kind = cli.screen.kind();
    let args = cli.screen.args();

    if args.help_fonts {
        let fonts = renderer
            .list_fonts()
            .context("could not list figlet fonts")?;
        println!("{}", help_fonts_text(&fonts));
        return Ok(());
    }

    let config = args.to_config(kind);
    config
        .validate(&renderer)
        .with_context(|| format!("invalid options for {}, see --help", kind))?;
    info!("running {} with {:?}", kind, config);

    let mut animator = build_animator(kind, config, Box::new(renderer));
    let mut terminal = CrosstermTerminal::stdout();
    terminal.enter().context("could not prepare the terminal")?;

    let result = FrameCycle::new().run(animator.as_mut(), &mut terminal, |t| {
        t.cancel_requested()
    });
    let restored = terminal.leave();

    finish(result, restored)
}

/// Combines the loop outcome with the terminal restore. A loop error wins;
/// a restore failure is then only logged.
fn finish(result: figsaver::Result<u64>, restored: figsaver::Result<()>) -> Result<()> {
    match (result, restored) {
        (Ok(_), Ok(())) => Ok(()),
        (Ok(_), Err(e)) => Err(e).context("could not restore the terminal"),
        (Err(e), restored) => {
            if let Err(leave_err) = restored {
                error!("could not restore the terminal: {}", leave_err);
            }
            if e.is_fatal_geometry() {
                Err(e).context("try a shorter word, a smaller font or a bigger terminal")
            } else {
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("figsaver").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_fly() {
        let cli = parse(&["figlet-fly", "-w", "FooBar", "-f", "lean", "-d", "0.005"]).unwrap();
        assert_eq!(cli.screen.kind(), ScreenKind::Fly);

        let config = cli.screen.args().to_config(ScreenKind::Fly);
        assert_eq!(config.word, "FooBar");
        assert_eq!(config.font, "lean");
        assert_eq!(config.delay, 0.005);
        assert_eq!(config.freeze_delay, config::FREEZE_WORD_DELAY);
    }

    #[test]
    fn test_stat_delay_is_freeze_delay() {
        let cli = parse(&["figlet-stat", "--delay", "5"]).unwrap();
        let config = cli.screen.args().to_config(cli.screen.kind());
        assert_eq!(config.freeze_delay, 5.0);
        assert_eq!(config.delay, config::STAT_TYPING_DELAY);
    }

    #[test]
    fn test_defaults() {
        let args = ScreenArgs::default();
        let config = args.to_config(ScreenKind::Stat);
        assert_eq!(config, AnimatorConfig::for_screen(ScreenKind::Stat));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["figlet-fly", "-d", "fast"]).is_err());
        assert!(parse(&["figlet-fly", "-d", "-1"]).is_err());
        assert!(parse(&["figlet-fly", "-d", "1e20"]).is_err());
        assert!(parse(&["figlet-stat", "-d", "1e20"]).is_err());
        assert!(parse(&["figlet-stat", "-w", ""]).is_err());
        assert!(parse(&["figlet-matrix"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_finish_reports_loop_error_over_restore_error() {
        let too_tall = SaverError::BannerTooTall { height: 8, rows: 4 };
        let restore = SaverError::Io(std::io::Error::other("tty gone"));

        let err = finish(Err(too_tall), Err(restore)).unwrap_err();
        assert!(err.to_string().contains("bigger terminal"));
        assert!(matches!(
            err.root_cause().downcast_ref::<SaverError>(),
            Some(SaverError::BannerTooTall { .. })
        ));
    }

    #[test]
    fn test_finish_reports_restore_error_after_clean_loop() {
        let restore = SaverError::Io(std::io::Error::other("tty gone"));
        let err = finish(Ok(3), Err(restore)).unwrap_err();
        assert!(err.to_string().contains("restore the terminal"));
        assert!(finish(Ok(3), Ok(())).is_ok());
    }

    #[test]
    fn test_help_fonts_flag() {
        let cli = parse(&["figlet-stat", "--help-fonts"]).unwrap();
        assert!(cli.screen.args().help_fonts);
    }

    #[test]
    fn test_format_font_list_wraps() {
        let fonts: BTreeSet<String> = [
            "banner", "big", "block", "bubble", "digital", "ivrit", "lean", "mini",
            "script", "shadow", "slant", "small", "smscript", "smshadow", "smslant",
            "standard", "term",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let text = format_font_list(&fonts);
        let rows: Vec<&str> = text.split('\n').collect();

        assert!(rows.len() > 1);
        for row in &rows {
            assert!(row.starts_with('\t'));
            assert!(row.len() - 1 <= FONT_LIST_WIDTH, "{:?}", row);
        }
        assert!(rows[0].starts_with("\tbanner, big, block,"));
        assert!(text.ends_with("standard, term"));
    }

    #[test]
    fn test_format_font_list_empty() {
        assert_eq!(format_font_list(&BTreeSet::new()), "");
    }

    #[test]
    fn test_help_fonts_text() {
        let fonts: BTreeSet<String> = ["standard".to_string()].into();
        let text = help_fonts_text(&fonts);
        assert!(text.contains("\tstandard\n"));
        assert!(text.contains("-f/--font"));
    }

    #[test]
    fn test_run_without_figlet_fails_before_drawing() {
        let cli = parse(&[
            "--figlet",
            "/nonexistent/figsaver-figlet",
            "figlet-fly",
            "-w",
            "HI",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(err.to_string().contains("figlet-fly"));
        assert!(root.contains("No such file") || root.contains("not found") || root.contains("cannot find"));
        assert!(format!("{:#}", err).contains("figlet installed"));
    }
}
