use super::BannerRenderer;
use crate::error::{Result, SaverError};
use log::{debug, trace};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;

/// Renders banners by running the `figlet` program.
#[derive(Debug, Clone)]
pub struct FigletRenderer {
    program: PathBuf,
}

impl FigletRenderer {
    pub fn new() -> Self {
        Self::with_program("figlet")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn execute(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.program.display(), args.join(" "));
        trace!("executing {}", command);

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| SaverError::RenderUnavailable {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SaverError::RenderFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Directory figlet loads its fonts from (`figlet -I2`).
    pub fn font_dir(&self) -> Result<PathBuf> {
        let dir = self.execute(&["-I2"])?;
        Ok(PathBuf::from(dir.trim()))
    }
}

impl Default for FigletRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str, max_width: usize) -> Result<String> {
        let width = max_width.to_string();
        match self.execute(&["-f", font, "-w", &width, "--", text]) {
            Err(SaverError::RenderFailed { stderr, .. }) if stderr.contains("font") => {
                Err(SaverError::FontNotFound(font.to_string()))
            }
            other => other,
        }
    }

    fn list_fonts(&self) -> Result<BTreeSet<String>> {
        let dir = self.font_dir()?;
        let mut fonts = BTreeSet::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "flf") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    fonts.insert(stem.to_string());
                }
            }
        }
        debug!("found {} fonts in {}", fonts.len(), dir.display());
        Ok(fonts)
    }
}
