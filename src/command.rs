use std::fs;
use std::iter;
use std::path::Path;
use either::Either;
use tracing::info;
use crate::color::ColorSpec;
use crate::error::{PicassoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `from=to`; tokens past the second are kept for diagnostics only
    Replace { from: ColorSpec, to: ColorSpec, excess: Vec<String> },
    Invert,
    Crop,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        if line.contains('=') {
            let mut tokens = line.split('=').map(str::trim);
            // `contains('=')` guarantees at least two tokens
            let from = ColorSpec::from_token(tokens.next().unwrap_or_default());
            let to = ColorSpec::from_token(tokens.next().unwrap_or_default());
            let excess = tokens.map(str::to_owned).collect();
            return Command::Replace { from, to, excess };
        }
        match line {
            "invert" | "i" => Command::Invert,
            "crop" | "c" => Command::Crop,
            _ => Command::Unknown(line.to_owned()),
        }
    }
}

/// Replaces every entry naming an existing file by that file's lines.
/// Lines of a template are not expanded again.
pub fn expand_templates<S: AsRef<str>>(entries: &[S]) -> Result<Vec<String>> {
    let mut expanded = Vec::new();
    for entry in entries {
        expanded.extend(expand_entry(entry.as_ref())?);
    }
    Ok(expanded)
}

fn expand_entry(entry: &str) -> Result<impl Iterator<Item = String>> {
    let path = Path::new(entry.trim());
    if path.is_file() {
        info!("Expanding template {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|source| PicassoError::Template { path: path.to_owned(), source })?;
        let lines: Vec<String> = content.lines().map(|line| line.trim().to_owned()).collect();
        Ok(Either::Left(lines.into_iter()))
    } else {
        Ok(Either::Right(iter::once(entry.to_owned())))
    }
}
