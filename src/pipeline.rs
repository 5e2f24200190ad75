//! Runs a command list against one image.
//!
//! The run goes through loading, template expansion, command execution and
//! finalizing, strictly in that order. Nothing is written before the last
//! step, so any error leaves no output behind.

use std::path::{Path, PathBuf};
use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::channels::{self, Channels};
use crate::color::{self, Color};
use crate::command::{self, Command};
use crate::crop;
use crate::error::Result;
use crate::helpers;
use crate::processing;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub verbose: bool,
}

/// The image in progress, split into planes, with its current size.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub channels: Channels,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: (u32, u32),
    pub final_size: (u32, u32),
    pub alpha: bool,
    pub commands: Vec<CommandRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub command: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Replaced { from: Color, to: Color, pixels: u64 },
    Inverted,
    Cropped { width: u32, height: u32 },
    Ignored,
}

pub fn run<S: AsRef<str>>(input: &Path, output: Option<&Path>, commands: &[S], options: &Options) -> Result<RunReport> {
    verbose!(options, "Preparation.");
    let mut canvas = Canvas::load(input, options)?;
    let original_size = (canvas.width, canvas.height);

    let commands = command::expand_templates(commands)?;
    verbose!(options, "Processing commands {commands:?}");

    let mut records = Vec::with_capacity(commands.len());
    for line in commands {
        let outcome = canvas.apply(&Command::parse(&line), options)?;
        records.push(CommandRecord { command: line.trim().to_owned(), outcome });
    }

    let output = output
        .map(Path::to_owned)
        .unwrap_or_else(|| helpers::path_with_suffix(input, helpers::MODIFIED_SUFFIX));
    let final_size = (canvas.width, canvas.height);
    let alpha = canvas.channels.alpha.is_some();
    canvas.save(&output, options)?;
    info!("Finished.");
    verbose!(options, "Filename: {}", output.display());

    Ok(RunReport {
        input: input.to_owned(),
        output,
        original_size,
        final_size,
        alpha,
        commands: records,
    })
}

impl Canvas {
    pub fn load(path: &Path, options: &Options) -> Result<Canvas> {
        let image = helpers::load_image(path)?;
        info!("Image mode: {:?}", image.color());
        let canvas = Canvas::new(image)?;
        verbose!(options, "Width, Height: {} x {}", canvas.width, canvas.height);
        Ok(canvas)
    }

    pub fn new(image: DynamicImage) -> Result<Canvas> {
        let (width, height) = image.dimensions();
        let channels = channels::split(image)?;
        Ok(Canvas { channels, width, height })
    }

    pub fn apply(&mut self, command: &Command, options: &Options) -> Result<Outcome> {
        match command {
            Command::Replace { from, to, excess } => {
                if !excess.is_empty() {
                    verbose!(options, "Excess arguments in command: {excess:?}");
                }
                info!("Replacing colors...");
                let (from, to) = color::translate_colors(from, to, options)?;
                let pixels = match from.rgb_match() {
                    Some(rgb) => processing::replace_color(&mut self.channels.rgb, rgb, to.rgb(), self.width, self.height),
                    None => 0,
                };
                verbose!(options, "Replaced {pixels} pixels");
                Ok(Outcome::Replaced { from, to, pixels })
            }
            Command::Invert => {
                info!("Inverting...");
                processing::invert(&mut self.channels.rgb);
                verbose!(options, "Inverting finished.");
                Ok(Outcome::Inverted)
            }
            Command::Crop => {
                info!("Cropping...");
                let merged = channels::merge(self.channels.clone());
                *self = Canvas::new(crop::crop(&merged)?)?;
                verbose!(options, "Cropped to {} x {}", self.width, self.height);
                Ok(Outcome::Cropped { width: self.width, height: self.height })
            }
            Command::Unknown(line) => {
                verbose!(options, "Command not understood: {line}");
                Ok(Outcome::Ignored)
            }
        }
    }

    pub fn save(self, path: &Path, options: &Options) -> Result<()> {
        verbose!(options, "Merging...");
        helpers::save_image(&channels::merge(self.channels), path)?;
        info!("Saved to {}", path.display());
        Ok(())
    }
}
