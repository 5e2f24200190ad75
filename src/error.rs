use std::io;
use std::path::PathBuf;
use image::ColorType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicassoError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("image is {0:?}, needs to be RGB/RGBA")]
    UnsupportedImageMode(ColorType),
    #[error("invalid color specifier `{0}`")]
    InvalidColorSpec(String),
    /// fewer than two rows or columns lie above the crop threshold
    #[error("threshold too high for cropping ({rows} rows, {columns} columns above threshold)")]
    CropThresholdTooHigh { rows: usize, columns: usize },
    #[error("failed to read template {}: {source}", path.display())]
    Template { path: PathBuf, source: io::Error },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = PicassoError> = std::result::Result<T, E>;
