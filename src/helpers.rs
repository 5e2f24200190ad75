use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use image::DynamicImage;
use image::io::Reader;
use crate::error::{PicassoError, Result};
use crate::pipeline::RunReport;

pub const MODIFIED_SUFFIX: &str = "_modified";

pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PicassoError::SourceNotFound(path.to_owned()));
    }
    Ok(Reader::open(path)?.with_guessed_format()?.decode()?)
}

pub fn save_image<P: AsRef<Path>>(img: &DynamicImage, path: P) -> Result<()> {
    img.save(path)?;
    Ok(())
}

pub fn save_report<P: AsRef<Path>>(path: P, report: &RunReport) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// `dir/name.ext` -> `dir/name<suffix>.ext`
pub fn path_with_suffix<P: AsRef<Path>>(path: P, suffix: &str) -> PathBuf {
    let path = path.as_ref();
    let mut file_name = path.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(suffix);
    if let Some(ext) = path.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    path.with_file_name(file_name)
}
