//! Post-processing of a single image driven by a list of textual commands:
//! color replacement (`red=blue`), inversion (`invert`) and cropping to the
//! bright content (`crop`). Commands can also be read from template files.

/// Debug diagnostics that are only wanted with `--verbose`.
macro_rules! verbose {
    ($options:expr, $($arg:tt)+) => {
        if $options.verbose {
            tracing::debug!($($arg)+);
        }
    };
}

pub mod channels;
pub mod color;
mod colornames;
pub mod command;
pub mod crop;
pub mod error;
pub mod helpers;
pub mod pipeline;
pub mod processing;

pub use error::PicassoError;
pub use pipeline::{run, Options, RunReport};
