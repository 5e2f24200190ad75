use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use picasso::{helpers, Options};

/// Modify an image with color replacements, inversion and cropping.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// image to modify, must be RGB or RGBA
    image: PathBuf,
    /// `color1=color2`, `invert`/`i`, `crop`/`c`, or a template file with one command per line
    commands: Vec<String>,
    /// defaults to the input path with `_modified` before the extension
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    #[arg(short = 'v', long)]
    verbose: bool,
    /// write a json summary of the run
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();
    init_logging(args.verbose);

    let options = Options { verbose: args.verbose };
    let report = picasso::run(&args.image, args.output.as_deref(), &args.commands, &options)
        .with_context(|| format!("failed to process {}", args.image.display()))?;

    if let Some(path) = args.report {
        helpers::save_report(&path, &report)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "picasso=debug" } else { "picasso=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
