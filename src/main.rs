use anyhow::Result;
use clap::Parser;
use ghlc::application::{OutputFormat, ScanAction, render};
use ghlc::config::Config;
use ghlc::logging::{self, LoggerConfig};
use ghlc::manifest::pattern::PatternCatalog;
use ghlc::runtime::{RealRuntime, Runtime};
use std::path::PathBuf;

/// ghlc - GitHub License Collector
///
/// Collect GitHub library identities (owner, repository, pinned version)
/// from package manager manifests, as input for license reporting.
///
/// Examples:
///   ghlc scan .         # Scan the current directory's manifests
#[derive(Parser, Debug)]
#[command(author, version = env!("GHLC_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress all log output
    #[arg(long, global = true)]
    silence: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Force colored log output
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored log output (also via NO_COLOR=1)
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Collect GitHub libraries from a project's manifests
    Scan(ScanArgs),
}

#[derive(clap::Args, Debug)]
struct ScanArgs {
    /// Project directory containing manifest files
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Config file path (defaults to .ghlc.yml in the project directory)
    #[arg(long, short = 'c', env = "GHLC_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::configure(&LoggerConfig::new(
        cli.silence,
        cli.no_color,
        cli.color,
        cli.verbose,
    ));
    let runtime = RealRuntime;

    match cli.command {
        Commands::Scan(args) => scan(&runtime, args),
    }
}

fn scan<R: Runtime>(runtime: &R, args: ScanArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from(runtime, path)?,
        None => Config::discover(runtime, &args.path)?,
    };

    // A broken pattern table must abort before any manifest is touched
    let catalog = PatternCatalog::compile()?;

    let action = ScanAction::new(runtime, args.path);
    let libraries = action.collect_libraries(&catalog, &config)?;
    let report = render(&libraries, args.format)?;

    match &args.output {
        Some(path) => runtime.write(path, report.as_bytes())?,
        None => print!("{}", report),
    }
    Ok(())
}
