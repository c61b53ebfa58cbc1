//! Daemon entry point
//!
//! Thin shell around [`autounzip::IngestLoop`]: parse arguments, load the
//! configuration file, apply overrides, persist the resolved settings, then
//! run the loop until SIGTERM/SIGINT.

use autounzip::{Config, IngestLoop, run_with_shutdown};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "autounzip",
    version,
    about = "Watch a folder for ZIP archives, back them up, and extract them automatically"
)]
struct Args {
    /// Path to the configuration file (default: ~/autounzip.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to scan for incoming archives
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory to extract archives into
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Seconds to wait between scans
    #[arg(long)]
    scan_interval: Option<u64>,
}

#[tokio::main]
async fn main() -> autounzip::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(Config::default_path);

    let mut config = Config::load_or_default(&config_path)?;
    if let Some(dir) = args.input_dir {
        config.input_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(secs) = args.scan_interval {
        config.scan_interval = Duration::from_secs(secs);
    }
    config.validate()?;

    // Persist the resolved settings so overrides survive restarts
    config.save(&config_path)?;

    run_with_shutdown(IngestLoop::new(config)).await
}
