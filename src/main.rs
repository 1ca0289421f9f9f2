//! Pointplot - plot the fixed coordinate set.

use anyhow::{Context, Result};
use clap::Parser;
use pointplot::PointPlotter;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pointplot")]
#[command(about = "Scatter plot of a fixed set of grid coordinates", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting pointplot");
    }

    let plotter = PointPlotter::fixed();
    plotter
        .render()
        .context("Failed to present the coordinate plot")?;

    tracing::info!("Pointplot exited");

    Ok(())
}
