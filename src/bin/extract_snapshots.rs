use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use serp_cards::batch;

#[derive(Parser)]
#[command(name = "extract_snapshots")]
#[command(about = "Extract result cards from saved search-page snapshots", long_about = None)]
struct Cli {
    /// Directory containing the saved .html snapshots
    #[arg(default_value = "files")]
    input: PathBuf,

    /// Directory to write one .json artifact per snapshot into
    #[arg(short, long, default_value = "output")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let summary = batch::process_dir(&cli.input, &cli.output)
        .with_context(|| format!("processing {}", cli.input.display()))?;

    println!("{} written, {} failed", summary.written, summary.failed);
    Ok(())
}
