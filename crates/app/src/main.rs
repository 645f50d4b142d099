use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rankscan")]
#[command(about = "Extract ranking-parameter scores from scanned screenshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run OCR extraction over the college directories of one or more years
    Extract {
        /// Ranking years to process; each maps to an `output<YEAR>` root
        #[arg(value_name = "YEAR", required = true)]
        years: Vec<u16>,

        /// Directory containing the `output<YEAR>` roots
        #[arg(short, long, default_value = ".")]
        base_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { years, base_dir } => commands::extract(&years, &base_dir),
    }
}
