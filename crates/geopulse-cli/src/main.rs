use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod normalize;
mod report;

#[derive(Debug, Parser)]
#[command(name = "geopulse")]
#[command(about = "Social-post sentiment geo-analytics pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a raw post CSV into the analysis-ready table.
    Normalize {
        /// Input CSV of annotated posts.
        #[arg(long)]
        input: PathBuf,
        /// Output CSV path; stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Drop records with unparseable timestamps instead of aborting.
        #[arg(long)]
        drop_invalid: bool,
    },
    /// Normalize and derive the aggregate dashboard report as JSON.
    Report {
        /// Input CSV of annotated posts.
        #[arg(long)]
        input: PathBuf,
        /// Output JSON path; stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Drop records with unparseable timestamps instead of aborting.
        #[arg(long)]
        drop_invalid: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = geopulse_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize {
            input,
            output,
            drop_invalid,
        } => normalize::run(&config, &input, output.as_deref(), drop_invalid).await,
        Commands::Report {
            input,
            output,
            drop_invalid,
        } => report::run(&config, &input, output.as_deref(), drop_invalid).await,
    }
}
