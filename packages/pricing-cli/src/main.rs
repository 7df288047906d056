//! Command-line entry point for the pricing pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "pricing", version, about = "LLM provider pricing table pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape provider docs into a detail-JSON archive
    Scrape(cmd::scrape::ScrapeArgs),

    /// Reconcile a detail archive into a provider CSV table
    Reconcile(cmd::reconcile::ReconcileArgs),

    /// Merge provider CSV tables into one consolidated table
    Merge(cmd::merge::MergeArgs),

    /// Print row counts grouped by a table field
    Summary(cmd::summary::SummaryArgs),

    /// Pre-populate a provider table from a seed price file
    Seed(cmd::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape(args) => cmd::scrape::run(args).await,
        Commands::Reconcile(args) => cmd::reconcile::run(args),
        Commands::Merge(args) => cmd::merge::run(args),
        Commands::Summary(args) => cmd::summary::run(args),
        Commands::Seed(args) => cmd::seed::run(args),
    }
}
