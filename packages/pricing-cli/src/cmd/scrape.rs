//! `pricing scrape` — fetch provider pages into a detail archive.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pricing::{pipeline::scrape_details, HttpFetcher, ScrapeConfig};

use super::Provider;

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Provider whose pages to scrape
    #[arg(long, value_enum)]
    pub provider: Provider,

    /// Page URLs to fetch, in order
    #[arg(long = "url", required = true)]
    pub urls: Vec<String>,

    /// Where to write the detail-JSON archive
    #[arg(long, short)]
    pub out: PathBuf,

    /// Delay between requests in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub delay_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

pub async fn run(args: ScrapeArgs) -> Result<()> {
    let extractor = args.provider.extractor();
    let fetcher = HttpFetcher::with_timeout_secs(args.timeout_secs);
    let config = ScrapeConfig::new(args.urls).with_delay_ms(args.delay_ms);

    let archive = scrape_details(&fetcher, extractor.as_ref(), &config).await;

    let json = serde_json::to_string_pretty(&archive)?;
    std::fs::write(&args.out, json)
        .with_context(|| format!("writing archive to {}", args.out.display()))?;

    println!(
        "{} {} models from {} page(s) -> {}",
        "✓".green(),
        archive.len(),
        config.urls.len(),
        args.out.display()
    );
    Ok(())
}
