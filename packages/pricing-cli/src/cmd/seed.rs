//! `pricing seed` — materialize a seed price file into a CSV table.
//!
//! Seed prices are versioned data, not code: updating a provider's
//! published prices means editing the JSON file, never rebuilding.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pricing::{CsvStore, SeedPrices, TabularStore};

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Seed price JSON file
    #[arg(long)]
    pub prices: PathBuf,

    /// Where to write the pre-populated CSV table
    #[arg(long, short)]
    pub out: PathBuf,
}

pub fn run(args: SeedArgs) -> Result<()> {
    let seeds = SeedPrices::load(&args.prices)
        .with_context(|| format!("loading {}", args.prices.display()))?;

    let records = seeds.records();
    CsvStore::new(&args.out)
        .save(&records)
        .with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "{} seeded {} rows into {}",
        "✓".green(),
        records.len(),
        args.out.display()
    );
    Ok(())
}
