//! `pricing reconcile` — merge a detail archive into a CSV table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pricing::{
    pipeline::update_store, ContainmentMatcher, CsvStore, DetailArchive, ExactMatcher, NameMatcher,
};

#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// The provider CSV table to update in place
    #[arg(long)]
    pub table: PathBuf,

    /// Detail-JSON archive from a scrape run
    #[arg(long)]
    pub details: PathBuf,

    /// Match names only on normalized equality, no containment
    #[arg(long)]
    pub exact: bool,
}

pub fn run(args: ReconcileArgs) -> Result<()> {
    let json = std::fs::read_to_string(&args.details)
        .with_context(|| format!("reading {}", args.details.display()))?;
    let archive: DetailArchive = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", args.details.display()))?;

    let matcher: Box<dyn NameMatcher> = if args.exact {
        Box::new(ExactMatcher::new())
    } else {
        Box::new(ContainmentMatcher::new())
    };

    let store = CsvStore::new(&args.table);
    let outcome = update_store(&store, &archive.records(), matcher.as_ref())
        .with_context(|| format!("updating {}", args.table.display()))?;

    println!(
        "{} {} row(s) changed, {} field(s) filled in {}",
        "✓".green(),
        outcome.records_changed,
        outcome.fields_filled,
        args.table.display()
    );
    Ok(())
}
