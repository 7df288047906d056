//! `pricing merge` — concatenate provider tables into one file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pricing::{
    pipeline::{merge_sources, summarize_by},
    CsvStore, Field, TabularStore,
};
use tracing::warn;

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Provider CSV tables to merge, in output order
    #[arg(long = "source", required = true)]
    pub sources: Vec<PathBuf>,

    /// Where to write the consolidated table
    #[arg(long, short)]
    pub out: PathBuf,
}

pub fn run(args: MergeArgs) -> Result<()> {
    let mut tables = Vec::with_capacity(args.sources.len());
    for path in &args.sources {
        match CsvStore::new(path).load() {
            Ok(rows) => {
                println!("  {} read {} rows from {}", "✓".green(), rows.len(), path.display());
                tables.push(rows);
            }
            Err(e) => {
                // A missing provider file degrades the merge, never fails it.
                warn!(path = %path.display(), error = %e, "skipping source");
                println!("  {} skipping {}: {}", "⚠".yellow(), path.display(), e);
            }
        }
    }

    let merged = merge_sources(tables);
    CsvStore::new(&args.out)
        .save(&merged)
        .with_context(|| format!("writing {}", args.out.display()))?;

    println!(
        "{} saved {} rows to {}",
        "✓".green(),
        merged.len(),
        args.out.display()
    );

    println!("\n{}", "By provider:".bold());
    for (provider, count) in summarize_by(&merged, Field::Provider) {
        println!("  {provider}: {count} rows");
    }

    Ok(())
}
