//! `pricing summary` — advisory row counts for a table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use pricing::{pipeline::summarize_by, CsvStore, Field, TabularStore};

/// Fields it makes sense to group a table by.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupBy {
    Provider,
    SourceType,
    LastUpdated,
}

impl GroupBy {
    fn field(&self) -> Field {
        match self {
            GroupBy::Provider => Field::Provider,
            GroupBy::SourceType => Field::SourceType,
            GroupBy::LastUpdated => Field::LastUpdated,
        }
    }
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// The CSV table to summarize
    #[arg(long)]
    pub table: PathBuf,

    /// Field to group counts by
    #[arg(long, value_enum, default_value = "provider")]
    pub by: GroupBy,
}

pub fn run(args: SummaryArgs) -> Result<()> {
    let rows = CsvStore::new(&args.table)
        .load()
        .with_context(|| format!("reading {}", args.table.display()))?;

    println!("{} ({} rows)", args.table.display().to_string().bold(), rows.len());
    for (value, count) in summarize_by(&rows, args.by.field()) {
        println!("  {value}: {count} rows");
    }
    Ok(())
}
