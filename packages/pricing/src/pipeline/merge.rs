//! Cross-provider table concatenation and summary counts.

use std::collections::BTreeMap;

use tracing::info;

use crate::types::record::{Field, Record};

/// Concatenate several provider tables into one canonical table.
///
/// Sources may carry different field subsets and orders; every output
/// row is remapped onto the full canonical column set with missing
/// fields as empty strings. Source order and row order within each
/// source are preserved, and the output row count is the sum of the
/// input row counts.
pub fn merge_sources(sources: Vec<Vec<Record>>) -> Vec<Record> {
    let total: usize = sources.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);

    for source in sources {
        for record in source {
            merged.push(record.normalized());
        }
    }

    info!(rows = merged.len(), "merged provider tables");
    merged
}

/// Count rows per distinct value of a categorical field.
///
/// Advisory only — printed, never persisted. Rows with an empty value
/// are bucketed under "Unknown". Keys come back sorted for stable
/// output.
pub fn summarize_by(records: &[Record], field: Field) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let value = record.get(field).trim();
        let key = if value.is_empty() { "Unknown" } else { value };
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}
