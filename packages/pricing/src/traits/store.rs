//! Tabular store trait.
//!
//! Stores hold entire tables: each operation reads or rewrites the
//! whole row set as one unit. There are no partial writes — callers
//! accumulate changes in memory and save the complete sequence. Row
//! order is meaningful (reproducible diffs) and must round-trip.

use crate::error::StoreResult;
use crate::types::record::Record;

/// Reads and writes an ordered pricing table.
pub trait TabularStore: Send + Sync {
    /// Load all rows in file order.
    fn load(&self) -> StoreResult<Vec<Record>>;

    /// Replace the table with the given rows, in order.
    fn save(&self, records: &[Record]) -> StoreResult<()>;
}
