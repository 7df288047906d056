//! CSV-backed tabular store.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::traits::store::TabularStore;
use crate::types::record::{Field, Record};

/// A pricing table persisted as a CSV file with a header row.
///
/// Reading tolerates foreign column subsets and orders — headers are
/// mapped onto the canonical schema and unrecognized columns dropped.
/// Writing always emits the full canonical column set, encoding the
/// whole table in memory first and replacing the file in one write so
/// a failure mid-encode never leaves a truncated table behind.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabularStore for CsvStore {
    fn load(&self) -> StoreResult<Vec<Record>> {
        // Hand-edited tables drift: a flexible reader keeps a ragged row
        // from failing the whole load. Short rows leave the missing
        // columns empty, extra cells past the header are dropped.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(StoreError::MissingHeader {
                path: self.path.display().to_string(),
            });
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(Record::from_headers(
                headers.iter().zip(row.iter()),
            ));
        }

        debug!(path = %self.path.display(), rows = records.len(), "table loaded");
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(Field::ALL.iter().map(|f| f.header()))?;
        for record in records {
            writer.write_record(record.canonical_values())?;
        }
        let encoded = writer
            .into_inner()
            .map_err(|e| StoreError::Io(e.into_error()))?;

        std::fs::write(&self.path, encoded)?;
        info!(path = %self.path.display(), rows = records.len(), "table saved");
        Ok(())
    }
}
