//! In-memory store for testing and development.

use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::store::TabularStore;
use crate::types::record::Record;

/// An in-memory pricing table. Data is lost on drop; useful for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with rows.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of rows currently held.
    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl TabularStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn save(&self, records: &[Record]) -> StoreResult<()> {
        *self.records.write().unwrap() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_wholesale() {
        let store = MemoryStore::with_records(vec![Record::for_model("OpenAI", "gpt-4o")]);
        assert_eq!(store.record_count(), 1);

        store
            .save(&[
                Record::for_model("Google", "gemini-2.5-pro"),
                Record::for_model("Google", "gemini-2.5-flash"),
            ])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].model(), "gemini-2.5-pro");
    }
}
