//! Tabular store implementations.

pub mod csv;
pub mod memory;

pub use self::csv::CsvStore;
pub use memory::MemoryStore;
