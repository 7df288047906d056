//! Core trait abstractions.
//!
//! The reconciliation core depends only on these seams; HTTP, parsing,
//! and CSV mechanics live behind them as swappable collaborators.

pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod store;

pub use extractor::Extractor;
pub use fetcher::{Fetcher, RawPage};
pub use matcher::{match_key, NameMatcher};
pub use store::TabularStore;
