//! The pricing pipeline: scrape, reconcile, merge.
//!
//! Data flow: fetcher -> raw text -> provider extractor -> detail
//! records -> reconciler -> tabular store. Each stage degrades rather
//! than halts: failed sources are skipped, unparseable pages yield
//! fewer details, unmatched rows pass through unchanged.

pub mod merge;
pub mod reconcile;
pub mod scrape;

pub use merge::{merge_sources, summarize_by};
pub use reconcile::{reconcile, ReconcileOutcome};
pub use scrape::{scrape_details, update_store};
