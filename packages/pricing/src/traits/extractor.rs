//! Extractor trait for provider-specific page parsing.

use crate::traits::fetcher::RawPage;
use crate::types::detail::DetailRecord;

/// Turns raw page content into detail records.
///
/// Extraction never fails: a page that matches none of the expected
/// patterns simply yields zero records, and a partially matching page
/// yields records with fewer fields. The provider name tags rows and
/// log lines.
pub trait Extractor: Send + Sync {
    /// Extract zero or more detail records from a page.
    fn extract(&self, page: &RawPage) -> Vec<DetailRecord>;

    /// Provider this extractor understands (e.g. "OpenAI").
    fn provider(&self) -> &str;
}
