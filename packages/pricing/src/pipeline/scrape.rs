//! Sequential scrape runs and store updates.
//!
//! Fetches happen one at a time with a fixed delay between requests;
//! there is no parallelism and no retry. A source that fails to fetch
//! is logged and skipped — the run always completes with whatever
//! details it gathered.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline::reconcile::{reconcile, ReconcileOutcome};
use crate::traits::extractor::Extractor;
use crate::traits::fetcher::Fetcher;
use crate::traits::matcher::NameMatcher;
use crate::traits::store::TabularStore;
use crate::types::config::ScrapeConfig;
use crate::types::detail::{DetailArchive, DetailRecord};

/// Fetch and extract details for every URL in the config, in order.
///
/// Returns an archive stamped with the run time; later entries for the
/// same model name replace earlier ones, so within one run the last
/// page wins for duplicated names while archive order stays stable.
pub async fn scrape_details(
    fetcher: &dyn Fetcher,
    extractor: &dyn Extractor,
    config: &ScrapeConfig,
) -> DetailArchive {
    let mut archive = DetailArchive::new();
    let delay = std::time::Duration::from_millis(config.delay_ms);

    for (i, url) in config.urls.iter().enumerate() {
        // Fixed pacing between requests, not before the first one.
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let page = match fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "source unavailable, skipping");
                continue;
            }
        };

        let details = extractor.extract(&page);
        if details.is_empty() {
            warn!(url = %url, provider = extractor.provider(), "no details extracted");
        }
        for detail in details {
            archive.insert(detail);
        }
    }

    info!(
        provider = extractor.provider(),
        urls = config.urls.len(),
        models = archive.len(),
        "scrape run complete"
    );

    archive
}

/// Load a table, reconcile a detail batch into it, and write it back.
///
/// The whole table is rewritten as one unit; the reconciled rows are
/// saved even when nothing changed, which keeps the file byte-stable
/// across idempotent reruns.
pub fn update_store(
    store: &dyn TabularStore,
    details: &[DetailRecord],
    matcher: &dyn NameMatcher,
) -> Result<ReconcileOutcome> {
    let records = store.load()?;
    let outcome = reconcile(records, details, matcher, Utc::now().date_naive());
    store.save(&outcome.records)?;
    info!(
        changed = outcome.records_changed,
        filled = outcome.fields_filled,
        "store updated"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::ContainmentMatcher;
    use crate::stores::MemoryStore;
    use crate::testing::{MockFetcher, StubExtractor};
    use crate::types::record::{Field, Record};

    #[tokio::test]
    async fn test_failed_sources_are_skipped() {
        let fetcher = MockFetcher::new()
            .with_page("https://a.example/models", "<html>ok</html>")
            .with_not_found("https://b.example/models");
        let extractor = StubExtractor::new("Test")
            .with_detail(DetailRecord::new("gpt-4o").with_context_window("128000"));

        let config = ScrapeConfig::new([
            "https://a.example/models",
            "https://b.example/models",
        ])
        .with_delay_ms(0);

        let archive = scrape_details(&fetcher, &extractor, &config).await;

        // One page succeeded, one was skipped; the run still completed.
        assert_eq!(archive.len(), 1);
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_update_store_round_trip() {
        let store = MemoryStore::with_records(vec![Record::for_model("OpenAI", "gpt-4o")]);
        let details = [DetailRecord::new("gpt-4o").with_max_output_tokens("16384")];

        let outcome = update_store(&store, &details, &ContainmentMatcher::new()).unwrap();
        assert_eq!(outcome.records_changed, 1);

        let saved = store.load().unwrap();
        assert_eq!(saved[0].get(Field::MaxTokens), "16384");

        // Second run against the saved table changes nothing.
        let again = update_store(&store, &details, &ContainmentMatcher::new()).unwrap();
        assert_eq!(again.records_changed, 0);
    }
}
