//! Configuration types for scrape runs.
//!
//! Paths and URLs are always passed in explicitly; nothing in the
//! library derives locations from the execution context.

use serde::{Deserialize, Serialize};

/// Configuration for a sequential scrape run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Pages to fetch, in order.
    pub urls: Vec<String>,

    /// Fixed delay between requests in milliseconds.
    ///
    /// Provider docs sites throttle aggressively; the original cadence
    /// is one request every 1.5s. Default: 1500.
    ///
    /// The per-request deadline is the fetcher's concern, not the
    /// run's — see `HttpFetcher::with_timeout_secs`.
    pub delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            urls: vec![],
            delay_ms: 1500,
        }
    }
}

impl ScrapeConfig {
    /// Create a config for a set of URLs.
    pub fn new(urls: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            urls: urls.into_iter().map(|u| u.into()).collect(),
            ..Default::default()
        }
    }

    /// Set the inter-request delay.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}
