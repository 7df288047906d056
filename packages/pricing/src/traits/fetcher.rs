//! Fetcher trait for pluggable source retrieval.
//!
//! Fetchers hand back raw page text; they never parse. Retries and
//! backoff are deliberately out of scope — a failed page is skipped by
//! the scrape pipeline and the run continues.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// Raw page content before extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPage {
    /// URL this content came from.
    pub url: String,

    /// Raw body (HTML, markdown, or JSON).
    pub content: String,

    /// MIME type, if the source reported one.
    pub content_type: Option<String>,

    /// When the content was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl RawPage {
    /// Create a raw page fetched now.
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            content_type: None,
            fetched_at: Utc::now(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the page carries non-whitespace content.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// The last path segment of the URL, used as a model-name hint for
    /// per-model documentation pages (e.g. ".../models/gpt-4o").
    pub fn url_slug(&self) -> Option<&str> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty() && !s.contains(':'))
    }
}

/// Fetcher trait for retrieving raw source pages.
///
/// Implementations fetch one URL at a time; pacing between requests
/// belongs to the caller (see `pipeline::scrape_details`).
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a single URL.
    async fn fetch(&self, url: &str) -> FetchResult<RawPage>;

    /// Fetcher name for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}
