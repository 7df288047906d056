//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the pricing
//! library without making real network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{FetchError, FetchResult};
use crate::traits::extractor::Extractor;
use crate::traits::fetcher::{Fetcher, RawPage};
use crate::types::detail::DetailRecord;

/// Canned response for one URL in a [`MockFetcher`].
#[derive(Debug, Clone)]
enum CannedResponse {
    Page(String),
    NotFound,
    Forbidden,
}

/// A mock fetcher serving canned page bodies by URL.
///
/// Unregistered URLs come back as not-found. Tracks how many fetches
/// were attempted for pacing and skip assertions.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, CannedResponse>,
    fetches: AtomicUsize,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a page body for a URL.
    pub fn with_page(mut self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), CannedResponse::Page(content.into()));
        self
    }

    /// Make a URL respond not-found.
    pub fn with_not_found(mut self, url: impl Into<String>) -> Self {
        self.responses.insert(url.into(), CannedResponse::NotFound);
        self
    }

    /// Make a URL respond forbidden.
    pub fn with_forbidden(mut self, url: impl Into<String>) -> Self {
        self.responses.insert(url.into(), CannedResponse::Forbidden);
        self
    }

    /// Number of fetch attempts so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawPage> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(CannedResponse::Page(content)) => Ok(RawPage::new(url, content.clone())),
            Some(CannedResponse::Forbidden) => Err(FetchError::Forbidden {
                url: url.to_string(),
            }),
            Some(CannedResponse::NotFound) | None => Err(FetchError::NotFound {
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// An extractor returning a fixed batch of details for any page.
pub struct StubExtractor {
    provider: String,
    details: Vec<DetailRecord>,
}

impl StubExtractor {
    /// Create a stub for a provider name.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            details: Vec::new(),
        }
    }

    /// Add a detail record to every extraction result.
    pub fn with_detail(mut self, detail: DetailRecord) -> Self {
        self.details.push(detail);
        self
    }
}

impl Extractor for StubExtractor {
    fn extract(&self, _page: &RawPage) -> Vec<DetailRecord> {
        self.details.clone()
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}
