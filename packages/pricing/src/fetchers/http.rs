//! HTTP fetcher implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{Fetcher, RawPage};

/// Browser-like user agent; provider docs sites reject obvious bots.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetches pages over HTTP with a fixed per-request deadline.
///
/// One request at a time; inter-request pacing is the scrape
/// pipeline's responsibility.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with a 30 second request deadline.
    pub fn new() -> Self {
        Self::with_timeout_secs(30)
    }

    /// Create a fetcher with a custom request deadline.
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(secs))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawPage> {
        if url::Url::parse(url).is_err() {
            return Err(FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                if e.is_timeout() {
                    FetchError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    FetchError::Http(Box::new(e))
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            404 => {
                return Err(FetchError::NotFound {
                    url: url.to_string(),
                })
            }
            403 => {
                return Err(FetchError::Forbidden {
                    url: url.to_string(),
                })
            }
            _ if !status.is_success() => {
                return Err(FetchError::Http(
                    format!("HTTP {} for {}", status, url).into(),
                ))
            }
            _ => {}
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let content = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        debug!(url = %url, bytes = content.len(), "HTTP fetch complete");

        let mut page = RawPage::new(url, content);
        if let Some(ct) = content_type {
            page = page.with_content_type(ct);
        }
        Ok(page)
    }

    fn name(&self) -> &str {
        "http"
    }
}
