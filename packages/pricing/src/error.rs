//! Typed errors for the pricing library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Nothing in the reconciliation core can fail: missing matches and
//! unparseable details degrade to "fewer fields filled". Errors only
//! arise at the edges (fetching sources, reading/writing the table).

use thiserror::Error;

/// Errors that can occur during pricing pipeline operations.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Fetch operation failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Tabular store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Detail archive (de)serialization failed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while fetching a source page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Page does not exist upstream
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Upstream refused the request (often bot detection)
    #[error("forbidden: {url}")]
    Forbidden { url: String },

    /// Request exceeded the per-request deadline
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Any other HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },
}

/// Errors that can occur reading or writing the tabular store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File has no header row to map fields from
    #[error("missing header row in {path}")]
    MissingHeader { path: String },
}

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
