//! LLM Provider Pricing Table Library
//!
//! Maintains a consolidated pricing table for LLM providers (OpenAI,
//! Anthropic, Google): fetch provider docs, extract per-model details,
//! reconcile them into a CSV-backed table, and merge provider tables
//! into one canonical file.
//!
//! # Design Philosophy
//!
//! **"Fill, never clobber"**
//!
//! - Reconciliation only fills empty fields; populated data is never
//!   overwritten and nothing is fabricated
//! - Idempotent by construction: rerunning the same scrape is a no-op
//! - Degrade, don't halt: a failed source means fewer fields filled
//! - Mechanics behind trait seams (fetch, extract, match, store) so
//!   each collaborator swaps independently
//!
//! # Usage
//!
//! ```rust,ignore
//! use pricing::{
//!     matchers::ContainmentMatcher, pipeline, stores::CsvStore,
//!     extractors::OpenAiExtractor, fetchers::HttpFetcher, ScrapeConfig,
//! };
//!
//! let config = ScrapeConfig::new(["https://platform.openai.com/docs/models/gpt-4o"]);
//! let archive = pipeline::scrape_details(&HttpFetcher::new(), &OpenAiExtractor::new(), &config).await;
//!
//! let store = CsvStore::new("data/openai/openai-pricing.csv");
//! let outcome = pipeline::update_store(&store, &archive.records(), &ContainmentMatcher::new())?;
//! println!("{} rows updated", outcome.records_changed);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Fetcher, Extractor, NameMatcher, TabularStore)
//! - [`types`] - Row schema, detail records, configuration
//! - [`pipeline`] - Scrape, reconcile, and merge operations
//! - [`matchers`] - Name-matching strategies
//! - [`extractors`] - Provider-specific page extractors
//! - [`fetchers`] - HTTP fetching
//! - [`stores`] - Tabular store implementations (CSV, in-memory)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod matchers;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, PricingError, Result, StoreError};
pub use traits::{
    extractor::Extractor,
    fetcher::{Fetcher, RawPage},
    matcher::{match_key, NameMatcher},
    store::TabularStore,
};
pub use types::{
    config::ScrapeConfig,
    detail::{DetailArchive, DetailRecord},
    record::{Field, Record},
    seed::{SeedPrice, SeedPrices},
};

// Re-export pipeline operations
pub use pipeline::{
    merge_sources, reconcile, scrape_details, summarize_by, update_store, ReconcileOutcome,
};

// Re-export implementations
pub use extractors::{AnthropicExtractor, GoogleExtractor, OpenAiExtractor};
pub use fetchers::HttpFetcher;
pub use matchers::{ContainmentMatcher, ExactMatcher};
pub use stores::{CsvStore, MemoryStore};
