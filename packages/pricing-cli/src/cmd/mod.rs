//! Subcommand implementations.

pub mod merge;
pub mod reconcile;
pub mod scrape;
pub mod seed;
pub mod summary;

use clap::ValueEnum;
use pricing::{AnthropicExtractor, Extractor, GoogleExtractor, OpenAiExtractor};

/// Providers the pipeline knows how to scrape.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Provider {
    Openai,
    Anthropic,
    Google,
}

impl Provider {
    /// The extractor for this provider's pages.
    pub fn extractor(&self) -> Box<dyn Extractor> {
        match self {
            Provider::Openai => Box::new(OpenAiExtractor::new()),
            Provider::Anthropic => Box::new(AnthropicExtractor::new()),
            Provider::Google => Box::new(GoogleExtractor::new()),
        }
    }
}
