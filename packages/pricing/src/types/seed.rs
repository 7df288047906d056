//! Reference price data loaded from JSON, not embedded in code.
//!
//! Providers change prices without changing page structure; keeping the
//! per-provider price tables as versioned data files means updates never
//! require recompiling. A seed file pre-populates rows that scraping
//! then enriches.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};
use crate::types::record::{Field, Record};

/// One seeded price entry for a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPrice {
    /// Provider name (e.g. "OpenAI", "Anthropic", "Google").
    pub provider: String,

    /// Model name as published.
    pub model: String,

    /// Source/variant type (e.g. "Standard", "Batch", "Cached input").
    #[serde(default)]
    pub source_type: String,

    /// Input cost per 1M tokens in USD.
    #[serde(default)]
    pub input_cost: String,

    /// Output cost per 1M tokens in USD.
    #[serde(default)]
    pub output_cost: String,

    /// Family-default context window, used when scraping yields none.
    #[serde(default)]
    pub context_window: String,

    /// Family-default max output tokens.
    #[serde(default)]
    pub max_tokens: String,

    /// Tier caveats that no page spells out per model (e.g. "Prompts
    /// <= 200k tokens; Output includes thinking tokens").
    #[serde(default)]
    pub billing_notes: String,

    /// Documentation page for this model.
    #[serde(default)]
    pub documentation_url: String,
}

/// A versioned seed price file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedPrices {
    pub models: Vec<SeedPrice>,
}

impl SeedPrices {
    /// Parse a seed file from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(PricingError::Json)
    }

    /// Load a seed file from disk.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| PricingError::Store(crate::error::StoreError::Io(e)))?;
        Self::from_json(&json)
    }

    /// Convert the seed entries into pricing rows, in file order.
    pub fn records(&self) -> Vec<Record> {
        self.models
            .iter()
            .map(|seed| {
                Record::for_model(&seed.provider, &seed.model)
                    .with(Field::SourceType, &seed.source_type)
                    .with(Field::ContextWindow, &seed.context_window)
                    .with(Field::InputCost, &seed.input_cost)
                    .with(Field::OutputCost, &seed.output_cost)
                    .with(Field::MaxTokens, &seed.max_tokens)
                    .with(Field::BillingNotes, &seed.billing_notes)
                    .with(Field::DocumentationUrl, &seed.documentation_url)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_file_to_records() {
        let json = r#"{
            "models": [
                {
                    "provider": "Anthropic",
                    "model": "Claude Opus 4.5",
                    "source_type": "Standard",
                    "input_cost": "5.00",
                    "output_cost": "25.00",
                    "documentation_url": "https://platform.claude.com/docs/en/about-claude/models"
                },
                {
                    "provider": "OpenAI",
                    "model": "gpt-4o",
                    "input_cost": "2.50",
                    "output_cost": "10.00"
                }
            ]
        }"#;

        let seeds = SeedPrices::from_json(json).unwrap();
        let records = seeds.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(Field::Model), "Claude Opus 4.5");
        assert_eq!(records[0].get(Field::InputCost), "5.00");
        assert_eq!(records[1].get(Field::SourceType), "");
        assert_eq!(records[1].get(Field::OutputCost), "10.00");
    }

    #[test]
    fn test_seed_carries_token_defaults_and_tier_notes() {
        let json = r#"{
            "models": [
                {
                    "provider": "Google",
                    "model": "gemini-2.5-pro",
                    "source_type": "Standard",
                    "input_cost": "1.25",
                    "output_cost": "10.00",
                    "context_window": "1048576",
                    "max_tokens": "65536",
                    "billing_notes": "Prompts <= 200k tokens; Output includes thinking tokens"
                }
            ]
        }"#;

        let records = SeedPrices::from_json(json).unwrap().records();
        let row = &records[0];
        assert_eq!(row.get(Field::ContextWindow), "1048576");
        assert_eq!(row.get(Field::MaxTokens), "65536");
        assert_eq!(
            row.get(Field::BillingNotes),
            "Prompts <= 200k tokens; Output includes thinking tokens"
        );
    }

    #[test]
    fn test_seeded_defaults_yield_to_nothing_but_fill_gaps() {
        use crate::matchers::ContainmentMatcher;
        use crate::pipeline::reconcile;
        use crate::types::detail::DetailRecord;

        let json = r#"{
            "models": [
                {
                    "provider": "Anthropic",
                    "model": "Claude Haiku 3",
                    "context_window": "100000",
                    "max_tokens": "4096"
                }
            ]
        }"#;
        let records = SeedPrices::from_json(json).unwrap().records();

        // A later scrape never overwrites the seeded family defaults.
        let detail = DetailRecord::new("Claude Haiku 3").with_context_window("200000");
        let outcome = reconcile(
            records,
            &[detail],
            &ContainmentMatcher::new(),
            chrono::NaiveDate::from_ymd_opt(2026, 8, 29).unwrap(),
        );
        assert_eq!(outcome.records[0].get(Field::ContextWindow), "100000");
        assert_eq!(outcome.records[0].get(Field::MaxTokens), "4096");
    }
}
