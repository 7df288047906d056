//! Scraped model details and the side-artifact archive.
//!
//! A [`DetailRecord`] is a transient fact set about one model, produced
//! by a provider extractor and discarded after reconciliation. The
//! [`DetailArchive`] is the optional JSON artifact written next to the
//! table: a map of model name to details plus the scrape timestamp.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Facts scraped about a single model, keyed by its free-text name.
///
/// Every field is optional: provider pages vary, and a detail that the
/// page did not yield is simply absent, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Human-readable model name or identifier as it appeared on the
    /// page (e.g. "Claude Opus 4.5", "gpt-4o"). Serialized as the map
    /// key in the archive, not as a field.
    #[serde(skip)]
    pub name: String,

    /// Context window size in tokens, as scraped text (digits only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<String>,

    /// Maximum output tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<String>,

    /// Knowledge cutoff, as printed (e.g. "Mar 2025", "Aug 31, 2025").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_cutoff: Option<String>,

    /// Input cost per 1M tokens in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_cost: Option<String>,

    /// Output cost per 1M tokens in USD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_cost: Option<String>,

    /// Pre-formatted rate-limit summary (e.g. "Rate limits: 4000 RPM |
    /// 2,000,000 ITPM | 400,000 OTPM (Tier 4)").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<String>,

    /// Link to the model's documentation page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

impl DetailRecord {
    /// Create an empty detail record for a model name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the context window.
    pub fn with_context_window(mut self, tokens: impl Into<String>) -> Self {
        self.context_window = Some(tokens.into());
        self
    }

    /// Set the max output tokens.
    pub fn with_max_output_tokens(mut self, tokens: impl Into<String>) -> Self {
        self.max_output_tokens = Some(tokens.into());
        self
    }

    /// Set the knowledge cutoff.
    pub fn with_knowledge_cutoff(mut self, cutoff: impl Into<String>) -> Self {
        self.knowledge_cutoff = Some(cutoff.into());
        self
    }

    /// Set the input cost per 1M tokens.
    pub fn with_input_cost(mut self, cost: impl Into<String>) -> Self {
        self.input_cost = Some(cost.into());
        self
    }

    /// Set the output cost per 1M tokens.
    pub fn with_output_cost(mut self, cost: impl Into<String>) -> Self {
        self.output_cost = Some(cost.into());
        self
    }

    /// Set the rate-limit summary.
    pub fn with_rate_limits(mut self, summary: impl Into<String>) -> Self {
        self.rate_limits = Some(summary.into());
        self
    }

    /// Set the documentation URL.
    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Whether this record carries no facts at all.
    pub fn is_empty(&self) -> bool {
        self.context_window.is_none()
            && self.max_output_tokens.is_none()
            && self.knowledge_cutoff.is_none()
            && self.input_cost.is_none()
            && self.output_cost.is_none()
            && self.rate_limits.is_none()
            && self.documentation_url.is_none()
    }

    /// Free-text annotations destined for the billing-notes field.
    ///
    /// The knowledge cutoff is prefixed so the note is self-describing;
    /// the rate-limit summary is already formatted by the extractor.
    pub fn annotations(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(cutoff) = self.knowledge_cutoff.as_deref() {
            if !cutoff.trim().is_empty() {
                notes.push(format!("Knowledge cutoff: {}", cutoff.trim()));
            }
        }
        if let Some(limits) = self.rate_limits.as_deref() {
            if !limits.trim().is_empty() {
                notes.push(limits.trim().to_string());
            }
        }
        notes
    }
}

/// The persisted detail-JSON side artifact of one scrape run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailArchive {
    /// When the scrape run happened.
    pub scraped_at: DateTime<Utc>,

    /// Model name -> scraped details, in scrape order. Insertion order
    /// is preserved so reconciliation iterates details deterministically.
    pub models: IndexMap<String, DetailRecord>,
}

impl DetailArchive {
    /// Create an empty archive stamped now.
    pub fn new() -> Self {
        Self {
            scraped_at: Utc::now(),
            models: IndexMap::new(),
        }
    }

    /// Add a detail record, keyed by its model name.
    pub fn insert(&mut self, record: DetailRecord) {
        self.models.insert(record.name.clone(), record);
    }

    /// Number of models in the archive.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the archive holds no models.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The detail records in stable archive order, names restored from
    /// the map keys (the name field is not serialized).
    pub fn records(&self) -> Vec<DetailRecord> {
        self.models
            .iter()
            .map(|(name, details)| {
                let mut record = details.clone();
                record.name = name.clone();
                record
            })
            .collect()
    }
}
