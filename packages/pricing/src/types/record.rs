//! The pricing table row schema.
//!
//! Every provider table and the consolidated table share one canonical
//! field order. A field holding the empty string means "unknown" —
//! distinct from the field being absent in a source file, which only
//! happens while reading foreign tables and is normalized away here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The recognized fields of a pricing row, in canonical order.
///
/// The discriminant order is the column order of every persisted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Provider,
    Model,
    SourceType,
    ContextWindow,
    InputCost,
    OutputCost,
    MinTokens,
    MaxTokens,
    RateLimit,
    BillingNotes,
    DocumentationUrl,
    LastUpdated,
}

impl Field {
    /// All fields in canonical column order.
    pub const ALL: [Field; 12] = [
        Field::Provider,
        Field::Model,
        Field::SourceType,
        Field::ContextWindow,
        Field::InputCost,
        Field::OutputCost,
        Field::MinTokens,
        Field::MaxTokens,
        Field::RateLimit,
        Field::BillingNotes,
        Field::DocumentationUrl,
        Field::LastUpdated,
    ];

    /// The persisted column header for this field.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Provider => "Provider",
            Field::Model => "Model",
            Field::SourceType => "Source Type",
            Field::ContextWindow => "Context Window (Tokens)",
            Field::InputCost => "Input Cost per 1M Tokens (USD)",
            Field::OutputCost => "Output Cost per 1M Tokens (USD)",
            Field::MinTokens => "Min Tokens",
            Field::MaxTokens => "Max Tokens",
            Field::RateLimit => "Rate Limit (Requests/sec)",
            Field::BillingNotes => "Billing Notes",
            Field::DocumentationUrl => "Documentation URL",
            Field::LastUpdated => "Last Updated",
        }
    }

    /// Map a column header back to its field, if recognized.
    pub fn from_header(header: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.header() == header.trim())
    }
}

/// One row of a pricing table.
///
/// Internally an ordered map so that rows read from foreign tables keep
/// whatever subset of fields they carried; [`Record::get`] treats absent
/// and empty identically, and writing always emits the full canonical
/// column set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: IndexMap<Field, String>,
}

impl Record {
    /// Create an empty record (all fields unknown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record for a provider's model.
    pub fn for_model(provider: impl Into<String>, model: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.set(Field::Provider, provider);
        record.set(Field::Model, model);
        record
    }

    /// Get a field value; absent fields read as the empty string.
    pub fn get(&self, field: Field) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set a field value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Builder-style field assignment.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether a field currently holds a value.
    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// The model name this row describes.
    pub fn model(&self) -> &str {
        self.get(Field::Model)
    }

    /// Fill a field only if it is currently empty and the value is not.
    ///
    /// Returns true when the field was actually written.
    pub fn fill(&mut self, field: Field, value: &str) -> bool {
        if self.is_filled(field) || value.trim().is_empty() {
            return false;
        }
        self.set(field, value);
        true
    }

    /// Append an annotation to the billing notes with a `"; "` separator.
    ///
    /// Skipped when the annotation is already present as a substring, so
    /// repeated runs never stack duplicates. Returns true when appended.
    pub fn append_note(&mut self, annotation: &str) -> bool {
        let annotation = annotation.trim();
        if annotation.is_empty() {
            return false;
        }
        let current = self.get(Field::BillingNotes);
        if current.contains(annotation) {
            return false;
        }
        let updated = if current.is_empty() {
            annotation.to_string()
        } else {
            format!("{current}; {annotation}")
        };
        self.set(Field::BillingNotes, updated);
        true
    }

    /// Remap this record onto the full canonical field set.
    ///
    /// Fields the source never carried come out as empty strings, in
    /// canonical order.
    pub fn normalized(&self) -> Record {
        let mut fields = IndexMap::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            fields.insert(field, self.get(field).to_string());
        }
        Record { fields }
    }

    /// Build a record from `(header, value)` pairs, e.g. a CSV row.
    ///
    /// Unrecognized headers are dropped.
    pub fn from_headers<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Record {
        let mut record = Record::new();
        for (header, value) in pairs {
            if let Some(field) = Field::from_header(header) {
                record.set(field, value);
            }
        }
        record
    }

    /// Values in canonical column order, for writing.
    pub fn canonical_values(&self) -> Vec<&str> {
        Field::ALL.iter().map(|f| self.get(*f)).collect()
    }
}
