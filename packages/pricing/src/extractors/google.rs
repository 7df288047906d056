//! Google Gemini docs extractor.
//!
//! The Gemini docs render as markdown-ish text where each model is
//! introduced by its backticked code (`` `gemini-2.5-pro` ``) followed
//! by a spec block: "Input token limit 1,048,576", "Output token limit
//! 65,536", "Input price $1.25", "Output price $10.00". The content is
//! sectioned per model code and each section searched independently.

use regex::Regex;
use tracing::debug;

use crate::extractors::digits;
use crate::traits::extractor::Extractor;
use crate::traits::fetcher::RawPage;
use crate::types::detail::DetailRecord;

/// Extracts specs from Gemini model and pricing documentation.
pub struct GoogleExtractor {
    model_code: Regex,
    input_limit: Regex,
    output_limit: Regex,
    input_price: Regex,
    output_price: Regex,
    cutoff: Regex,
}

impl Default for GoogleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleExtractor {
    /// Create the extractor with its section patterns compiled.
    pub fn new() -> Self {
        Self {
            model_code: Regex::new(r"`(gemini[a-z0-9.\-]*)`").unwrap(),
            input_limit: Regex::new(r"(?is)Input token limit\D*([\d,]+)").unwrap(),
            output_limit: Regex::new(r"(?is)Output token limit\D*([\d,]+)").unwrap(),
            input_price: Regex::new(r"(?is)Input price[^$]*\$([\d.]+)").unwrap(),
            output_price: Regex::new(r"(?is)Output price[^$]*\$([\d.]+)").unwrap(),
            cutoff: Regex::new(r"(?is)Knowledge cutoff\W*([A-Za-z]+\s+\d{4})").unwrap(),
        }
    }
}

impl Extractor for GoogleExtractor {
    fn extract(&self, page: &RawPage) -> Vec<DetailRecord> {
        // Section boundaries: each model code starts a section that runs
        // to the next code's first occurrence.
        let mut boundaries: Vec<(String, usize, usize)> = Vec::new();
        for cap in self.model_code.captures_iter(&page.content) {
            let name = cap[1].to_string();
            if !boundaries.iter().any(|(n, _, _)| *n == name) {
                let code = cap.get(0).expect("whole match");
                boundaries.push((name, code.end(), code.start()));
            }
        }

        let mut details = Vec::new();
        for (i, (name, start, _)) in boundaries.iter().enumerate() {
            let end = boundaries
                .get(i + 1)
                .map(|(_, _, next_start)| *next_start)
                .unwrap_or(page.content.len());
            let section = &page.content[*start..end];

            let mut detail = DetailRecord::new(name).with_documentation_url(&page.url);
            if let Some(cap) = self.input_limit.captures(section) {
                detail.context_window = Some(digits(&cap[1]));
            }
            if let Some(cap) = self.output_limit.captures(section) {
                detail.max_output_tokens = Some(digits(&cap[1]));
            }
            if let Some(cap) = self.input_price.captures(section) {
                detail.input_cost = Some(cap[1].to_string());
            }
            if let Some(cap) = self.output_price.captures(section) {
                detail.output_cost = Some(cap[1].to_string());
            }
            if let Some(cap) = self.cutoff.captures(section) {
                detail.knowledge_cutoff = Some(cap[1].to_string());
            }

            if detail.is_empty() {
                debug!(model = %name, "model code with no spec block, skipping");
                continue;
            }
            details.push(detail);
        }

        debug!(url = %page.url, models = details.len(), "gemini docs extracted");
        details
    }

    fn provider(&self) -> &str {
        "Google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEMINI_DOCS: &str = r#"
        ## Gemini 2.5 Pro

        Model code: `gemini-2.5-pro`

        Input token limit: 1,048,576
        Output token limit: 65,536
        Knowledge cutoff: January 2025
        Input price: $1.25 per 1M tokens
        Output price: $10.00 per 1M tokens

        ## Gemini 2.5 Flash

        Model code: `gemini-2.5-flash`

        Input token limit: 1,048,576
        Output token limit: 65,536
        Input price: $0.30 per 1M tokens
        Output price: $2.50 per 1M tokens

        See also `gemini-2.5-flash` in the changelog.
    "#;

    #[test]
    fn test_extract_sections_per_model_code() {
        let page = RawPage::new("https://ai.google.dev/gemini-api/docs/models", GEMINI_DOCS);
        let details = GoogleExtractor::new().extract(&page);

        assert_eq!(details.len(), 2);

        let pro = &details[0];
        assert_eq!(pro.name, "gemini-2.5-pro");
        assert_eq!(pro.context_window.as_deref(), Some("1048576"));
        assert_eq!(pro.max_output_tokens.as_deref(), Some("65536"));
        assert_eq!(pro.input_cost.as_deref(), Some("1.25"));
        assert_eq!(pro.output_cost.as_deref(), Some("10.00"));
        assert_eq!(pro.knowledge_cutoff.as_deref(), Some("January 2025"));

        // Repeated code later in the page does not duplicate the model.
        let flash = &details[1];
        assert_eq!(flash.name, "gemini-2.5-flash");
        assert_eq!(flash.input_cost.as_deref(), Some("0.30"));
    }

    #[test]
    fn test_code_without_specs_is_skipped() {
        let page = RawPage::new(
            "https://ai.google.dev/gemini-api/docs/models",
            "The `gemini-2.0-flash` model was retired.",
        );
        assert!(GoogleExtractor::new().extract(&page).is_empty());
    }
}
