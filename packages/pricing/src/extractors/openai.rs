//! OpenAI model-page extractor.
//!
//! Each model has its own documentation page with quick-stat text like
//! "400,000 context window", "128,000 max output tokens", and
//! "Aug 31, 2025 knowledge cutoff", plus a per-tier rate-limit table.
//! One page yields at most one detail record, named after the page's
//! URL slug (".../docs/models/gpt-4o").

use regex::Regex;
use tracing::debug;

use crate::extractors::{digits, table_rows, visible_text};
use crate::traits::extractor::Extractor;
use crate::traits::fetcher::RawPage;
use crate::types::detail::DetailRecord;

/// Extracts specs from OpenAI per-model documentation pages.
pub struct OpenAiExtractor {
    context_window: Regex,
    max_output: Regex,
    knowledge_cutoff: Regex,
}

impl Default for OpenAiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenAiExtractor {
    /// Create the extractor with its page patterns compiled.
    pub fn new() -> Self {
        Self {
            context_window: Regex::new(r"(?i)([\d,]+)\s+context window").unwrap(),
            max_output: Regex::new(r"(?i)([\d,]+)\s+max output tokens").unwrap(),
            knowledge_cutoff: Regex::new(r"(?i)([A-Za-z]+\s+\d{1,2},\s+\d{4})\s+knowledge cutoff")
                .unwrap(),
        }
    }

    /// Summarize the highest supported tier from the rate-limit table.
    fn rate_limit_summary(&self, html: &str) -> Option<String> {
        let rows = table_rows(html);
        let header = rows.first()?;
        let header_lower: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
        if !header_lower.iter().any(|h| h == "tier") || !header_lower.iter().any(|h| h == "rpm") {
            return None;
        }

        // Highest standard tier is the last supported row.
        let tier_row = rows
            .iter()
            .skip(1)
            .filter(|cells| {
                cells
                    .first()
                    .is_some_and(|c| c.to_lowercase().starts_with("tier"))
                    && !cells.join(" ").to_lowercase().contains("not supported")
            })
            .last()?;

        let tier = tier_row.first()?;
        let rpm = tier_row.get(1).map(|c| digits(c)).filter(|c| !c.is_empty())?;
        let tpm = tier_row.get(2).map(|c| digits(c)).filter(|c| !c.is_empty());

        Some(match tpm {
            Some(tpm) => format!("Rate limits: {rpm} RPM | {tpm} TPM ({tier})"),
            None => format!("Rate limits: {rpm} RPM ({tier})"),
        })
    }
}

impl Extractor for OpenAiExtractor {
    fn extract(&self, page: &RawPage) -> Vec<DetailRecord> {
        let Some(name) = page.url_slug() else {
            debug!(url = %page.url, "no model slug in URL, skipping page");
            return vec![];
        };

        let text = visible_text(&page.content);
        let mut detail = DetailRecord::new(name).with_documentation_url(&page.url);

        if let Some(cap) = self.context_window.captures(&text) {
            detail.context_window = Some(digits(&cap[1]));
        }
        if let Some(cap) = self.max_output.captures(&text) {
            detail.max_output_tokens = Some(digits(&cap[1]));
        }
        if let Some(cap) = self.knowledge_cutoff.captures(&text) {
            detail.knowledge_cutoff = Some(cap[1].trim().to_string());
        }
        if let Some(summary) = self.rate_limit_summary(&page.content) {
            detail.rate_limits = Some(summary);
        }

        vec![detail]
    }

    fn provider(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_PAGE: &str = r#"
        <html><body>
          <h1>GPT-4o</h1>
          <div>400,000 context window</div>
          <div>128,000 max output tokens</div>
          <div>Aug 31, 2025 knowledge cutoff</div>
          <table>
            <tr><th>Tier</th><th>RPM</th><th>TPM</th></tr>
            <tr><td>Tier 1</td><td>500</td><td>30,000</td></tr>
            <tr><td>Tier 4</td><td>10,000</td><td>2,000,000</td></tr>
            <tr><td>Tier 5</td><td colspan="2">Not supported</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn test_extract_model_page() {
        let page = RawPage::new("https://platform.openai.com/docs/models/gpt-4o", MODEL_PAGE);
        let details = OpenAiExtractor::new().extract(&page);

        assert_eq!(details.len(), 1);
        let detail = &details[0];
        assert_eq!(detail.name, "gpt-4o");
        assert_eq!(detail.context_window.as_deref(), Some("400000"));
        assert_eq!(detail.max_output_tokens.as_deref(), Some("128000"));
        assert_eq!(detail.knowledge_cutoff.as_deref(), Some("Aug 31, 2025"));
        assert_eq!(
            detail.rate_limits.as_deref(),
            Some("Rate limits: 10000 RPM | 2000000 TPM (Tier 4)")
        );
        assert_eq!(
            detail.documentation_url.as_deref(),
            Some("https://platform.openai.com/docs/models/gpt-4o")
        );
    }

    #[test]
    fn test_unparseable_page_yields_sparse_detail() {
        let page = RawPage::new(
            "https://platform.openai.com/docs/models/gpt-4o",
            "<html><body>Nothing useful here</body></html>",
        );
        let details = OpenAiExtractor::new().extract(&page);

        assert_eq!(details.len(), 1);
        assert!(details[0].context_window.is_none());
        assert!(details[0].rate_limits.is_none());
    }
}
