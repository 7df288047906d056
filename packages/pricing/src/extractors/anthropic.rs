//! Anthropic model-comparison extractor.
//!
//! The docs publish one comparison table: model names down the first
//! column, spec columns ("Context window", "Max output", "Training
//! cutoff") across. Cells print token counts as "200K tokens" or
//! "200,000 tokens" and cutoffs as "Mar 2025". Which columns appear
//! changes over time, so mapping is header-driven.

use regex::Regex;
use tracing::debug;

use crate::extractors::{digits, table_rows};
use crate::traits::extractor::Extractor;
use crate::traits::fetcher::RawPage;
use crate::types::detail::DetailRecord;

/// Extracts specs from the Anthropic model comparison page.
pub struct AnthropicExtractor {
    tokens: Regex,
    cutoff: Regex,
    context_header: Regex,
    output_header: Regex,
    cutoff_header: Regex,
}

impl Default for AnthropicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AnthropicExtractor {
    /// Create the extractor with its table patterns compiled.
    pub fn new() -> Self {
        Self {
            tokens: Regex::new(r"(?i)([\d,]+)\s*(K?)\s*tokens?").unwrap(),
            cutoff: Regex::new(r"([A-Za-z]+\s+\d{4})").unwrap(),
            context_header: Regex::new(r"(?i)context|input").unwrap(),
            output_header: Regex::new(r"(?i)output|max").unwrap(),
            cutoff_header: Regex::new(r"(?i)knowledge|cutoff|training").unwrap(),
        }
    }

    /// Parse a token-count cell, expanding a K suffix ("200K" -> 200000).
    fn token_count(&self, cell: &str) -> Option<String> {
        let cap = self.tokens.captures(cell)?;
        let count = digits(&cap[1]);
        if count.is_empty() {
            return None;
        }
        if cap[2].eq_ignore_ascii_case("k") {
            let value: u64 = count.parse().ok()?;
            Some((value * 1000).to_string())
        } else {
            Some(count)
        }
    }
}

impl Extractor for AnthropicExtractor {
    fn extract(&self, page: &RawPage) -> Vec<DetailRecord> {
        let rows = table_rows(&page.content);
        let Some(headers) = rows.first() else {
            debug!(url = %page.url, "no comparison table found");
            return vec![];
        };

        let mut details = Vec::new();
        for cells in rows.iter().skip(1) {
            let Some(model) = cells.first().filter(|m| m.contains("Claude")) else {
                continue;
            };

            let mut detail = DetailRecord::new(model).with_documentation_url(&page.url);
            for (i, cell) in cells.iter().enumerate().skip(1) {
                let Some(header) = headers.get(i) else { break };

                if self.context_header.is_match(header) {
                    if let Some(tokens) = self.token_count(cell) {
                        detail.context_window = Some(tokens);
                    }
                } else if self.output_header.is_match(header) {
                    if let Some(tokens) = self.token_count(cell) {
                        detail.max_output_tokens = Some(tokens);
                    }
                } else if self.cutoff_header.is_match(header) {
                    if let Some(cap) = self.cutoff.captures(cell) {
                        detail.knowledge_cutoff = Some(cap[1].to_string());
                    }
                }
            }
            details.push(detail);
        }

        debug!(url = %page.url, models = details.len(), "comparison table extracted");
        details
    }

    fn provider(&self) -> &str {
        "Anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPARISON_PAGE: &str = r#"
        <table>
          <tr>
            <th>Model</th><th>Context window</th><th>Max output</th><th>Training cutoff</th>
          </tr>
          <tr>
            <td>Claude Opus 4.5</td><td>200K tokens</td><td>64,000 tokens</td><td>Mar 2025</td>
          </tr>
          <tr>
            <td>Claude Haiku 3</td><td>100,000 tokens</td><td>4,096 tokens</td><td>Aug 2023</td>
          </tr>
          <tr>
            <td>Legacy note</td><td>-</td><td>-</td><td>-</td>
          </tr>
        </table>
    "#;

    #[test]
    fn test_extract_comparison_table() {
        let page = RawPage::new(
            "https://platform.claude.com/docs/en/about-claude/models",
            COMPARISON_PAGE,
        );
        let details = AnthropicExtractor::new().extract(&page);

        assert_eq!(details.len(), 2);

        let opus = &details[0];
        assert_eq!(opus.name, "Claude Opus 4.5");
        assert_eq!(opus.context_window.as_deref(), Some("200000"));
        assert_eq!(opus.max_output_tokens.as_deref(), Some("64000"));
        assert_eq!(opus.knowledge_cutoff.as_deref(), Some("Mar 2025"));

        let haiku = &details[1];
        assert_eq!(haiku.context_window.as_deref(), Some("100000"));
        assert_eq!(haiku.max_output_tokens.as_deref(), Some("4096"));
    }

    #[test]
    fn test_page_without_table_yields_nothing() {
        let page = RawPage::new("https://platform.claude.com/docs", "<p>Claude is great</p>");
        assert!(AnthropicExtractor::new().extract(&page).is_empty());
    }
}
