//! Provider-specific page extractors.
//!
//! All three providers publish specs as marketing-grade HTML or
//! markdown, so extraction is pattern matching over visible text and
//! table cells — no DOM parsing. Patterns that fail to match leave the
//! corresponding detail field unset; they never fail the run.

pub mod anthropic;
pub mod google;
pub mod openai;

pub use anthropic::AnthropicExtractor;
pub use google::GoogleExtractor;
pub use openai::OpenAiExtractor;

use regex::Regex;

/// Strip scripts, styles, and tags down to visible text.
pub(crate) fn visible_text(html: &str) -> String {
    let script_pattern = Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
    let style_pattern = Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();

    let text = script_pattern.replace_all(html, " ");
    let text = style_pattern.replace_all(&text, " ");
    let text = tag_pattern.replace_all(&text, " ");

    decode_entities(&text)
}

/// Decode the handful of HTML entities that show up in spec tables.
pub(crate) fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Extract table rows as cell-text vectors, header and body alike.
///
/// Each `<tr>` becomes one row of cleaned `<th>`/`<td>` cell texts.
pub(crate) fn table_rows(html: &str) -> Vec<Vec<String>> {
    let row_pattern = Regex::new(r"(?s)<tr[^>]*>(.*?)</tr>").unwrap();
    let cell_pattern = Regex::new(r"(?s)<t[hd][^>]*>(.*?)</t[hd]>").unwrap();
    let tag_pattern = Regex::new(r"<[^>]+>").unwrap();

    row_pattern
        .captures_iter(html)
        .map(|row| {
            cell_pattern
                .captures_iter(&row[1])
                .map(|cell| {
                    let text = tag_pattern.replace_all(&cell[1], " ");
                    decode_entities(text.trim())
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect()
        })
        .filter(|cells: &Vec<String>| !cells.is_empty())
        .collect()
}

/// Strip thousands separators from a scraped number ("200,000" -> "200000").
pub(crate) fn digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_drops_scripts_and_tags() {
        let html = "<html><script>var x = 1;</script><h1>400,000 context window</h1></html>";
        let text = visible_text(html);
        assert!(text.contains("400,000 context window"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn test_table_rows_extracts_cells() {
        let html = r#"
            <table>
              <tr><th>Tier</th><th>RPM</th><th>TPM</th></tr>
              <tr><td>Tier 1</td><td>500</td><td>30,000</td></tr>
              <tr><td>Tier 4</td><td>10,000</td><td>2,000,000</td></tr>
            </table>
        "#;

        let rows = table_rows(html);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Tier", "RPM", "TPM"]);
        assert_eq!(rows[2], vec!["Tier 4", "10,000", "2,000,000"]);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("200,000"), "200000");
        assert_eq!(digits("1048576"), "1048576");
        assert_eq!(digits("no numbers"), "");
    }
}
