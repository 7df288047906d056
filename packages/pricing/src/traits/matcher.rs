//! Name-matching strategy trait.
//!
//! Scraped model names are free text with no shared vocabulary across
//! providers ("Claude Opus 4.5", "gpt-4o", "gemini-2.5-pro"), so row
//! matching is a pluggable string strategy. The reconciler only ever
//! calls [`NameMatcher::matches`]; swapping in a stricter strategy
//! (exact-id lookup, say) never touches reconciliation itself.

/// Decides whether two free-text model names refer to the same model.
pub trait NameMatcher: Send + Sync {
    /// True when `a` and `b` name the same model under this strategy.
    ///
    /// Must be infallible: absence of a match is informational, never
    /// an error.
    fn matches(&self, a: &str, b: &str) -> bool;
}

/// Derive the normalized comparison key for a model name.
///
/// Lowercased, punctuation replaced by single spaces, internal
/// whitespace collapsed, trimmed. Used only for comparison, never
/// persisted: "Claude Opus 4.5" and "claude-opus-4.5" both key to
/// `"claude opus 4 5"`.
pub fn match_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_space = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            for lower in ch.to_lowercase() {
                key.push(lower);
            }
        } else {
            pending_space = true;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_key_normalization() {
        assert_eq!(match_key("Claude Opus 4.5"), "claude opus 4 5");
        assert_eq!(match_key("claude-opus-4.5"), "claude opus 4 5");
        assert_eq!(match_key("  GPT-4o  "), "gpt 4o");
        assert_eq!(match_key("Gemini  2.5\tPro"), "gemini 2 5 pro");
    }

    #[test]
    fn test_match_key_empty_and_punctuation_only() {
        assert_eq!(match_key(""), "");
        assert_eq!(match_key("---"), "");
    }
}
