//! Strict normalized-equality matching.

use crate::traits::matcher::{match_key, NameMatcher};

/// Matches only on normalized equality; no containment.
///
/// Trades recall for precision relative to [`ContainmentMatcher`]:
/// variant suffixes ("-turbo", "(latest)") no longer match their base
/// model, but short generic names stop matching everything.
///
/// [`ContainmentMatcher`]: crate::matchers::ContainmentMatcher
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl ExactMatcher {
    /// Create a strict matcher.
    pub fn new() -> Self {
        Self
    }
}

impl NameMatcher for ExactMatcher {
    fn matches(&self, a: &str, b: &str) -> bool {
        let ka = match_key(a);
        !ka.is_empty() && ka == match_key(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_only() {
        let matcher = ExactMatcher::new();
        assert!(matcher.matches("Claude Opus 4.5", "claude opus 4.5"));
        assert!(!matcher.matches("gpt-4", "gpt-4-turbo"));
        assert!(!matcher.matches("4", "gpt-4o"));
        assert!(!matcher.matches("", ""));
    }
}
