//! Default containment-based name matching.

use crate::traits::matcher::{match_key, NameMatcher};

/// Matches on normalized equality, then normalized containment in
/// either direction.
///
/// This is a precision/recall trade-off, not a correctness claim:
/// short or generic normalized names ("4") will false-positive against
/// anything containing them, and a name like "gpt-4" matches both a
/// "gpt-4" row and a "gpt-4-turbo" row. Scraped free-text names carry
/// no stronger signal to disambiguate on, so the ambiguity is resolved
/// by first-match-wins iteration order at the reconciler, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl ContainmentMatcher {
    /// Create the default matcher.
    pub fn new() -> Self {
        Self
    }
}

impl NameMatcher for ContainmentMatcher {
    fn matches(&self, a: &str, b: &str) -> bool {
        let ka = match_key(a);
        let kb = match_key(b);
        if ka.is_empty() || kb.is_empty() {
            return false;
        }
        ka == kb || ka.contains(&kb) || kb.contains(&ka)
    }
}
