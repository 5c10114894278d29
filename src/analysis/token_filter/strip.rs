//! Strip filter implementation.

use super::Filter;

/// A filter that removes ASCII punctuation from both ends of a token.
///
/// Tokens that are nothing but punctuation are rejected.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, token: String) -> Option<String> {
        let trimmed = token.trim_matches(|c: char| c.is_ascii_punctuation());
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == token.len() {
            Some(token)
        } else {
            Some(trimmed.to_string())
        }
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
