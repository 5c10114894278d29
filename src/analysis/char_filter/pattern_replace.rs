use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TermdexError};

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)
                .map_err(|e| TermdexError::analysis(format!("Invalid regex pattern: {e}")))?,
            replacement: replacement.to_string(),
        })
    }

    /// Remove every `'s` from the text, wherever it occurs.
    pub fn possessive() -> Result<Self> {
        Self::new("'s", "")
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        // NoExpand keeps `$` in the replacement literal
        self.pattern
            .replace_all(input, regex::NoExpand(self.replacement.as_str()))
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
