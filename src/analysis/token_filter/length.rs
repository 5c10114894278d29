//! Minimum length filter implementation.

use super::Filter;

/// A filter that rejects tokens with fewer than `min_length` characters.
#[derive(Clone, Debug, Default)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    pub fn new(min_length: usize) -> Self {
        MinLengthFilter { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, token: String) -> Option<String> {
        // counted in chars, not bytes
        (token.chars().count() >= self.min_length).then_some(token)
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}
