//! Numeric token filter.

use super::Filter;
use crate::analysis::text::is_numeric;

/// A filter that rejects tokens which parse as a floating point number.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    pub fn new() -> Self {
        NumericFilter
    }
}

impl Filter for NumericFilter {
    fn filter(&self, token: String) -> Option<String> {
        if is_numeric(&token) { None } else { Some(token) }
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}
