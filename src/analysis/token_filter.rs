//! Token filter implementations for token transformation.
//!
//! A filter receives the text of one raw token and either returns the
//! (possibly rewritten) text or rejects the token. Filters are applied in
//! order to every non-whitespace token of an n-gram window; the first
//! rejection discards the whole window.
//!
//! # Available Filters
//!
//! - [`strip::StripFilter`] - Trims punctuation at token boundaries
//! - [`stem::StemFilter`] - Reduces words to their stem form
//! - [`length::MinLengthFilter`] - Rejects short tokens
//! - [`stop::StopFilter`] - Rejects stop words
//! - [`numeric::NumericFilter`] - Rejects tokens that parse as numbers
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use termdex::analysis::token::Token;
//! use termdex::analysis::token_filter::{filter_window, Filter};
//! use termdex::analysis::token_filter::numeric::NumericFilter;
//! use termdex::analysis::token_filter::strip::StripFilter;
//!
//! let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(StripFilter::new()), Arc::new(NumericFilter::new())];
//!
//! let window = [Token::new("(one"), Token::new("two")];
//! assert_eq!(filter_window(&filters, &window), Some(vec!["one".to_string(), "two".to_string()]));
//!
//! let window = [Token::new("one"), Token::new("3")];
//! assert_eq!(filter_window(&filters, &window), None);
//! ```

use std::sync::Arc;

use crate::analysis::token::{Ngram, Token};

/// Trait for filters applied to individual token texts.
///
/// The trait requires `Send + Sync` so that a built tokenizer can be shared
/// across threads.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token, returning `None` to reject it.
    fn filter(&self, token: String) -> Option<String>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Run `token` through every filter in order.
pub fn apply_filters(filters: &[Arc<dyn Filter>], token: String) -> Option<String> {
    filters
        .iter()
        .try_fold(token, |token, filter| filter.filter(token))
}

/// Filter every token of `window`, or `None` as soon as one is rejected.
///
/// Whitespace tokens are kept as they are.
pub fn filter_window<'a, I>(filters: &[Arc<dyn Filter>], window: I) -> Option<Ngram>
where
    I: IntoIterator<Item = &'a Token>,
{
    window
        .into_iter()
        .map(|token| {
            if token.is_whitespace() {
                Some(token.text.clone())
            } else {
                apply_filters(filters, token.text.clone())
            }
        })
        .collect()
}

// Individual filter modules
pub mod length;
pub mod numeric;
pub mod stem;
pub mod stop;
pub mod strip;
