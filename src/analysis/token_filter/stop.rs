//! Stop filter implementation.
//!
//! This module provides a filter that rejects common words (stop words).
//! A default English list is available, but tokenizers built from a
//! [`TokenizerConfig`](crate::analysis::config::TokenizerConfig) only use the
//! words they are configured with.
//!
//! # Examples
//!
//! ```
//! use termdex::analysis::token_filter::Filter;
//! use termdex::analysis::token_filter::stop::StopFilter;
//!
//! let filter = StopFilter::english();
//! assert_eq!(filter.filter("the".to_string()), None);
//! assert_eq!(filter.filter("quick".to_string()), Some("quick".to_string()));
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token_filter::Filter;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
pub const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that rejects stop words.
///
/// Matching is exact, so words must already be in the casing the
/// tokenizer produces.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to reject
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn english() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use termdex::analysis::token_filter::stop::StopFilter;
    ///
    /// let mut words = HashSet::new();
    /// words.insert("custom".to_string());
    ///
    /// let filter = StopFilter::with_stop_words(words);
    /// assert!(filter.is_stop_word("custom"));
    /// ```
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter(&self, token: String) -> Option<String> {
        if self.is_stop_word(&token) {
            None
        } else {
            Some(token)
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
