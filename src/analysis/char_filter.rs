//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the text string before it is
//! passed to the tokenizer. Filters run in order over the whole text, so a
//! later filter sees the output of an earlier one.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`punctuation::PunctuationCharFilter`] - Drops ASCII punctuation
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, etc.)
//!
//! # Examples
//!
//! ```
//! use termdex::analysis::char_filter::CharFilter;
//! use termdex::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let possessive = PatternReplaceCharFilter::possessive().unwrap();
//! assert_eq!(possessive.filter("John's book"), "John book");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod punctuation;
pub mod unicode_normalize;
