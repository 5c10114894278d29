//! Standalone text helpers.
//!
//! These are pure functions with no shared state. [`tfidf`] here is the
//! classic log-scaled formula over raw counts and is unrelated to
//! [`HashedIndex::tfidf`](crate::index::HashedIndex::tfidf).

use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizationCharFilter;

/// Optional scheme, one or two labels plus a top level domain, optional
/// path and optional `key=value` query string.
const URL_PATTERN: &str =
    r"^(https?://)?(([\da-z-]+)\.){1,2}.([a-z.]{2,6})(/[/\w .-]*)*/?(\?(\w+=\w+&?)+)?$";

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern should be valid"));

/// `(1 + ln tf) * ln(corpus_size / df)`, or 0 when `tf` or `df` is 0.
///
/// # Examples
///
/// ```
/// use termdex::analysis::text::tfidf;
///
/// assert_eq!(tfidf(0, 10, 1), 0.0);
/// assert_eq!(tfidf(10, 0, 1), 0.0);
/// assert!((tfidf(1, 1, 10) - 10f64.ln()).abs() < 1e-12);
/// ```
pub fn tfidf(tf: u64, df: u64, corpus_size: u64) -> f64 {
    if tf == 0 || df == 0 {
        return 0.0;
    }
    (1.0 + (tf as f64).ln()) * (corpus_size as f64 / df as f64).ln()
}

/// Whether `text` parses as a floating point number.
///
/// Integers, decimals and scientific notation all count; surrounding
/// whitespace is ignored.
pub fn is_numeric(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

/// Whether the whole of `text` looks like a URL.
pub fn is_url(text: &str) -> bool {
    URL_REGEX.is_match(text)
}

/// Decompose `text` (NFKD) and drop everything that is not ASCII.
///
/// ```
/// use termdex::analysis::text::normalize_unicode;
///
/// assert_eq!(normalize_unicode("Amélie"), "Amelie");
/// ```
pub fn normalize_unicode(text: &str) -> String {
    UnicodeNormalizationCharFilter::ascii_folding().filter(text)
}
