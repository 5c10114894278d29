//! Stemming token filter and stemmer implementations.
//!
//! Stemmers are looked up by name with [`stemmer_from_name`]: `identity`
//! (or `none`) leaves tokens unchanged, and every Snowball language known to
//! `rust-stemmers` (`english`, `french`, `german`, ...) selects that
//! language's stemmer.

use std::fmt;
use std::sync::Arc;

use super::Filter;
use crate::error::{Result, TermdexError};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod identity;
pub mod snowball;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use snowball::SnowballStemmer;

/// Resolve a stemmer by name.
///
/// # Errors
///
/// [`TermdexError::InvalidStemmer`] when the name is neither `identity`,
/// `none` nor a Snowball language.
///
/// # Examples
///
/// ```
/// use termdex::analysis::token_filter::stem::stemmer_from_name;
///
/// let stemmer = stemmer_from_name("english").unwrap();
/// assert_eq!(stemmer.stem("running"), "run");
///
/// assert!(stemmer_from_name("klingon").is_err());
/// ```
pub fn stemmer_from_name(name: &str) -> Result<Arc<dyn Stemmer>> {
    let normalized = name.trim().to_ascii_lowercase();
    if IdentityStemmer::is_alias(&normalized) {
        return Ok(Arc::new(IdentityStemmer));
    }
    SnowballStemmer::from_language(&normalized)
        .map(|stemmer| Arc::new(stemmer) as Arc<dyn Stemmer>)
        .ok_or_else(|| {
            TermdexError::invalid_stemmer(format!(
                "unknown stemmer '{name}', expected identity, none or one of {}",
                SnowballStemmer::LANGUAGES.join(", ")
            ))
        })
}

/// Filter that applies stemming to tokens.
#[derive(Clone)]
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the identity stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Arc::new(IdentityStemmer),
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    pub fn stemmer(&self) -> &Arc<dyn Stemmer> {
        &self.stemmer
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter(&self, token: String) -> Option<String> {
        Some(self.stemmer.stem(&token))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}
