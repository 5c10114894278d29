//! Error types for termdex.
//!
//! All fallible operations in the crate return [`Result`], whose error side is
//! the [`TermdexError`] enum. Index queries fail with [`TermdexError::UnknownTerm`]
//! or [`TermdexError::UnknownDocument`] before touching any state, so a failed
//! call never leaves a partially mutated index behind.
//!
//! # Examples
//!
//! ```
//! use termdex::error::{Result, TermdexError};
//! use termdex::index::HashedIndex;
//!
//! fn length_of(index: &HashedIndex, document: &str) -> Result<u64> {
//!     index.document_length(&document.to_string())
//! }
//!
//! let index = HashedIndex::new();
//! match length_of(&index, "missing.txt") {
//!     Err(TermdexError::UnknownDocument(_)) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::fmt::Debug;
use std::io;

use thiserror::Error;

/// The main error type for termdex operations.
#[derive(Error, Debug)]
pub enum TermdexError {
    /// A statistic was requested for a term that was never created.
    #[error("Unknown term: {0}")]
    UnknownTerm(String),

    /// A statistic was requested for a document that was never recorded.
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// A weighting mode name did not match any built-in mode.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// A stemmer was requested that cannot be provided.
    #[error("Invalid stemmer: {0}")]
    InvalidStemmer(String),

    /// A configuration value is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (pattern construction and the like)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (only raised by the command line front end)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TermdexError.
pub type Result<T> = std::result::Result<T, TermdexError>;

impl TermdexError {
    /// Create an unknown-term error for any debuggable key.
    pub fn unknown_term<K: Debug + ?Sized>(term: &K) -> Self {
        TermdexError::UnknownTerm(format!("{term:?}"))
    }

    /// Create an unknown-document error for any debuggable key.
    pub fn unknown_document<K: Debug + ?Sized>(document: &K) -> Self {
        TermdexError::UnknownDocument(format!("{document:?}"))
    }

    /// Create a new invalid mode error.
    pub fn invalid_mode<S: Into<String>>(msg: S) -> Self {
        TermdexError::InvalidMode(msg.into())
    }

    /// Create a new invalid stemmer error.
    pub fn invalid_stemmer<S: Into<String>>(msg: S) -> Self {
        TermdexError::InvalidStemmer(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TermdexError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TermdexError::Analysis(msg.into())
    }

    /// Whether this error reports a missing term or document.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TermdexError::UnknownTerm(_) | TermdexError::UnknownDocument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TermdexError::unknown_term("word");
        assert_eq!(error.to_string(), "Unknown term: \"word\"");

        let error = TermdexError::unknown_document(&42u32);
        assert_eq!(error.to_string(), "Unknown document: 42");

        let error = TermdexError::invalid_mode("bogus");
        assert_eq!(error.to_string(), "Invalid mode: bogus");

        let error = TermdexError::invalid_stemmer("klingon");
        assert_eq!(error.to_string(), "Invalid stemmer: klingon");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(TermdexError::unknown_term("a").is_not_found());
        assert!(TermdexError::unknown_document("a").is_not_found());
        assert!(!TermdexError::invalid_mode("a").is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TermdexError::from(io_error);

        match error {
            TermdexError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
