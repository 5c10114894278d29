//! In-memory inverted index.
//!
//! [`HashedIndex`] counts how often each term occurs in each document and
//! derives frequency statistics, TF-IDF weights and feature matrices from
//! those counts. Terms and documents are any hashable keys; both default to
//! `String`.
//!
//! # Examples
//!
//! ```
//! use termdex::index::{HashedIndex, PruneOptions, Weighting};
//!
//! let mut index: HashedIndex = HashedIndex::new();
//! for word in ["malta", "phone", "malta"] {
//!     index.record_occurrence(word.to_string(), "document1.txt".to_string());
//! }
//! index.record_occurrence("phone".to_string(), "document2.txt".to_string());
//!
//! assert_eq!(index.total_term_frequency(&"malta".to_string()).unwrap(), 2);
//! assert_eq!(index.document_frequency(&"phone".to_string()).unwrap(), 2);
//!
//! index.prune(&PruneOptions::new().min_value(2.0));
//! assert_eq!(index.terms(), vec!["phone".to_string()]);
//!
//! let matrix = index.generate_feature_matrix(&Weighting::Tf).unwrap();
//! assert_eq!(matrix.len(), 2);
//! ```

pub mod counter;
pub mod hashed;
pub mod merge;
pub mod prune;
pub mod snapshot;
pub mod vector;
pub mod weighting;

pub use counter::Counter;
pub use hashed::{HashedIndex, IndexKey};
pub use merge::merge;
pub use prune::PruneOptions;
pub use snapshot::IndexSnapshot;
pub use weighting::{WeightFn, Weighting};
