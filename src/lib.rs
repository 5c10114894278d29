//! # termdex
//!
//! An in-memory inverted index and an n-gram tokenizer for building
//! document/term feature matrices.
//!
//! ## Features
//!
//! - Term and document counts keyed by any hashable type
//! - TF, normalized TF, TF-IDF and custom weightings
//! - Feature matrices, sequential or on the rayon thread pool
//! - Pruning by document frequency, merging and JSON snapshots
//! - A configurable text to n-gram tokenizer with stop words, stemming and
//!   numeric filtering
//!
//! ## Example
//!
//! ```
//! use termdex::analysis::TokenizerConfig;
//! use termdex::index::{HashedIndex, Weighting};
//!
//! let tokenizer = TokenizerConfig::new().ngram_size(2).build().unwrap();
//!
//! let mut index: HashedIndex = HashedIndex::new();
//! for ngram in tokenizer.ngrams("The black cat sat.").unwrap() {
//!     index.record_occurrence(ngram.join(" "), "cats.txt".to_string());
//! }
//!
//! assert_eq!(index.term_count(), 3);
//! assert!(index.contains_term(&"black cat".to_string()));
//!
//! let matrix = index.generate_feature_matrix(&Weighting::Tf).unwrap();
//! assert_eq!(matrix, vec![vec![1.0, 1.0, 1.0]]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
