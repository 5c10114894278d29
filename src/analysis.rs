//! Text analysis: raw text to n-grams.
//!
//! Text flows through char filters, a run tokenizer, n-gram windowing and
//! token filters. [`TokenizerConfig`] assembles the standard pipeline.
//!
//! # Examples
//!
//! ```
//! use termdex::analysis::TokenizerConfig;
//!
//! let tokenizer = TokenizerConfig::new().ngram_size(2).build().unwrap();
//! let ngrams: Vec<_> = tokenizer.ngrams("one two three four").unwrap().collect();
//! assert_eq!(
//!     ngrams,
//!     vec![vec!["one", "two"], vec!["two", "three"], vec!["three", "four"]]
//! );
//! ```

pub mod char_filter;
pub mod config;
pub mod text;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use config::TokenizerConfig;
pub use token::Ngram;
pub use tokenizer::ngram::{NgramStream, get_ngrams};
pub use tokenizer::word::{WordTokenizer, word_tokenize};
