//! Tokenizer implementations for text analysis.
//!
//! Tokenizers break preprocessed text into raw tokens. The
//! [`word::WordTokenizer`] wraps a raw tokenizer with char filters, token
//! filters and n-gram windowing to produce the final [`Ngram`] stream.
//!
//! # Available Tokenizers
//!
//! - [`run::RunTokenizer`] - Classifies maximal runs of word characters,
//!   whitespace and punctuation
//! - [`word::WordTokenizer`] - The full text to n-gram pipeline
//!
//! [`Ngram`]: crate::analysis::token::Ngram
//!
//! # Examples
//!
//! ```
//! use termdex::analysis::tokenizer::Tokenizer;
//! use termdex::analysis::tokenizer::run::RunTokenizer;
//!
//! let tokenizer = RunTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
/// Returned streams own whatever they need from `text`, so they may outlive
/// the borrow.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use termdex::analysis::token::{Token, TokenStream};
/// use termdex::analysis::tokenizer::Tokenizer;
/// use termdex::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text.split(',').map(|s| Token::new(s.trim())).collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod ngram;
pub mod run;
pub mod word;
