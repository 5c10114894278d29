//! Token types produced by the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A raw token with its text and the kind of run it came from
//! - [`TokenType`] - Classification of the run a token was scanned from
//! - [`TokenStream`] - Type alias for a boxed iterator of tokens
//! - [`Ngram`] - A window of consecutive filtered token texts
//!
//! # Examples
//!
//! ```
//! use termdex::analysis::token::{Token, TokenType};
//!
//! let token = Token::new("  ").with_token_type(TokenType::Whitespace);
//! assert_eq!(token.text, "  ");
//! assert!(token.is_whitespace());
//! assert!(!token.is_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token is a single classified run of preprocessed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The kind of run this token was scanned from
    pub token_type: TokenType,
}

/// Token type classification.
///
/// Whitespace tokens separate the other tokens of an n-gram and are passed
/// through the token filters untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Letters, digits and the token-internal `-` and `/`
    #[default]
    Word,
    /// A run of whitespace, only produced when whitespace is tokenized
    Whitespace,
    /// A single punctuation character, only produced when punctuation is retained
    Punctuation,
}

impl Token {
    /// Create a new word token.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token {
            text: text.into(),
            token_type: TokenType::Word,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }

    pub fn is_whitespace(&self) -> bool {
        self.token_type == TokenType::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of raw tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// An ordered window of filtered token texts.
pub type Ngram = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello");
        assert_eq!(token.text, "hello");
        assert_eq!(token.token_type, TokenType::Word);
        assert_eq!(token.len(), 5);
        assert!(!token.is_empty());
        assert!(token.is_word());
    }

    #[test]
    fn test_token_type() {
        let token = Token::new(" ").with_token_type(TokenType::Whitespace);
        assert!(token.is_whitespace());
        assert!(!token.is_word());

        let token = Token::new(".").with_token_type(TokenType::Punctuation);
        assert!(!token.is_whitespace());
        assert!(!token.is_word());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello");
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_type_serde() {
        let json = serde_json::to_string(&TokenType::Punctuation).unwrap();
        assert_eq!(json, "\"punctuation\"");
    }
}
