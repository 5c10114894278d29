//! Run classifying tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{Result, TermdexError};

/// Letters, marks and digits, with `-` and `/` allowed anywhere in the run.
/// A run needs at least one letter or digit.
const WORD_PATTERN: &str = r"[/\-]*[\p{L}\p{M}\p{N}][\p{L}\p{M}\p{N}/\-]*";

const WHITESPACE_PATTERN: &str = r"\s+";

const PUNCTUATION_PATTERN: &str = r"[\p{P}\p{S}]";

/// A tokenizer that scans left to right and classifies maximal runs.
///
/// Word runs are always produced. Whitespace runs and single punctuation
/// characters become tokens only when enabled; otherwise they, and any other
/// character, separate tokens.
#[derive(Clone, Debug)]
pub struct RunTokenizer {
    pattern: Arc<Regex>,
    whitespace: bool,
    punctuation: bool,
}

impl RunTokenizer {
    /// Create a tokenizer that produces word runs only.
    pub fn new() -> Result<Self> {
        Self::with_options(false, false)
    }

    /// Create a tokenizer that also emits whitespace runs and/or single
    /// punctuation characters.
    pub fn with_options(whitespace: bool, punctuation: bool) -> Result<Self> {
        let mut alternatives = vec![format!("(?P<word>{WORD_PATTERN})")];
        if whitespace {
            alternatives.push(format!("(?P<space>{WHITESPACE_PATTERN})"));
        }
        if punctuation {
            alternatives.push(format!("(?P<punct>{PUNCTUATION_PATTERN})"));
        }

        let regex = Regex::new(&alternatives.join("|"))
            .map_err(|e| TermdexError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RunTokenizer {
            pattern: Arc::new(regex),
            whitespace,
            punctuation,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn tokenizes_whitespace(&self) -> bool {
        self.whitespace
    }

    pub fn retains_punctuation(&self) -> bool {
        self.punctuation
    }

    /// Scan `text` lazily.
    pub fn stream(&self, text: String) -> RunStream {
        RunStream {
            text,
            pattern: Arc::clone(&self.pattern),
            cursor: 0,
        }
    }
}

impl Tokenizer for RunTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.stream(text.to_owned())))
    }

    fn name(&self) -> &'static str {
        "run"
    }
}

/// Lazy token iterator over an owned text.
#[derive(Debug)]
pub struct RunStream {
    text: String,
    pattern: Arc<Regex>,
    cursor: usize,
}

impl Iterator for RunStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let captures = self.pattern.captures_at(&self.text, self.cursor)?;
        let (found, token_type) = if let Some(word) = captures.name("word") {
            (word, TokenType::Word)
        } else if let Some(space) = captures.name("space") {
            (space, TokenType::Whitespace)
        } else {
            (captures.get(0)?, TokenType::Punctuation)
        };

        self.cursor = found.end();
        Some(Token::new(found.as_str()).with_token_type(token_type))
    }
}
