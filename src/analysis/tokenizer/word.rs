//! The text to n-gram pipeline.
//!
//! A [`WordTokenizer`] applies processing in this order:
//! 1. Char filters: normalize the raw text
//! 2. Tokenizer: scans the text into raw tokens, lazily
//! 3. N-gram windowing: slides a window of `ngram_size` raw tokens
//! 4. Token filters: applied to every token of a window, in the order they
//!    were added; the first rejection drops the window
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use termdex::analysis::char_filter::lowercase::LowercaseCharFilter;
//! use termdex::analysis::token_filter::stop::StopFilter;
//! use termdex::analysis::tokenizer::run::RunTokenizer;
//! use termdex::analysis::tokenizer::word::WordTokenizer;
//!
//! let tokenizer = WordTokenizer::new(Arc::new(RunTokenizer::new().unwrap()))
//!     .add_char_filter(Arc::new(LowercaseCharFilter::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(["the", "and"])));
//!
//! let ngrams: Vec<_> = tokenizer.ngrams("Hello THE world AND test").unwrap().collect();
//! assert_eq!(ngrams, vec![vec!["hello"], vec!["world"], vec!["test"]]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::config::TokenizerConfig;
use crate::analysis::token::Ngram;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::ngram::NgramStream;
use crate::error::{Result, TermdexError};

/// A tokenizer combined with char filters, token filters and a window size.
///
/// Usually built from a [`TokenizerConfig`].
#[derive(Clone)]
pub struct WordTokenizer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    ngram_size: usize,
}

impl WordTokenizer {
    /// Create a unigram pipeline around `tokenizer` with no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        WordTokenizer {
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
            ngram_size: 1,
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a token filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the number of consecutive tokens per n-gram.
    ///
    /// # Errors
    ///
    /// [`TermdexError::InvalidArgument`] when `ngram_size` is zero.
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Result<Self> {
        if ngram_size == 0 {
            return Err(TermdexError::invalid_argument(
                "ngram_size must be at least 1",
            ));
        }
        self.ngram_size = ngram_size;
        Ok(self)
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the char filters used by this pipeline.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Get the token filters used by this pipeline.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Run the char filters over `text`.
    pub fn preprocess(&self, text: &str) -> String {
        self.char_filters
            .iter()
            .fold(text.to_string(), |text, char_filter| char_filter.filter(&text))
    }

    /// Tokenize `text` into a lazy stream of n-grams.
    pub fn ngrams(&self, text: &str) -> Result<NgramStream> {
        let preprocessed = self.preprocess(text);
        let tokens = self.tokenizer.tokenize(&preprocessed)?;
        NgramStream::new(tokens, self.ngram_size, self.filters.clone())
    }

    /// Tokenize `text` and collect every n-gram.
    pub fn tokenize_all(&self, text: &str) -> Result<Vec<Ngram>> {
        Ok(self.ngrams(text)?.collect())
    }
}

impl fmt::Debug for WordTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<&str> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<&str> = self.filters.iter().map(|c| c.name()).collect();
        f.debug_struct("WordTokenizer")
            .field("tokenizer", &self.tokenizer.name())
            .field("char_filters", &char_filters)
            .field("filters", &filters)
            .field("ngram_size", &self.ngram_size)
            .finish()
    }
}

/// Tokenize `text` with the default configuration.
///
/// # Examples
///
/// ```
/// use termdex::analysis::tokenizer::word::word_tokenize;
///
/// let ngrams: Vec<_> = word_tokenize("first. second").unwrap().collect();
/// assert_eq!(ngrams, vec![vec!["first"], vec!["second"]]);
/// ```
pub fn word_tokenize(text: &str) -> Result<NgramStream> {
    TokenizerConfig::default().build()?.ngrams(text)
}
