//! Tokenizer configuration.
//!
//! [`TokenizerConfig`] is plain data: it can be written by hand, built with
//! its fluent setters, or deserialized from JSON with every field optional.
//!
//! ```json
//! {
//!   "stopwords": ["the", "of", "is"],
//!   "ngram_size": 2,
//!   "min_length": 3,
//!   "stemmer": "english"
//! }
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::char_filter::unicode_normalize::UnicodeNormalizationCharFilter;
use crate::analysis::token_filter::length::MinLengthFilter;
use crate::analysis::token_filter::numeric::NumericFilter;
use crate::analysis::token_filter::stem::{StemFilter, Stemmer, stemmer_from_name};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::strip::StripFilter;
use crate::analysis::tokenizer::run::RunTokenizer;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::{Result, TermdexError};

/// Options controlling how text becomes n-grams.
///
/// All options are independent and combine freely.
///
/// # Examples
///
/// ```
/// use termdex::analysis::config::TokenizerConfig;
///
/// let tokenizer = TokenizerConfig::new()
///     .stopwords(["the", "of", "is"])
///     .min_length(1)
///     .build()
///     .unwrap();
///
/// let ngrams: Vec<_> = tokenizer.ngrams("The first rule of python is").unwrap().collect();
/// assert_eq!(ngrams, vec![vec!["first"], vec!["rule"], vec!["python"]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Tokens to reject, compared after casing and stemming.
    pub stopwords: BTreeSet<String>,

    /// Number of consecutive tokens per n-gram, at least 1.
    pub ngram_size: usize,

    /// Tokens with fewer characters are rejected.
    pub min_length: usize,

    /// Reject tokens that parse as a number.
    pub ignore_numeric: bool,

    /// Stemmer name: `identity`, `none` or a Snowball language.
    pub stemmer: String,

    /// Keep the original casing instead of lowercasing.
    pub retain_casing: bool,

    /// Keep punctuation and emit punctuation characters as tokens.
    pub retain_punctuation: bool,

    /// Emit whitespace runs as tokens.
    pub tokenize_whitespace: bool,

    /// Fold text to ASCII (NFKD, non-ASCII dropped) before anything else.
    pub normalize_unicode: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            stopwords: BTreeSet::new(),
            ngram_size: 1,
            min_length: 0,
            ignore_numeric: true,
            stemmer: "identity".to_string(),
            retain_casing: false,
            retain_punctuation: false,
            tokenize_whitespace: false,
            normalize_unicode: false,
        }
    }
}

impl TokenizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    pub fn ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn ignore_numeric(mut self, ignore_numeric: bool) -> Self {
        self.ignore_numeric = ignore_numeric;
        self
    }

    pub fn stemmer<S: Into<String>>(mut self, stemmer: S) -> Self {
        self.stemmer = stemmer.into();
        self
    }

    pub fn retain_casing(mut self, retain_casing: bool) -> Self {
        self.retain_casing = retain_casing;
        self
    }

    pub fn retain_punctuation(mut self, retain_punctuation: bool) -> Self {
        self.retain_punctuation = retain_punctuation;
        self
    }

    pub fn tokenize_whitespace(mut self, tokenize_whitespace: bool) -> Self {
        self.tokenize_whitespace = tokenize_whitespace;
        self
    }

    pub fn normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// The single string an n-gram is indexed under.
    ///
    /// Tokens are joined by one space. When whitespace is tokenized the
    /// whitespace tokens already sit between the others, so the texts are
    /// concatenated and the term reads like the text it came from.
    pub fn ngram_term(&self, ngram: &[String]) -> String {
        if self.tokenize_whitespace {
            ngram.concat()
        } else {
            ngram.join(" ")
        }
    }

    /// Check the configuration without building anything.
    ///
    /// # Errors
    ///
    /// [`TermdexError::InvalidArgument`] for a zero `ngram_size`,
    /// [`TermdexError::InvalidStemmer`] for an unknown stemmer name.
    pub fn validate(&self) -> Result<()> {
        self.check_ngram_size()?;
        stemmer_from_name(&self.stemmer)?;
        Ok(())
    }

    /// Build a tokenizer using the named stemmer.
    pub fn build(&self) -> Result<WordTokenizer> {
        self.check_ngram_size()?;
        let stemmer = stemmer_from_name(&self.stemmer)?;
        self.build_with_stemmer(stemmer)
    }

    /// Build a tokenizer with a caller supplied stemmer, ignoring the
    /// `stemmer` name.
    pub fn build_with_stemmer(&self, stemmer: Arc<dyn Stemmer>) -> Result<WordTokenizer> {
        self.check_ngram_size()?;

        let run = RunTokenizer::with_options(self.tokenize_whitespace, self.retain_punctuation)?;
        let mut tokenizer = WordTokenizer::new(Arc::new(run)).with_ngram_size(self.ngram_size)?;

        if self.normalize_unicode {
            tokenizer =
                tokenizer.add_char_filter(Arc::new(UnicodeNormalizationCharFilter::ascii_folding()));
        }
        tokenizer = tokenizer.add_char_filter(Arc::new(PatternReplaceCharFilter::possessive()?));
        if !self.retain_punctuation {
            tokenizer = tokenizer.add_char_filter(Arc::new(PunctuationCharFilter::new()));
        }
        if !self.retain_casing {
            tokenizer = tokenizer.add_char_filter(Arc::new(LowercaseCharFilter::new()));
        }

        if !self.retain_punctuation {
            tokenizer = tokenizer.add_filter(Arc::new(StripFilter::new()));
        }
        tokenizer = tokenizer.add_filter(Arc::new(StemFilter::with_stemmer(stemmer)));
        if self.min_length > 0 {
            tokenizer = tokenizer.add_filter(Arc::new(MinLengthFilter::new(self.min_length)));
        }
        if !self.stopwords.is_empty() {
            tokenizer =
                tokenizer.add_filter(Arc::new(StopFilter::from_words(self.stopwords.iter().cloned())));
        }
        if self.ignore_numeric {
            tokenizer = tokenizer.add_filter(Arc::new(NumericFilter::new()));
        }

        debug!("built {tokenizer:?}");
        Ok(tokenizer)
    }

    fn check_ngram_size(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(TermdexError::invalid_argument(
                "ngram_size must be at least 1",
            ));
        }
        Ok(())
    }
}
