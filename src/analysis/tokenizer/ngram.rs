//! N-gram windowing over token streams.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::analysis::token::{Ngram, Token, TokenStream};
use crate::analysis::token_filter::{Filter, filter_window};
use crate::error::{Result, TermdexError};

/// Overlapping windows of `n` consecutive items of `tokens`.
///
/// Yields `tokens.len() - n + 1` windows in order, and nothing when the
/// slice is shorter than `n` or `n` is zero.
///
/// # Examples
///
/// ```
/// use termdex::analysis::tokenizer::ngram::get_ngrams;
///
/// let tokens = ["one", "two", "three", "four"];
/// let bigrams: Vec<Vec<&str>> = get_ngrams(&tokens, 2).map(|w| w.to_vec()).collect();
/// assert_eq!(bigrams, vec![vec!["one", "two"], vec!["two", "three"], vec!["three", "four"]]);
///
/// assert_eq!(get_ngrams(&tokens, 5).count(), 0);
/// ```
pub fn get_ngrams<T>(tokens: &[T], n: usize) -> impl Iterator<Item = &[T]> {
    let count = if n == 0 {
        0
    } else {
        (tokens.len() + 1).saturating_sub(n)
    };
    (0..count).map(move |i| &tokens[i..i + n])
}

/// Upper bound on the window slots reserved up front; larger windows grow
/// as tokens arrive.
const MAX_RESERVED_WINDOW: usize = 16;

/// A lazy stream of filtered n-grams.
///
/// The stream pulls raw tokens on demand and never holds more than `n` of
/// them. Each window of `n` consecutive raw tokens is run through the token
/// filters; a window is emitted only if every one of its tokens survives.
pub struct NgramStream {
    tokens: TokenStream,
    filters: Vec<Arc<dyn Filter>>,
    window: VecDeque<Token>,
    size: usize,
}

impl NgramStream {
    /// Create a stream of windows of `size` tokens.
    ///
    /// # Errors
    ///
    /// [`TermdexError::InvalidArgument`] when `size` is zero.
    pub fn new(tokens: TokenStream, size: usize, filters: Vec<Arc<dyn Filter>>) -> Result<Self> {
        if size == 0 {
            return Err(TermdexError::invalid_argument(
                "ngram_size must be at least 1",
            ));
        }
        Ok(NgramStream {
            tokens,
            filters,
            window: VecDeque::with_capacity(size.min(MAX_RESERVED_WINDOW)),
            size,
        })
    }

    pub fn ngram_size(&self) -> usize {
        self.size
    }
}

impl Iterator for NgramStream {
    type Item = Ngram;

    fn next(&mut self) -> Option<Ngram> {
        loop {
            while self.window.len() < self.size {
                let token = self.tokens.next()?;
                self.window.push_back(token);
            }

            let ngram = filter_window(&self.filters, &self.window);
            self.window.pop_front();

            if ngram.is_some() {
                return ngram;
            }
        }
    }
}

impl fmt::Debug for NgramStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filters: Vec<&str> = self.filters.iter().map(|filter| filter.name()).collect();
        let window: Vec<&str> = self.window.iter().map(|token| token.text.as_str()).collect();
        f.debug_struct("NgramStream")
            .field("size", &self.size)
            .field("filters", &filters)
            .field("window", &window)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TokenType;
    use crate::analysis::token_filter::length::MinLengthFilter;
    use crate::analysis::token_filter::stop::StopFilter;

    fn stream_of(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words.iter().map(|word| Token::new(*word)).collect();
        Box::new(tokens.into_iter())
    }

    fn ngrams(words: &[&str], size: usize, filters: Vec<Arc<dyn Filter>>) -> Vec<Vec<String>> {
        NgramStream::new(stream_of(words), size, filters)
            .unwrap()
            .collect()
    }

    #[test]
    fn test_bigram_token_list() {
        let tokens = ["one", "two", "three", "four"];
        let windows: Vec<Vec<&str>> = get_ngrams(&tokens, 2).map(|window| window.to_vec()).collect();
        assert_eq!(
            windows,
            vec![vec!["one", "two"], vec!["two", "three"], vec!["three", "four"]]
        );
    }

    #[test]
    fn test_trigram_token_list() {
        let tokens = ["one", "two", "three", "four"];
        let windows: Vec<Vec<&str>> = get_ngrams(&tokens, 3).map(|window| window.to_vec()).collect();
        assert_eq!(
            windows,
            vec![vec!["one", "two", "three"], vec!["two", "three", "four"]]
        );
    }

    #[test]
    fn test_get_ngrams_edge_cases() {
        let tokens = ["a", "b"];
        assert_eq!(get_ngrams(&tokens, 3).count(), 0);
        assert_eq!(get_ngrams(&tokens, 0).count(), 0);
        assert_eq!(get_ngrams(&tokens, 2).count(), 1);
        assert_eq!(get_ngrams::<&str>(&[], 1).count(), 0);
    }

    #[test]
    fn test_stream_windows() {
        assert_eq!(
            ngrams(&["one", "two", "three", "four"], 2, Vec::new()),
            vec![
                vec!["one", "two"],
                vec!["two", "three"],
                vec!["three", "four"],
            ]
        );
        assert!(ngrams(&["one", "two"], 3, Vec::new()).is_empty());
        assert_eq!(ngrams(&["one"], 1, Vec::new()), vec![vec!["one"]]);
    }

    #[test]
    fn test_rejected_token_discards_every_window_containing_it() {
        let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(StopFilter::from_words(["the"]))];
        assert_eq!(
            ngrams(&["over", "the", "moon", "and", "back"], 2, filters),
            vec![vec!["moon", "and"], vec!["and", "back"]]
        );
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = NgramStream::new(stream_of(&["a"]), 0, Vec::new()).unwrap_err();
        assert!(matches!(err, TermdexError::InvalidArgument(_)));
    }

    #[test]
    fn test_huge_size_yields_nothing() {
        let mut stream =
            NgramStream::new(stream_of(&["one", "two"]), usize::MAX / 2, Vec::new()).unwrap();
        assert!(stream.window.capacity() < 1024);
        assert!(stream.next().is_none());
        assert_eq!(stream.window.len(), 2);
    }

    #[test]
    fn test_whitespace_tokens_pass_length_filter() {
        let tokens = vec![
            Token::new("sunny"),
            Token::new(" ").with_token_type(TokenType::Whitespace),
            Token::new("malta"),
            Token::new(" ").with_token_type(TokenType::Whitespace),
            Token::new("is"),
        ];
        let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(MinLengthFilter::new(3))];
        let ngrams: Vec<Ngram> = NgramStream::new(Box::new(tokens.into_iter()), 3, filters)
            .unwrap()
            .collect();
        assert_eq!(
            ngrams,
            vec![vec!["sunny", " ", "malta"], vec![" ", "malta", " "]]
        );
    }

    #[test]
    fn test_holds_at_most_size_tokens() {
        let mut stream = NgramStream::new(stream_of(&["a", "b", "c", "d"]), 3, Vec::new()).unwrap();
        assert_eq!(stream.ngram_size(), 3);
        stream.next();
        assert!(stream.window.len() <= 3);
        stream.next();
        assert!(stream.next().is_none());
    }
}
