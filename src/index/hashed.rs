//! The hash-map backed inverted index.
//!
//! [`HashedIndex`] records how often each term occurs in each document and
//! answers frequency and TF-IDF queries from those counts.
//!
//! # Examples
//!
//! ```
//! use termdex::index::HashedIndex;
//!
//! let mut index: HashedIndex = HashedIndex::new();
//! for _ in 0..3 {
//!     index.record_occurrence("word".to_string(), "document1.txt".to_string());
//! }
//! index.record_occurrence("word".to_string(), "document2.txt".to_string());
//!
//! let word = "word".to_string();
//! assert_eq!(index.total_term_frequency(&word).unwrap(), 4);
//! assert_eq!(index.document_frequency(&word).unwrap(), 2);
//! assert_eq!(index.document_length(&"document1.txt".to_string()).unwrap(), 3);
//! ```

use std::fmt::{self, Debug};
use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::error::{Result, TermdexError};
use crate::index::counter::Counter;

/// Bounds shared by term and document keys.
pub trait IndexKey: Eq + Hash + Clone + Debug {}

impl<K> IndexKey for K where K: Eq + Hash + Clone + Debug {}

/// An inverted index mapping terms to per-document occurrence counts.
///
/// Two tables are kept in step on every mutation:
///
/// - `documents`: the total number of occurrences recorded per document
///   (the document's length)
/// - `terms`: for every term, a [`Counter`] of occurrences per document
///
/// so that for every document `d`, `documents[d]` equals the sum of
/// `terms[t][d]` over all terms `t`. Pruning is the one exception: it drops
/// whole terms and leaves document lengths untouched.
#[derive(Clone)]
pub struct HashedIndex<T = String, D = String> {
    pub(crate) documents: Counter<D>,
    pub(crate) terms: IndexMap<T, Counter<D>, RandomState>,
    frozen: bool,
}

impl<T, D> HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Create an empty, unfrozen index.
    pub fn new() -> Self {
        HashedIndex {
            documents: Counter::new(),
            terms: IndexMap::default(),
            frozen: false,
        }
    }

    /// Create an index pre-seeded with `terms`, each mapped to an empty
    /// document table.
    pub fn with_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut index = Self::new();
        for term in terms {
            index.terms.insert(term, Counter::new());
        }
        index
    }

    pub(crate) fn from_parts(
        documents: Counter<D>,
        terms: IndexMap<T, Counter<D>, RandomState>,
    ) -> Self {
        HashedIndex {
            documents,
            terms,
            frozen: false,
        }
    }

    /// Record one occurrence of `term` in `document`.
    ///
    /// An unseen document is created with length zero. An unseen term is
    /// created unless the index is frozen, in which case the call ends after
    /// creating the document and nothing is counted.
    pub fn record_occurrence(&mut self, term: T, document: D) {
        self.documents.touch(document.clone());

        let table = match self.terms.entry(term) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                if self.frozen {
                    return;
                }
                entry.insert(Counter::new())
            }
        };

        table.increment(document.clone());
        self.documents.increment(document);
    }

    /// Reset to an empty index. The freeze flag is left as it is.
    pub fn clear(&mut self) {
        debug!(
            "clearing index with {} terms and {} documents",
            self.terms.len(),
            self.documents.len()
        );
        self.terms.clear();
        self.documents.clear();
    }

    /// Stop [`record_occurrence`](Self::record_occurrence) from creating new terms.
    pub fn freeze(&mut self) {
        debug!("freezing index vocabulary at {} terms", self.terms.len());
        self.frozen = true;
    }

    /// Allow new terms to be created again.
    pub fn unfreeze(&mut self) {
        debug!("unfreezing index vocabulary");
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn contains_term(&self, term: &T) -> bool {
        self.terms.contains_key(term)
    }

    pub fn contains_document(&self, document: &D) -> bool {
        self.documents.contains_key(document)
    }

    /// The document table of `term`, if the term exists.
    pub fn get(&self, term: &T) -> Option<&Counter<D>> {
        self.terms.get(term)
    }

    /// The document table of `term`.
    ///
    /// # Errors
    ///
    /// [`TermdexError::UnknownTerm`] if the term was never created.
    pub fn documents_for(&self, term: &T) -> Result<&Counter<D>> {
        self.terms
            .get(term)
            .ok_or_else(|| TermdexError::unknown_term(term))
    }

    /// Iterate over `(term, document table)` pairs in term insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&T, &Counter<D>)> {
        self.terms.iter()
    }

    /// All terms, in the order they were first created.
    pub fn terms(&self) -> Vec<T> {
        self.terms.keys().cloned().collect()
    }

    /// All documents, in the order they were first seen.
    pub fn documents(&self) -> Vec<D> {
        self.documents.keys().cloned().collect()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Occurrences of `term` summed over every document.
    pub fn total_term_frequency(&self, term: &T) -> Result<u64> {
        Ok(self.documents_for(term)?.total())
    }

    /// Occurrences of `term` in `document`; zero when the term exists but
    /// never occurred there.
    ///
    /// # Errors
    ///
    /// [`TermdexError::UnknownDocument`] is checked first, then
    /// [`TermdexError::UnknownTerm`].
    pub fn term_frequency(&self, term: &T, document: &D) -> Result<u64> {
        if !self.documents.contains_key(document) {
            return Err(TermdexError::unknown_document(document));
        }
        Ok(self.documents_for(term)?.count(document))
    }

    /// [`term_frequency`](Self::term_frequency) divided by the document's length.
    ///
    /// A document created while the index was frozen can have length zero;
    /// its normalized frequencies are zero.
    pub fn normalized_term_frequency(&self, term: &T, document: &D) -> Result<f64> {
        let tf = self.term_frequency(term, document)?;
        let length = self.document_length(document)?;
        if length == 0 {
            return Ok(0.0);
        }
        Ok(tf as f64 / length as f64)
    }

    /// Number of distinct documents `term` occurs in.
    pub fn document_frequency(&self, term: &T) -> Result<usize> {
        Ok(self.documents_for(term)?.len())
    }

    /// Total occurrences recorded for `document`.
    pub fn document_length(&self, document: &D) -> Result<u64> {
        self.documents
            .get(document)
            .ok_or_else(|| TermdexError::unknown_document(document))
    }

    /// Laplace-corrected TF-IDF of `term` in `document`.
    ///
    /// `tf * log10(n / df)` with `df = 1 + document_frequency(term)` and
    /// `n = 2 + document_count()`. Zero whenever the term frequency is zero.
    /// The ratio may fall below one, so scores can be negative.
    pub fn tfidf(&self, term: &T, document: &D) -> Result<f64> {
        let tf = self.term_frequency(term, document)? as f64;
        self.inverse_weighted(term, tf)
    }

    /// [`tfidf`](Self::tfidf) computed on the length-normalized term frequency.
    pub fn normalized_tfidf(&self, term: &T, document: &D) -> Result<f64> {
        let tf = self.normalized_term_frequency(term, document)?;
        self.inverse_weighted(term, tf)
    }

    /// Sum of [`tfidf`](Self::tfidf) over every known document.
    pub fn total_tfidf(&self, term: &T) -> Result<f64> {
        self.documents
            .keys()
            .map(|document| self.tfidf(term, document))
            .sum()
    }

    /// Sum of [`normalized_tfidf`](Self::normalized_tfidf) over every known document.
    pub fn total_normalized_tfidf(&self, term: &T) -> Result<f64> {
        self.documents
            .keys()
            .map(|document| self.normalized_tfidf(term, document))
            .sum()
    }

    fn inverse_weighted(&self, term: &T, tf: f64) -> Result<f64> {
        if tf == 0.0 {
            return Ok(0.0);
        }
        let df = 1 + self.document_frequency(term)?;
        let n = 2 + self.document_count();
        Ok(tf * (n as f64 / df as f64).log10())
    }
}

impl<T, D> Default for HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D> PartialEq for HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Indexes are equal when both tables are; the freeze flag is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms && self.documents == other.documents
    }
}

impl<T, D> fmt::Display for HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<HashedIndex: {} terms, {} documents>",
            self.terms.len(),
            self.documents.len()
        )
    }
}

impl<T, D> fmt::Debug for HashedIndex<T, D>
where
    T: Debug,
    D: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedIndex")
            .field("documents", &self.documents)
            .field("terms", &self.terms)
            .field("frozen", &self.frozen)
            .finish()
    }
}
