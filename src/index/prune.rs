//! Vocabulary pruning by document frequency.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::index::hashed::{HashedIndex, IndexKey};

/// Bounds on document frequency outside of which terms are pruned.
///
/// A term is removed when its document frequency is below `min_value` or
/// above `max_value`. With `use_percentile` the document frequency is first
/// divided by the number of documents, so the bounds are fractions of the
/// corpus.
///
/// # Examples
///
/// ```
/// use termdex::index::PruneOptions;
///
/// // drop terms that appear in fewer than two documents
/// let rare = PruneOptions::new().min_value(2.0);
///
/// // drop terms that appear in more than half of the corpus
/// let common = PruneOptions::new().max_value(0.5).use_percentile(true);
/// assert!(common.use_percentile);
/// # let _ = rare;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneOptions {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub use_percentile: bool,
}

impl PruneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    pub fn use_percentile(mut self, use_percentile: bool) -> Self {
        self.use_percentile = use_percentile;
        self
    }

    /// Whether a term with `frequency` falls outside the bounds.
    fn rejects(&self, frequency: f64) -> bool {
        self.min_value.is_some_and(|min| frequency < min)
            || self.max_value.is_some_and(|max| frequency > max)
    }
}

impl<T, D> HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Remove every term whose document frequency falls outside `options`.
    ///
    /// Document lengths are left as they are, so after pruning the summed
    /// term frequencies of a document may be less than its length.
    /// Returns the number of removed terms.
    pub fn prune(&mut self, options: &PruneOptions) -> usize {
        let n_documents = self.document_count();
        let before = self.terms.len();

        self.terms.retain(|_, table| {
            let mut frequency = table.len() as f64;
            if options.use_percentile {
                frequency = if n_documents == 0 {
                    0.0
                } else {
                    frequency / n_documents as f64
                };
            }
            !options.rejects(frequency)
        });

        let removed = before - self.terms.len();
        debug!(
            "pruned {removed} of {before} terms (min={:?}, max={:?}, percentile={})",
            options.min_value, options.max_value, options.use_percentile
        );
        removed
    }
}
