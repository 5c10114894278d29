//! Additive merging of indexes.

use log::debug;

use crate::index::counter::Counter;
use crate::index::hashed::{HashedIndex, IndexKey};

impl<T, D> HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Add every count of `other` into this index.
    ///
    /// Document lengths add, term tables are unioned (seed terms included)
    /// and overlapping `(term, document)` counts add. The freeze flag of
    /// this index does not apply.
    pub fn merge_from(&mut self, other: &HashedIndex<T, D>) {
        self.documents.merge_from(&other.documents);
        for (term, table) in other.items() {
            self.terms
                .entry(term.clone())
                .or_insert_with(Counter::new)
                .merge_from(table);
        }
    }
}

/// Combine `indexes` into a new, unfrozen index.
///
/// Merging nothing yields an empty index and merging a single index yields
/// an equal copy. The result does not depend on the order of `indexes`.
///
/// # Examples
///
/// ```
/// use termdex::index::{merge, HashedIndex};
///
/// let mut first: HashedIndex = HashedIndex::new();
/// first.record_occurrence("foo".to_string(), "a".to_string());
///
/// let mut second: HashedIndex = HashedIndex::new();
/// second.record_occurrence("foo".to_string(), "a".to_string());
/// second.record_occurrence("bar".to_string(), "b".to_string());
///
/// let merged = merge([&first, &second]);
/// assert_eq!(merged.term_frequency(&"foo".to_string(), &"a".to_string()).unwrap(), 2);
/// assert_eq!(merged.document_count(), 2);
/// ```
pub fn merge<'a, T, D, I>(indexes: I) -> HashedIndex<T, D>
where
    T: IndexKey + 'a,
    D: IndexKey + 'a,
    I: IntoIterator<Item = &'a HashedIndex<T, D>>,
{
    let mut result = HashedIndex::new();
    let mut merged = 0usize;
    for index in indexes {
        result.merge_from(index);
        merged += 1;
    }
    debug!(
        "merged {merged} indexes into {} terms and {} documents",
        result.term_count(),
        result.document_count()
    );
    result
}
