//! Document vectors and feature matrices.
//!
//! Vectors have one cell per term in the index's term order; matrices have
//! one row per document in the index's document order. Both orders are
//! those of [`HashedIndex::terms`] and [`HashedIndex::documents`] as long as
//! the index is not mutated in between.

use rayon::prelude::*;

use crate::error::{Result, TermdexError};
use crate::index::hashed::{HashedIndex, IndexKey};
use crate::index::weighting::Weighting;

type BuiltinFn<T, D> = fn(&HashedIndex<T, D>, &T, &D) -> Result<f64>;

type Weigh<'a, T, D> = dyn Fn(&HashedIndex<T, D>, &T, &D) -> Result<f64> + Send + Sync + 'a;

impl<T, D> HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Weigh every term of the index against `document`.
    ///
    /// # Errors
    ///
    /// [`TermdexError::UnknownDocument`] for an unknown document, or whatever
    /// a [`Weighting::Custom`] function returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use termdex::index::{HashedIndex, Weighting};
    ///
    /// let mut index: HashedIndex = HashedIndex::new();
    /// index.record_occurrence("a".to_string(), "doc".to_string());
    /// index.record_occurrence("a".to_string(), "doc".to_string());
    ///
    /// let vector = index
    ///     .generate_document_vector(&"doc".to_string(), &Weighting::Tf)
    ///     .unwrap();
    /// assert_eq!(vector, vec![2.0]);
    /// ```
    pub fn generate_document_vector(
        &self,
        document: &D,
        weighting: &Weighting<T, D>,
    ) -> Result<Vec<f64>> {
        let mut slot = None;
        let weigh = Self::resolve(weighting, &mut slot);
        self.weighted_vector(document, weigh)
    }

    /// Stack the document vectors of every document into a
    /// `document_count() x term_count()` matrix.
    pub fn generate_feature_matrix(&self, weighting: &Weighting<T, D>) -> Result<Vec<Vec<f64>>> {
        let mut slot = None;
        let weigh = Self::resolve(weighting, &mut slot);
        self.documents
            .keys()
            .map(|document| self.weighted_vector(document, weigh))
            .collect()
    }

    /// [`generate_feature_matrix`](Self::generate_feature_matrix) with rows
    /// computed on the rayon thread pool. Row order is unchanged.
    pub fn par_generate_feature_matrix(
        &self,
        weighting: &Weighting<T, D>,
    ) -> Result<Vec<Vec<f64>>>
    where
        T: Send + Sync,
        D: Send + Sync,
    {
        let mut slot = None;
        let weigh = Self::resolve(weighting, &mut slot);
        let documents: Vec<&D> = self.documents.keys().collect();
        documents
            .par_iter()
            .map(|document| self.weighted_vector(document, weigh))
            .collect()
    }

    fn weighted_vector(&self, document: &D, weigh: &Weigh<'_, T, D>) -> Result<Vec<f64>> {
        if !self.contains_document(document) {
            return Err(TermdexError::unknown_document(document));
        }
        self.terms
            .keys()
            .map(|term| weigh(self, term, document))
            .collect()
    }

    /// Turn `weighting` into a callable once, before any cell is computed.
    fn resolve<'a>(
        weighting: &'a Weighting<T, D>,
        slot: &'a mut Option<BuiltinFn<T, D>>,
    ) -> &'a Weigh<'a, T, D> {
        let builtin: BuiltinFn<T, D> = match weighting {
            Weighting::TfIdf => Self::tfidf,
            Weighting::NormalizedTfIdf => Self::normalized_tfidf,
            Weighting::Tf => Self::raw_term_frequency,
            Weighting::NormalizedTf => Self::normalized_term_frequency,
            Weighting::Custom(weigh) => return weigh.as_ref(),
        };
        slot.insert(builtin)
    }

    fn raw_term_frequency(&self, term: &T, document: &D) -> Result<f64> {
        Ok(self.term_frequency(term, document)? as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> String {
        value.to_string()
    }

    fn sample_index() -> HashedIndex {
        let mut index = HashedIndex::new();
        for _ in 0..3 {
            index.record_occurrence(s("word"), s("document1.txt"));
        }
        for _ in 0..5 {
            index.record_occurrence(s("malta"), s("document1.txt"));
        }
        for _ in 0..4 {
            index.record_occurrence(s("phone"), s("document2.txt"));
        }
        for _ in 0..2 {
            index.record_occurrence(s("word"), s("document2.txt"));
        }
        index
    }

    fn position(values: &[String], value: &str) -> usize {
        values.iter().position(|v| v == value).unwrap()
    }

    #[test]
    fn test_default_weighting_is_tfidf() {
        let index = sample_index();
        let document = s("document1.txt");
        assert_eq!(
            index
                .generate_document_vector(&document, &Weighting::default())
                .unwrap(),
            index
                .generate_document_vector(&document, &Weighting::TfIdf)
                .unwrap()
        );
    }

    #[test]
    fn test_custom_weighting() {
        let index = sample_index();
        let document = s("document1.txt");

        let by_length = Weighting::custom(|index: &HashedIndex, _term, document| {
            Ok(index.document_length(document)? as f64)
        });
        assert_eq!(
            index.generate_document_vector(&document, &by_length).unwrap(),
            vec![8.0, 8.0, 8.0]
        );

        let constant: Weighting = Weighting::custom(|_, _, _| Ok(1.0));
        assert_eq!(
            index.generate_document_vector(&document, &constant).unwrap(),
            vec![1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_custom_weighting_errors_propagate() {
        let index = sample_index();
        let failing: Weighting =
            Weighting::custom(|_, term, _| Err(TermdexError::unknown_term(term)));
        let err = index
            .generate_document_vector(&s("document1.txt"), &failing)
            .unwrap_err();
        assert!(matches!(err, TermdexError::UnknownTerm(_)));
    }

    #[test]
    fn test_document_vector_tf() {
        let index = sample_index();
        let terms = index.terms();
        let vector = index
            .generate_document_vector(&s("document1.txt"), &Weighting::Tf)
            .unwrap();

        assert_eq!(vector.len(), terms.len());
        assert_eq!(vector[position(&terms, "malta")], 5.0);
        assert_eq!(vector[position(&terms, "word")], 3.0);
        assert_eq!(vector[position(&terms, "phone")], 0.0);
    }

    #[test]
    fn test_document_vector_unknown_document() {
        let index = sample_index();
        let err = index
            .generate_document_vector(&s("missing.txt"), &Weighting::Tf)
            .unwrap_err();
        assert!(matches!(err, TermdexError::UnknownDocument(_)));
    }

    #[test]
    fn test_feature_matrix_tfidf() {
        let index = sample_index();
        let terms = index.terms();
        let documents = index.documents();
        let matrix = index.generate_feature_matrix(&Weighting::TfIdf).unwrap();

        let cell = |document: &str, term: &str| {
            matrix[position(&documents, document)][position(&terms, term)]
        };

        assert_eq!(
            cell("document1.txt", "malta"),
            index.tfidf(&s("malta"), &s("document1.txt")).unwrap()
        );
        assert_eq!(
            cell("document2.txt", "word"),
            index.tfidf(&s("word"), &s("document2.txt")).unwrap()
        );
        assert_eq!(
            cell("document2.txt", "phone"),
            index.tfidf(&s("phone"), &s("document2.txt")).unwrap()
        );
        assert_eq!(cell("document2.txt", "malta"), 0.0);
        assert_eq!(cell("document1.txt", "phone"), 0.0);
    }

    #[test]
    fn test_feature_matrix_tf() {
        let index = sample_index();
        let terms = index.terms();
        let documents = index.documents();
        let matrix = index.generate_feature_matrix(&Weighting::Tf).unwrap();

        assert_eq!(matrix.len(), 2);
        for row in &matrix {
            assert_eq!(row.len(), 3);
        }

        let cell = |document: &str, term: &str| {
            matrix[position(&documents, document)][position(&terms, term)]
        };
        assert_eq!(cell("document1.txt", "malta"), 5.0);
        assert_eq!(cell("document2.txt", "word"), 2.0);
        assert_eq!(cell("document1.txt", "word"), 3.0);
        assert_eq!(cell("document2.txt", "phone"), 4.0);
        assert_eq!(cell("document2.txt", "malta"), 0.0);
        assert_eq!(cell("document1.txt", "phone"), 0.0);
    }

    #[test]
    fn test_feature_matrix_ntf() {
        let index = sample_index();
        let terms = index.terms();
        let documents = index.documents();
        let matrix = index.generate_feature_matrix(&Weighting::NormalizedTf).unwrap();

        let cell = |document: &str, term: &str| {
            matrix[position(&documents, document)][position(&terms, term)]
        };
        assert_eq!(cell("document1.txt", "word"), 3.0 / 8.0);
        assert_eq!(cell("document2.txt", "phone"), 4.0 / 6.0);
        assert_eq!(cell("document1.txt", "malta"), 5.0 / 8.0);
        assert_eq!(cell("document2.txt", "malta"), 0.0);
        assert_eq!(cell("document2.txt", "word"), 2.0 / 6.0);
    }

    #[test]
    fn test_feature_matrix_ntfidf() {
        let index = sample_index();
        let terms = index.terms();
        let documents = index.documents();
        let matrix = index
            .generate_feature_matrix(&Weighting::NormalizedTfIdf)
            .unwrap();

        let row = position(&documents, "document1.txt");
        let col = position(&terms, "word");
        assert_eq!(
            matrix[row][col],
            index
                .normalized_tfidf(&s("word"), &s("document1.txt"))
                .unwrap()
        );
    }

    #[test]
    fn test_empty_index_matrix() {
        let index: HashedIndex = HashedIndex::new();
        assert!(index.generate_feature_matrix(&Weighting::TfIdf).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_matrix_matches_sequential() {
        let mut index: HashedIndex = HashedIndex::new();
        for document in 0..50 {
            for term in 0..(document % 7 + 1) {
                index.record_occurrence(format!("term{term}"), format!("doc{document}"));
            }
        }

        for weighting in [
            Weighting::TfIdf,
            Weighting::NormalizedTfIdf,
            Weighting::Tf,
            Weighting::NormalizedTf,
        ] {
            assert_eq!(
                index.generate_feature_matrix(&weighting).unwrap(),
                index.par_generate_feature_matrix(&weighting).unwrap()
            );
        }
    }
}
