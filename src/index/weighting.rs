//! Weighting schemes for document vectors.
//!
//! A [`Weighting`] picks the number placed in each cell of a document vector
//! or feature matrix. Four schemes are built in and addressable by name; any
//! closure over `(index, term, document)` can be supplied as
//! [`Weighting::Custom`].
//!
//! | name     | variant                        | value                              |
//! |----------|--------------------------------|------------------------------------|
//! | `tfidf`  | [`Weighting::TfIdf`]           | [`HashedIndex::tfidf`]             |
//! | `ntfidf` | [`Weighting::NormalizedTfIdf`] | [`HashedIndex::normalized_tfidf`]  |
//! | `tf`     | [`Weighting::Tf`]              | [`HashedIndex::term_frequency`]    |
//! | `ntf`    | [`Weighting::NormalizedTf`]    | [`HashedIndex::normalized_term_frequency`] |

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Result, TermdexError};
use crate::index::hashed::HashedIndex;

/// A user supplied weighting function.
pub type WeightFn<T = String, D = String> =
    Arc<dyn Fn(&HashedIndex<T, D>, &T, &D) -> Result<f64> + Send + Sync>;

/// Selects how document vectors are weighted.
pub enum Weighting<T = String, D = String> {
    /// Laplace-corrected TF-IDF on raw counts.
    TfIdf,
    /// Laplace-corrected TF-IDF on length-normalized counts.
    NormalizedTfIdf,
    /// Raw occurrence counts.
    Tf,
    /// Occurrence counts divided by document length.
    NormalizedTf,
    /// Any function of `(index, term, document)`.
    Custom(WeightFn<T, D>),
}

impl<T, D> Weighting<T, D> {
    /// Names accepted by [`Weighting::from_name`].
    pub const NAMES: [&'static str; 4] = ["tfidf", "ntfidf", "tf", "ntf"];

    /// Look up a built-in weighting by name.
    ///
    /// # Errors
    ///
    /// [`TermdexError::InvalidMode`] for any name outside [`Weighting::NAMES`].
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "tfidf" => Ok(Weighting::TfIdf),
            "ntfidf" => Ok(Weighting::NormalizedTfIdf),
            "tf" => Ok(Weighting::Tf),
            "ntf" => Ok(Weighting::NormalizedTf),
            other => Err(TermdexError::invalid_mode(format!(
                "unexpected mode '{other}', expected one of {}",
                Self::NAMES.join(", ")
            ))),
        }
    }

    /// Wrap a closure as a custom weighting.
    pub fn custom<F>(weigh: F) -> Self
    where
        F: Fn(&HashedIndex<T, D>, &T, &D) -> Result<f64> + Send + Sync + 'static,
    {
        Weighting::Custom(Arc::new(weigh))
    }

    /// The name of this weighting; `custom` for closures.
    pub fn name(&self) -> &'static str {
        match self {
            Weighting::TfIdf => "tfidf",
            Weighting::NormalizedTfIdf => "ntfidf",
            Weighting::Tf => "tf",
            Weighting::NormalizedTf => "ntf",
            Weighting::Custom(_) => "custom",
        }
    }
}

impl<T, D> Default for Weighting<T, D> {
    fn default() -> Self {
        Weighting::TfIdf
    }
}

impl<T, D> Clone for Weighting<T, D> {
    fn clone(&self) -> Self {
        match self {
            Weighting::TfIdf => Weighting::TfIdf,
            Weighting::NormalizedTfIdf => Weighting::NormalizedTfIdf,
            Weighting::Tf => Weighting::Tf,
            Weighting::NormalizedTf => Weighting::NormalizedTf,
            Weighting::Custom(weigh) => Weighting::Custom(Arc::clone(weigh)),
        }
    }
}

impl<T, D> fmt::Debug for Weighting<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Custom(_) => f.write_str("Custom(<fn>)"),
            builtin => f.write_str(builtin.name()),
        }
    }
}

impl<T, D> fmt::Display for Weighting<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T, D> FromStr for Weighting<T, D> {
    type Err = TermdexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert!(matches!(Weighting::<String, String>::from_name("tfidf"), Ok(Weighting::TfIdf)));
        assert!(matches!(
            Weighting::<String, String>::from_name("ntfidf"),
            Ok(Weighting::NormalizedTfIdf)
        ));
        assert!(matches!(Weighting::<String, String>::from_name("tf"), Ok(Weighting::Tf)));
        assert!(matches!(
            Weighting::<String, String>::from_name("ntf"),
            Ok(Weighting::NormalizedTf)
        ));
    }

    #[test]
    fn test_invalid_name() {
        for name in ["invalid", "", "TFIDF", "count"] {
            let err = Weighting::<String, String>::from_name(name).unwrap_err();
            assert!(matches!(err, TermdexError::InvalidMode(_)));
        }
    }

    #[test]
    fn test_parse_and_display() {
        let weighting: Weighting = "ntf".parse().unwrap();
        assert_eq!(weighting.to_string(), "ntf");
        assert_eq!(Weighting::<String, String>::default().name(), "tfidf");

        let custom: Weighting = Weighting::custom(|_, _, _| Ok(1.0));
        assert_eq!(custom.name(), "custom");
        assert_eq!(format!("{custom:?}"), "Custom(<fn>)");
    }
}
