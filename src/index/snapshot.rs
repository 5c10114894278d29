//! Plain-data views of an index.
//!
//! An [`IndexSnapshot`] holds the two tables of a [`HashedIndex`] as nested
//! maps of integer counts:
//!
//! ```json
//! {
//!   "documents": {"document1.txt": 8, "document2.txt": 6},
//!   "terms": {
//!     "word":  {"document1.txt": 3, "document2.txt": 2},
//!     "malta": {"document1.txt": 5},
//!     "phone": {"document2.txt": 4}
//!   }
//! }
//! ```
//!
//! Importing a snapshot does not check that document lengths agree with the
//! term tables.

use std::hash::Hash;

use ahash::RandomState;
use indexmap::IndexMap;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::counter::Counter;
use crate::index::hashed::{HashedIndex, IndexKey};

/// The two tables of an index, detached from it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Eq + Hash, D: Serialize + Eq + Hash",
    deserialize = "T: Deserialize<'de> + Eq + Hash, D: Deserialize<'de> + Eq + Hash"
))]
pub struct IndexSnapshot<T = String, D = String> {
    pub documents: Counter<D>,
    pub terms: IndexMap<T, Counter<D>, RandomState>,
}

impl<T, D> PartialEq for IndexSnapshot<T, D>
where
    T: Eq + Hash,
    D: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.documents == other.documents && self.terms == other.terms
    }
}

impl<T, D> IndexSnapshot<T, D>
where
    T: Serialize + Eq + Hash,
    D: Serialize + Eq + Hash,
{
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T, D> IndexSnapshot<T, D>
where
    T: DeserializeOwned + Eq + Hash,
    D: DeserializeOwned + Eq + Hash,
{
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T, D> HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    /// Copy both tables out of the index.
    pub fn to_snapshot(&self) -> IndexSnapshot<T, D> {
        IndexSnapshot {
            documents: self.documents.clone(),
            terms: self.terms.clone(),
        }
    }

    /// Build an unfrozen index holding exactly the tables of `snapshot`.
    pub fn from_snapshot(snapshot: IndexSnapshot<T, D>) -> Self {
        HashedIndex::from_parts(snapshot.documents, snapshot.terms)
    }

    /// Replace the contents of this index with `snapshot`, keeping the
    /// freeze flag.
    pub fn load_snapshot(&mut self, snapshot: IndexSnapshot<T, D>) {
        debug!(
            "loading snapshot with {} terms and {} documents",
            snapshot.terms.len(),
            snapshot.documents.len()
        );
        self.documents = snapshot.documents;
        self.terms = snapshot.terms;
    }
}

impl<T, D> From<IndexSnapshot<T, D>> for HashedIndex<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    fn from(snapshot: IndexSnapshot<T, D>) -> Self {
        HashedIndex::from_snapshot(snapshot)
    }
}

impl<T, D> From<&HashedIndex<T, D>> for IndexSnapshot<T, D>
where
    T: IndexKey,
    D: IndexKey,
{
    fn from(index: &HashedIndex<T, D>) -> Self {
        index.to_snapshot()
    }
}
