//! Inverse document frequency over a [`Collection`].
//!
//! `idf(t) = ln(N / d)` where `N` is the number of entries in the collection
//! and `d` the number of entries whose token sequence contains `t` at least
//! once. The table holds exactly the tokens with `d >= 1`.

use crate::collection::Collection;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    collection_size: usize,
}

impl IdfTable {
    /// Compute IDF weights for every token of `collection`.
    pub fn compute(collection: &Collection) -> Result<Self> {
        if collection.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let n = collection.len();

        let mut df: HashMap<&str, usize> = HashMap::new();
        for entry in collection {
            let present: HashSet<&str> = entry.tokens.iter().map(String::as_str).collect();
            for token in present {
                *df.entry(token).or_insert(0) += 1;
            }
        }

        let weights = df
            .into_iter()
            .map(|(token, d)| (token.to_string(), (n as f64 / d as f64).ln()))
            .collect::<HashMap<_, _>>();
        tracing::debug!(entries = n, terms = weights.len(), "computed idf table");
        Ok(Self { weights, collection_size: n })
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    /// Like [`get`](Self::get), but a missing token is an error.
    pub fn weight(&self, token: &str) -> Result<f64> {
        self.get(token).ok_or_else(|| Error::MissingIdf { token: token.to_string() })
    }

    /// Number of entries the table was computed over.
    pub fn collection_size(&self) -> usize { self.collection_size }

    pub fn len(&self) -> usize { self.weights.len() }

    pub fn is_empty(&self) -> bool { self.weights.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Entries by descending weight, then token.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
