use crate::tokenizer::{tokenize_with, TokenizerOptions};
use serde::Serialize;
use std::collections::BTreeSet;

/// A set of normalized query tokens.
///
/// Kept sorted so that scores summed over the query are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    /// Tokenize free text into a query, collapsing duplicates.
    pub fn parse(text: &str, options: &TokenizerOptions) -> Self {
        tokenize_with(text, options).into_iter().collect()
    }

    pub fn contains(&self, token: &str) -> bool { self.terms.contains(token) }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { terms: iter.into_iter().map(Into::into).collect() }
    }
}
