use serde::Serialize;
use std::collections::HashMap;

/// A keyed text unit (document or sentence) and its token sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub key: String,
    pub tokens: Vec<String>,
}

impl Entry {
    /// Number of occurrences of `token` in this entry.
    pub fn count(&self, token: &str) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == token).count()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

/// Insertion-ordered mapping from a unique key to its tokens.
///
/// Iteration order is insertion order; rankers rely on it to break ties.
/// Re-inserting a key replaces its tokens in place.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
}

impl Collection {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace. Returns `true` when the key was new.
    pub fn insert(&mut self, key: impl Into<String>, tokens: Vec<String>) -> bool {
        let key = key.into();
        if let Some(&pos) = self.positions.get(&key) {
            self.entries[pos].tokens = tokens;
            return false;
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push(Entry { key, tokens });
        true
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.positions.get(key).map(|&pos| &self.entries[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> { self.entries.iter() }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Collection {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for (key, tokens) in iter {
            collection.insert(key, tokens);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
