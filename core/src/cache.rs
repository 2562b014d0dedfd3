use crate::corpus::{Corpus, TokenizedCorpus};
use crate::error::Result;
use crate::tokenizer::TokenizerOptions;
use parking_lot::RwLock;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Caller-owned cache of tokenized corpora keyed by directory.
///
/// Corpora are treated as immutable once cached; call [`reload`](Self::reload)
/// or [`invalidate`](Self::invalidate) when the files on disk change. When `capacity` is reached the oldest entry
/// is evicted.
pub struct CorpusCache {
    capacity: usize,
    options: TokenizerOptions,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<PathBuf, Arc<TokenizedCorpus>>,
    order: VecDeque<PathBuf>,
}

impl Inner {
    /// Insert or replace `key`, evicting the oldest entries to make room for a new key.
    fn insert(&mut self, key: PathBuf, corpus: Arc<TokenizedCorpus>, capacity: usize) {
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= capacity {
                let Some(oldest) = self.order.pop_front() else { break };
                self.entries.remove(&oldest);
                tracing::debug!(dir = %oldest.display(), "evicted corpus");
            }
            self.order.push_back(key.clone());
        }
        self.entries.insert(key, corpus);
    }
}

impl CorpusCache {
    pub fn new(capacity: usize, options: TokenizerOptions) -> Self {
        Self { capacity: capacity.max(1), options, inner: RwLock::new(Inner::default()) }
    }

    pub fn options(&self) -> TokenizerOptions { self.options }

    pub fn get_or_load<P: AsRef<Path>>(&self, dir: P) -> Result<Arc<TokenizedCorpus>> {
        let key = cache_key(dir.as_ref());
        if let Some(hit) = self.inner.read().entries.get(&key) {
            tracing::debug!(dir = %key.display(), "corpus cache hit");
            return Ok(Arc::clone(hit));
        }

        // Loading happens outside the lock; a concurrent miss may load twice
        // and the first insert wins.
        let loaded = Arc::new(TokenizedCorpus::new(Corpus::load_dir(&key)?, self.options));
        let mut inner = self.inner.write();
        if let Some(existing) = inner.entries.get(&key) {
            return Ok(Arc::clone(existing));
        }
        inner.insert(key, Arc::clone(&loaded), self.capacity);
        Ok(loaded)
    }

    /// Load `dir` afresh and replace any cached copy. On failure the cached
    /// copy, if any, stays in place.
    pub fn reload<P: AsRef<Path>>(&self, dir: P) -> Result<Arc<TokenizedCorpus>> {
        let key = cache_key(dir.as_ref());
        let loaded = Arc::new(TokenizedCorpus::new(Corpus::load_dir(&key)?, self.options));
        tracing::info!(dir = %key.display(), documents = loaded.corpus.len(), "reloaded corpus");
        self.inner.write().insert(key, Arc::clone(&loaded), self.capacity);
        Ok(loaded)
    }

    /// Drop the cached corpus for `dir`. Returns whether one was cached.
    pub fn invalidate<P: AsRef<Path>>(&self, dir: P) -> bool {
        let key = cache_key(dir.as_ref());
        let mut inner = self.inner.write();
        inner.order.retain(|p| p != &key);
        inner.entries.remove(&key).is_some()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn len(&self) -> usize { self.inner.read().entries.len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

fn cache_key(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hit_returns_same_corpus_until_invalidated() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "Cats purr.").unwrap();
        let cache = CorpusCache::new(4, TokenizerOptions::default());

        let first = cache.get_or_load(dir.path()).unwrap();
        fs::write(dir.path().join("b.txt"), "Dogs bark.").unwrap();
        let second = cache.get_or_load(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.corpus.len(), 1);

        assert!(cache.invalidate(dir.path()));
        let third = cache.get_or_load(dir.path()).unwrap();
        assert_eq!(third.corpus.len(), 2);
        assert!(!Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn evicts_oldest_when_full() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        fs::write(a.path().join("a.txt"), "alpha").unwrap();
        fs::write(b.path().join("b.txt"), "beta").unwrap();
        let cache = CorpusCache::new(1, TokenizerOptions::default());

        cache.get_or_load(a.path()).unwrap();
        cache.get_or_load(b.path()).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(!cache.invalidate(a.path()));
        assert!(cache.invalidate(b.path()));
        assert!(cache.is_empty());
    }

    #[test]
    fn failed_reload_keeps_previous_corpus() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "Cats purr.").unwrap();
        let cache = CorpusCache::new(2, TokenizerOptions::default());
        let before = cache.get_or_load(dir.path()).unwrap();

        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe]).unwrap();
        assert!(cache.reload(dir.path()).is_err());
        let after = cache.get_or_load(dir.path()).unwrap();
        assert!(Arc::ptr_eq(&before, &after));

        fs::remove_file(dir.path().join("bad.txt")).unwrap();
        fs::write(dir.path().join("b.txt"), "Dogs bark.").unwrap();
        let reloaded = cache.reload(dir.path()).unwrap();
        assert_eq!(reloaded.corpus.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn load_failures_are_not_cached() {
        let dir = tempdir().unwrap();
        let cache = CorpusCache::new(2, TokenizerOptions::default());
        assert!(cache.get_or_load(dir.path().join("absent")).is_err());
        assert!(cache.is_empty());
    }
}
