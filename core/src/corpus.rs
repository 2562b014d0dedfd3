use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::tokenizer::{tokenize_with, TokenizerOptions};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Raw documents keyed by identifier, iterated in identifier order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Load every `*.txt` file directly inside `dir`, keyed by file name.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut documents = BTreeMap::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| Error::Load {
                path: e.path().unwrap_or(dir).to_path_buf(),
                source: e.into(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = fs::read_to_string(path).map_err(|source| Error::Load { path: path.to_path_buf(), source })?;
            documents.insert(name.to_string(), text);
        }
        tracing::info!(dir = %dir.display(), documents = documents.len(), "loaded corpus");
        Ok(Self { documents })
    }

    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { documents: documents.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.documents.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}

/// A corpus together with the token sequence of each document.
#[derive(Debug, Clone)]
pub struct TokenizedCorpus {
    pub corpus: Corpus,
    pub documents: Collection,
    pub options: TokenizerOptions,
}

impl TokenizedCorpus {
    pub fn new(corpus: Corpus, options: TokenizerOptions) -> Self {
        let documents = corpus
            .iter()
            .map(|(id, text)| (id, tokenize_with(text, &options)))
            .collect();
        Self { corpus, documents, options }
    }
}
