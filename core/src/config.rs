use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-query ranking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of top documents carried into sentence extraction.
    #[serde(default = "default_file_matches")]
    pub file_matches: usize,
    /// Number of sentences returned.
    #[serde(default = "default_sentence_matches")]
    pub sentence_matches: usize,
}

fn default_file_matches() -> usize { 1 }
fn default_sentence_matches() -> usize { 5 }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            file_matches: default_file_matches(),
            sentence_matches: default_sentence_matches(),
        }
    }
}

impl QueryConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&raw).map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }
}
