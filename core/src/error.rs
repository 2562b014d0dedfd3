use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// IDF was requested over a collection with no entries.
    #[error("cannot compute IDF over an empty collection")]
    EmptyCorpus,

    /// A token present in a scored entry has no weight in the IDF table
    /// supplied alongside it, i.e. the table was built from another collection.
    #[error("no IDF weight for token {token:?}")]
    MissingIdf { token: String },

    #[error("failed to load corpus from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
