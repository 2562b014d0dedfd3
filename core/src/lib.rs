//! Two-stage TF-IDF passage retrieval: rank whole documents against a query,
//! then rank the sentences of the best documents.

pub mod cache;
pub mod collection;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod idf;
pub mod query;
pub mod rank;
pub mod sentences;
pub mod tokenizer;

pub use cache::CorpusCache;
pub use collection::{Collection, Entry};
pub use config::QueryConfig;
pub use corpus::{Corpus, TokenizedCorpus};
pub use engine::{answer, answer_query, Answer};
pub use error::{Error, Result};
pub use idf::IdfTable;
pub use query::Query;
pub use rank::{score_documents, top_documents, top_sentences, DocumentScore, SentenceScore};
pub use tokenizer::TokenizerOptions;
