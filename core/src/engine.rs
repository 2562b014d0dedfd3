use crate::config::QueryConfig;
use crate::corpus::TokenizedCorpus;
use crate::error::Result;
use crate::idf::IdfTable;
use crate::query::Query;
use crate::rank::{top_documents, top_sentences, DocumentScore, SentenceScore};
use crate::sentences::extract_sentences;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: Query,
    /// Top documents, best first.
    pub documents: Vec<DocumentScore>,
    /// Top sentences from those documents, best first.
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    /// False when no returned sentence shares a token with the query.
    pub fn has_matches(&self) -> bool {
        self.sentences.iter().any(|s| s.density > 0.0)
    }
}

/// Answer `query_text` against `corpus`: rank documents, then rank the
/// sentences of the top documents with IDF recomputed over those sentences.
pub fn answer(query_text: &str, corpus: &TokenizedCorpus, config: &QueryConfig) -> Result<Answer> {
    let query = Query::parse(query_text, &corpus.options);
    answer_query(query, corpus, config)
}

pub fn answer_query(query: Query, corpus: &TokenizedCorpus, config: &QueryConfig) -> Result<Answer> {
    let span = tracing::debug_span!("answer", terms = query.len());
    let _enter = span.enter();

    let doc_idf = IdfTable::compute(&corpus.documents)?;
    let documents = top_documents(&query, &corpus.documents, &doc_idf, config.file_matches)?;
    tracing::debug!(top = ?documents.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(), "ranked documents");

    let sentence_set = extract_sentences(
        &corpus.corpus,
        documents.iter().map(|d| d.id.as_str()),
        &corpus.options,
    );
    if sentence_set.is_empty() {
        return Ok(Answer { query, documents, sentences: Vec::new() });
    }

    let sentence_idf = IdfTable::compute(&sentence_set)?;
    let sentences = top_sentences(&query, &sentence_set, &sentence_idf, config.sentence_matches)?;
    Ok(Answer { query, documents, sentences })
}
