//! Document and sentence ranking.
//!
//! Both rankers sort with a stable sort over collection order, so entries with
//! equal scores come out in the order they were inserted.

use crate::collection::{Collection, Entry};
use crate::error::Result;
use crate::idf::IdfTable;
use crate::query::Query;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    pub id: String,
    /// Sum of `tf * idf` over the query tokens present in the document.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub sentence: String,
    /// Sum of sentence-collection IDF over the query tokens present.
    pub idf_sum: f64,
    /// Fraction of the sentence's tokens that are query tokens.
    pub density: f64,
}

impl SentenceScore {
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .idf_sum
            .total_cmp(&self.idf_sum)
            .then_with(|| other.density.total_cmp(&self.density))
    }
}

fn document_score(query: &Query, entry: &Entry, idf: &IdfTable) -> Result<f64> {
    let mut score = 0.0;
    for token in query.iter() {
        let tf = entry.count(token);
        if tf == 0 {
            continue;
        }
        score += tf as f64 * idf.weight(token)?;
    }
    Ok(score)
}

fn sentence_score(query: &Query, entry: &Entry, idf: &IdfTable) -> Result<SentenceScore> {
    let mut idf_sum = 0.0;
    for token in query.iter() {
        if entry.contains(token) {
            idf_sum += idf.weight(token)?;
        }
    }
    let matching = entry.tokens.iter().filter(|t| query.contains(t)).count();
    let density = if entry.tokens.is_empty() {
        0.0
    } else {
        matching as f64 / entry.tokens.len() as f64
    };
    Ok(SentenceScore { sentence: entry.key.clone(), idf_sum, density })
}

/// Score every document in collection order, without sorting.
pub fn score_documents(query: &Query, documents: &Collection, idf: &IdfTable) -> Result<Vec<DocumentScore>> {
    documents
        .iter()
        .map(|entry| {
            Ok(DocumentScore { id: entry.key.clone(), score: document_score(query, entry, idf)? })
        })
        .collect()
}

/// The `n` documents with the highest TF-IDF score for `query`.
///
/// `idf` must be computed over `documents`.
pub fn top_documents(query: &Query, documents: &Collection, idf: &IdfTable, n: usize) -> Result<Vec<DocumentScore>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut scored = score_documents(query, documents, idf)?;
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    Ok(scored)
}

/// The `n` sentences ranked by IDF sum, then query term density.
///
/// `idf` must be computed over `sentences`, not over the documents they came from.
pub fn top_sentences(query: &Query, sentences: &Collection, idf: &IdfTable, n: usize) -> Result<Vec<SentenceScore>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let mut scored = sentences
        .iter()
        .map(|entry| sentence_score(query, entry, idf))
        .collect::<Result<Vec<_>>>()?;
    scored.sort_by(SentenceScore::rank_cmp);
    scored.truncate(n);
    Ok(scored)
}
