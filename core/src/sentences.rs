use crate::collection::Collection;
use crate::corpus::Corpus;
use crate::tokenizer::{tokenize_with, TokenizerOptions};
use lazy_static::lazy_static;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Title and reference abbreviations that UAX #29 treats as sentence ends.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "dr", "mr", "mrs", "ms", "prof", "st", "jr", "sr", "mt", "vs", "gen", "col",
        "lt", "capt", "sgt", "rev", "gov", "sen", "rep", "fig", "vol", "e.g", "i.e",
    ]
    .into_iter()
    .collect();
}

fn ends_with_abbreviation(piece: &str) -> bool {
    let Some(head) = piece.strip_suffix('.') else { return false };
    let word = head.rsplit(char::is_whitespace).next().unwrap_or(head);
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

/// Split text into sentences: first on line breaks, then on Unicode sentence
/// boundaries within each line. A piece ending in a known abbreviation such as
/// "Dr." is joined to the piece after it. Pieces are trimmed and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for passage in text.lines() {
        let mut pending = String::new();
        for piece in passage.split_sentence_bounds() {
            pending.push_str(piece);
            if ends_with_abbreviation(pending.trim_end()) {
                continue;
            }
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
        push_trimmed(&mut sentences, &pending);
    }
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}

/// Build the sentence collection for the given documents, in the order given.
///
/// Sentences with no tokens are dropped. Sentence text is the key, so a
/// sentence repeated across documents appears once.
pub fn extract_sentences<'a, I>(corpus: &Corpus, ids: I, options: &TokenizerOptions) -> Collection
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sentences = Collection::new();
    for id in ids {
        let Some(text) = corpus.get(id) else {
            tracing::warn!(id, "skipping unknown document");
            continue;
        };
        for sentence in split_sentences(text) {
            let tokens = tokenize_with(&sentence, options);
            if !tokens.is_empty() {
                sentences.insert(sentence, tokens);
            }
        }
    }
    tracing::debug!(sentences = sentences.len(), "extracted sentences");
    sentences
}
