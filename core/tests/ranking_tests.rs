use passage_core::{
    answer, top_documents, top_sentences, Collection, Corpus, IdfTable, Query, QueryConfig,
    TokenizedCorpus, TokenizerOptions,
};
use std::fs;
use tempfile::tempdir;

fn collection(entries: &[(&str, &[&str])]) -> Collection {
    entries
        .iter()
        .map(|(k, words)| (*k, words.iter().map(|w| w.to_string()).collect()))
        .collect()
}

fn query(words: &[&str]) -> Query {
    words.iter().copied().collect()
}

#[test]
fn documents_example() {
    let docs = collection(&[("a.txt", &["the", "cat", "sat"]), ("b.txt", &["the", "dog", "ran"])]);
    let idf = IdfTable::compute(&docs).unwrap();
    assert!((idf.get("cat").unwrap() - 2f64.ln()).abs() < 1e-12);
    assert_eq!(idf.get("the"), Some(0.0));

    let top = top_documents(&query(&["cat"]), &docs, &idf, 1).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, "a.txt");
    assert!((top[0].score - 2f64.ln()).abs() < 1e-12);
}

#[test]
fn sentences_example() {
    let sentences = collection(&[("The cat sat.", &["cat", "sat"]), ("The dog ran.", &["dog", "ran"])]);
    let idf = IdfTable::compute(&sentences).unwrap();
    assert!((idf.get("cat").unwrap() - 2f64.ln()).abs() < 1e-12);
    let top = top_sentences(&query(&["cat"]), &sentences, &idf, 1).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].sentence, "The cat sat.");
}

#[test]
fn zero_n_yields_nothing() {
    let docs = collection(&[("a", &["cat"]), ("b", &["dog"])]);
    let idf = IdfTable::compute(&docs).unwrap();
    assert!(top_documents(&query(&["cat"]), &docs, &idf, 0).unwrap().is_empty());
    assert!(top_sentences(&query(&["cat"]), &docs, &idf, 0).unwrap().is_empty());
}

#[test]
fn disjoint_query_returns_zero_scores() {
    let docs = collection(&[("a", &["cat"]), ("b", &["dog"]), ("c", &["bird"])]);
    let idf = IdfTable::compute(&docs).unwrap();
    let q = query(&["unicorn"]);

    let top = top_documents(&q, &docs, &idf, 10).unwrap();
    assert_eq!(top.len(), 3);
    assert!(top.iter().all(|d| d.score == 0.0));

    let top = top_sentences(&q, &docs, &idf, 2).unwrap();
    assert_eq!(top.len(), 2);
    assert!(top.iter().all(|s| s.idf_sum == 0.0 && s.density == 0.0));
}

#[test]
fn idf_sum_outranks_density() {
    // "rare" appears in one sentence, "common" in all but one.
    let sentences = collection(&[
        ("dense", &["common"]),
        ("sparse", &["rare", "x", "y", "z", "w"]),
        ("other", &["common", "v"]),
        ("filler", &["u"]),
    ]);
    let idf = IdfTable::compute(&sentences).unwrap();
    let top = top_sentences(&query(&["rare", "common"]), &sentences, &idf, 4).unwrap();
    assert_eq!(top[0].sentence, "sparse");
    assert!(top[0].density < top[1].density);
    assert_eq!(top[1].sentence, "dense");
    assert_eq!(top[2].sentence, "other");
    assert_eq!(top[3].sentence, "filler");
}

#[test]
fn answers_from_a_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("python.txt"),
        "Python is a programming language.\nPython code is readable. Snakes are reptiles.",
    )
    .unwrap();
    fs::write(
        dir.path().join("neurons.txt"),
        "Neural networks learn from data. Networks of neurons compute.",
    )
    .unwrap();
    fs::write(dir.path().join("ocean.txt"), "The ocean is deep. Whales swim in the ocean.").unwrap();

    let corpus = TokenizedCorpus::new(Corpus::load_dir(dir.path()).unwrap(), TokenizerOptions::default());
    let config = QueryConfig { file_matches: 1, sentence_matches: 2 };
    let result = answer("How do neural networks learn?", &corpus, &config).unwrap();

    assert!(result.has_matches());
    assert_eq!(result.documents.len(), 1);
    assert_eq!(result.documents[0].id, "neurons.txt");
    assert_eq!(result.sentences.len(), 2);
    assert_eq!(result.sentences[0].sentence, "Neural networks learn from data.");
    assert_eq!(result.sentences[1].sentence, "Networks of neurons compute.");
}

#[test]
fn disjoint_query_has_no_matches() {
    let corpus = TokenizedCorpus::new(
        Corpus::from_documents([("a.txt", "Cats purr softly."), ("b.txt", "Dogs bark loudly.")]),
        TokenizerOptions::default(),
    );
    let result = answer("submarine", &corpus, &QueryConfig::default()).unwrap();
    assert_eq!(result.documents.len(), 1);
    assert_eq!(result.documents[0].score, 0.0);
    assert!(!result.has_matches());
}

#[test]
fn empty_corpus_is_reported() {
    let corpus = TokenizedCorpus::new(Corpus::default(), TokenizerOptions::default());
    let err = answer("anything", &corpus, &QueryConfig::default()).unwrap_err();
    assert!(matches!(err, passage_core::Error::EmptyCorpus));
}

#[test]
fn winners_without_sentences_give_an_empty_answer() {
    let corpus = TokenizedCorpus::new(
        Corpus::from_documents([("a.txt", "It is what it is."), ("b.txt", "")]),
        TokenizerOptions::default(),
    );
    let result = answer("cats", &corpus, &QueryConfig::default()).unwrap();
    assert!(result.sentences.is_empty());
    assert!(!result.has_matches());
}

#[test]
fn possessive_mentions_match_the_query() {
    let corpus = TokenizedCorpus::new(
        Corpus::from_documents([("a.txt", "Python's syntax is readable."), ("b.txt", "Snakes bite.")]),
        TokenizerOptions::default(),
    );
    let result = answer("python", &corpus, &QueryConfig::default()).unwrap();
    assert_eq!(result.documents[0].id, "a.txt");
    assert!(result.documents[0].score > 0.0);
    assert!(result.has_matches());
}

#[test]
fn sentences_are_ranked_with_sentence_level_idf() {
    // "cats" is rare across documents but in every sentence of a.txt, so its
    // sentence-level IDF is 0; "birds" is in every document but one sentence.
    let corpus = TokenizedCorpus::new(
        Corpus::from_documents([
            ("a.txt", "Cats nap. Cats chase small brown birds."),
            ("b.txt", "Birds sing."),
            ("c.txt", "Birds fly."),
        ]),
        TokenizerOptions::default(),
    );
    let config = QueryConfig { file_matches: 1, sentence_matches: 2 };
    let result = answer("cats birds", &corpus, &config).unwrap();

    assert_eq!(result.documents[0].id, "a.txt");
    assert_eq!(result.sentences.len(), 2);
    // With document-level weights both sentences would tie on ln 3 and the
    // denser "Cats nap." would win.
    assert_eq!(result.sentences[0].sentence, "Cats chase small brown birds.");
    assert!((result.sentences[0].idf_sum - 2f64.ln()).abs() < 1e-12);
    assert_eq!(result.sentences[1].sentence, "Cats nap.");
    assert_eq!(result.sentences[1].idf_sum, 0.0);
}
