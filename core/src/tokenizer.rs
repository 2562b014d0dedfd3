use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    // Word candidates; anything that is not purely alphabetic is dropped afterwards.
    // Apostrophes split words, so "python's" yields "python" and the stopword "s".
    static ref RE: Regex = Regex::new(r"[\p{L}\p{M}\p{N}_-]+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","couldn",
            "d","did","didn","do","does","doesn","doing","don","down","during",
            "each","few","for","from","further",
            "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","isn","it","its","itself",
            "just","ll","m","ma","me","mightn","more","most","mustn","my","myself",
            "needn","no","nor","not","now",
            "o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
            "re","s","same","shan","she","should","shouldn","so","some","such",
            "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","ve","very",
            "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","will","with","won","wouldn",
            "y","you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Options that change how text is normalized into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Reduce tokens to their Snowball English stem.
    pub stem: bool,
}

fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Tokenize text with the default options.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &TokenizerOptions::default())
}

/// Tokenize text into lowercase, purely alphabetic, non-stopword tokens in
/// document order. Text is NFKC normalized first.
pub fn tokenize_with(text: &str, options: &TokenizerOptions) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|word| word.chars().all(char::is_alphabetic))
        .filter(|word| !is_stopword(word))
        .map(|word| {
            if options.stem {
                STEMMER.stem(word).into_owned()
            } else {
                word.to_string()
            }
        })
        .collect()
}
