//! Data structures for representing the output.

use crate::tokenize::TextEncoding;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct CorpusStats {
    pub label: Option<String>,
    pub words: u64,
    pub sentences: usize,
    pub types: usize,
    /// Type/token ratio; `None` for a corpus with no words, where the
    /// ratio is undefined.
    pub diversity: Option<f64>,
    pub top_words: Vec<String>,
}

/// A word list attributed to one corpus.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct WordList {
    pub label: Option<String>,
    pub words: Vec<String>,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct Output {
    pub corpora: Vec<CorpusStats>,
    pub distinctive_top_words: Vec<WordList>,
    pub commonly_favored_words: Vec<WordList>,
    pub top: usize,
    pub encoding: TextEncoding,
}
