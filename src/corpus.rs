//! One loaded text source and its derived statistics.

use crate::errors::Result;
use crate::tokenize::{self, Sentence, TextEncoding};
use crate::vocabulary::Vocabulary;
use itertools::Itertools;

/// Anything that can report basic word statistics over a text.
pub trait Concordance {
    /// Total token occurrences in the text.
    fn text_length(&self) -> u64;
    /// Occurrence count of `word`; 0 if absent.
    fn frequency(&self, word: &str) -> u64;
    /// The first `count` words in rank order, highest frequency first.
    fn top_words(&self, count: usize) -> Vec<&str>;
}

/// A text source with its sentence structure and vocabulary.
///
/// Built once and read-only afterwards, apart from the display label
/// which the caller may assign after construction.
pub struct Corpus {
    sentences: Vec<Sentence>,
    vocabulary: Vocabulary,
    label: Option<String>,
}

impl Corpus {
    /// Decode and tokenize `bytes`, then index the token stream.
    pub fn from_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<Corpus> {
        let sentences = tokenize::tokenize(bytes, encoding)?;
        let vocabulary = Vocabulary::new(sentences.iter().flatten().map(String::as_str));
        Ok(Corpus {
            sentences,
            vocabulary,
            label: None,
        })
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The flattened token stream, in text order.
    pub fn text(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().flatten().map(String::as_str)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Tokens per sentence, in sentence order.
    pub fn sentence_lengths(&self) -> Vec<usize> {
        self.sentences.iter().map(Vec::len).collect_vec()
    }

    /// Character length of each token occurrence, in text order.
    pub fn word_lengths(&self) -> Vec<usize> {
        self.text().map(|w| w.chars().count()).collect_vec()
    }

    /// Type/token ratio; fails for a corpus with no words.
    pub fn vocabulary_diversity(&self) -> Result<f64> {
        self.vocabulary.diversity()
    }

    /// (frequency, distinct-word count) pairs in rank order.
    pub fn frequency_spectrum(&self) -> Vec<(u64, usize)> {
        (0..self.vocabulary.rank_count())
            .map(|rank| {
                let frequency = self.vocabulary.frequency_at_rank(rank);
                (frequency, self.vocabulary.words_with_frequency(frequency).len())
            })
            .collect_vec()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Assign the display label. Set once after construction, e.g. from a
    /// file name; display metadata only.
    pub fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_owned());
    }
}

impl Concordance for Corpus {
    fn text_length(&self) -> u64 {
        self.vocabulary.word_count()
    }

    fn frequency(&self, word: &str) -> u64 {
        self.vocabulary.frequency(word)
    }

    fn top_words(&self, count: usize) -> Vec<&str> {
        let mut words = Vec::with_capacity(count.min(self.vocabulary.type_count()));
        'ranks: for rank in 0..self.vocabulary.rank_count() {
            let frequency = self.vocabulary.frequency_at_rank(rank);
            for word in self.vocabulary.words_with_frequency(frequency) {
                if words.len() == count {
                    break 'ranks;
                }
                words.push(word.as_str());
            }
        }
        words
    }
}
