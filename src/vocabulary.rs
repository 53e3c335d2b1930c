//! Word-frequency and frequency-rank index over a token stream.

use crate::errors::{Result, division_undefined_ref};
use itertools::Itertools;
use std::collections::HashMap;

/// An immutable frequency index built once from a stream of word tokens.
///
/// Three views are kept over the same data: word to frequency, frequency
/// to words, and a rank index over the distinct frequency values (rank 0
/// is the highest frequency present). The maps are mutually derived and
/// rebuilt together at construction; nothing is patched afterwards.
pub struct Vocabulary {
    frequencies: HashMap<String, u64>,
    buckets: HashMap<u64, Vec<String>>,
    ranks: Vec<u64>,
    word_count: u64,
}

impl Vocabulary {
    pub fn new<'a, I>(tokens: I) -> Vocabulary
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut frequencies: HashMap<String, u64> = HashMap::new();
        let mut word_count = 0;
        for token in tokens {
            word_count += 1;
            match frequencies.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    frequencies.insert(token.to_owned(), 1);
                }
            }
        }
        let mut buckets: HashMap<u64, Vec<String>> = HashMap::new();
        for (word, &count) in &frequencies {
            buckets.entry(count).or_default().push(word.clone());
        }
        // canonical within-bucket order, so that truncations are deterministic
        for words in buckets.values_mut() {
            words.sort_unstable();
        }
        let ranks = buckets.keys().copied().sorted_unstable().rev().collect_vec();
        Vocabulary {
            frequencies,
            buckets,
            ranks,
            word_count,
        }
    }

    /// Total token occurrences processed.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Count of distinct tokens.
    pub fn type_count(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Type/token ratio, in (0, 1] for a non-empty vocabulary.
    ///
    /// Fails for an empty vocabulary, where the ratio is 0/0.
    pub fn diversity(&self) -> Result<f64> {
        if self.word_count == 0 {
            return Err(division_undefined_ref("vocabulary has no words"));
        }
        Ok(self.type_count() as f64 / self.word_count as f64)
    }

    /// Occurrence count of `word`; 0 if it never occurred.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    /// The frequency value at `rank`; 0 if the rank is out of range.
    pub fn frequency_at_rank(&self, rank: usize) -> u64 {
        self.ranks.get(rank).copied().unwrap_or(0)
    }

    /// Number of distinct frequency values.
    pub fn rank_count(&self) -> usize {
        self.ranks.len()
    }

    /// All words occurring exactly `frequency` times, in canonical order.
    pub fn words_with_frequency(&self, frequency: u64) -> &[String] {
        match self.buckets.get(&frequency) {
            Some(words) => words.as_slice(),
            None => &[],
        }
    }

    /// Words at rank 0; empty for an empty vocabulary.
    pub fn most_frequent_words(&self) -> &[String] {
        match self.ranks.first() {
            Some(&frequency) => self.words_with_frequency(frequency),
            None => &[],
        }
    }

    /// Words at the lowest frequency present; empty for an empty vocabulary.
    pub fn least_frequent_words(&self) -> &[String] {
        match self.ranks.last() {
            Some(&frequency) => self.words_with_frequency(frequency),
            None => &[],
        }
    }

    /// Every distinct token, in unspecified order.
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.frequencies.keys().map(String::as_str)
    }
}
