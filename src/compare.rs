//! Cross-corpus vocabulary comparisons.

use crate::corpus::{Concordance, Corpus};
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashSet;

/// How many commonly favored words to report per corpus.
pub const FAVORED_WORDS: usize = 20;

/// For each corpus, its top-`count` words that appear in no other
/// corpus's top-`count` list, in the corpus's own top order.
pub fn distinctive_top_words(corpora: &[Corpus], count: usize) -> Vec<Vec<&str>> {
    let tops = corpora.iter().map(|c| c.top_words(count)).collect_vec();
    tops.iter()
        .enumerate()
        .map(|(i, top)| {
            let others: HashSet<&str> = tops
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .flat_map(|(_, other)| other.iter().copied())
                .collect();
            top.iter()
                .copied()
                .filter(|word| !others.contains(word))
                .collect_vec()
        })
        .collect_vec()
}

/// Words present in every corpus, ranked separately per corpus.
///
/// The shared set is the intersection of all full vocabularies; each
/// returned list is that set sorted by the corpus's own frequency
/// descending (ties broken lexicographically), truncated to
/// [FAVORED_WORDS].
pub fn commonly_favored_words(corpora: &[Corpus]) -> Vec<Vec<&str>> {
    let Some((first, rest)) = corpora.split_first() else {
        return vec![];
    };
    let mut shared: HashSet<&str> = first.vocabulary().all_words().collect();
    for corpus in rest {
        let words: HashSet<&str> = corpus.vocabulary().all_words().collect();
        shared.retain(|word| words.contains(word));
    }
    corpora
        .iter()
        .map(|corpus| {
            shared
                .iter()
                .copied()
                .sorted_unstable_by_key(|&word| (Reverse(corpus.frequency(word)), word))
                .take(FAVORED_WORDS)
                .collect_vec()
        })
        .collect_vec()
}
