use crate::corpus::{Concordance, Corpus};
use log::info;
use std::collections::HashSet;

pub fn statistics(corpora: &[Corpus]) {
    let words: u64 = corpora.iter().map(|c| c.text_length()).sum();
    let sentences: usize = corpora.iter().map(|c| c.sentence_count()).sum();
    let mut types = HashSet::new();
    for corpus in corpora {
        types.extend(corpus.vocabulary().all_words());
    }
    info!("corpora: {}", corpora.len());
    info!("sentences: {sentences}");
    info!("words: {words}");
    info!("distinct words across corpora: {}", types.len());
}
