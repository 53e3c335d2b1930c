//! Main entry point for calculating everything.

use crate::compare;
use crate::corpus::{Concordance, Corpus};
use crate::errors::{Result, invalid_input_ref};
use crate::information;
use crate::output::{CorpusStats, Output, WordList};
use crate::tokenize::TextEncoding;
use itertools::Itertools;
use log::debug;

/// What to calculate?
pub struct DriverArgs {
    /// How many top-ranked words to report and compare per corpus.
    pub top: usize,

    /// The encoding the corpora were decoded with; recorded in the output.
    pub encoding: TextEncoding,
}

/// Calculate everything for a collection of loaded corpora.
///
/// This is the main entry point for the library.
pub fn analyze(args: &DriverArgs, corpora: &[Corpus]) -> Result<Output> {
    if corpora.is_empty() {
        return Err(invalid_input_ref("no corpora loaded"));
    }
    information::statistics(corpora);
    let stats = corpora
        .iter()
        .map(|corpus| corpus_stats(corpus, args.top))
        .collect_vec();
    let distinctive = compare::distinctive_top_words(corpora, args.top);
    let favored = compare::commonly_favored_words(corpora);
    debug!(
        "compared {} corpora over top {} words",
        corpora.len(),
        args.top
    );
    Ok(Output {
        corpora: stats,
        distinctive_top_words: word_lists(corpora, distinctive),
        commonly_favored_words: word_lists(corpora, favored),
        top: args.top,
        encoding: args.encoding,
    })
}

fn corpus_stats(corpus: &Corpus, top: usize) -> CorpusStats {
    CorpusStats {
        label: corpus.label().map(str::to_owned),
        words: corpus.text_length(),
        sentences: corpus.sentence_count(),
        types: corpus.vocabulary().type_count(),
        diversity: corpus.vocabulary_diversity().ok(),
        top_words: owned(corpus.top_words(top)),
    }
}

fn word_lists(corpora: &[Corpus], lists: Vec<Vec<&str>>) -> Vec<WordList> {
    corpora
        .iter()
        .zip(lists)
        .map(|(corpus, words)| WordList {
            label: corpus.label().map(str::to_owned),
            words: owned(words),
        })
        .collect_vec()
}

fn owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_owned).collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    fn corpus(label: &str, text: &str) -> Corpus {
        let mut c = Corpus::from_bytes(text.as_bytes(), TextEncoding::Utf8).unwrap();
        c.set_label(label);
        c
    }

    fn args(top: usize) -> DriverArgs {
        DriverArgs {
            top,
            encoding: TextEncoding::Utf8,
        }
    }

    #[test]
    fn analyze_no_corpora_fails() {
        assert!(analyze(&args(5), &[]).is_err());
    }

    #[test]
    fn analyze_basic() {
        let corpora = vec![corpus("alpha", "a a b\n"), corpus("beta", "a c c\n")];
        let output = analyze(&args(1), &corpora).unwrap();
        assert_eq!(
            output,
            Output {
                corpora: vec![
                    CorpusStats {
                        label: Some("alpha".to_owned()),
                        words: 3,
                        sentences: 1,
                        types: 2,
                        diversity: Some(2.0 / 3.0),
                        top_words: vec!["a".to_owned()],
                    },
                    CorpusStats {
                        label: Some("beta".to_owned()),
                        words: 3,
                        sentences: 1,
                        types: 2,
                        diversity: Some(2.0 / 3.0),
                        top_words: vec!["c".to_owned()],
                    },
                ],
                distinctive_top_words: vec![
                    WordList {
                        label: Some("alpha".to_owned()),
                        words: vec!["a".to_owned()],
                    },
                    WordList {
                        label: Some("beta".to_owned()),
                        words: vec!["c".to_owned()],
                    },
                ],
                commonly_favored_words: vec![
                    WordList {
                        label: Some("alpha".to_owned()),
                        words: vec!["a".to_owned()],
                    },
                    WordList {
                        label: Some("beta".to_owned()),
                        words: vec!["a".to_owned()],
                    },
                ],
                top: 1,
                encoding: TextEncoding::Utf8,
            }
        );
    }

    #[test]
    fn analyze_empty_vocabulary_reported_as_null_diversity() {
        let corpora = vec![corpus("dots", ". . .\n")];
        let output = analyze(&args(5), &corpora).unwrap();
        assert_eq!(output.corpora[0].words, 0);
        assert_eq!(output.corpora[0].diversity, None);
        assert!(output.corpora[0].top_words.is_empty());
    }
}
