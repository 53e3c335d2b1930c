use concord::corpus::{Concordance, Corpus};
use concord::driver::{self, DriverArgs};
use concord::output::{CorpusStats, Output, WordList};
use concord::parallel::{self, CorpusSource};
use concord::tokenize::TextEncoding;
use std::fs;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn slurp(filename: &str) -> Vec<u8> {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push(filename);
    fs::read(path).unwrap()
}

fn source(label: &str, filename: &str) -> CorpusSource {
    CorpusSource {
        label: label.to_owned(),
        bytes: slurp(filename),
        encoding: TextEncoding::Utf8,
    }
}

fn load() -> Vec<Corpus> {
    let sources = vec![
        source("alpha", "sample-data/alpha.txt"),
        source("beta", "sample-data/beta.txt"),
    ];
    let mut corpora: Vec<Corpus> = parallel::build_corpora(sources)
        .into_iter()
        .map(|outcome| outcome.result.unwrap())
        .collect();
    corpora.sort_by(|a, b| a.label().cmp(&b.label()));
    corpora
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|&w| w.to_owned()).collect()
}

#[test]
fn test_corpus_stats() {
    init();
    let corpora = load();
    assert_eq!(corpora.len(), 2);

    let alpha = &corpora[0];
    assert_eq!(alpha.label(), Some("alpha"));
    assert_eq!(alpha.sentence_count(), 2);
    assert_eq!(alpha.text_length(), 9);
    assert_eq!(alpha.vocabulary().type_count(), 7);
    assert_eq!(alpha.frequency("the"), 3);
    assert_eq!(alpha.frequency("barked"), 1);
    assert_eq!(alpha.frequency("fish"), 0);
    assert_eq!(alpha.vocabulary_diversity().unwrap(), 7.0 / 9.0);

    let beta = &corpora[1];
    assert_eq!(beta.label(), Some("beta"));
    assert_eq!(beta.sentence_count(), 2);
    assert_eq!(beta.text_length(), 10);
    assert_eq!(beta.vocabulary().type_count(), 6);
    assert_eq!(beta.frequency("fish"), 3);
    assert_eq!(beta.vocabulary_diversity().unwrap(), 6.0 / 10.0);
}

#[test]
fn test_analyze() {
    init();
    let corpora = load();
    let driver_args = DriverArgs {
        top: 3,
        encoding: TextEncoding::Utf8,
    };
    let output = driver::analyze(&driver_args, &corpora).unwrap();
    let expected = Output {
        corpora: vec![
            CorpusStats {
                label: Some("alpha".to_owned()),
                words: 9,
                sentences: 2,
                types: 7,
                diversity: Some(7.0 / 9.0),
                top_words: owned(&["the", "barked", "cat"]),
            },
            CorpusStats {
                label: Some("beta".to_owned()),
                words: 10,
                sentences: 2,
                types: 6,
                diversity: Some(6.0 / 10.0),
                top_words: owned(&["fish", "the", "and"]),
            },
        ],
        distinctive_top_words: vec![
            WordList {
                label: Some("alpha".to_owned()),
                words: owned(&["barked", "cat"]),
            },
            WordList {
                label: Some("beta".to_owned()),
                words: owned(&["fish", "and"]),
            },
        ],
        commonly_favored_words: vec![
            WordList {
                label: Some("alpha".to_owned()),
                words: owned(&["the"]),
            },
            WordList {
                label: Some("beta".to_owned()),
                words: owned(&["the"]),
            },
        ],
        top: 3,
        encoding: TextEncoding::Utf8,
    };
    assert_eq!(output, expected);
}

#[test]
fn test_output_round_trips_as_json() {
    init();
    let corpora = load();
    let driver_args = DriverArgs {
        top: 3,
        encoding: TextEncoding::Utf8,
    };
    let output = driver::analyze(&driver_args, &corpora).unwrap();
    let json = serde_json::to_string_pretty(&output).unwrap();
    let parsed: Output = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
}

#[test]
fn test_partial_failure_keeps_batch_alive() {
    init();
    let sources = vec![
        source("alpha", "sample-data/alpha.txt"),
        CorpusSource {
            label: "broken".to_owned(),
            bytes: vec![0xff, 0xfe, 0xfd],
            encoding: TextEncoding::Utf8,
        },
    ];
    let mut outcomes = parallel::build_corpora(sources);
    outcomes.sort_by(|a, b| a.label.cmp(&b.label));
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());
}
