use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cliclack::log;
use concord::compare;
use concord::corpus::{Concordance, Corpus};
use concord::parallel::{self, CorpusSource};
use concord::tokenize;
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// Explore corpus statistics interactively
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input files (plain text)
    #[arg(required = true)]
    infiles: Vec<String>,
    /// Text encoding of the input files
    #[arg(long, default_value = "utf-8")]
    encoding: String,
    /// Number of top-ranked words to report and compare
    #[arg(short, long, default_value_t = 20)]
    top: usize,
}

#[derive(Clone, PartialEq, Eq)]
enum Action {
    TextLengths,
    Diversity,
    SentenceLengths,
    WordLengths,
    TopWords,
    Spectrum,
    WordsAtFrequency,
    Distinctive,
    Favored,
    Quit,
}

fn label(corpus: &Corpus) -> &str {
    corpus.label().unwrap_or("?")
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<usize>() as f64 / values.len() as f64
    }
}

fn wrap(line: &str) -> String {
    let options = textwrap::Options::new(70).subsequent_indent(" ");
    textwrap::fill(line, &options)
}

fn text_lengths(corpora: &[Corpus]) -> String {
    corpora
        .iter()
        .map(|c| {
            format!(
                "{}: {} words, {} distinct",
                label(c),
                c.text_length(),
                c.vocabulary().type_count()
            )
        })
        .join("\n")
}

fn diversity(corpora: &[Corpus]) -> String {
    corpora
        .iter()
        .map(|c| match c.vocabulary_diversity() {
            Ok(d) => format!("{}: {:.4}", label(c), d),
            Err(_) => format!("{}: undefined (no words)", label(c)),
        })
        .join("\n")
}

fn sentence_lengths(corpora: &[Corpus]) -> String {
    corpora
        .iter()
        .map(|c| {
            let lengths = c.sentence_lengths();
            format!(
                "{}: {} sentences, {:.2} words on average",
                label(c),
                lengths.len(),
                mean(&lengths)
            )
        })
        .join("\n")
}

fn word_lengths(corpora: &[Corpus]) -> String {
    corpora
        .iter()
        .map(|c| {
            let lengths = c.word_lengths();
            format!("{}: {:.2} characters on average", label(c), mean(&lengths))
        })
        .join("\n")
}

fn top_words(corpora: &[Corpus], top: usize) -> String {
    corpora
        .iter()
        .map(|c| wrap(&format!("{}: {}", label(c), c.top_words(top).join(", "))))
        .join("\n")
}

fn spectrum(corpora: &[Corpus]) -> String {
    corpora
        .iter()
        .map(|c| {
            let line = c
                .frequency_spectrum()
                .iter()
                .map(|(frequency, count)| format!("{frequency}x{count}"))
                .join(", ");
            wrap(&format!("{}: {}", label(c), line))
        })
        .join("\n")
}

fn words_at_frequency(corpora: &[Corpus], frequency: u64) -> String {
    corpora
        .iter()
        .map(|c| {
            let words = c.vocabulary().words_with_frequency(frequency);
            wrap(&format!("{}: {}", label(c), words.join(", ")))
        })
        .join("\n")
}

fn word_list_note(corpora: &[Corpus], lists: Vec<Vec<&str>>) -> String {
    corpora
        .iter()
        .zip(lists)
        .map(|(c, words)| wrap(&format!("{}: {}", label(c), words.join(", "))))
        .join("\n")
}

fn load(args: &Args) -> Result<Vec<Corpus>> {
    let encoding = tokenize::parse_encoding(&args.encoding).map_err(|e| anyhow!(e))?;
    let mut sources = Vec::with_capacity(args.infiles.len());
    for infile in &args.infiles {
        let bytes =
            fs::read(infile).with_context(|| format!("cannot read {infile}"))?;
        let stem = Path::new(infile).file_stem();
        sources.push(CorpusSource {
            label: stem.map_or_else(|| infile.clone(), |s| s.to_string_lossy().into_owned()),
            bytes,
            encoding,
        });
    }
    let mut corpora = Vec::with_capacity(sources.len());
    for outcome in parallel::build_corpora(sources) {
        match outcome.result {
            Ok(corpus) => corpora.push(corpus),
            Err(e) => log::warning(format!("{}: {e}", outcome.label))?,
        }
    }
    corpora.sort_by(|a, b| a.label().cmp(&b.label()));
    Ok(corpora)
}

fn main() -> Result<()> {
    let args = Args::parse();
    cliclack::intro("concord-explore")?;
    log::info(format!("Reading {} files...", args.infiles.len()))?;
    let corpora = load(&args)?;
    if corpora.is_empty() {
        cliclack::outro("No corpora loaded.")?;
        return Ok(());
    }
    log::info(format!("Loaded {} corpora.", corpora.len()))?;
    loop {
        let items = vec![
            (Action::TextLengths, "Text lengths", ""),
            (Action::Diversity, "Vocabulary diversity", ""),
            (Action::SentenceLengths, "Sentence lengths", ""),
            (Action::WordLengths, "Word lengths", ""),
            (Action::TopWords, "Top words", ""),
            (Action::Spectrum, "Frequency spectrum", ""),
            (Action::WordsAtFrequency, "Words at a given frequency", ""),
            (Action::Distinctive, "Distinctive top words", ""),
            (Action::Favored, "Commonly favored words", ""),
            (Action::Quit, "Quit", ""),
        ];
        let choice = cliclack::select("Show what?").items(&items).interact()?;
        match choice {
            Action::Quit => break,
            Action::TextLengths => cliclack::note("Text lengths", text_lengths(&corpora))?,
            Action::Diversity => cliclack::note("Vocabulary diversity", diversity(&corpora))?,
            Action::SentenceLengths => {
                cliclack::note("Sentence lengths", sentence_lengths(&corpora))?
            }
            Action::WordLengths => cliclack::note("Word lengths", word_lengths(&corpora))?,
            Action::TopWords => {
                cliclack::note("Top words", top_words(&corpora, args.top))?
            }
            Action::Spectrum => {
                cliclack::note("Frequency spectrum (frequency x words)", spectrum(&corpora))?
            }
            Action::WordsAtFrequency => {
                let raw: String = cliclack::input("Frequency?")
                    .default_input("1")
                    .interact()?;
                let frequency: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("not a frequency: '{raw}'"))?;
                cliclack::note(
                    format!("Words occurring {frequency} times"),
                    words_at_frequency(&corpora, frequency),
                )?
            }
            Action::Distinctive => {
                let lists = compare::distinctive_top_words(&corpora, args.top);
                cliclack::note("Distinctive top words", word_list_note(&corpora, lists))?
            }
            Action::Favored => {
                let lists = compare::commonly_favored_words(&corpora);
                cliclack::note("Commonly favored words", word_list_note(&corpora, lists))?
            }
        }
    }
    cliclack::outro("Bye!")?;
    Ok(())
}
