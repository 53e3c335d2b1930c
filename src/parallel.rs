//! Building many corpora in parallel.

use crate::corpus::{Concordance, Corpus};
use crate::errors::Result;
use crate::tokenize::TextEncoding;
use crossbeam_channel::TryRecvError;
use log::{debug, trace};
use std::thread;

/// One text to be loaded. The label is chosen by the caller, e.g. from
/// the source file name.
pub struct CorpusSource {
    pub label: String,
    pub bytes: Vec<u8>,
    pub encoding: TextEncoding,
}

/// The result of loading one source. A failed source reports its error
/// here without affecting the rest of the batch.
pub struct CorpusOutcome {
    pub label: String,
    pub result: Result<Corpus>,
}

/// Build one corpus per source on a pool of worker threads.
///
/// Sources share no state; each worker decodes, tokenizes and indexes
/// independently and sends its outcome back over a channel that only
/// the coordinating thread drains. Outcomes arrive in completion order,
/// not request order; sort by label if order matters.
pub fn build_corpora(sources: Vec<CorpusSource>) -> Vec<CorpusOutcome> {
    let total = sources.len();
    let (s1, r1) = crossbeam_channel::unbounded();
    for source in sources {
        s1.send(source).unwrap();
    }
    drop(s1);
    let nthreads = num_cpus::get().min(total.max(1));
    trace!("loading {total} corpora, {nthreads} threads");
    let mut outcomes = Vec::with_capacity(total);
    thread::scope(|scope| {
        let (s2, r2) = crossbeam_channel::unbounded();
        for _ in 0..nthreads {
            let r1 = r1.clone();
            let s2 = s2.clone();
            scope.spawn(move || {
                loop {
                    match r1.try_recv() {
                        Ok(source) => {
                            s2.send(build_one(source)).unwrap();
                        }
                        Err(TryRecvError::Empty) => unreachable!(),
                        Err(TryRecvError::Disconnected) => break,
                    }
                }
            });
        }
        drop(s2);
        while let Ok(outcome) = r2.recv() {
            outcomes.push(outcome);
        }
    });
    outcomes
}

fn build_one(source: CorpusSource) -> CorpusOutcome {
    let result = Corpus::from_bytes(&source.bytes, source.encoding).map(|mut corpus| {
        corpus.set_label(&source.label);
        corpus
    });
    match &result {
        Ok(corpus) => debug!(
            "{}: {} words, {} sentences",
            source.label,
            corpus.text_length(),
            corpus.sentence_count()
        ),
        Err(e) => debug!("{}: {e}", source.label),
    }
    CorpusOutcome {
        label: source.label,
        result,
    }
}
