use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use concord::driver::{self, DriverArgs};
use concord::errors::Result;
use concord::parallel::{self, CorpusSource};
use concord::tokenize::{self, TextEncoding};
use log::{error, info};
use std::path::Path;
use std::{fs, io, process};

const DEFAULT_TOP: usize = 20;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input files (plain text)
    #[arg(required = true)]
    infiles: Vec<String>,
    /// Number of top-ranked words to report and compare
    #[arg(short, long, default_value_t = DEFAULT_TOP)]
    top: usize,
    /// Text encoding of the input files
    #[arg(long, default_value = "utf-8")]
    encoding: String,
    /// Output file (JSON); stdout if omitted
    #[arg(short, long)]
    outfile: Option<String>,
    /// Pretty print results
    #[arg(short, long)]
    pretty: bool,
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn label_for(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map_or_else(|| path.to_owned(), |stem| stem.to_string_lossy().into_owned())
}

fn read_sources(infiles: &[String], encoding: TextEncoding) -> Vec<CorpusSource> {
    let mut sources = Vec::with_capacity(infiles.len());
    for infile in infiles {
        info!("read: {infile}");
        match fs::read(infile) {
            Ok(bytes) => sources.push(CorpusSource {
                label: label_for(infile),
                bytes,
                encoding,
            }),
            // a file that cannot be read does not abort the batch
            Err(e) => error!("{infile}: {e}"),
        }
    }
    sources
}

fn process(args: &Args) -> Result<()> {
    let encoding = tokenize::parse_encoding(&args.encoding)?;
    info!("encoding: {encoding}");
    let sources = read_sources(&args.infiles, encoding);
    let mut corpora = Vec::with_capacity(sources.len());
    for outcome in parallel::build_corpora(sources) {
        match outcome.result {
            Ok(corpus) => corpora.push(corpus),
            Err(e) => error!("{}: {e}", outcome.label),
        }
    }
    // outcomes arrive in completion order; sort for stable output
    corpora.sort_by(|a, b| a.label().cmp(&b.label()));
    let driver_args = DriverArgs {
        top: args.top,
        encoding,
    };
    let output = driver::analyze(&driver_args, &corpora)?;
    match &args.outfile {
        Some(outfile) => {
            info!("write: {outfile}");
            let file = fs::File::create(outfile)?;
            let writer = io::BufWriter::new(file);
            if args.pretty {
                serde_json::to_writer_pretty(writer, &output)?;
            } else {
                serde_json::to_writer(writer, &output)?;
            }
        }
        None => {
            let stdout = io::stdout().lock();
            if args.pretty {
                serde_json::to_writer_pretty(stdout, &output)?;
            } else {
                serde_json::to_writer(stdout, &output)?;
            }
            println!();
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
