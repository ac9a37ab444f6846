//! Command-line glue shared by the `wordcount-seq` and `wordcount-par` binaries.

use crate::config::{
    parse_top_k, ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_TOP_K, DEFAULT_WORKERS,
};
use crate::error::{Result, WordCountError};
use crate::report::{write_elapsed, write_summary};
use crate::strategy::CountStrategy;
use clap::error::ErrorKind;
use clap::{Args, Parser};
use log::debug;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// Positional arguments common to both binaries
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text file to count
    pub file: PathBuf,

    /// Number of most frequent words to print
    #[arg(value_name = "TOPK", default_value_t = DEFAULT_TOP_K, value_parser = parse_top_k)]
    pub top_k: usize,
}

#[derive(Parser, Debug)]
#[command(
    name = "wordcount-seq",
    version,
    about = "Count word frequencies in a single streaming pass"
)]
pub struct SequentialCli {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Parser, Debug)]
#[command(
    name = "wordcount-par",
    version,
    about = "Count word frequencies with a pool of worker threads"
)]
pub struct ParallelCli {
    #[command(flatten)]
    pub input: InputArgs,

    /// Worker threads
    #[arg(short = 't', long, env = "WORDFREQ_THREADS", default_value_t = DEFAULT_WORKERS)]
    pub threads: usize,

    /// Lines handed to a worker per batch
    #[arg(short = 'b', long, env = "WORDFREQ_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

impl ParallelCli {
    /// Validated counter configuration
    pub fn config(&self) -> Result<ParallelConfig> {
        ParallelConfig::builder()
            .workers(self.threads)
            .batch_size(self.batch_size)
            .build()
    }
}

/// Initialise `env_logger`. Quiet unless `RUST_LOG` asks for more.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parse the command line. Usage errors exit with status 1; `--help`/`--version` exit 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // A failed write here means stderr is gone; the exit status still reports it.
                let _ = e.print();
                process::exit(1);
            }
        },
    }
}

/// Count `input.file` with `strategy`, print the summary to stdout and timing to stderr.
///
/// Nothing reaches stdout unless counting succeeded.
pub fn run(strategy: &dyn CountStrategy, input: &InputArgs) -> Result<()> {
    let start = Instant::now();
    let counts = strategy.count_file(&input.file)?;
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_summary(&mut out, &input.file, &counts, input.top_k)
        .and_then(|()| out.flush())
        .map_err(WordCountError::Output)?;

    write_elapsed(&mut io::stderr().lock(), strategy.name(), elapsed)
        .map_err(WordCountError::Output)
}

/// Report a fatal error and exit with status 1
pub fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        debug!("{:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
