//! Word frequency counting for benchmarking sequential against thread-parallel throughput.
//!
//! Both counters share one core: a line normalizer that decides what a word is, a tokenizer,
//! a count map and a deterministic ranker. They differ only in how lines are scheduled.
//!
//! # Features
//!
//! - ASCII normalization that keeps interior apostrophes (`don't`, `rock'n'roll`)
//! - Streaming single-threaded counter that never holds the file in memory
//! - Parallel counter with per-worker private maps and dynamic batch scheduling
//! - Identical results from both counters for any worker count
//! - Per-run timing, per-worker load and batch latency percentiles
//!
//! # Example
//!
//! ```ignore
//! use wordfreq::{top_k, CountStrategy, ParallelConfig, ParallelCounter};
//!
//! let config = ParallelConfig::builder().workers(4).batch_size(1000).build()?;
//! let counts = ParallelCounter::new(config).count_file("corpus.txt".as_ref())?;
//!
//! for entry in top_k(counts.counts(), 10) {
//!     println!("{:>6}  {}", entry.count, entry.word);
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod counts;
pub mod error;
pub mod metrics;
pub mod normalize;
pub mod parallel;
pub mod rank;
pub mod report;
pub mod sequential;
pub mod strategy;
pub mod tokenize;

// Re-exports for convenience
pub use batch::BatchCursor;
pub use config::{
    ParallelConfig, ParallelConfigBuilder, DEFAULT_BATCH_SIZE, DEFAULT_TOP_K, DEFAULT_WORKERS,
};
pub use counts::{CountMap, WordCounts};
pub use error::{Result, WordCountError};
pub use metrics::{RunReport, WorkerStats};
pub use normalize::normalize;
pub use parallel::ParallelCounter;
pub use rank::{top_k, RankedEntry};
pub use sequential::SequentialCounter;
pub use strategy::CountStrategy;
pub use tokenize::{tokenize_line, tokens, LineTokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
