use crate::batch::BatchCursor;
use crate::config::ParallelConfig;
use crate::counts::{merge_all, CountMap, WordCounts};
use crate::error::{Result, WordCountError};
use crate::metrics::{PercentileTracker, RunReport, WorkerStats};
use crate::strategy::{read_lines, CountStrategy};
use crate::tokenize::LineTokenizer;
use log::{debug, info};
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// State shared by every worker of one run. All of it is read-only or atomic.
struct Shared<'a> {
    lines: &'a [Vec<u8>],
    cursor: BatchCursor,
    total_tokens: AtomicU64,
    batch_latency: PercentileTracker,
}

/// Thread-parallel counter.
///
/// Lines are materialized first, then a fixed pool of scoped worker threads pulls batches
/// from a shared cursor. Each worker counts into a private map; the maps are merged on the
/// calling thread once every worker has joined.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelCounter {
    config: ParallelConfig,
}

impl ParallelCounter {
    /// Create a counter with the given configuration
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Count already materialized lines
    pub fn count_lines(&self, lines: &[Vec<u8>]) -> Result<WordCounts> {
        self.count_lines_with_report(lines)
            .map(|(counts, _)| counts)
    }

    /// Count already materialized lines and report how the work was spread
    pub fn count_lines_with_report(&self, lines: &[Vec<u8>]) -> Result<(WordCounts, RunReport)> {
        let shared = Shared {
            lines,
            cursor: BatchCursor::new(lines.len(), self.config.batch_size()),
            total_tokens: AtomicU64::new(0),
            batch_latency: PercentileTracker::new(),
        };
        debug!(
            "parallel: {} lines in {} batches across {} workers",
            lines.len(),
            shared.cursor.batch_count(),
            self.config.workers()
        );

        let count_start = Instant::now();
        let results = crossbeam::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.config.workers());
            for worker_id in 0..self.config.workers() {
                let shared = &shared;
                let spawned = scope
                    .builder()
                    .name(format!("wordfreq-worker-{}", worker_id))
                    .spawn(move |_| run_worker(worker_id, shared));
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        // Let the workers already running drain out before reporting.
                        shared.cursor.close();
                        for handle in handles {
                            let _ = handle.join();
                        }
                        return Err(spawn_error(worker_id, e));
                    }
                }
            }

            handles
                .into_iter()
                .enumerate()
                .map(|(worker_id, handle)| handle.join().map_err(|_| join_error(worker_id)))
                .collect::<Result<Vec<_>>>()
        })
        .map_err(|_| WordCountError::ThreadError("worker scope panicked".into()))??;
        let count = count_start.elapsed();

        let merge_start = Instant::now();
        let (maps, workers): (Vec<CountMap>, Vec<WorkerStats>) = results.into_iter().unzip();
        let total_tokens = shared.total_tokens.load(Ordering::Acquire);
        let counts = WordCounts::from_parts(merge_all(maps), total_tokens);
        let merge = merge_start.elapsed();

        let report = RunReport {
            lines: lines.len(),
            total_tokens,
            read: Duration::ZERO,
            count,
            merge,
            workers,
            batch_p50_us: shared.batch_latency.p50_us(),
            batch_p95_us: shared.batch_latency.p95_us(),
            batch_p99_us: shared.batch_latency.p99_us(),
        };
        Ok((counts, report))
    }

    /// Read every line from `reader`, then count in parallel
    pub fn count_reader_with_report(
        &self,
        reader: &mut dyn BufRead,
    ) -> Result<(WordCounts, RunReport)> {
        let read_start = Instant::now();
        let lines = read_lines(reader)?;
        let read = read_start.elapsed();

        let (counts, mut report) = self.count_lines_with_report(&lines)?;
        report.read = read;
        Ok((counts, report))
    }
}

fn spawn_error(worker_id: usize, source: io::Error) -> WordCountError {
    WordCountError::ThreadError(format!("failed to spawn worker {}: {}", worker_id, source))
}

fn join_error(worker_id: usize) -> WordCountError {
    WordCountError::ThreadError(format!("worker {} panicked", worker_id))
}

/// Pull batches until the cursor runs dry, counting into a private map
fn run_worker(worker_id: usize, shared: &Shared<'_>) -> (CountMap, WorkerStats) {
    let started = Instant::now();
    let mut local = WordCounts::new();
    let mut tokenizer = LineTokenizer::new();
    let mut stats = WorkerStats {
        worker_id,
        ..Default::default()
    };

    while let Some(range) = shared.cursor.claim() {
        let batch_start = Instant::now();
        stats.lines += range.len();
        for line in &shared.lines[range] {
            local.record_line(&mut tokenizer, line);
        }
        stats.batches += 1;
        shared
            .batch_latency
            .record(batch_start.elapsed().as_nanos() as u64);
    }

    stats.tokens = local.total_tokens();
    stats.busy = started.elapsed();
    shared.total_tokens.fetch_add(stats.tokens, Ordering::AcqRel);

    debug!(
        "worker {}: {} batches, {} lines, {} tokens, {} distinct",
        worker_id,
        stats.batches,
        stats.lines,
        stats.tokens,
        local.distinct()
    );
    (local.into_counts(), stats)
}

impl CountStrategy for ParallelCounter {
    fn count_reader(&self, reader: &mut dyn BufRead) -> Result<WordCounts> {
        let (counts, report) = self.count_reader_with_report(reader)?;
        info!("parallel: {}", report.format());
        Ok(counts)
    }

    fn name(&self) -> &str {
        "parallel"
    }
}
