use parking_lot::Mutex;
use std::time::Duration;

/// Percentile tracker over batch processing times.
///
/// Workers record one sample per batch, so the lock is taken once per batch and never inside
/// the per-line loop.
#[derive(Debug, Default)]
pub struct PercentileTracker {
    samples: Mutex<Vec<u64>>,
}

impl PercentileTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement (in nanoseconds)
    pub fn record(&self, nanos: u64) {
        self.samples.lock().push(nanos);
    }

    /// Number of recorded measurements
    pub fn count(&self) -> usize {
        self.samples.lock().len()
    }

    /// Percentile `p` (0.0 to 1.0) in microseconds; zero when nothing was recorded
    pub fn percentile_us(&self, p: f64) -> f64 {
        let mut sorted = self.samples.lock().clone();
        if sorted.is_empty() {
            return 0.0;
        }
        sorted.sort_unstable();

        let idx = ((sorted.len() as f64 * p).ceil() as usize)
            .saturating_sub(1)
            .min(sorted.len() - 1);
        sorted[idx] as f64 / 1000.0
    }

    /// Calculate the p50 (median) batch latency in microseconds
    pub fn p50_us(&self) -> f64 {
        self.percentile_us(0.50)
    }

    /// Calculate the p95 (95th percentile) batch latency in microseconds
    pub fn p95_us(&self) -> f64 {
        self.percentile_us(0.95)
    }

    /// Calculate the p99 (99th percentile) batch latency in microseconds
    pub fn p99_us(&self) -> f64 {
        self.percentile_us(0.99)
    }
}

/// What one worker did during a parallel run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub worker_id: usize,
    pub batches: usize,
    pub lines: usize,
    pub tokens: u64,
    pub busy: Duration,
}

/// Timing and load-balance summary of one parallel run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub lines: usize,
    pub total_tokens: u64,
    pub read: Duration,
    pub count: Duration,
    pub merge: Duration,
    pub workers: Vec<WorkerStats>,
    pub batch_p50_us: f64,
    pub batch_p95_us: f64,
    pub batch_p99_us: f64,
}

impl RunReport {
    /// Lines counted per second during the counting phase
    pub fn lines_per_sec(&self) -> f64 {
        let secs = self.count.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.lines as f64 / secs
        }
    }

    /// Format the report as a human-readable string
    pub fn format(&self) -> String {
        let mut out = format!(
            "Lines: {}, Tokens: {}, Read: {:.3}s, Count: {:.3}s, Merge: {:.3}s, \
             Throughput: {:.0} lines/s, Batch P50: {:.2}µs, P95: {:.2}µs, P99: {:.2}µs",
            self.lines,
            self.total_tokens,
            self.read.as_secs_f64(),
            self.count.as_secs_f64(),
            self.merge.as_secs_f64(),
            self.lines_per_sec(),
            self.batch_p50_us,
            self.batch_p95_us,
            self.batch_p99_us,
        );
        for worker in &self.workers {
            out.push_str(&format!(
                "\n  Worker {}: batches {}, lines {}, tokens {}, busy {:.3}s",
                worker.worker_id,
                worker.batches,
                worker.lines,
                worker.tokens,
                worker.busy.as_secs_f64()
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_tracker() {
        let tracker = PercentileTracker::new();
        assert_eq!(tracker.p50_us(), 0.0);

        for i in 1..=10 {
            tracker.record(i * 1000); // 1us to 10us in nanos
        }
        assert_eq!(tracker.count(), 10);
        assert_eq!(tracker.p50_us(), 5.0);
        assert_eq!(tracker.p99_us(), 10.0);
        assert!(tracker.p95_us() >= tracker.p50_us());
    }

    #[test]
    fn test_report_format_lists_workers() {
        let report = RunReport {
            lines: 2000,
            total_tokens: 9000,
            count: Duration::from_millis(500),
            workers: vec![
                WorkerStats {
                    worker_id: 0,
                    batches: 1,
                    lines: 1000,
                    tokens: 4500,
                    busy: Duration::from_millis(400),
                },
                WorkerStats {
                    worker_id: 1,
                    batches: 1,
                    lines: 1000,
                    tokens: 4500,
                    busy: Duration::from_millis(450),
                },
            ],
            ..Default::default()
        };

        assert_eq!(report.lines_per_sec(), 4000.0);
        let text = report.format();
        assert!(text.starts_with("Lines: 2000, Tokens: 9000"));
        assert!(text.contains("Worker 0: batches 1, lines 1000"));
        assert!(text.contains("Worker 1:"));
    }
}
