use crate::counts::WordCounts;
use crate::rank::top_k;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Write the run summary and the top `k` words
pub fn write_summary<W: Write>(
    out: &mut W,
    path: &Path,
    counts: &WordCounts,
    k: usize,
) -> io::Result<()> {
    writeln!(out, "File: {}", path.display())?;
    writeln!(out, "Total tokens: {}", counts.total_tokens())?;
    writeln!(out, "Unique words: {}", counts.distinct())?;
    writeln!(out, "Top {} words:", k)?;
    for entry in top_k(counts.counts(), k) {
        writeln!(out, "{:>6}  {}", entry.count, entry.word)?;
    }
    Ok(())
}

/// Write the elapsed wall-clock time, labeled with the strategy name
pub fn write_elapsed<W: Write>(err: &mut W, label: &str, elapsed: Duration) -> io::Result<()> {
    writeln!(err)?;
    writeln!(err, "Elapsed ({}): {:.3} s", label, elapsed.as_secs_f64())
}
