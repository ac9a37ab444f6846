use crossbeam::utils::CachePadded;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lock-free dispenser of fixed-size line ranges.
///
/// Workers call [`claim`](BatchCursor::claim) until it returns `None`. Every index in
/// `0..len` is handed out exactly once; the last batch may be short.
#[derive(Debug)]
pub struct BatchCursor {
    next: CachePadded<AtomicUsize>,
    len: usize,
    batch_size: usize,
}

impl BatchCursor {
    /// Create a cursor over `len` items split into batches of `batch_size`
    pub fn new(len: usize, batch_size: usize) -> Self {
        Self {
            next: CachePadded::new(AtomicUsize::new(0)),
            len,
            batch_size: batch_size.clamp(1, len.max(1)),
        }
    }

    /// Claim the next unprocessed range, or `None` once everything is handed out
    pub fn claim(&self) -> Option<Range<usize>> {
        // The cursor never moves once it reaches `len`, so it cannot wrap back into range.
        let start = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next < self.len).then(|| next.saturating_add(self.batch_size))
            })
            .ok()?;
        Some(start..start.saturating_add(self.batch_size).min(self.len))
    }

    /// Stop handing out batches. Ranges already claimed are unaffected.
    pub fn close(&self) {
        self.next.fetch_max(self.len, Ordering::Relaxed);
    }

    /// Total number of items covered
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there is nothing to hand out
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lines per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches the cursor will hand out in total
    pub fn batch_count(&self) -> usize {
        self.len.div_ceil(self.batch_size)
    }
}
