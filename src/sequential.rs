use crate::counts::{WordCounts, INITIAL_CAPACITY};
use crate::error::Result;
use crate::strategy::{next_line, CountStrategy};
use crate::tokenize::LineTokenizer;
use log::info;
use std::io::BufRead;
use std::time::Instant;

/// Streaming single-threaded counter.
///
/// Lines are read and counted one at a time; the file is never held in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialCounter;

impl SequentialCounter {
    pub fn new() -> Self {
        Self
    }
}

impl CountStrategy for SequentialCounter {
    fn count_reader(&self, reader: &mut dyn BufRead) -> Result<WordCounts> {
        let start = Instant::now();
        let mut counts = WordCounts::with_capacity(INITIAL_CAPACITY);
        let mut tokenizer = LineTokenizer::new();
        let mut line = Vec::new();
        let mut lines = 0usize;

        while next_line(reader, &mut line)? {
            counts.record_line(&mut tokenizer, &line);
            lines += 1;
        }

        info!(
            "sequential: {} lines, {} tokens, {} distinct in {:.3}s",
            lines,
            counts.total_tokens(),
            counts.distinct(),
            start.elapsed().as_secs_f64()
        );
        Ok(counts)
    }

    fn name(&self) -> &str {
        "sequential"
    }
}
