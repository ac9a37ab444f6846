//! Word frequency counter over stdin
//!
//! Reads every line from stdin, counts words with the parallel counter and prints the top 10.
//!
//! Usage: cargo run --example word_count --release < book.txt
//!        RUST_LOG=debug shows per-worker statistics.

use std::io;
use wordfreq::{top_k, ParallelConfig, ParallelCounter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let workers = std::thread::available_parallelism().map_or(2, |n| n.get());
    let counter = ParallelCounter::new(ParallelConfig::builder().workers(workers).build()?);

    let stdin = io::stdin();
    let (counts, report) = counter.count_reader_with_report(&mut stdin.lock())?;

    println!("Word Frequency Counter");
    println!("======================");
    println!("{}", report.format());
    println!();
    println!(
        "{} tokens, {} distinct. Top 10 words:",
        counts.total_tokens(),
        counts.distinct()
    );
    for (i, entry) in top_k(counts.counts(), 10).iter().enumerate() {
        println!("{:2}. {} ({})", i + 1, entry.word, entry.count);
    }

    Ok(())
}
