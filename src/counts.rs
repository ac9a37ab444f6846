use crate::tokenize::LineTokenizer;
use std::collections::HashMap;

/// Token to occurrence count
pub type CountMap = HashMap<String, u32>;

/// Initial capacity for a counting map; avoids early rehashing on real corpora.
pub const INITIAL_CAPACITY: usize = 1 << 16;

/// Add one occurrence of `token` to `counts`.
///
/// Only allocates the first time a token is seen.
#[inline]
pub fn increment(counts: &mut CountMap, token: &str) {
    match counts.get_mut(token) {
        Some(count) => *count = count.saturating_add(1),
        None => {
            counts.insert(token.to_owned(), 1);
        }
    }
}

/// Sum every entry of `source` into `target`.
pub fn merge_into(target: &mut CountMap, source: CountMap) {
    target.reserve(source.len());
    for (token, count) in source {
        let entry = target.entry(token).or_insert(0);
        *entry = entry.saturating_add(count);
    }
}

/// Merge several maps into one, reusing the largest map's allocation as the base.
pub fn merge_all(mut maps: Vec<CountMap>) -> CountMap {
    let largest = maps
        .iter()
        .enumerate()
        .max_by_key(|(_, map)| map.len())
        .map(|(idx, _)| idx);

    let mut merged = match largest {
        Some(idx) => maps.swap_remove(idx),
        None => return CountMap::new(),
    };
    for map in maps {
        merge_into(&mut merged, map);
    }
    merged
}

/// Final result of an aggregation: the counts plus the total number of tokens seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: CountMap,
    total_tokens: u64,
}

impl WordCounts {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result with room for `capacity` distinct tokens
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: CountMap::with_capacity(capacity),
            total_tokens: 0,
        }
    }

    /// Assemble a result from a merged map and a separately accumulated token total
    pub fn from_parts(counts: CountMap, total_tokens: u64) -> Self {
        Self {
            counts,
            total_tokens,
        }
    }

    /// Record one token occurrence
    pub fn record(&mut self, token: &str) {
        increment(&mut self.counts, token);
        self.total_tokens += 1;
    }

    /// Normalize, tokenize and record one raw line. Returns the number of tokens it held.
    pub fn record_line(&mut self, tokenizer: &mut LineTokenizer, line: &[u8]) -> u64 {
        let counts = &mut self.counts;
        let seen = tokenizer.for_each_token(line, |token| increment(counts, token));
        self.total_tokens += seen;
        seen
    }

    /// Occurrences of `token`, zero if never seen
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of tokens recorded
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Borrow the underlying map
    pub fn counts(&self) -> &CountMap {
        &self.counts
    }

    /// Take ownership of the underlying map
    pub fn into_counts(self) -> CountMap {
        self.counts
    }

    /// Sum of all map values; equals `total_tokens()` for any well-formed result
    pub fn sum_of_counts(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u32)]) -> CountMap {
        entries.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn test_record_line_updates_totals() {
        let mut counts = WordCounts::new();
        let mut tokenizer = LineTokenizer::new();
        assert_eq!(counts.record_line(&mut tokenizer, b"the cat and THE hat"), 5);
        assert_eq!(counts.record_line(&mut tokenizer, b"...!"), 0);
        assert_eq!(counts.get("the"), 2);
        assert_eq!(counts.get("dog"), 0);
        assert_eq!(counts.distinct(), 4);
        assert_eq!(counts.total_tokens(), 5);
        assert_eq!(counts.sum_of_counts(), counts.total_tokens());
    }

    #[test]
    fn test_record_single_tokens() {
        let mut counts = WordCounts::with_capacity(4);
        counts.record("a");
        counts.record("a");
        counts.record("b");
        assert_eq!(counts.counts(), &map(&[("a", 2), ("b", 1)]));
        assert_eq!(counts.total_tokens(), 3);
    }

    #[test]
    fn test_merge_into_sums_by_key() {
        let mut target = map(&[("a", 1), ("b", 2)]);
        merge_into(&mut target, map(&[("b", 3), ("c", 4)]));
        assert_eq!(target, map(&[("a", 1), ("b", 5), ("c", 4)]));
    }

    #[test]
    fn test_merge_all() {
        assert!(merge_all(Vec::new()).is_empty());

        let merged = merge_all(vec![
            map(&[("x", 1)]),
            map(&[("x", 2), ("y", 1), ("z", 7)]),
            CountMap::new(),
        ]);
        assert_eq!(merged, map(&[("x", 3), ("y", 1), ("z", 7)]));
    }

    #[test]
    fn test_increment_saturates() {
        let mut counts = map(&[("big", u32::MAX)]);
        increment(&mut counts, "big");
        assert_eq!(counts["big"], u32::MAX);
    }
}
