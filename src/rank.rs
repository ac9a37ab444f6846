use crate::counts::CountMap;
use std::cmp::Ordering;

/// One line of the ranked output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u32,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count descending, then word ascending. Keys are unique, so this is a total order.
fn by_rank(a: &(&String, u32), b: &(&String, u32)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Return the `k` most frequent words.
///
/// Output length is `min(k, counts.len())`. Ties on count are broken by byte order of the
/// word, so the result does not depend on map iteration order.
pub fn top_k(counts: &CountMap, k: usize) -> Vec<RankedEntry> {
    if k == 0 || counts.is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<(&String, u32)> = counts.iter().map(|(w, &c)| (w, c)).collect();
    if k < entries.len() {
        entries.select_nth_unstable_by(k - 1, by_rank);
        entries.truncate(k);
    }
    entries.sort_unstable_by(by_rank);

    entries
        .into_iter()
        .map(|(word, count)| RankedEntry::new(word.as_str(), count))
        .collect()
}
