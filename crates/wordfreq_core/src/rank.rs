use crate::count::FrequencyMap;

/// One (word, count) pair of a ranked result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Select the `k` highest-count entries, returned ascending by count
/// (lowest of the top-K first, highest last).
///
/// The ascending order is deliberate: it matches how the chart sink draws
/// rows bottom-up. Ties among equal counts are broken consistently within
/// a call but are otherwise unspecified; callers must not rely on tie
/// order across runs.
pub fn top_k(counts: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .map(|(word, count)| RankedEntry {
            word: word.clone(),
            count: *count,
        })
        .collect();
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries.reverse();
    entries
}
