use std::collections::HashMap;

use crate::fragment::TextFragment;
use crate::token::tokens;

/// Word -> occurrence count, produced per fragment or after merge.
pub type FrequencyMap = HashMap<String, u64>;

/// Count token occurrences in one fragment.
///
/// Pure function of its input: touches no shared state, so disjoint
/// fragments may be counted concurrently.
pub fn count_fragment(fragment: &TextFragment<'_>) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for token in tokens(fragment.text()) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
