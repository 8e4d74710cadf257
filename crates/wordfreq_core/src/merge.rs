use crate::count::FrequencyMap;

/// Merge partial frequency maps into one by summation.
///
/// Implemented as a fold from the empty map; the operation is associative
/// and commutative, so worker completion order never affects the result.
/// Each word's merged count is exactly the sum of its per-fragment counts.
pub fn merge<I>(maps: I) -> FrequencyMap
where
    I: IntoIterator<Item = FrequencyMap>,
{
    maps.into_iter().fold(FrequencyMap::new(), |mut acc, map| {
        for (word, count) in map {
            *acc.entry(word).or_insert(0) += count;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::merge;
    use crate::count::FrequencyMap;

    fn map(pairs: &[(&str, u64)]) -> FrequencyMap {
        pairs
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    #[test]
    fn sums_counts_across_maps() {
        let merged = merge(vec![
            map(&[("the", 2), ("fox", 1)]),
            map(&[("the", 1), ("dog", 4)]),
        ]);
        assert_eq!(merged, map(&[("the", 3), ("fox", 1), ("dog", 4)]));
    }

    #[test]
    fn merging_a_single_map_is_identity() {
        let input = map(&[("a", 1), ("b", 2)]);
        assert_eq!(merge(vec![input.clone()]), input);
    }

    #[test]
    fn merge_is_commutative() {
        let a = map(&[("x", 1), ("y", 2)]);
        let b = map(&[("y", 3), ("z", 5)]);
        assert_eq!(
            merge(vec![a.clone(), b.clone()]),
            merge(vec![b, a])
        );
    }

    #[test]
    fn merge_is_associative() {
        let a = map(&[("x", 1)]);
        let b = map(&[("x", 2), ("y", 1)]);
        let c = map(&[("z", 7)]);
        let left = merge(vec![merge(vec![a.clone(), b.clone()]), c.clone()]);
        let right = merge(vec![a, merge(vec![b, c])]);
        assert_eq!(left, right);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(merge(Vec::new()).is_empty());
    }
}
