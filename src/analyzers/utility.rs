//! Counting helpers shared by the aggregators.
//!
//! Every mode in this crate uses one tie-break rule: among values sharing the
//! highest count, the smallest by natural ordering wins.

use std::collections::BTreeMap;

/// Occurrence count per distinct value, keyed in ascending order.
pub fn tally<T: Ord, I: IntoIterator<Item = T>>(values: I) -> BTreeMap<T, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value and its count. `None` for empty input.
pub fn mode<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Option<(T, usize)> {
    let mut best: Option<(T, usize)> = None;
    // ascending key order, so only a strictly larger count replaces the current best
    for (value, count) in tally(values) {
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best
}

/// Counts per distinct value, most frequent first, ties in ascending value order.
pub fn value_counts<T: Ord, I: IntoIterator<Item = T>>(values: I) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = tally(values).into_iter().collect();
    // stable sort keeps the ascending key order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Arithmetic mean of a total over `count` items. `None` when `count` is zero.
pub fn mean(total: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(total / count as f64)
}
