use std::collections::HashMap;

/// Returns the `size` most frequent keys, most frequent first.
///
/// Entries are ordered by count descending; keys with equal counts are
/// ordered by their natural ascending `Ord` order, so the output is fully
/// deterministic regardless of map iteration order. The result is
/// truncated to `min(size, distinct key count)`.
pub fn top_n<T: Ord>(size: usize, frequencies: HashMap<T, u64>) -> Vec<T> {
    let mut entries: Vec<(T, u64)> = frequencies.into_iter().collect();
    entries.sort_by(|(key_a, count_a), (key_b, count_b)| {
        count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
    });

    entries
        .into_iter()
        .take(size)
        .map(|(key, _)| key)
        .collect()
}
