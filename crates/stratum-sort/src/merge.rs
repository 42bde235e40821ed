//! Top-down stable mergesort.

use std::cmp::Ordering;

/// Sort `items` ascending, keeping equal elements in their original order.
///
/// Each merge copies its two halves into scratch vectors sized to the
/// current partition.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    merge_sort_by(items, T::cmp);
}

/// [`merge_sort`] with a comparator.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(items, &mut compare);
}

/// [`merge_sort`] comparing by a key.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_sort_by(items, |a, b| key(a).cmp(&key(b)));
}

fn sort_range<T, F>(items: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    // Left half is `[0, mid]`, so it is the longer one for odd lengths.
    let mid = (items.len() - 1) / 2;
    let (left, right) = items.split_at_mut(mid + 1);
    sort_range(left, compare);
    sort_range(right, compare);
    merge(items, mid + 1, compare);
}

/// Merge the sorted runs `items[..split]` and `items[split..]`.
fn merge<T, F>(items: &mut [T], split: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = items[..split].to_vec().into_iter().peekable();
    let mut right = items[split..].to_vec().into_iter().peekable();

    for slot in items.iter_mut() {
        let next = match (left.peek(), right.peek()) {
            // Ties go left, which is what keeps the sort stable.
            (Some(l), Some(r)) if compare(l, r) != Ordering::Greater => left.next(),
            (Some(_), Some(_)) => right.next(),
            (Some(_), None) => left.next(),
            (None, _) => right.next(),
        };
        if let Some(value) = next {
            *slot = value;
        }
    }
}
