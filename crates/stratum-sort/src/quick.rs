//! Randomized Lomuto quicksort.

use std::cmp::Ordering;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sort `items` ascending, drawing pivots from `rng`.
///
/// Not stable. Recursion always descends into the smaller partition, so
/// stack depth stays O(log n) even when the pivots are unlucky.
pub fn quick_sort<T: Ord, R: Rng>(items: &mut [T], rng: &mut R) {
    quick_sort_by(items, rng, T::cmp);
}

/// [`quick_sort`] with a pivot generator seeded from `seed`.
pub fn quick_sort_seeded<T: Ord>(items: &mut [T], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    quick_sort(items, &mut rng);
}

/// [`quick_sort`] with a comparator.
pub fn quick_sort_by<T, R, F>(items: &mut [T], rng: &mut R, mut compare: F)
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(items, rng, &mut compare);
}

/// [`quick_sort`] comparing by a key.
pub fn quick_sort_by_key<T, K, R, F>(items: &mut [T], rng: &mut R, mut key: F)
where
    K: Ord,
    R: Rng,
    F: FnMut(&T) -> K,
{
    quick_sort_by(items, rng, |a, b| key(a).cmp(&key(b)));
}

fn sort_range<T, R, F>(items: &mut [T], rng: &mut R, compare: &mut F)
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = items;
    while items.len() > 1 {
        let pivot = partition(items, rng, compare);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_range(left, rng, compare);
            items = right;
        } else {
            sort_range(right, rng, compare);
            items = left;
        }
    }
}

/// Lomuto partition around a random pivot. Returns the pivot's final index.
///
/// Requires `items.len() >= 2`.
fn partition<T, R, F>(items: &mut [T], rng: &mut R, compare: &mut F) -> usize
where
    R: Rng,
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let pivot = rng.random_range(0..high);
    items.swap(pivot, high);

    let mut i = 0;
    for j in 0..high {
        if compare(&items[j], &items[high]) != Ordering::Greater {
            items.swap(i, j);
            i += 1;
        }
    }
    items.swap(i, high);
    i
}
