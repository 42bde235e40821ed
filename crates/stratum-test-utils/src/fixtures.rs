//! Reusable sort fixtures.
//!
//! - [`seeded_rng`] — deterministic ChaCha8 generator for pivot selection.
//! - [`TaggedKey`] — key plus tag, for observing stability.
//! - [`is_sorted`] / [`is_permutation`] — output checks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for reproducible sort runs.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` integers in `-range..range` drawn from a seeded generator.
pub fn random_ints(seed: u64, len: usize, range: i32) -> Vec<i32> {
    let mut rng = seeded_rng(seed);
    (0..len).map(|_| rng.random_range(-range..range)).collect()
}

/// A sort key with an attached tag.
///
/// Compare by `key` only (use `sort_by_key(|t| t.key)`); the tag records
/// original position so stability can be checked afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedKey {
    pub key: i32,
    pub tag: &'static str,
}

impl TaggedKey {
    pub fn new(key: i32, tag: &'static str) -> Self {
        Self { key, tag }
    }
}

/// Whether `items` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `items` is non-decreasing by `key`.
pub fn is_sorted_by_key<T, K: PartialOrd>(items: &[T], mut key: impl FnMut(&T) -> K) -> bool {
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}

/// Whether `a` and `b` hold the same multiset of values.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
