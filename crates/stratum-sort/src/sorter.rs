//! Algorithm selection with an injected pivot source.

use std::cmp::Ordering;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::merge::merge_sort_by;
use crate::quick::quick_sort_by;

/// Which sorting algorithm a [`Sorter`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Randomized Lomuto quicksort. In place, not stable.
    #[default]
    Quick,
    /// Top-down mergesort. Stable, allocates scratch per merge.
    Merge,
}

impl SortAlgorithm {
    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Merge)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quick => write!(f, "quicksort"),
            Self::Merge => write!(f, "mergesort"),
        }
    }
}

/// A sorting algorithm plus the generator that feeds quicksort pivots.
///
/// The generator is carried across calls, so a `Sorter` built from a fixed
/// seed produces the same sequence of results every run.
pub struct Sorter<R = ChaCha8Rng> {
    algorithm: SortAlgorithm,
    rng: R,
}

impl Sorter<ChaCha8Rng> {
    /// Sorter with a ChaCha8 generator seeded from `seed`.
    pub fn seeded(algorithm: SortAlgorithm, seed: u64) -> Self {
        Self::new(algorithm, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sorter<R> {
    /// Sorter drawing pivots from `rng`.
    pub fn new(algorithm: SortAlgorithm, rng: R) -> Self {
        Self { algorithm, rng }
    }

    /// The configured algorithm.
    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Sort `items` ascending.
    ///
    /// `T: Clone` is required because the algorithm is picked at run time
    /// and [`merge_sort`](crate::merge_sort) clones into scratch runs. The
    /// quicksort path never clones; call [`quick_sort`](crate::quick_sort)
    /// directly for types that are not `Clone`.
    pub fn sort<T: Ord + Clone>(&mut self, items: &mut [T]) {
        self.sort_by(items, T::cmp);
    }

    /// Sort `items` with a comparator. Same `T: Clone` bound as
    /// [`sort`](Self::sort).
    pub fn sort_by<T, F>(&mut self, items: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!(algorithm = %self.algorithm, len = items.len(), "sorting");
        match self.algorithm {
            SortAlgorithm::Quick => quick_sort_by(items, &mut self.rng, compare),
            SortAlgorithm::Merge => merge_sort_by(items, compare),
        }
    }

    /// Sort `items` comparing by a key.
    pub fn sort_by_key<T, K, F>(&mut self, items: &mut [T], mut key: F)
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(items, |a, b| key(a).cmp(&key(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_test_utils::{is_sorted, random_ints, TaggedKey};

    #[test]
    fn both_algorithms_sort_reference_input() {
        for algorithm in [SortAlgorithm::Quick, SortAlgorithm::Merge] {
            let mut v = [5, 3, 8, 1, 9, 2];
            Sorter::seeded(algorithm, 7).sort(&mut v);
            assert_eq!(v, [1, 2, 3, 5, 8, 9], "{algorithm}");
        }
    }

    #[test]
    fn stability_flag() {
        assert!(SortAlgorithm::Merge.is_stable());
        assert!(!SortAlgorithm::Quick.is_stable());
        assert_eq!(SortAlgorithm::default(), SortAlgorithm::Quick);
    }

    #[test]
    fn merge_sorter_is_stable() {
        let mut v = vec![
            TaggedKey::new(3, "a"),
            TaggedKey::new(1, "b"),
            TaggedKey::new(3, "c"),
        ];
        Sorter::seeded(SortAlgorithm::Merge, 0).sort_by_key(&mut v, |t| t.key);
        let tags: Vec<_> = v.iter().map(|t| t.tag).collect();
        assert_eq!(tags, ["b", "a", "c"]);
    }

    #[test]
    fn reused_sorter_handles_many_inputs() {
        let mut sorter = Sorter::seeded(SortAlgorithm::Quick, 1);
        for seed in 0..20 {
            let mut v = random_ints(seed, 64, 10);
            sorter.sort(&mut v);
            assert!(is_sorted(&v));
        }
    }

    #[test]
    fn custom_rng_is_accepted() {
        let rng = stratum_test_utils::seeded_rng(5);
        let mut sorter = Sorter::new(SortAlgorithm::Quick, rng);
        let mut v = [3, 2, 1];
        sorter.sort(&mut v);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(sorter.algorithm(), SortAlgorithm::Quick);
    }
}
