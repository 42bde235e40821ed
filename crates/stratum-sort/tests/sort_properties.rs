//! Property tests: both algorithms produce sorted permutations, and
//! mergesort keeps equal keys in input order.

use proptest::prelude::*;
use stratum_sort::{merge_sort, merge_sort_by_key, quick_sort, quick_sort_seeded};
use stratum_test_utils::{is_permutation, is_sorted, seeded_rng};

proptest! {
    #[test]
    fn quick_sort_yields_sorted_permutation(
        input in proptest::collection::vec(any::<i32>(), 0..400),
        seed in any::<u64>(),
    ) {
        let mut v = input.clone();
        quick_sort(&mut v, &mut seeded_rng(seed));
        prop_assert!(is_sorted(&v));
        prop_assert!(is_permutation(&v, &input));
    }

    #[test]
    fn merge_sort_yields_sorted_permutation(
        input in proptest::collection::vec(any::<i32>(), 0..400),
    ) {
        let mut v = input.clone();
        merge_sort(&mut v);
        prop_assert!(is_sorted(&v));
        prop_assert!(is_permutation(&v, &input));
    }

    #[test]
    fn both_algorithms_agree(
        input in proptest::collection::vec(-20i32..20, 0..200),
        seed in any::<u64>(),
    ) {
        let mut quick = input.clone();
        let mut merge = input.clone();
        quick_sort_seeded(&mut quick, seed);
        merge_sort(&mut merge);
        prop_assert_eq!(quick, merge);
    }

    #[test]
    fn merge_sort_is_stable(
        keys in proptest::collection::vec(0i32..5, 0..200),
    ) {
        // Tag each key with its input position.
        let mut tagged: Vec<(i32, usize)> =
            keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
        merge_sort_by_key(&mut tagged, |&(k, _)| k);
        for pair in tagged.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.0 <= b.0);
            if a.0 == b.0 {
                prop_assert!(a.1 < b.1);
            }
        }
    }
}
