//! In-place sorting over slices of ordered elements.
//!
//! Two independent algorithms, both ascending:
//!
//! - [`quick_sort`]: randomized-pivot Lomuto quicksort. In place, not
//!   stable, average O(n log n). The pivot source is an explicit
//!   [`rand::Rng`], so runs are reproducible under a fixed seed.
//! - [`merge_sort`]: top-down mergesort. Stable, O(n log n) worst case,
//!   O(n) scratch per merge.
//!
//! [`Sorter`] bundles an algorithm choice with a pivot generator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod merge;
pub mod quick;
pub mod sorter;

pub use merge::{merge_sort, merge_sort_by, merge_sort_by_key};
pub use quick::{quick_sort, quick_sort_by, quick_sort_by_key, quick_sort_seeded};
pub use sorter::{SortAlgorithm, Sorter};
