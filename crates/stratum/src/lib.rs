//! Stratum: low-level memory and sorting utilities.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Stratum sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use stratum::prelude::*;
//!
//! // The caller owns the backing buffer; the arena only borrows it.
//! let mut backing = vec![0u8; 1024];
//! let mut arena = Arena::new(&mut backing);
//!
//! let name = arena.alloc_str("shader.vert").unwrap();
//! {
//!     let mut scratch = arena.begin_temporary();
//!     let tmp = scratch.alloc(512).unwrap();
//!     scratch.bytes_mut(tmp)[0] = 1;
//! } // scratch space released here
//! assert_eq!(arena.str(name).unwrap(), "shader.vert");
//!
//! let mut list = GrowableList::new();
//! for v in [5, 3, 8, 1, 9, 2] {
//!     list.push(v).unwrap();
//! }
//! Sorter::seeded(SortAlgorithm::Merge, 42).sort(list.as_mut_slice());
//! assert_eq!(list.as_slice(), &[1, 2, 3, 5, 8, 9]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stratum-core` | Alignment math, error types |
//! | [`arena`] | `stratum-arena` | Arena, allocation handles, temporary scopes, loaders |
//! | [`list`] | `stratum-list` | Doubling-capacity growable list |
//! | [`sort`] | `stratum-sort` | Quicksort, mergesort, `Sorter` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Alignment math and error types (`stratum-core`).
pub use stratum_core as types;

/// Bump arena over a caller-owned buffer (`stratum-arena`).
///
/// [`arena::Arena`] hands out zeroed, aligned blocks as
/// [`arena::Allocation`] handles; [`arena::TemporaryScope`] releases
/// everything allocated through it when dropped.
pub use stratum_arena as arena;

/// Growable list with doubling capacity (`stratum-list`).
pub use stratum_list as list;

/// In-place sorting (`stratum-sort`).
///
/// [`sort::quick_sort`] takes an explicit generator for pivot selection;
/// [`sort::merge_sort`] is stable.
pub use stratum_sort as sort;

/// Common imports for typical Stratum usage.
///
/// ```rust
/// use stratum::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use stratum_arena::{Allocation, Arena, ArenaConfig, TemporaryScope};

    // Errors and alignment
    pub use stratum_core::{align_forward, is_power_of_two, ArenaError, ListError};

    // Collections
    pub use stratum_list::GrowableList;

    // Sorting
    pub use stratum_sort::{merge_sort, quick_sort, quick_sort_seeded, SortAlgorithm, Sorter};
}
