//! Benchmark inputs for the Stratum crates.
//!
//! - [`ARENA_BYTES`]: backing buffer size for arena benchmarks
//! - [`SORT_SIZES`]: input lengths for the sort comparisons
//! - [`sort_input`]: deterministic integer inputs in several shapes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stratum_test_utils::random_ints;

/// Backing buffer size for arena benchmarks: 1 MiB.
pub const ARENA_BYTES: usize = 1 << 20;

/// Input lengths the sort benchmarks sweep.
pub const SORT_SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Shape of a generated sort input.
#[derive(Clone, Copy, Debug)]
pub enum InputShape {
    /// Uniformly random values.
    Random,
    /// Already ascending.
    Sorted,
    /// Descending.
    Reversed,
    /// Few distinct values.
    FewUnique,
}

impl InputShape {
    /// All shapes, in benchmark order.
    pub const ALL: [InputShape; 4] = [
        InputShape::Random,
        InputShape::Sorted,
        InputShape::Reversed,
        InputShape::FewUnique,
    ];

    /// Short name for benchmark IDs.
    pub fn name(self) -> &'static str {
        match self {
            InputShape::Random => "random",
            InputShape::Sorted => "sorted",
            InputShape::Reversed => "reversed",
            InputShape::FewUnique => "few_unique",
        }
    }
}

/// Deterministic input of `len` integers with the given shape.
pub fn sort_input(shape: InputShape, len: usize, seed: u64) -> Vec<i32> {
    match shape {
        InputShape::Random => random_ints(seed, len, i32::MAX),
        InputShape::Sorted => (0..len as i32).collect(),
        InputShape::Reversed => (0..len as i32).rev().collect(),
        InputShape::FewUnique => random_ints(seed, len, 4),
    }
}
