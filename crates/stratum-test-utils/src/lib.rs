//! Test fixtures for Stratum development.
//!
//! Provides an over-aligned backing buffer so arena offsets are
//! deterministic in tests, seeded RNG construction, and the
//! [`fixtures`] module of sort inputs and checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    is_permutation, is_sorted, is_sorted_by_key, random_ints, seeded_rng, TaggedKey,
};

/// Backing buffer whose first byte sits on a 64-byte boundary.
///
/// Heap buffers only guarantee the alignment of their element type, so a
/// `Vec<u8>` can start anywhere. Arena tests that assert exact offsets use
/// this instead. Box large sizes to keep them off the stack.
#[repr(C, align(64))]
pub struct AlignedBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> AlignedBuffer<N> {
    pub fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Fill every byte with `value`, to detect missing zero-fills.
    pub fn filled(value: u8) -> Self {
        Self { bytes: [value; N] }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl<const N: usize> Default for AlignedBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
