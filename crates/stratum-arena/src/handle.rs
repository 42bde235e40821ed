//! Allocation handles.
//!
//! An [`Allocation`] records where a block lives inside an arena's backing
//! buffer. It carries no borrow, so any number of handles can be held while
//! the arena keeps allocating; the bytes are resolved on demand through
//! [`Arena::bytes`](crate::Arena::bytes) and
//! [`Arena::bytes_mut`](crate::Arena::bytes_mut).

use std::fmt;
use std::ops::Range;

/// Location of a block inside an arena's backing buffer.
///
/// A handle stays structurally valid until the arena is reset or a
/// temporary scope that covers it ends. After that it still resolves, but
/// to bytes that may be handed out again.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Allocation {
    /// Byte offset from the start of the backing buffer.
    pub(crate) offset: usize,
    /// Length of the block in bytes.
    pub(crate) len: usize,
}

impl Allocation {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset from the start of the backing buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the block in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte of the block.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// The block as a byte range of the backing buffer.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation(off={}, len={})", self.offset, self.len)
    }
}
