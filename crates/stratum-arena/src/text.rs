//! Copying bytes and text into an arena.

use std::str::Utf8Error;

use crate::arena::Arena;
use crate::handle::Allocation;

impl Arena<'_> {
    /// Allocate a block and copy `bytes` into it.
    ///
    /// Returns `None` if the buffer has no room.
    pub fn alloc_copy(&mut self, bytes: &[u8]) -> Option<Allocation> {
        let alloc = self.alloc(bytes.len())?;
        self.bytes_mut(alloc).copy_from_slice(bytes);
        Some(alloc)
    }

    /// Copy `text` into the arena. The handle covers the UTF-8 bytes only.
    pub fn alloc_str(&mut self, text: &str) -> Option<Allocation> {
        self.alloc_copy(text.as_bytes())
    }

    /// Read a block back as text.
    ///
    /// # Panics
    ///
    /// Panics if `alloc` lies outside the backing buffer.
    pub fn str(&self, alloc: Allocation) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.bytes(alloc))
    }
}

/// Length of `text` in bytes, not counting ASCII spaces.
pub fn count_non_space(text: &str) -> usize {
    text.bytes().filter(|&b| b != b' ').count()
}
