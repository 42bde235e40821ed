//! The bump-pointer arena.
//!
//! [`Arena`] hands out zero-filled, aligned blocks by advancing a cursor
//! through a borrowed byte buffer. Only the most recent block is tracked
//! (`previous_offset`), which is what makes in-place resize possible.

use std::fmt;
use std::ops::Range;

use stratum_core::{align_forward, is_power_of_two, ArenaError};
use tracing::trace;

use crate::config::ArenaConfig;
use crate::handle::Allocation;
use crate::temporary::TemporaryScope;

/// Bump allocator bound to one caller-owned backing buffer.
///
/// Invariant: `0 <= previous_offset <= current_offset <= capacity()`.
/// `previous_offset` is the start of the most recent allocation and
/// `current_offset` is the next free byte.
///
/// The arena borrows its buffer for `'buf`; the caller allocates and frees
/// it. Not thread-safe: share it across threads only behind a lock.
pub struct Arena<'buf> {
    buffer: &'buf mut [u8],
    previous_offset: usize,
    current_offset: usize,
    default_alignment: usize,
}

impl<'buf> Arena<'buf> {
    /// Create an arena over `buffer` with the default configuration.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        Self {
            buffer,
            previous_offset: 0,
            current_offset: 0,
            default_alignment: ArenaConfig::DEFAULT_ALIGNMENT,
        }
    }

    /// Create an arena over `buffer` with a custom configuration.
    ///
    /// Returns `Err(ArenaError::InvalidConfig)` if `config` does not
    /// validate.
    pub fn with_config(
        buffer: &'buf mut [u8],
        config: ArenaConfig,
    ) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            buffer,
            previous_offset: 0,
            current_offset: 0,
            default_alignment: config.default_alignment,
        })
    }

    /// Allocate `size` zeroed bytes at the default alignment.
    ///
    /// Returns `None` if the buffer has no room.
    pub fn alloc(&mut self, size: usize) -> Option<Allocation> {
        self.alloc_aligned(size, self.default_alignment)
    }

    /// Allocate `size` zeroed bytes whose absolute address is a multiple
    /// of `align`.
    ///
    /// Returns `None` if the buffer has no room; the arena is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `align` is zero or not a power of two.
    pub fn alloc_aligned(&mut self, size: usize, align: usize) -> Option<Allocation> {
        self.try_alloc_aligned(size, align).ok()
    }

    /// [`alloc`](Self::alloc), reporting exhaustion as an error.
    pub fn try_alloc(&mut self, size: usize) -> Result<Allocation, ArenaError> {
        self.try_alloc_aligned(size, self.default_alignment)
    }

    /// [`alloc_aligned`](Self::alloc_aligned), reporting exhaustion as
    /// [`ArenaError::CapacityExceeded`].
    pub fn try_alloc_aligned(
        &mut self,
        size: usize,
        align: usize,
    ) -> Result<Allocation, ArenaError> {
        // Alignment applies to the absolute address, not the offset.
        let base = self.buffer.as_ptr() as usize;
        let offset = align_forward(base + self.current_offset, align) - base;

        let end = match offset.checked_add(size) {
            Some(end) if end <= self.buffer.len() => end,
            _ => {
                let remaining = self.remaining();
                trace!(requested = size, remaining, align, "arena exhausted");
                return Err(ArenaError::CapacityExceeded {
                    requested: size,
                    remaining,
                });
            }
        };

        self.previous_offset = offset;
        self.current_offset = end;
        self.buffer[offset..end].fill(0);
        Ok(Allocation::new(offset, size))
    }

    /// Resize `old` to `new_size` bytes at the default alignment.
    ///
    /// See [`resize_aligned`](Self::resize_aligned).
    pub fn resize(&mut self, old: Option<Allocation>, new_size: usize) -> Option<Allocation> {
        self.resize_aligned(old, new_size, self.default_alignment)
    }

    /// Resize a block, in place when possible.
    ///
    /// - `None` or an empty `old` behaves as
    ///   [`alloc_aligned`](Self::alloc_aligned).
    /// - If `old` is the most recent allocation it is resized in place and
    ///   keeps its offset; only a grown tail is zeroed.
    /// - Otherwise a fresh block is allocated and `min(old.len(), new_size)`
    ///   bytes are copied into it. The old block becomes dead space until
    ///   [`free_all`](Self::free_all).
    ///
    /// Returns `None` if the buffer has no room; the arena is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `align` is not a non-zero power of two, or if `old` lies
    /// outside the backing buffer.
    pub fn resize_aligned(
        &mut self,
        old: Option<Allocation>,
        new_size: usize,
        align: usize,
    ) -> Option<Allocation> {
        self.try_resize_aligned(old, new_size, align).ok()
    }

    /// [`resize`](Self::resize), reporting exhaustion as an error.
    pub fn try_resize(
        &mut self,
        old: Option<Allocation>,
        new_size: usize,
    ) -> Result<Allocation, ArenaError> {
        self.try_resize_aligned(old, new_size, self.default_alignment)
    }

    /// [`resize_aligned`](Self::resize_aligned), reporting exhaustion as
    /// [`ArenaError::CapacityExceeded`].
    pub fn try_resize_aligned(
        &mut self,
        old: Option<Allocation>,
        new_size: usize,
        align: usize,
    ) -> Result<Allocation, ArenaError> {
        assert!(
            align != 0 && is_power_of_two(align),
            "alignment must be a non-zero power of two (got {align})"
        );

        let old = match old {
            Some(old) if !old.is_empty() => old,
            _ => return self.try_alloc_aligned(new_size, align),
        };
        let old_range = self.checked_range(old);

        if old.offset == self.previous_offset {
            let end = match old.offset.checked_add(new_size) {
                Some(end) if end <= self.buffer.len() => end,
                _ => {
                    let remaining = self.buffer.len() - old.offset;
                    trace!(
                        requested = new_size,
                        remaining,
                        "in-place resize exhausted arena"
                    );
                    return Err(ArenaError::CapacityExceeded {
                        requested: new_size,
                        remaining,
                    });
                }
            };
            self.current_offset = end;
            if new_size > old.len {
                self.buffer[old_range.end..end].fill(0);
            }
            return Ok(Allocation::new(old.offset, new_size));
        }

        let fresh = self.try_alloc_aligned(new_size, align)?;
        let copy_len = old.len.min(new_size);
        let copy_from = old_range.start..old_range.start + copy_len;
        self.buffer.copy_within(copy_from, fresh.offset);
        trace!(
            from = old.offset,
            to = fresh.offset,
            copied = copy_len,
            "resize moved allocation"
        );
        Ok(fresh)
    }

    /// Release every allocation at once.
    ///
    /// Memory is not zeroed here; the next allocations zero on demand.
    pub fn free_all(&mut self) {
        trace!(released = self.current_offset, "arena reset");
        self.previous_offset = 0;
        self.current_offset = 0;
    }

    /// Open a temporary scope. Everything allocated through the returned
    /// guard is released when it is dropped or [ended](TemporaryScope::end).
    pub fn begin_temporary(&mut self) -> TemporaryScope<'_, 'buf> {
        TemporaryScope::new(self)
    }

    /// Bytes of a block.
    ///
    /// # Panics
    ///
    /// Panics if `alloc` lies outside the backing buffer.
    pub fn bytes(&self, alloc: Allocation) -> &[u8] {
        let range = self.checked_range(alloc);
        &self.buffer[range]
    }

    /// Mutable bytes of a block.
    ///
    /// # Panics
    ///
    /// Panics if `alloc` lies outside the backing buffer.
    pub fn bytes_mut(&mut self, alloc: Allocation) -> &mut [u8] {
        let range = self.checked_range(alloc);
        &mut self.buffer[range]
    }

    /// Start offset of the most recent allocation.
    pub fn previous_offset(&self) -> usize {
        self.previous_offset
    }

    /// Offset of the next free byte.
    pub fn offset(&self) -> usize {
        self.current_offset
    }

    /// Length of the backing buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes between the cursor and the end of the buffer, before any
    /// alignment padding.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.current_offset
    }

    /// Alignment used by [`alloc`](Self::alloc) and [`resize`](Self::resize).
    pub fn default_alignment(&self) -> usize {
        self.default_alignment
    }

    /// Put both offsets back to a previously captured state.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot does not fit this arena's buffer, which
    /// happens when the arena behind a [`TemporaryScope`] was replaced.
    pub(crate) fn restore(&mut self, previous_offset: usize, current_offset: usize) {
        assert!(
            previous_offset <= current_offset && current_offset <= self.buffer.len(),
            "restored offsets ({previous_offset}, {current_offset}) are past the end of the \
             arena buffer (capacity {})",
            self.buffer.len()
        );
        self.previous_offset = previous_offset;
        self.current_offset = current_offset;
    }

    fn checked_range(&self, alloc: Allocation) -> Range<usize> {
        let in_bounds = alloc
            .offset
            .checked_add(alloc.len)
            .is_some_and(|end| alloc.offset < self.buffer.len() && end <= self.buffer.len());
        assert!(
            in_bounds || (alloc.is_empty() && alloc.offset == self.buffer.len()),
            "{alloc} is out of bounds of the arena buffer (capacity {})",
            self.buffer.len()
        );
        alloc.range()
    }
}

impl fmt::Debug for Arena<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.buffer.len())
            .field("previous_offset", &self.previous_offset)
            .field("current_offset", &self.current_offset)
            .field("default_alignment", &self.default_alignment)
            .finish()
    }
}
