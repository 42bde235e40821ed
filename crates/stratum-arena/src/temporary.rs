//! Stack-discipline temporary allocation.
//!
//! A [`TemporaryScope`] snapshots an arena's offsets on creation and puts
//! them back when it goes out of scope, on every exit path. Allocation
//! inside the scope goes through the guard itself (it derefs to the
//! [`Arena`]), so a nested scope has to borrow the outer guard mutably.
//! That makes out-of-order release a compile error rather than a silent
//! corruption of the arena's offsets.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::arena::Arena;

/// Guard over an [`Arena`] that releases everything allocated since its
/// creation.
///
/// Created by [`Arena::begin_temporary`]. Released bytes are not zeroed;
/// handles into them still resolve but may be handed out again.
#[must_use]
pub struct TemporaryScope<'a, 'buf> {
    arena: &'a mut Arena<'buf>,
    previous_offset: usize,
    current_offset: usize,
    /// Set by [`keep`](Self::keep): skip the restore on drop.
    kept: bool,
}

impl<'a, 'buf> TemporaryScope<'a, 'buf> {
    pub(crate) fn new(arena: &'a mut Arena<'buf>) -> Self {
        Self {
            previous_offset: arena.previous_offset(),
            current_offset: arena.offset(),
            arena,
            kept: false,
        }
    }

    /// End the scope now, releasing everything allocated through it.
    ///
    /// Equivalent to dropping the guard.
    pub fn end(self) {}

    /// Close the scope without releasing anything.
    ///
    /// Allocations made through the guard stay live in the arena, and are
    /// released by whichever enclosing scope or reset comes next.
    pub fn keep(mut self) {
        self.kept = true;
    }

    /// Arena offset captured when the scope began.
    pub fn saved_offset(&self) -> usize {
        self.current_offset
    }
}

impl<'buf> Deref for TemporaryScope<'_, 'buf> {
    type Target = Arena<'buf>;

    fn deref(&self) -> &Self::Target {
        &*self.arena
    }
}

impl DerefMut for TemporaryScope<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.arena
    }
}

impl Drop for TemporaryScope<'_, '_> {
    fn drop(&mut self) {
        if self.kept {
            return;
        }
        trace!(
            released = self.arena.offset().saturating_sub(self.current_offset),
            restored_offset = self.current_offset,
            "temporary scope ended"
        );
        self.arena.restore(self.previous_offset, self.current_offset);
    }
}
