//! The list type and its growth policy.

use std::slice;

use stratum_core::ListError;
use tracing::{debug, trace};

/// Owned, insertion-ordered list of `T` with a doubling growth policy.
///
/// Invariant: `len() <= capacity()`, and `capacity()` is
/// `INITIAL_CAPACITY * 2^k` for the smallest `k` that fits every push so
/// far (or zero after [`destroy`](Self::destroy)).
#[derive(Debug)]
pub struct GrowableList<T> {
    data: Vec<T>,
    /// Logical capacity. The backing `Vec` may have reserved more.
    capacity: usize,
}

impl<T> GrowableList<T> {
    /// Capacity of a freshly created list.
    pub const INITIAL_CAPACITY: usize = 16;

    /// Create an empty list with room for
    /// [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY) elements.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(Self::INITIAL_CAPACITY),
            capacity: Self::INITIAL_CAPACITY,
        }
    }

    /// [`new`](Self::new), reporting a failed initial reservation instead of
    /// aborting.
    pub fn try_new() -> Result<Self, ListError> {
        let mut data = Vec::new();
        data.try_reserve_exact(Self::INITIAL_CAPACITY)
            .map_err(|_| ListError::GrowthFailed {
                requested_capacity: Self::INITIAL_CAPACITY,
            })?;
        Ok(Self {
            data,
            capacity: Self::INITIAL_CAPACITY,
        })
    }

    /// Append `value` and return a reference to the stored element.
    ///
    /// Doubles the capacity first if the list is full. If that fails the
    /// list is unchanged, `value` is dropped, and
    /// [`ListError::GrowthFailed`] is returned.
    pub fn push(&mut self, value: T) -> Result<&mut T, ListError> {
        if self.data.len() + 1 > self.capacity {
            self.grow()?;
        }
        let index = self.data.len();
        self.data.push(value);
        Ok(&mut self.data[index])
    }

    /// Element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, or `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the list holds before it must grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of one element in bytes.
    pub const fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// All elements in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements in insertion order, mutably. Useful for sorting in place.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drop every element and release the backing allocation.
    ///
    /// Length and capacity become zero. The list remains usable: the next
    /// push grows it back to [`INITIAL_CAPACITY`](Self::INITIAL_CAPACITY).
    pub fn destroy(&mut self) {
        self.data = Vec::new();
        self.capacity = 0;
    }

    fn grow(&mut self) -> Result<(), ListError> {
        let requested_capacity = match self.capacity {
            0 => Self::INITIAL_CAPACITY,
            cap => cap.checked_mul(2).ok_or(ListError::GrowthFailed {
                requested_capacity: usize::MAX,
            })?,
        };
        let additional = requested_capacity - self.data.len();
        if let Err(err) = self.data.try_reserve_exact(additional) {
            debug!(requested_capacity, %err, "list growth failed");
            return Err(ListError::GrowthFailed { requested_capacity });
        }
        trace!(from = self.capacity, to = requested_capacity, "list grew");
        self.capacity = requested_capacity;
        Ok(())
    }
}

// The clone reserves the full logical capacity, so pushes below it never
// reallocate.
impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
