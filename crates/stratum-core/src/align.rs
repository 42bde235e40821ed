//! Power-of-two tests and forward alignment of integer offsets.

/// Default alignment for arena allocations: two pointer widths.
///
/// 16 bytes on 64-bit targets, 8 bytes on 32-bit targets.
pub const DEFAULT_ALIGNMENT: usize = 2 * std::mem::size_of::<usize>();

/// Returns `true` if `x & (x - 1) == 0`.
///
/// Zero passes this test. Callers that need a usable alignment must reject
/// zero separately; [`align_forward`] does.
#[inline]
pub const fn is_power_of_two(x: usize) -> bool {
    x & x.wrapping_sub(1) == 0
}

/// Smallest value `>= offset` that is a multiple of `align`.
///
/// # Panics
///
/// Panics if `align` is zero or not a power of two. A bad alignment is a
/// programming error, not an environmental condition.
#[inline]
pub fn align_forward(offset: usize, align: usize) -> usize {
    assert!(
        align != 0 && is_power_of_two(align),
        "alignment must be a non-zero power of two (got {align})"
    );
    // Same as `offset % align` for power-of-two `align`.
    let modulo = offset & (align - 1);
    if modulo != 0 {
        offset + (align - modulo)
    } else {
        offset
    }
}
