//! First-difference localization.

use super::MemcmpResult;
use crate::common::simd::cmp::DiffMask;

/// Ordering of two blocks known to differ somewhere under `mask`.
///
/// The lowest set bit of `mask` is the first differing byte. Both bytes are
/// widened to `i16` before subtracting so that `0x00 - 0xFF` stays negative.
///
/// # Safety
///
/// `mask` must be non-zero, and both pointers must be valid for a read at the
/// index of its lowest set bit.
#[inline]
pub unsafe fn first_diff(p1: *const u8, p2: *const u8, mask: DiffMask) -> MemcmpResult {
    debug_assert!(mask.any(), "first_diff called with an empty mask");
    let index = mask.bits().trailing_zeros() as usize;
    let (a, b) = unsafe { (i16::from(*p1.add(index)), i16::from(*p2.add(index))) };
    MemcmpResult::from_diff(i32::from(a - b))
}

/// Ordering of two blocks given their inequality mask, zero if it is empty.
///
/// # Safety
///
/// Both pointers must be valid for reads at every index set in `mask`.
#[inline]
pub unsafe fn ordering_from_mask(p1: *const u8, p2: *const u8, mask: DiffMask) -> MemcmpResult {
    if mask.any() {
        unsafe { first_diff(p1, p2, mask) }
    } else {
        MemcmpResult::ZERO
    }
}
