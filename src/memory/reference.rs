//! Byte-wise reference comparators for tests.

use super::{BcmpResult, BlockOp};
use crate::common::simd::cmp::DiffMask;

/// Scalar block primitives of any width up to 64 bytes.
///
/// Lets the engine be tested on every architecture and with small widths
/// that make exhaustive coverage checks cheap.
pub struct Portable<const W: usize>;

impl<const W: usize> BlockOp for Portable<W> {
    const WIDTH: usize = W;
    const ENABLED: bool = W <= 64;

    unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult {
        unsafe { Self::mask(p1, p2) }.to_bcmp()
    }

    unsafe fn mask(p1: *const u8, p2: *const u8) -> DiffMask {
        let mut bits = 0u64;
        for i in 0..W {
            if unsafe { *p1.add(i) != *p2.add(i) } {
                bits |= 1 << i;
            }
        }
        DiffMask::new(bits)
    }
}

/// Whether the slices are identical.
pub fn reference_bcmp(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// `a[i] - b[i]` at the first differing index, zero if identical.
pub fn reference_memcmp(a: &[u8], b: &[u8]) -> i32 {
    a.iter()
        .zip(b)
        .find(|(x, y)| x != y)
        .map_or(0, |(&x, &y)| i32::from(x) - i32::from(y))
}

pub fn sign(value: i32) -> i32 {
    value.signum()
}
