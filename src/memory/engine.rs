//! Generic composition of block primitives into larger comparisons.
//!
//! [`Bcmp`] and [`Memcmp`] are parameterized by a size class `SIZE` and a
//! [`BlockOp`] supplying the native-width primitives. `SIZE` must be the
//! block width or a positive multiple of it; anything else, and any block
//! primitive that is not enabled for the build, fails to compile at the point
//! of instantiation.
//!
//! Each engine exposes four strategies over raw pointers, plus
//! [`run`](Bcmp::run) to apply a [`Strategy`] value and a checked
//! [`compare`](Bcmp::compare) over slices.
//!
//! ```
//! use blockcmp::memory::Strategy;
//! # #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
//! # {
//! use blockcmp::memory::bindings::sse2;
//!
//! let a = [7u8; 40];
//! let mut b = a;
//! b[39] = 8;
//!
//! let diff = sse2::Memcmp::<16>::compare(Strategy::LoopAndTail, &a, &b).unwrap();
//! assert!(diff.value() < 0);
//! # }
//! ```

use std::marker::PhantomData;

use super::localize::ordering_from_mask;
use super::{BcmpResult, MemcmpResult, Strategy};
use crate::common::error::{Error, Result};
use crate::common::simd::cmp::DiffMask;

/// Native-width block primitives plugged into the engine.
///
/// Implementations compare exactly [`WIDTH`](Self::WIDTH) bytes per call.
pub trait BlockOp {
    /// Bytes per block.
    const WIDTH: usize;

    /// Whether the primitives compile to real instructions on this build.
    ///
    /// The engine only instantiates over enabled primitives.
    const ENABLED: bool;

    /// Equality of one block.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of `WIDTH` bytes.
    unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult;

    /// Per-byte inequality mask of one block.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of `WIDTH` bytes.
    unsafe fn mask(p1: *const u8, p2: *const u8) -> DiffMask;

    /// Ordering of one block.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of `WIDTH` bytes.
    #[inline(always)]
    unsafe fn memcmp(p1: *const u8, p2: *const u8) -> MemcmpResult {
        unsafe { ordering_from_mask(p1, p2, Self::mask(p1, p2)) }
    }
}

/// Validate slice arguments of a checked comparison, returning the count.
fn checked_count(strategy: Strategy, size: usize, a: &[u8], b: &[u8]) -> Result<usize> {
    if a.len() != b.len() {
        log::trace!("rejecting {strategy}: {} vs {} bytes", a.len(), b.len());
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if !strategy.supports(size, a.len()) {
        log::trace!("rejecting {strategy}: {} bytes with size class {size}", a.len());
        return Err(Error::UnsupportedLength {
            strategy,
            size,
            len: a.len(),
        });
    }
    Ok(a.len())
}

// ============================================================================
// Bcmp
// ============================================================================

/// Equality comparison of `SIZE`-byte blocks built from `B`.
pub struct Bcmp<const SIZE: usize, B> {
    _block: PhantomData<B>,
}

impl<const SIZE: usize, B: BlockOp> Bcmp<SIZE, B> {
    /// Bytes compared by one [`block`](Self::block) call.
    pub const SIZE: usize = SIZE;

    const VALID: () = {
        assert!(B::ENABLED, "block primitive is not enabled for this target");
        assert!(B::WIDTH > 0, "block width must be positive");
        assert!(SIZE > 0 && SIZE % B::WIDTH == 0, "SIZE not implemented");
    };

    const LOOPABLE: () = assert!(SIZE > 1, "a loop of size 1 does not need tail");

    /// Compare `[0, SIZE)`, stopping at the first differing native block.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of `SIZE` bytes.
    #[inline(always)]
    pub unsafe fn block(p1: *const u8, p2: *const u8) -> BcmpResult {
        let () = Self::VALID;
        if SIZE == B::WIDTH {
            return unsafe { B::bcmp(p1, p2) };
        }
        for offset in (0..SIZE).step_by(B::WIDTH) {
            let value = unsafe { B::bcmp(p1.add(offset), p2.add(offset)) };
            if value.is_diff() {
                return value;
            }
        }
        BcmpResult::ZERO
    }

    /// Compare `[count - SIZE, count)`.
    ///
    /// # Safety
    ///
    /// `[count - SIZE, count)` relative to both pointers must be readable.
    /// This range may start before the pointer when `count < SIZE`, as long
    /// as it stays inside the same allocation.
    #[inline(always)]
    pub unsafe fn tail(p1: *const u8, p2: *const u8, count: usize) -> BcmpResult {
        unsafe { Self::block(p1.add(count).sub(SIZE), p2.add(count).sub(SIZE)) }
    }

    /// Compare `[0, SIZE)` and `[count - SIZE, count)`, combining both.
    ///
    /// Covers every byte of `[0, count)` when `SIZE <= count <= 2 * SIZE`.
    ///
    /// # Safety
    ///
    /// Both ranges must be readable relative to both pointers.
    #[inline(always)]
    pub unsafe fn head_tail(p1: *const u8, p2: *const u8, count: usize) -> BcmpResult {
        unsafe { Self::block(p1, p2).combine(Self::tail(p1, p2, count)) }
    }

    /// Compare consecutive `SIZE` blocks from offset 0, then the tail.
    ///
    /// # Safety
    ///
    /// `count >= SIZE`, and both pointers must be valid for reads of
    /// `count` bytes.
    #[inline(always)]
    pub unsafe fn loop_and_tail(p1: *const u8, p2: *const u8, count: usize) -> BcmpResult {
        let () = Self::LOOPABLE;
        debug_assert!(count >= SIZE);
        let mut offset = 0;
        loop {
            let value = unsafe { Self::block(p1.add(offset), p2.add(offset)) };
            if value.is_diff() {
                return value;
            }
            offset += SIZE;
            if offset >= count - SIZE {
                break;
            }
        }
        unsafe { Self::tail(p1, p2, count) }
    }

    /// Apply `strategy` to `count` bytes.
    ///
    /// # Safety
    ///
    /// The preconditions of the selected strategy must hold.
    #[inline]
    pub unsafe fn run(strategy: Strategy, p1: *const u8, p2: *const u8, count: usize) -> BcmpResult {
        unsafe {
            match strategy {
                Strategy::Block => Self::block(p1, p2),
                Strategy::Tail => Self::tail(p1, p2, count),
                Strategy::HeadTail => Self::head_tail(p1, p2, count),
                Strategy::LoopAndTail => Self::loop_and_tail(p1, p2, count),
            }
        }
    }

    /// Compare two slices with `strategy`.
    ///
    /// Fails if the lengths differ or the strategy cannot cover them exactly
    /// (see [`Strategy::supports`]).
    pub fn compare(strategy: Strategy, a: &[u8], b: &[u8]) -> Result<BcmpResult> {
        let count = checked_count(strategy, SIZE, a, b)?;
        Ok(unsafe { Self::run(strategy, a.as_ptr(), b.as_ptr(), count) })
    }
}

// ============================================================================
// Memcmp
// ============================================================================

/// Three-way comparison of `SIZE`-byte blocks built from `B`.
pub struct Memcmp<const SIZE: usize, B> {
    _block: PhantomData<B>,
}

impl<const SIZE: usize, B: BlockOp> Memcmp<SIZE, B> {
    /// Bytes compared by one [`block`](Self::block) call.
    pub const SIZE: usize = SIZE;

    const VALID: () = {
        assert!(B::ENABLED, "block primitive is not enabled for this target");
        assert!(B::WIDTH > 0, "block width must be positive");
        assert!(SIZE > 0 && SIZE % B::WIDTH == 0, "SIZE not implemented");
    };

    const LOOPABLE: () = assert!(SIZE > 1, "a loop of size 1 does not need tail");

    /// Order `[0, SIZE)`.
    ///
    /// Sub-blocks are probed with the equality primitive; only the first one
    /// that differs is localized.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of `SIZE` bytes.
    #[inline(always)]
    pub unsafe fn block(p1: *const u8, p2: *const u8) -> MemcmpResult {
        let () = Self::VALID;
        if SIZE == B::WIDTH {
            return unsafe { B::memcmp(p1, p2) };
        }
        for offset in (0..SIZE).step_by(B::WIDTH) {
            let (q1, q2) = unsafe { (p1.add(offset), p2.add(offset)) };
            if unsafe { B::bcmp(q1, q2) }.is_diff() {
                return unsafe { B::memcmp(q1, q2) };
            }
        }
        MemcmpResult::ZERO
    }

    /// Order `[count - SIZE, count)`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Bcmp::tail`].
    #[inline(always)]
    pub unsafe fn tail(p1: *const u8, p2: *const u8, count: usize) -> MemcmpResult {
        unsafe { Self::block(p1.add(count).sub(SIZE), p2.add(count).sub(SIZE)) }
    }

    /// Order `[0, SIZE)`, then `[count - SIZE, count)` if the head is equal.
    ///
    /// # Safety
    ///
    /// Same contract as [`Bcmp::head_tail`].
    #[inline(always)]
    pub unsafe fn head_tail(p1: *const u8, p2: *const u8, count: usize) -> MemcmpResult {
        let value = unsafe { Self::block(p1, p2) };
        if value.is_diff() {
            return value;
        }
        unsafe { Self::tail(p1, p2, count) }
    }

    /// Order consecutive `SIZE` blocks from offset 0, then the tail.
    ///
    /// # Safety
    ///
    /// Same contract as [`Bcmp::loop_and_tail`].
    #[inline(always)]
    pub unsafe fn loop_and_tail(p1: *const u8, p2: *const u8, count: usize) -> MemcmpResult {
        let () = Self::LOOPABLE;
        debug_assert!(count >= SIZE);
        let mut offset = 0;
        loop {
            let value = unsafe { Self::block(p1.add(offset), p2.add(offset)) };
            if value.is_diff() {
                return value;
            }
            offset += SIZE;
            if offset >= count - SIZE {
                break;
            }
        }
        unsafe { Self::tail(p1, p2, count) }
    }

    /// Apply `strategy` to `count` bytes.
    ///
    /// # Safety
    ///
    /// The preconditions of the selected strategy must hold.
    #[inline]
    pub unsafe fn run(strategy: Strategy, p1: *const u8, p2: *const u8, count: usize) -> MemcmpResult {
        unsafe {
            match strategy {
                Strategy::Block => Self::block(p1, p2),
                Strategy::Tail => Self::tail(p1, p2, count),
                Strategy::HeadTail => Self::head_tail(p1, p2, count),
                Strategy::LoopAndTail => Self::loop_and_tail(p1, p2, count),
            }
        }
    }

    /// Compare two slices with `strategy`.
    ///
    /// Fails if the lengths differ or the strategy cannot cover them exactly
    /// (see [`Strategy::supports`]).
    pub fn compare(strategy: Strategy, a: &[u8], b: &[u8]) -> Result<MemcmpResult> {
        let count = checked_count(strategy, SIZE, a, b)?;
        Ok(unsafe { Self::run(strategy, a.as_ptr(), b.as_ptr(), count) })
    }
}

#[cfg(test)]
mod tests {
    use super::{Bcmp, BlockOp, Memcmp};
    use crate::common::error::Error;
    use crate::memory::Strategy;
    use crate::memory::reference::{Portable, reference_bcmp, reference_memcmp, sign};
    use proptest::prelude::{ProptestConfig, any, prop, prop_assert, prop_assert_eq, proptest};
    use proptest::strategy::Strategy as _;

    type P4 = Portable<4>;
    type P16 = Portable<16>;

    /// Every strategy on every count it supports, with a single differing byte
    /// at every index, against the byte-wise reference.
    fn check_coverage<const SIZE: usize, B: BlockOp>(max_count: usize) {
        for count in SIZE..=max_count {
            for strategy in Strategy::ALL {
                if !strategy.supports(SIZE, count) {
                    continue;
                }
                let a: Vec<u8> = (0..count).map(|i| (i * 13 + 1) as u8).collect();

                let eq = Bcmp::<SIZE, B>::compare(strategy, &a, &a).unwrap();
                assert!(eq.is_zero(), "{strategy} size {SIZE} count {count}: reflexivity");
                let ord = Memcmp::<SIZE, B>::compare(strategy, &a, &a).unwrap();
                assert!(ord.is_zero(), "{strategy} size {SIZE} count {count}: reflexivity");

                for index in 0..count {
                    for delta in [1u8, 0x80, 0xFF] {
                        let mut b = a.clone();
                        b[index] = b[index].wrapping_add(delta);

                        let eq = Bcmp::<SIZE, B>::compare(strategy, &a, &b).unwrap();
                        assert!(
                            eq.is_diff(),
                            "{strategy} size {SIZE} count {count}: missed index {index}"
                        );

                        let ord = Memcmp::<SIZE, B>::compare(strategy, &a, &b).unwrap();
                        assert_eq!(
                            sign(ord.value()),
                            sign(reference_memcmp(&a, &b)),
                            "{strategy} size {SIZE} count {count}: wrong sign at index {index}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_coverage_single_block() {
        check_coverage::<4, P4>(8);
        check_coverage::<16, P16>(40);
    }

    #[test]
    fn test_coverage_block_multiples() {
        check_coverage::<8, P4>(24);
        check_coverage::<12, P4>(30);
        check_coverage::<32, P16>(72);
    }

    #[test]
    fn test_block_multiple_reports_first_differing_sub_block() {
        // Both sub-blocks differ, in opposite directions; the lower one decides
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        a[6] = 9;
        b[20] = 1;

        let result = unsafe { Memcmp::<32, P16>::block(a.as_ptr(), b.as_ptr()) };
        assert_eq!(result.value(), 9);
    }

    #[test]
    fn test_head_tail_prefers_head() {
        let mut a = [0u8; 24];
        let mut b = [0u8; 24];
        a[2] = 1; // head says greater
        b[23] = 1; // tail says less

        let result = Memcmp::<16, P16>::compare(Strategy::HeadTail, &a, &b).unwrap();
        assert_eq!(result.value(), 1);
    }

    #[test]
    fn test_loop_and_tail_exact_multiple() {
        // count == 2 * SIZE: one loop block plus a tail that is the second block
        let a = [3u8; 32];
        let mut b = a;
        b[31] = 4;
        let result = Memcmp::<16, P16>::compare(Strategy::LoopAndTail, &a, &b).unwrap();
        assert_eq!(result.value(), -1);
    }

    #[test]
    fn test_compare_rejects_length_mismatch() {
        let a = [0u8; 16];
        let b = [0u8; 17];
        assert_eq!(
            Bcmp::<16, P16>::compare(Strategy::Block, &a, &b),
            Err(Error::LengthMismatch { left: 16, right: 17 })
        );
    }

    #[test]
    fn test_compare_rejects_unsupported_length() {
        let a = [0u8; 40];
        assert_eq!(
            Memcmp::<16, P16>::compare(Strategy::HeadTail, &a, &a),
            Err(Error::UnsupportedLength {
                strategy: Strategy::HeadTail,
                size: 16,
                len: 40
            })
        );
        assert!(Bcmp::<16, P16>::compare(Strategy::LoopAndTail, &a[..8], &a[..8]).is_err());
    }

    #[test]
    fn test_size_constant() {
        assert_eq!(Bcmp::<48, P16>::SIZE, 48);
        assert_eq!(Memcmp::<4, P4>::SIZE, 4);
    }

    fn buffers(max: usize) -> impl proptest::strategy::Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (16..=max).prop_flat_map(|len| {
            (
                prop::collection::vec(any::<u8>(), len),
                prop::collection::vec(0u8..4, len),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_loop_and_tail_matches_reference((a, noise) in buffers(200)) {
            // Sparse differences so that equal prefixes are common
            let b: Vec<u8> = a
                .iter()
                .zip(&noise)
                .map(|(&x, &n)| if n == 0 { x.wrapping_add(1) } else { x })
                .collect();

            let eq = Bcmp::<16, P16>::compare(Strategy::LoopAndTail, &a, &b).unwrap();
            let ord = Memcmp::<16, P16>::compare(Strategy::LoopAndTail, &a, &b).unwrap();

            prop_assert_eq!(eq.is_zero(), reference_bcmp(&a, &b));
            prop_assert_eq!(eq.is_zero(), ord.is_zero());
            prop_assert_eq!(sign(ord.value()), sign(reference_memcmp(&a, &b)));
        }

        #[test]
        fn prop_head_tail_matches_reference(a in prop::collection::vec(any::<u8>(), 16..=32), index in any::<prop::sample::Index>(), delta in 1u8..) {
            let mut b = a.clone();
            let i = index.index(a.len());
            b[i] = b[i].wrapping_add(delta);

            let eq = Bcmp::<16, P16>::compare(Strategy::HeadTail, &a, &b).unwrap();
            let ord = Memcmp::<16, P16>::compare(Strategy::HeadTail, &a, &b).unwrap();

            prop_assert!(eq.is_diff());
            prop_assert_eq!(sign(ord.value()), sign(reference_memcmp(&a, &b)));
        }
    }
}
