//! Fixed-width block comparison primitives
//!
//! One pair of functions per vector width:
//!
//! - `bcmpN(p1, p2)` loads `N` bytes from each pointer, issues one vector
//!   compare and reduces it to a [`BcmpResult`].
//! - `maskN(p1, p2)` does the same load/compare but keeps the per-byte
//!   inequality bits as a [`DiffMask`], which is what ordering needs.
//!
//! | Module       | Width | Instruction set | Reduction                      |
//! |--------------|-------|-----------------|--------------------------------|
//! | [`sse2`]     | 16    | SSE2            | `pcmpeqb` + `pmovmskb`         |
//! | [`avx2`]     | 32    | AVX2            | `vpcmpeqb` + `vpmovmskb`       |
//! | [`avx512bw`] | 64    | AVX-512BW       | `vpcmpneqb` into a mask register |
//! | [`neon`]     | 16    | NEON            | `cmeq` + lane-weighted `addv`  |
//!
//! When a module's instruction set is not enabled for the build, its
//! functions still exist but report "no difference" for any input. The
//! comparison engine refuses to instantiate over such a width, so the stub is
//! only reachable by calling the primitive directly.

use crate::memory::BcmpResult;

/// Per-byte inequality bits of one block.
///
/// Bit `i` is set iff byte `i` of the two blocks differs, where byte 0 is the
/// lowest address. Blocks narrower than 64 bytes leave the high bits clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffMask {
    bits: u64,
}

impl DiffMask {
    /// No differing byte.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Create a mask from raw bits
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self { bits }
    }

    /// The underlying bits
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Check if any byte differs
    #[inline]
    pub const fn any(self) -> bool {
        self.bits != 0
    }

    /// Check if no byte differs
    #[inline]
    pub const fn none(self) -> bool {
        self.bits == 0
    }

    /// Number of differing bytes
    #[inline]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Index of the first differing byte, counting from the lowest address.
    ///
    /// This is the lowest set bit: the vector compare lays byte `i` out at
    /// bit `i` whatever the machine's byte order.
    #[inline]
    pub const fn first_index(self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as usize)
        }
    }

    /// Reduce to an equality result without truncating high bits.
    #[inline]
    pub const fn to_bcmp(self) -> BcmpResult {
        BcmpResult::from_raw((self.bits != 0) as u32)
    }
}

// ============================================================================
// x86_64
// ============================================================================

/// 16-byte blocks with SSE2.
pub mod sse2 {
    use super::DiffMask;
    use crate::memory::BcmpResult;

    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    use std::arch::x86_64::*;

    /// Bytes per block.
    pub const WIDTH: usize = 16;

    /// Bits set where the bytes are equal, from `pmovmskb`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 16 bytes.
    #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
    #[inline(always)]
    unsafe fn eq_bits(p1: *const u8, p2: *const u8) -> u32 {
        unsafe {
            let a = _mm_loadu_si128(p1.cast());
            let b = _mm_loadu_si128(p2.cast());
            _mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) as u32
        }
    }

    /// Whether the 16 bytes at `p1` and `p2` are identical.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 16 bytes.
    #[inline(always)]
    pub unsafe fn bcmp16(p1: *const u8, p2: *const u8) -> BcmpResult {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            let eq = unsafe { eq_bits(p1, p2) };
            BcmpResult::from_raw(!eq & 0xFFFF)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            let _ = (p1, p2);
            BcmpResult::ZERO
        }
    }

    /// Per-byte inequality mask of the 16 bytes at `p1` and `p2`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 16 bytes.
    #[inline(always)]
    pub unsafe fn mask16(p1: *const u8, p2: *const u8) -> DiffMask {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            let eq = unsafe { eq_bits(p1, p2) };
            DiffMask::new(u64::from(!eq & 0xFFFF))
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "sse2")))]
        {
            let _ = (p1, p2);
            DiffMask::EMPTY
        }
    }
}

/// 32-byte blocks with AVX2.
pub mod avx2 {
    use super::DiffMask;
    use crate::memory::BcmpResult;

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    use std::arch::x86_64::*;

    /// Bytes per block.
    pub const WIDTH: usize = 32;

    // `vpmovmskb` yields an i32 that is really a 32-bit mask.
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    #[inline(always)]
    unsafe fn eq_bits(p1: *const u8, p2: *const u8) -> u32 {
        unsafe {
            let a = _mm256_loadu_si256(p1.cast());
            let b = _mm256_loadu_si256(p2.cast());
            _mm256_movemask_epi8(_mm256_cmpeq_epi8(a, b)) as u32
        }
    }

    /// Whether the 32 bytes at `p1` and `p2` are identical.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 32 bytes.
    #[inline(always)]
    pub unsafe fn bcmp32(p1: *const u8, p2: *const u8) -> BcmpResult {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
        {
            let eq = unsafe { eq_bits(p1, p2) };
            BcmpResult::from_raw(!eq)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
        {
            let _ = (p1, p2);
            BcmpResult::ZERO
        }
    }

    /// Per-byte inequality mask of the 32 bytes at `p1` and `p2`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 32 bytes.
    #[inline(always)]
    pub unsafe fn mask32(p1: *const u8, p2: *const u8) -> DiffMask {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
        {
            let eq = unsafe { eq_bits(p1, p2) };
            DiffMask::new(u64::from(!eq))
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
        {
            let _ = (p1, p2);
            DiffMask::EMPTY
        }
    }
}

/// 64-byte blocks with AVX-512BW.
pub mod avx512bw {
    use super::DiffMask;
    use crate::memory::BcmpResult;

    #[cfg(all(target_arch = "x86_64", target_feature = "avx512bw"))]
    use std::arch::x86_64::*;

    /// Bytes per block.
    pub const WIDTH: usize = 64;

    /// Whether the 64 bytes at `p1` and `p2` are identical.
    ///
    /// The 64-bit compare mask is reduced to 0/1 before it is stored in the
    /// 32-bit result.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 64 bytes.
    #[inline(always)]
    pub unsafe fn bcmp64(p1: *const u8, p2: *const u8) -> BcmpResult {
        unsafe { mask64(p1, p2) }.to_bcmp()
    }

    /// Per-byte inequality mask of the 64 bytes at `p1` and `p2`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 64 bytes.
    #[inline(always)]
    pub unsafe fn mask64(p1: *const u8, p2: *const u8) -> DiffMask {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx512bw"))]
        {
            let ne = unsafe {
                let a = _mm512_loadu_si512(p1.cast());
                let b = _mm512_loadu_si512(p2.cast());
                _mm512_cmpneq_epi8_mask(a, b)
            };
            DiffMask::new(ne)
        }

        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx512bw")))]
        {
            let _ = (p1, p2);
            DiffMask::EMPTY
        }
    }
}

// ============================================================================
// aarch64
// ============================================================================

/// 16-byte blocks with NEON.
pub mod neon {
    use super::DiffMask;
    use crate::memory::BcmpResult;

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    use std::arch::aarch64::*;

    /// Bytes per block.
    pub const WIDTH: usize = 16;

    // NEON has no movemask. Weighting each lane by its bit position and
    // summing each half gives one bit per byte.
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    const LANE_BITS: [u8; 16] = [1, 2, 4, 8, 16, 32, 64, 128, 1, 2, 4, 8, 16, 32, 64, 128];

    /// 0xFF lanes where the bytes differ.
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    #[inline(always)]
    unsafe fn ne_lanes(p1: *const u8, p2: *const u8) -> uint8x16_t {
        unsafe { vmvnq_u8(vceqq_u8(vld1q_u8(p1), vld1q_u8(p2))) }
    }

    /// Whether the 16 bytes at `p1` and `p2` are identical.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 16 bytes.
    #[inline(always)]
    pub unsafe fn bcmp16(p1: *const u8, p2: *const u8) -> BcmpResult {
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            let max = unsafe { vmaxvq_u8(ne_lanes(p1, p2)) };
            BcmpResult::from_raw(u32::from(max))
        }

        #[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
        {
            let _ = (p1, p2);
            BcmpResult::ZERO
        }
    }

    /// Per-byte inequality mask of the 16 bytes at `p1` and `p2`.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for reads of 16 bytes.
    #[inline(always)]
    pub unsafe fn mask16(p1: *const u8, p2: *const u8) -> DiffMask {
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            let (lo, hi) = unsafe {
                let bits = vandq_u8(ne_lanes(p1, p2), vld1q_u8(LANE_BITS.as_ptr()));
                (vaddv_u8(vget_low_u8(bits)), vaddv_u8(vget_high_u8(bits)))
            };
            DiffMask::new(u64::from(lo) | (u64::from(hi) << 8))
        }

        #[cfg(not(all(target_arch = "aarch64", target_feature = "neon")))]
        {
            let _ = (p1, p2);
            DiffMask::EMPTY
        }
    }
}
