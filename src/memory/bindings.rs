//! Per-width bindings of the comparison engine.
//!
//! Each module binds [`Bcmp`](super::Bcmp) and [`Memcmp`](super::Memcmp) to
//! one vector width, leaving only the size class to choose:
//!
//! | Module       | Block | Requires                 |
//! |--------------|-------|--------------------------|
//! | [`sse2`]     | 16    | `target_feature = "sse2"`     |
//! | [`avx2`]     | 32    | `target_feature = "avx2"`     |
//! | [`avx512bw`] | 64    | `target_feature = "avx512bw"` |
//! | [`neon`]     | 16    | `target_feature = "neon"`     |
//!
//! Using a binding whose feature is not enabled for the build is a compile
//! error, as is a size class that is not a multiple of the block width:
//!
//! ```compile_fail
//! use blockcmp::memory::Strategy;
//! use blockcmp::memory::bindings::sse2;
//!
//! let a = [0u8; 24];
//! // 24 is not a multiple of 16
//! let _ = sse2::Bcmp::<24>::compare(Strategy::Block, &a, &a);
//! ```

/// 16-byte blocks, SSE2.
pub mod sse2 {
    use crate::common::simd::{cmp, features};
    use crate::memory::{BcmpResult, BlockOp, engine};

    /// SSE2 block primitives.
    pub struct Block;

    impl BlockOp for Block {
        const WIDTH: usize = cmp::sse2::WIDTH;
        const ENABLED: bool = features::SSE2;

        #[inline(always)]
        unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult {
            unsafe { cmp::sse2::bcmp16(p1, p2) }
        }

        #[inline(always)]
        unsafe fn mask(p1: *const u8, p2: *const u8) -> cmp::DiffMask {
            unsafe { cmp::sse2::mask16(p1, p2) }
        }
    }

    pub type Bcmp<const SIZE: usize> = engine::Bcmp<SIZE, Block>;
    pub type Memcmp<const SIZE: usize> = engine::Memcmp<SIZE, Block>;
}

/// 32-byte blocks, AVX2.
pub mod avx2 {
    use crate::common::simd::{cmp, features};
    use crate::memory::{BcmpResult, BlockOp, engine};

    /// AVX2 block primitives.
    pub struct Block;

    impl BlockOp for Block {
        const WIDTH: usize = cmp::avx2::WIDTH;
        const ENABLED: bool = features::AVX2;

        #[inline(always)]
        unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult {
            unsafe { cmp::avx2::bcmp32(p1, p2) }
        }

        #[inline(always)]
        unsafe fn mask(p1: *const u8, p2: *const u8) -> cmp::DiffMask {
            unsafe { cmp::avx2::mask32(p1, p2) }
        }
    }

    pub type Bcmp<const SIZE: usize> = engine::Bcmp<SIZE, Block>;
    pub type Memcmp<const SIZE: usize> = engine::Memcmp<SIZE, Block>;
}

/// 64-byte blocks, AVX-512BW.
pub mod avx512bw {
    use crate::common::simd::{cmp, features};
    use crate::memory::{BcmpResult, BlockOp, engine};

    /// AVX-512BW block primitives.
    pub struct Block;

    impl BlockOp for Block {
        const WIDTH: usize = cmp::avx512bw::WIDTH;
        const ENABLED: bool = features::AVX512BW;

        #[inline(always)]
        unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult {
            unsafe { cmp::avx512bw::bcmp64(p1, p2) }
        }

        #[inline(always)]
        unsafe fn mask(p1: *const u8, p2: *const u8) -> cmp::DiffMask {
            unsafe { cmp::avx512bw::mask64(p1, p2) }
        }
    }

    pub type Bcmp<const SIZE: usize> = engine::Bcmp<SIZE, Block>;
    pub type Memcmp<const SIZE: usize> = engine::Memcmp<SIZE, Block>;
}

/// 16-byte blocks, NEON.
pub mod neon {
    use crate::common::simd::{cmp, features};
    use crate::memory::{BcmpResult, BlockOp, engine};

    /// NEON block primitives.
    pub struct Block;

    impl BlockOp for Block {
        const WIDTH: usize = cmp::neon::WIDTH;
        const ENABLED: bool = features::NEON;

        #[inline(always)]
        unsafe fn bcmp(p1: *const u8, p2: *const u8) -> BcmpResult {
            unsafe { cmp::neon::bcmp16(p1, p2) }
        }

        #[inline(always)]
        unsafe fn mask(p1: *const u8, p2: *const u8) -> cmp::DiffMask {
            unsafe { cmp::neon::mask16(p1, p2) }
        }
    }

    pub type Bcmp<const SIZE: usize> = engine::Bcmp<SIZE, Block>;
    pub type Memcmp<const SIZE: usize> = engine::Memcmp<SIZE, Block>;
}
