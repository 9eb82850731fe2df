//! Vector instruction set flags
//!
//! The `const` flags report what the *build target* guarantees, i.e. what
//! `-C target-feature` / `-C target-cpu` enabled for this crate. They are the
//! only thing that decides whether a block primitive compiles to real vector
//! instructions. Nothing in the comparison path ever branches on the CPU at
//! run time.
//!
//! [`CpuFeatures::detected`] is a diagnostic report of what the running CPU
//! offers. It is useful to spot a binary that was built for a newer CPU than
//! the one it runs on, but it never selects a code path.

use bitflags::bitflags;
use once_cell::sync::Lazy;

/// 128-bit integer vectors (x86_64).
pub const SSE2: bool = cfg!(all(target_arch = "x86_64", target_feature = "sse2"));

/// 256-bit floating-point vectors (x86_64).
pub const AVX: bool = cfg!(all(target_arch = "x86_64", target_feature = "avx"));

/// 256-bit integer vectors (x86_64).
pub const AVX2: bool = cfg!(all(target_arch = "x86_64", target_feature = "avx2"));

/// 512-bit foundation (x86_64).
pub const AVX512F: bool = cfg!(all(target_arch = "x86_64", target_feature = "avx512f"));

/// 512-bit byte/word operations with mask-register compares (x86_64).
pub const AVX512BW: bool = cfg!(all(target_arch = "x86_64", target_feature = "avx512bw"));

/// 128-bit Advanced SIMD (aarch64).
pub const NEON: bool = cfg!(all(target_arch = "aarch64", target_feature = "neon"));

bitflags! {
    /// A set of vector extensions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CpuFeatures: u32 {
        /// SSE2, 16-byte blocks
        const SSE2 = 0x0001;
        /// AVX
        const AVX = 0x0002;
        /// AVX2, 32-byte blocks
        const AVX2 = 0x0004;
        /// AVX-512 foundation
        const AVX512F = 0x0008;
        /// AVX-512 byte/word, 64-byte blocks
        const AVX512BW = 0x0010;
        /// NEON, 16-byte blocks
        const NEON = 0x0100;
    }
}

static DETECTED: Lazy<CpuFeatures> = Lazy::new(|| {
    let detected = CpuFeatures::probe();
    let compiled = CpuFeatures::compiled();
    log::debug!("vector features: compiled {compiled:?}, detected {detected:?}");

    let missing = compiled.difference(detected);
    if !missing.is_empty() {
        log::warn!("binary was built for vector features this CPU does not report: {missing:?}");
    }
    detected
});

impl CpuFeatures {
    /// Extensions guaranteed by the build target.
    pub const fn compiled() -> Self {
        let mut set = Self::empty();
        if SSE2 {
            set = set.union(Self::SSE2);
        }
        if AVX {
            set = set.union(Self::AVX);
        }
        if AVX2 {
            set = set.union(Self::AVX2);
        }
        if AVX512F {
            set = set.union(Self::AVX512F);
        }
        if AVX512BW {
            set = set.union(Self::AVX512BW);
        }
        if NEON {
            set = set.union(Self::NEON);
        }
        set
    }

    /// Extensions reported by the running CPU.
    ///
    /// Probed once and cached for the lifetime of the process.
    pub fn detected() -> Self {
        *DETECTED
    }

    /// Extensions the binary was compiled for but the running CPU lacks.
    ///
    /// Non-empty means the comparison primitives will fault with an illegal
    /// instruction; it is never silently corrected.
    pub fn missing_at_runtime() -> Self {
        Self::compiled().difference(Self::detected())
    }

    /// Whether this set provides a real primitive for `width`-byte blocks.
    pub const fn has_block(self, width: usize) -> bool {
        match width {
            16 => self.intersects(Self::SSE2.union(Self::NEON)),
            32 => self.contains(Self::AVX2),
            64 => self.contains(Self::AVX512BW),
            _ => false,
        }
    }

    /// Block widths with a real primitive in this set, narrowest first.
    pub fn block_widths(self) -> impl Iterator<Item = usize> {
        [16, 32, 64]
            .into_iter()
            .filter(move |&width| self.has_block(width))
    }

    /// The widest block width in this set, if any.
    pub fn widest_block(self) -> Option<usize> {
        self.block_widths().last()
    }

    #[allow(unused_mut)]
    fn probe() -> Self {
        let mut set = Self::empty();

        #[cfg(target_arch = "x86_64")]
        {
            if std::arch::is_x86_feature_detected!("sse2") {
                set |= Self::SSE2;
            }
            if std::arch::is_x86_feature_detected!("avx") {
                set |= Self::AVX;
            }
            if std::arch::is_x86_feature_detected!("avx2") {
                set |= Self::AVX2;
            }
            if std::arch::is_x86_feature_detected!("avx512f") {
                set |= Self::AVX512F;
            }
            if std::arch::is_x86_feature_detected!("avx512bw") {
                set |= Self::AVX512BW;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                set |= Self::NEON;
            }
        }

        set
    }
}
