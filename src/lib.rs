//! blockcmp - vector-width specialized `bcmp` and `memcmp` building blocks
//!
//! This library composes fixed-width vector compares (16, 32 or 64 bytes)
//! into comparisons of larger, compile-time-known size classes, without
//! run-time branching on size or CPU features.
//!
//! # Features
//!
//! - **Equality** ([`memory::Bcmp`]): zero if identical, non-zero otherwise
//! - **Ordering** ([`memory::Memcmp`]): sign of the first differing byte
//! - **Four strategies**: exact block, tail, overlapping head + tail, and
//!   block loop + tail
//! - **Compile-time gating**: unsupported size classes and vector widths the
//!   build target lacks are compile errors, not silent wrong answers
//!
//! # Example - Raw pointers, as called by a size-class dispatcher
//!
//! ```
//! # #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
//! # {
//! use blockcmp::memory::bindings::sse2;
//!
//! let a = *b"0123456789abcdef0123";
//! let b = *b"0123456789abcdef0124";
//!
//! // 20 bytes: a 16-byte head and a 16-byte tail that overlap
//! let eq = unsafe { sse2::Bcmp::<16>::head_tail(a.as_ptr(), b.as_ptr(), 20) };
//! assert!(eq.is_diff());
//!
//! let ord = unsafe { sse2::Memcmp::<16>::head_tail(a.as_ptr(), b.as_ptr(), 20) };
//! assert!(ord.value() < 0);
//! # }
//! ```
//!
//! # Example - Checked slices
//!
//! ```
//! # #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
//! # {
//! use blockcmp::memory::Strategy;
//! use blockcmp::memory::bindings::sse2;
//!
//! let a = [1u8; 64];
//! assert!(sse2::Bcmp::<32>::compare(Strategy::Block, &a[..32], &a[..32])?.is_zero());
//!
//! // head_tail cannot cover 64 bytes with 16-byte reads
//! assert!(sse2::Bcmp::<16>::compare(Strategy::HeadTail, &a, &a).is_err());
//! # }
//! # Ok::<(), blockcmp::Error>(())
//! ```
//!
//! # Example - Feature report
//!
//! ```
//! use blockcmp::CpuFeatures;
//!
//! let compiled = CpuFeatures::compiled();
//! println!("block widths: {:?}", compiled.block_widths().collect::<Vec<_>>());
//! assert!(CpuFeatures::missing_at_runtime().is_empty());
//! ```

/// Shared types: errors, the inequality mask, vector feature flags and the
/// per-width block primitives.
pub mod common;

/// The comparison engine: result types, localization, strategies, the generic
/// `Bcmp`/`Memcmp` and their per-width bindings.
pub mod memory;

pub use common::{CpuFeatures, DiffMask, Error, Result};
pub use memory::{BcmpResult, MemcmpResult, Strategy};
