//! Block-composed `bcmp` and `memcmp`.
//!
//! - [`result`]: [`BcmpResult`] and [`MemcmpResult`]
//! - [`localize`]: first differing byte from an inequality mask
//! - [`strategy`]: the four ways a size class is laid over a buffer
//! - [`engine`]: [`Bcmp`] and [`Memcmp`], generic over a [`BlockOp`]
//! - [`bindings`]: the engine bound to SSE2, AVX2, AVX-512BW and NEON blocks
//!
//! Choosing the size class and strategy for a run-time length is the
//! caller's job; everything here is fixed at compile time.

pub mod bindings;
pub mod engine;
pub mod localize;
pub mod result;
pub mod strategy;

#[cfg(test)]
pub(crate) mod reference;

pub use engine::{Bcmp, BlockOp, Memcmp};
pub use result::{BcmpResult, MemcmpResult};
pub use strategy::Strategy;
