//! Vector instruction set support
//!
//! # Supported Architectures
//!
//! ## x86_64
//! - **SSE2**: 128-bit integer compares, 16-byte blocks
//! - **AVX2**: 256-bit integer compares, 32-byte blocks
//! - **AVX-512BW**: 512-bit byte compares into mask registers, 64-byte blocks
//!
//! ## aarch64 (ARM)
//! - **NEON**: 128-bit compares, 16-byte blocks
//!
//! # Modules
//!
//! - [`features`]: which of the above the build target guarantees
//! - [`cmp`]: one equality and one inequality-mask primitive per block width
//!
//! # Enabling wider blocks
//!
//! Only SSE2 (x86_64) and NEON (aarch64) are part of the default targets.
//! Wider blocks need the feature enabled at compile time, for example:
//!
//! - `RUSTFLAGS="-C target-feature=+avx2"`
//! - `RUSTFLAGS="-C target-cpu=native"`
//!
//! There is no run-time dispatch: a primitive is either compiled to vector
//! instructions or to a stub that the comparison engine will not accept.

pub mod cmp;
pub mod features;
