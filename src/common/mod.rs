//! Types and low-level building blocks shared by the comparison engine.

// Submodule declarations
pub mod error;
pub mod simd;

// Re-exports for convenience
pub use error::{Error, Result};
pub use simd::cmp::DiffMask;
pub use simd::features::CpuFeatures;
