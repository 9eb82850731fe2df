//! Error types for blockcmp.
//!
//! Only the checked slice API reports errors; everything else is either a
//! compile-time assertion or a caller-side safety contract.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
