//! Error types for the checked comparison entry points.
//!
//! The raw pointer API never fails at run time: size-class violations are
//! rejected at compile time and buffer validity is the caller's contract.
//! These errors only come out of the slice-based `compare` functions.
use thiserror::Error;

use crate::memory::Strategy;

/// Main error type for blockcmp operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The two buffers do not have the same length
    #[error("Length mismatch: left buffer has {left} bytes, right buffer has {right} bytes")]
    LengthMismatch { left: usize, right: usize },

    /// The strategy cannot cover this many bytes with its block size
    #[error("Unsupported length: {strategy} with {size}-byte blocks cannot compare {len} bytes")]
    UnsupportedLength {
        strategy: Strategy,
        size: usize,
        len: usize,
    },
}

/// Result type for blockcmp operations.
pub type Result<T> = std::result::Result<T, Error>;
