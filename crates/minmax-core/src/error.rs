//! Error types for the min/max kernel library
//!
//! Kernels themselves never fail. Every error here is raised while building
//! one of the validated byte sources the kernels consume.

use thiserror::Error;

/// Core error type for kernel inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A kernel source with no elements
    #[error("min/max is undefined for empty input")]
    EmptyInput,

    /// Buffer length is not a whole number of elements
    #[error("buffer of {len} bytes is not a whole number of {item_size}-byte elements")]
    PartialElement { len: usize, item_size: usize },

    /// A strided source reaches outside its buffer
    #[error("strided source needs bytes [{start}, {end}) but the buffer holds {available}")]
    OutOfBounds {
        start: isize,
        end: isize,
        available: usize,
    },

    /// A strided source with a zero stride
    #[error("stride must be non-zero")]
    ZeroStride,

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an unrecognised SIMD tier name
    pub fn unknown_tier(name: &str) -> Self {
        Self::InvalidParameter(format!(
            "unknown SIMD tier {name:?} (expected scalar, neon, sse2, avx2 or avx512)"
        ))
    }
}
