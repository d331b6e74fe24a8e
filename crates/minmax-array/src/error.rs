//! Error types for array views and dispatch

use minmax_core::DType;
use thiserror::Error;

/// Errors raised while describing an array or reducing it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// min/max of an array with no elements
    #[error("zero-size array to reduction operation minimum which has no identity")]
    EmptyArray,

    /// Shape and strides disagree on the number of axes
    #[error("shape has {shape} axes but strides has {strides}")]
    RankMismatch { shape: usize, strides: usize },

    /// An addressable element lies outside the buffer
    #[error("view addresses bytes [{start}, {end}) but the buffer holds {available}")]
    OutOfBounds {
        start: isize,
        end: isize,
        available: usize,
    },

    /// Extent or address arithmetic overflowed
    #[error("array extent overflows the address space")]
    OffsetOverflow,

    /// A byte stride that does not land on element boundaries
    #[error("byte stride {stride} is not a multiple of the {item_size}-byte item size")]
    MisalignedStride { stride: isize, item_size: usize },

    /// Typed access with the wrong element type
    #[error("array holds {found} but {expected} was requested")]
    DTypeMismatch { expected: DType, found: DType },

    /// An axis argument past the last axis
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    AxisOutOfRange { axis: usize, ndim: usize },

    /// Core kernel error
    #[error("Core kernel error: {0}")]
    Core(#[from] minmax_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that an element type matches the array's
    pub fn check_dtype(expected: DType, found: DType) -> Result<()> {
        if expected != found {
            return Err(Error::DTypeMismatch { expected, found });
        }
        Ok(())
    }
}
