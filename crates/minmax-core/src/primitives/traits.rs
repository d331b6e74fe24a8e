//! Min/max primitive trait shared by every backend

use crate::numeric::Element;
use crate::primitives::backends::scalar;
use crate::source::{ElementBytes, StridedBytes};

/// Min/max reduction primitives for one element type
///
/// The default methods are the scalar pairwise reductions, so a backend only
/// overrides what it can vectorize. Implementations must return values drawn
/// from the input; for floats the result is unspecified if the input
/// contains NaN.
pub trait MinMaxPrimitives<T: Element>: Clone + Copy + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// `(min, max)` of a contiguous run
    fn minmax_contiguous(&self, data: ElementBytes<'_, T>) -> (T, T) {
        scalar::minmax_pairwise(data)
    }

    /// `(min, max)` of a strided progression
    fn minmax_strided(&self, data: StridedBytes<'_, T>) -> (T, T) {
        scalar::strided_pairwise(data)
    }
}
