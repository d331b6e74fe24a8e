//! Min/max operation for AVX2 backend
//!
//! Finds the smallest and largest element in one pass

mod f32;
mod i16;

use crate::numeric::Element;
use crate::primitives::backends::avx2::Avx2Backend;
use crate::source::{ElementBytes, StridedBytes};

/// Trait for the min/max operation
pub trait MinMax<T: Element> {
    /// `(min, max)` of a contiguous run
    unsafe fn contiguous(backend: &Avx2Backend, data: ElementBytes<'_, T>) -> (T, T);

    /// `(min, max)` of a strided progression
    unsafe fn strided(backend: &Avx2Backend, data: StridedBytes<'_, T>) -> (T, T);
}

impl MinMax<f32> for f32 {
    unsafe fn contiguous(_backend: &Avx2Backend, data: ElementBytes<'_, f32>) -> (f32, f32) {
        f32::minmax_f32(data)
    }

    unsafe fn strided(_backend: &Avx2Backend, data: StridedBytes<'_, f32>) -> (f32, f32) {
        f32::strided_minmax_f32(data)
    }
}

impl MinMax<i16> for i16 {
    unsafe fn contiguous(_backend: &Avx2Backend, data: ElementBytes<'_, i16>) -> (i16, i16) {
        i16::minmax_i16(data)
    }

    unsafe fn strided(_backend: &Avx2Backend, data: StridedBytes<'_, i16>) -> (i16, i16) {
        i16::strided_minmax_i16(data)
    }
}
