//! Compile-time dispatch system for AVX2 type-specific implementations

use super::ops::MinMax;
use super::Avx2Backend;
use crate::numeric::Element;
use crate::source::{ElementBytes, StridedBytes};

/// Trait for type-specific AVX2 dispatch
///
/// Implemented for each element type with an AVX2 kernel, so the backend
/// resolves to the right kernel without runtime branching.
pub trait Avx2TypeDispatch: Element + MinMax<Self> {
    fn backend_name() -> &'static str;
    fn simd_width() -> usize;

    unsafe fn minmax_contiguous_impl(
        backend: &Avx2Backend,
        data: ElementBytes<'_, Self>,
    ) -> (Self, Self) {
        <Self as MinMax<Self>>::contiguous(backend, data)
    }

    unsafe fn minmax_strided_impl(
        backend: &Avx2Backend,
        data: StridedBytes<'_, Self>,
    ) -> (Self, Self) {
        <Self as MinMax<Self>>::strided(backend, data)
    }
}

impl Avx2TypeDispatch for f32 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        8 // AVX2 processes 8 f32s at once
    }
}

impl Avx2TypeDispatch for i16 {
    fn backend_name() -> &'static str {
        "avx2"
    }

    fn simd_width() -> usize {
        16
    }
}
