//! AVX2 min/max implementation for f32

use crate::primitives::backends::lanes::lane_kernels;
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load(ptr: *const u8) -> __m256 {
    _mm256_loadu_ps(ptr.cast())
}

lane_kernels! {
    #[target_feature(enable = "avx2")]
    elem: f32,
    vector: __m256,
    lanes: 8,
    load: load,
    min: _mm256_min_ps,
    max: _mm256_max_ps,
    contiguous: minmax_f32,
    strided: strided_minmax_f32,
}
