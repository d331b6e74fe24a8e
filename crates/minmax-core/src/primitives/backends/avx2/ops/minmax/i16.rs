//! AVX2 min/max implementation for i16

use crate::primitives::backends::lanes::lane_kernels;
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn load(ptr: *const u8) -> __m256i {
    _mm256_loadu_si256(ptr.cast())
}

lane_kernels! {
    #[target_feature(enable = "avx2")]
    elem: i16,
    vector: __m256i,
    lanes: 16,
    load: load,
    min: _mm256_min_epi16,
    max: _mm256_max_epi16,
    contiguous: minmax_i16,
    strided: strided_minmax_i16,
}
