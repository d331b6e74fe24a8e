//! AVX-512 backend
//!
//! Needs both AVX512F (for `f32`) and AVX512BW (for `i16`); the backend is
//! only constructible when the CPU reports both. 16 `f32` or 32 `i16` lanes
//! per vector.

/// AVX512 backend for newer x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx512Backend {
    _private: (),
}

impl Avx512Backend {
    /// Create the backend if the CPU supports AVX512F and AVX512BW
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self { _private: () })
    }

    /// Create a new AVX512 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX512F and AVX512BW instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        {
            match Self::try_new() {
                Some(backend) => backend,
                None => panic!(
                    "AVX512 backend requested but CPU doesn't support AVX512F/AVX512BW instructions"
                ),
            }
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx512")))]
        {
            panic!("AVX512 backend not available: not compiled with AVX512 support");
        }
    }

    /// Check if AVX512 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx512"))]
        {
            is_x86_feature_detected!("avx512f") && is_x86_feature_detected!("avx512bw")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx512")))]
        {
            false
        }
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
mod kernels {
    use crate::primitives::backends::lanes::lane_kernels;
    use std::arch::x86_64::*;

    #[inline]
    #[target_feature(enable = "avx512f")]
    unsafe fn load_ps(ptr: *const u8) -> __m512 {
        _mm512_loadu_ps(ptr.cast())
    }

    #[inline]
    #[target_feature(enable = "avx512f,avx512bw")]
    unsafe fn load_epi16(ptr: *const u8) -> __m512i {
        _mm512_loadu_epi16(ptr.cast())
    }

    lane_kernels! {
        #[target_feature(enable = "avx512f")]
        elem: f32,
        vector: __m512,
        lanes: 16,
        load: load_ps,
        min: _mm512_min_ps,
        max: _mm512_max_ps,
        contiguous: minmax_f32,
        strided: strided_minmax_f32,
    }

    lane_kernels! {
        #[target_feature(enable = "avx512f,avx512bw")]
        elem: i16,
        vector: __m512i,
        lanes: 32,
        load: load_epi16,
        min: _mm512_min_epi16,
        max: _mm512_max_epi16,
        contiguous: minmax_i16,
        strided: strided_minmax_i16,
    }
}

#[cfg(all(target_arch = "x86_64", feature = "avx512"))]
crate::primitives::backends::lanes::impl_lane_primitives! {
    Avx512Backend, "avx512";
    f32 => 16, kernels::minmax_f32, kernels::strided_minmax_f32;
    i16 => 32, kernels::minmax_i16, kernels::strided_minmax_i16;
}

// Fallback for non-AVX512 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx512")))]
crate::primitives::backends::lanes::impl_unavailable_primitives!(
    Avx512Backend,
    "avx512 (unavailable)"
);
