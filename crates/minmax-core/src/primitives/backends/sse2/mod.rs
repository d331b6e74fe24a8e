//! SSE2 backend for x86_64
//!
//! SSE2 is part of the x86_64 baseline, so this backend is available on every
//! x86_64 host. It processes 4 `f32` or 8 `i16` lanes per vector.

/// SSE2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Sse2Backend {
    _private: (),
}

impl Sse2Backend {
    /// Create the backend if the CPU supports SSE2
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self { _private: () })
    }

    /// Create a new SSE2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support SSE2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        match Self::try_new() {
            Some(backend) => backend,
            None => panic!("SSE2 backend not available on this target"),
        }
    }

    /// Check if SSE2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(target_arch = "x86_64")]
        {
            is_x86_feature_detected!("sse2")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    }
}

#[cfg(target_arch = "x86_64")]
mod kernels {
    use crate::primitives::backends::lanes::lane_kernels;
    use std::arch::x86_64::*;

    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn load_ps(ptr: *const u8) -> __m128 {
        _mm_loadu_ps(ptr.cast())
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn load_si128(ptr: *const u8) -> __m128i {
        _mm_loadu_si128(ptr.cast())
    }

    lane_kernels! {
        #[target_feature(enable = "sse2")]
        elem: f32,
        vector: __m128,
        lanes: 4,
        load: load_ps,
        min: _mm_min_ps,
        max: _mm_max_ps,
        contiguous: minmax_f32,
        strided: strided_minmax_f32,
    }

    lane_kernels! {
        #[target_feature(enable = "sse2")]
        elem: i16,
        vector: __m128i,
        lanes: 8,
        load: load_si128,
        min: _mm_min_epi16,
        max: _mm_max_epi16,
        contiguous: minmax_i16,
        strided: strided_minmax_i16,
    }
}

#[cfg(target_arch = "x86_64")]
crate::primitives::backends::lanes::impl_lane_primitives! {
    Sse2Backend, "sse2";
    f32 => 4, kernels::minmax_f32, kernels::strided_minmax_f32;
    i16 => 8, kernels::minmax_i16, kernels::strided_minmax_i16;
}

// Fallback for non-x86_64 builds
#[cfg(not(target_arch = "x86_64"))]
crate::primitives::backends::lanes::impl_unavailable_primitives!(Sse2Backend, "sse2 (unavailable)");
