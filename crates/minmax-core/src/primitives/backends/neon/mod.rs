//! NEON backend for aarch64
//!
//! 4 `f32` or 8 `i16` lanes per 128-bit vector.

/// NEON backend for aarch64 processors
#[derive(Clone, Copy, Debug)]
pub struct NeonBackend {
    _private: (),
}

impl NeonBackend {
    /// Create the backend if the CPU supports NEON
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self { _private: () })
    }

    /// Create a new NEON backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support NEON instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        match Self::try_new() {
            Some(backend) => backend,
            None => panic!("NEON backend not available on this target"),
        }
    }

    /// Check if NEON is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(target_arch = "aarch64")]
        {
            std::arch::is_aarch64_feature_detected!("neon")
        }
        #[cfg(not(target_arch = "aarch64"))]
        {
            false
        }
    }
}

#[cfg(target_arch = "aarch64")]
mod kernels {
    use crate::primitives::backends::lanes::lane_kernels;
    use std::arch::aarch64::*;

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load_f32(ptr: *const u8) -> float32x4_t {
        vreinterpretq_f32_u8(vld1q_u8(ptr))
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load_s16(ptr: *const u8) -> int16x8_t {
        vreinterpretq_s16_u8(vld1q_u8(ptr))
    }

    lane_kernels! {
        #[target_feature(enable = "neon")]
        elem: f32,
        vector: float32x4_t,
        lanes: 4,
        load: load_f32,
        min: vminq_f32,
        max: vmaxq_f32,
        contiguous: minmax_f32,
        strided: strided_minmax_f32,
    }

    lane_kernels! {
        #[target_feature(enable = "neon")]
        elem: i16,
        vector: int16x8_t,
        lanes: 8,
        load: load_s16,
        min: vminq_s16,
        max: vmaxq_s16,
        contiguous: minmax_i16,
        strided: strided_minmax_i16,
    }
}

#[cfg(target_arch = "aarch64")]
crate::primitives::backends::lanes::impl_lane_primitives! {
    NeonBackend, "neon";
    f32 => 4, kernels::minmax_f32, kernels::strided_minmax_f32;
    i16 => 8, kernels::minmax_i16, kernels::strided_minmax_i16;
}

// Fallback for non-aarch64 builds
#[cfg(not(target_arch = "aarch64"))]
crate::primitives::backends::lanes::impl_unavailable_primitives!(NeonBackend, "neon (unavailable)");
