//! AVX2 backend implementation with operation-centric organization
//!
//! Type-specific kernels live under `ops`, one module per operation and one
//! file per element type. `dispatch` maps each supported element type onto
//! them at compile time. 8 `f32` or 16 `i16` lanes per vector.

#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod dispatch;
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
mod ops;

use crate::primitives::MinMaxPrimitives;

/// AVX2 backend for x86_64 processors
#[derive(Clone, Copy, Debug)]
pub struct Avx2Backend {
    _private: (),
}

impl Avx2Backend {
    /// Create the backend if the CPU supports AVX2
    pub fn try_new() -> Option<Self> {
        Self::is_available().then_some(Self { _private: () })
    }

    /// Create a new AVX2 backend
    ///
    /// # Panics
    /// Panics if the CPU doesn't support AVX2 instructions
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            match Self::try_new() {
                Some(backend) => backend,
                None => panic!("AVX2 backend requested but CPU doesn't support AVX2 instructions"),
            }
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            panic!("AVX2 backend not available: not compiled with AVX2 support");
        }
    }

    /// Check if AVX2 is available on this CPU
    pub fn is_available() -> bool {
        #[cfg(all(target_arch = "x86_64", feature = "avx2"))]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
        {
            false
        }
    }
}

// AVX2 implementations delegate to type-specific modules via compile-time dispatch
#[cfg(all(target_arch = "x86_64", feature = "avx2"))]
impl<T> MinMaxPrimitives<T> for Avx2Backend
where
    T: self::dispatch::Avx2TypeDispatch,
{
    fn backend_name(&self) -> &'static str {
        T::backend_name()
    }

    fn simd_width(&self) -> usize {
        T::simd_width()
    }

    fn minmax_contiguous(&self, data: crate::source::ElementBytes<'_, T>) -> (T, T) {
        // Safety: We checked CPU support in try_new()
        unsafe { T::minmax_contiguous_impl(self, data) }
    }

    fn minmax_strided(&self, data: crate::source::StridedBytes<'_, T>) -> (T, T) {
        // Safety: We checked CPU support in try_new()
        unsafe { T::minmax_strided_impl(self, data) }
    }
}

// Fallback for non-AVX2 builds
#[cfg(not(all(target_arch = "x86_64", feature = "avx2")))]
impl<T: crate::numeric::Element> MinMaxPrimitives<T> for Avx2Backend {
    fn backend_name(&self) -> &'static str {
        "avx2 (unavailable)"
    }
}

#[cfg(all(test, target_arch = "x86_64", feature = "avx2"))]
mod tests {
    use super::*;
    use crate::source::{ElementBytes, StridedBytes};

    fn backend() -> Option<Avx2Backend> {
        let backend = Avx2Backend::try_new();
        if backend.is_none() {
            eprintln!("AVX2 not available, skipping");
        }
        backend
    }

    #[test]
    fn test_avx2_widths() {
        let Some(backend) = backend() else { return };
        assert_eq!(MinMaxPrimitives::<f32>::simd_width(&backend), 8);
        assert_eq!(MinMaxPrimitives::<i16>::simd_width(&backend), 16);
        assert_eq!(MinMaxPrimitives::<f32>::backend_name(&backend), "avx2");
    }

    #[test]
    fn test_avx2_contiguous_with_remainder() {
        let Some(backend) = backend() else { return };
        let values: Vec<f32> = (0..37).map(|i| (i as f32 - 18.0) * 0.5).collect();
        let data = ElementBytes::from_slice(&values).unwrap();
        assert_eq!(backend.minmax_contiguous(data), (-9.0, 9.0));

        let values: Vec<i16> = (0..50).map(|i| if i == 49 { -300 } else { i }).collect();
        let data = ElementBytes::from_slice(&values).unwrap();
        assert_eq!(backend.minmax_contiguous(data), (-300, 48));
    }

    #[test]
    fn test_avx2_unaligned_source() {
        let Some(backend) = backend() else { return };
        let values: Vec<f32> = (0..33).map(|i| i as f32).collect();
        let mut buffer = vec![0u8; 3];
        buffer.extend_from_slice(bytemuck::cast_slice(&values));
        let data = ElementBytes::<f32>::new(&buffer[3..]).unwrap();
        assert_eq!(backend.minmax_contiguous(data), (0.0, 32.0));
    }

    #[test]
    fn test_avx2_strided() {
        let Some(backend) = backend() else { return };
        let values: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let bytes: &[u8] = bytemuck::cast_slice(&values);
        let data = StridedBytes::<f32>::new(bytes, 4, 33, 3).unwrap();
        assert_eq!(backend.minmax_strided(data), (1.0, 97.0));
        let data = StridedBytes::<f32>::new(bytes, 396, 100, -1).unwrap();
        assert_eq!(backend.minmax_strided(data), (0.0, 99.0));
    }
}
