//! SIMD min/max kernels for numeric arrays
//!
//! This crate provides the kernel layer of `fast-minmax`: element types, SIMD
//! tier detection, layout classification, validated byte sources and the
//! per-tier backends that reduce them.

#![cfg_attr(feature = "nightly", feature(stdarch_x86_avx512))]
//!
//! # Architecture Overview
//!
//! 1. **Sources** - [`ElementBytes`] and [`StridedBytes`] check bounds once,
//!    so kernels never fail
//! 2. **Backends** - one type per instruction set implementing
//!    [`MinMaxPrimitives`], constructible only on a supporting CPU
//! 3. **Kernels** - [`contiguous_minmax`] and [`strided_minmax`] resolve a
//!    [`SimdTier`] and pick the backend; [`Kernel`] is the closed set of
//!    element types that have them
//!
//! # Example
//!
//! ```rust
//! use minmax_core::{contiguous_minmax, strided_minmax, ElementBytes, SimdTier, StridedBytes};
//!
//! let tier = SimdTier::current();
//! let data = ElementBytes::from_slice(&[1i16, -2, -5]).unwrap();
//! assert_eq!(contiguous_minmax(tier, data), (-5, 1));
//!
//! // every other element, walked backwards
//! let values: Vec<f32> = (0..10).map(|i| i as f32).collect();
//! let bytes: &[u8] = bytemuck::cast_slice(&values);
//! let data = StridedBytes::<f32>::new(bytes, 36, 5, -2).unwrap();
//! assert_eq!(strided_minmax(tier, data), (1.0, 9.0));
//! ```

pub mod error;
pub mod kernels;
pub mod layout;
pub mod numeric;
pub mod primitives;
pub mod source;
pub mod tier;

// Re-export core types
pub use error::{Error, Result};

pub use kernels::{
    contiguous_minmax, minmax, strided_minmax, Kernel, KernelElement, KernelPair,
};
pub use layout::{classify, contiguity, ContiguityFlags, LayoutClass, MemoryOrder};
pub use numeric::{DType, Element, MinMaxResult};
pub use primitives::{
    best_backend_name, Avx2Backend, Avx512Backend, MinMaxPrimitives, NeonBackend,
    ScalarBackend, Sse2Backend,
};
pub use source::{ElementBytes, StridedBytes};
pub use tier::{SimdTier, TIER_ENV_VAR};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        contiguous_minmax, strided_minmax, DType, Element, ElementBytes, Error, Kernel,
        KernelElement, LayoutClass, MinMaxResult, Result, SimdTier, StridedBytes,
    };
}
