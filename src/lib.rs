//! Layout- and type-aware SIMD min/max reduction over numeric arrays
//!
//! This crate re-exports the workspace:
//!
//! - [`minmax_core`]: element types, SIMD tiers, layout classification and
//!   the kernels
//! - [`minmax_array`]: array views, routing and the generic scan
//!
//! # Example
//!
//! ```rust
//! use fast_minmax::prelude::*;
//!
//! let values: Vec<f32> = (0..30).map(|i| (i as f32 - 10.0) * 0.5).collect();
//! let grid = ArrayView::from_shape(&values, &[15, 2]).unwrap();
//!
//! assert_eq!(minmax(&grid).unwrap(), MinMaxResult::F32(-5.0, 9.5));
//! assert_eq!(minmax(&grid.transposed()).unwrap(), MinMaxResult::F32(-5.0, 9.5));
//! ```

pub use minmax_array;
pub use minmax_core;

pub use minmax_array::{
    fallback_minmax, minmax, ArrayView, DispatchConfig, Dispatcher, Error, FallbackReason,
    Result, Route,
};
pub use minmax_core::{DType, Element, Kernel, LayoutClass, MinMaxResult, SimdTier};

/// Prelude module for convenient imports
pub mod prelude {
    pub use minmax_array::{minmax, ArrayView, DispatchConfig, Dispatcher, Route};
    pub use minmax_core::{DType, Element, LayoutClass, MinMaxResult, SimdTier};
}
