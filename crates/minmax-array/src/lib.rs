//! Layout-aware min/max dispatch over strided array views
//!
//! This crate models the host array as an [`ArrayView`] and decides, per
//! call, whether the kernels in `minmax-core` can reduce it or whether it
//! takes the generic full scan.
//!
//! # Example
//!
//! ```rust
//! use minmax_array::{ArrayView, Dispatcher, Route};
//! use minmax_core::MinMaxResult;
//!
//! let values: Vec<i16> = (0..13).collect();
//! let reversed = ArrayView::from_slice(&values).reversed(0).unwrap();
//!
//! let dispatcher = Dispatcher::new();
//! assert!(matches!(dispatcher.route(&reversed), Route::Strided { stride: -1, .. }));
//! assert_eq!(dispatcher.compute(&reversed).unwrap(), MinMaxResult::I16(0, 12));
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fallback;
pub mod view;

// Re-export main types
pub use config::DispatchConfig;
pub use dispatch::{minmax, Dispatcher, FallbackReason, Route};
pub use error::{Error, Result};
pub use fallback::{fallback_minmax, fallback_result};
pub use view::ArrayView;
