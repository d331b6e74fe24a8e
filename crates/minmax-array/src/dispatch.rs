//! Routing arrays to kernels
//!
//! The dispatcher is the only place that looks at both the element type and
//! the layout of a view. Supported element types with a contiguous or
//! single-stride layout go to a kernel; everything else takes the generic
//! scan, which is always correct.

use crate::config::DispatchConfig;
use crate::error::{Error, Result};
use crate::fallback::fallback_result;
use crate::view::ArrayView;
use minmax_core::{Kernel, LayoutClass, MinMaxResult, SimdTier};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// Why a view took the generic scan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The element type has no kernels
    UnsupportedType,
    /// The layout needs more than one stride
    UnsupportedLayout,
    /// Configuration asked for the generic scan
    Forced,
}

/// The algorithm a view is reduced with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Contiguous kernel over `count * item_size` bytes from the offset
    Contiguous(Kernel),
    /// Strided kernel from the offset with one element stride
    Strided { kernel: Kernel, stride: isize },
    /// Generic full scan
    Fallback(FallbackReason),
}

impl Route {
    pub fn is_kernel(&self) -> bool {
        !matches!(self, Route::Fallback(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Contiguous(kernel) => write!(f, "contiguous[{}]", kernel.tier()),
            Route::Strided { kernel, stride } => {
                write!(f, "strided[{}, stride={stride}]", kernel.tier())
            }
            Route::Fallback(reason) => write!(f, "fallback[{reason:?}]"),
        }
    }
}

/// Routes views to kernels at one SIMD tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    tier: SimdTier,
    force_fallback: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher at the process-wide detected tier
    pub fn new() -> Self {
        Self::with_tier(SimdTier::current())
    }

    /// Dispatcher at `tier`, degraded to what the host supports
    pub fn with_tier(tier: SimdTier) -> Self {
        let resolved = tier.resolve();
        if resolved != tier {
            debug!(requested = %tier, resolved = %resolved, "SIMD tier degraded");
        }
        Self {
            tier: resolved,
            force_fallback: false,
        }
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        let dispatcher = match config.simd {
            Some(tier) => Self::with_tier(tier),
            None => Self::new(),
        };
        Self {
            force_fallback: config.force_fallback,
            ..dispatcher
        }
    }

    /// The resolved tier kernels run at
    pub fn tier(&self) -> SimdTier {
        self.tier
    }

    pub fn forces_fallback(&self) -> bool {
        self.force_fallback
    }

    /// Decide how `view` would be reduced, without touching its data
    pub fn route(&self, view: &ArrayView<'_>) -> Route {
        if self.force_fallback {
            return Route::Fallback(FallbackReason::Forced);
        }
        let Some(kernel) = Kernel::for_dtype(view.dtype(), self.tier) else {
            return Route::Fallback(FallbackReason::UnsupportedType);
        };
        match view.layout() {
            LayoutClass::Contiguous(_) => Route::Contiguous(kernel),
            LayoutClass::SingleStrideLinear { stride } => Route::Strided { kernel, stride },
            LayoutClass::Unsupported => Route::Fallback(FallbackReason::UnsupportedLayout),
        }
    }

    /// Minimum and maximum of every element of `view`
    ///
    /// The result is typed as the view's element type on every route.
    ///
    /// # Errors
    /// [`Error::EmptyArray`] if the view has no elements.
    pub fn compute(&self, view: &ArrayView<'_>) -> Result<MinMaxResult> {
        if view.is_empty() {
            return Err(Error::EmptyArray);
        }
        let route = self.route(view);
        trace!(dtype = %view.dtype(), count = view.len(), %route, "minmax dispatch");

        match route {
            Route::Contiguous(kernel) => {
                let bytes = view.contiguous_bytes().ok_or(Error::OutOfBounds {
                    start: view.offset() as isize,
                    end: (view.offset() + view.len() * view.item_size()) as isize,
                    available: view.data().len(),
                })?;
                Ok(kernel.run_contiguous(bytes)?)
            }
            Route::Strided { kernel, stride } => {
                Ok(kernel.run_strided(view.data(), view.offset(), view.len(), stride)?)
            }
            Route::Fallback(_) => fallback_result(view),
        }
    }
}

/// Minimum and maximum of `view` with the default dispatcher
///
/// # Example
/// ```rust
/// use minmax_array::{minmax, ArrayView};
/// use minmax_core::MinMaxResult;
///
/// let values = [0.0f32, 1.0, -2.0, 0.0];
/// let result = minmax(&ArrayView::from_slice(&values)).unwrap();
/// assert_eq!(result, MinMaxResult::F32(-2.0, 1.0));
/// ```
pub fn minmax(view: &ArrayView<'_>) -> Result<MinMaxResult> {
    Dispatcher::new().compute(view)
}
