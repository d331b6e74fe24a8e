//! Kernel entry points and the closed set of kernel-supported element types
//!
//! Callers pick a tier; the entry points resolve it against the host and run
//! the matching backend, falling back to the scalar backend when the
//! instruction set is missing. Only `f32` and `i16` have vector kernels; the
//! [`Kernel`] enum is how the rest of the workspace asks whether a dtype is
//! one of them.

use crate::error::Result;
use crate::numeric::{DType, Element, MinMaxResult};
use crate::primitives::{
    Avx2Backend, Avx512Backend, MinMaxPrimitives, NeonBackend, ScalarBackend, Sse2Backend,
};
use crate::source::{ElementBytes, StridedBytes};
use crate::tier::SimdTier;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for i16 {}
}

/// Element types with vector kernels on every tier
pub trait KernelElement: Element + sealed::Sealed {
    /// Run the contiguous kernel at `tier` (after resolving it)
    fn contiguous_at(tier: SimdTier, data: ElementBytes<'_, Self>) -> (Self, Self);

    /// Run the strided kernel at `tier` (after resolving it)
    fn strided_at(tier: SimdTier, data: StridedBytes<'_, Self>) -> (Self, Self);

    /// Name of the backend `tier` resolves to on this host
    fn backend_name_at(tier: SimdTier) -> &'static str;
}

/// Bind `$backend` to the backend for `$tier` and evaluate `$body`
macro_rules! with_backend {
    ($tier:expr, |$backend:ident| $body:expr) => {
        match $tier.resolve() {
            SimdTier::Avx512 => match Avx512Backend::try_new() {
                Some($backend) => $body,
                None => {
                    let $backend = ScalarBackend::new();
                    $body
                }
            },
            SimdTier::Avx2 => match Avx2Backend::try_new() {
                Some($backend) => $body,
                None => {
                    let $backend = ScalarBackend::new();
                    $body
                }
            },
            SimdTier::Sse2 => match Sse2Backend::try_new() {
                Some($backend) => $body,
                None => {
                    let $backend = ScalarBackend::new();
                    $body
                }
            },
            SimdTier::Neon => match NeonBackend::try_new() {
                Some($backend) => $body,
                None => {
                    let $backend = ScalarBackend::new();
                    $body
                }
            },
            SimdTier::Scalar => {
                let $backend = ScalarBackend::new();
                $body
            }
        }
    };
}

macro_rules! impl_kernel_element {
    ($($elem:ty),+) => {
        $(
            impl KernelElement for $elem {
                fn contiguous_at(tier: SimdTier, data: ElementBytes<'_, $elem>) -> ($elem, $elem) {
                    with_backend!(tier, |backend| backend.minmax_contiguous(data))
                }

                fn strided_at(tier: SimdTier, data: StridedBytes<'_, $elem>) -> ($elem, $elem) {
                    with_backend!(tier, |backend| backend.minmax_strided(data))
                }

                fn backend_name_at(tier: SimdTier) -> &'static str {
                    with_backend!(tier, |backend| {
                        MinMaxPrimitives::<$elem>::backend_name(&backend)
                    })
                }
            }
        )+
    };
}

impl_kernel_element!(f32, i16);

/// Contiguous min/max kernel
///
/// Reduces lane-parallel over full vectors, seeded from the first vector, and
/// finishes the remainder (or an input shorter than one vector) with the
/// scalar pairwise routine. The result for float input containing NaN is
/// unspecified.
///
/// # Example
/// ```
/// use minmax_core::{contiguous_minmax, ElementBytes, SimdTier};
///
/// let data = ElementBytes::from_slice(&[0.0f32, 1.0, -2.0, 0.0]).unwrap();
/// assert_eq!(contiguous_minmax(SimdTier::current(), data), (-2.0, 1.0));
/// ```
pub fn contiguous_minmax<T: KernelElement>(tier: SimdTier, data: ElementBytes<'_, T>) -> (T, T) {
    T::contiguous_at(tier, data)
}

/// Strided min/max kernel
///
/// Negative strides are rebased onto the last element and a unit stride runs
/// the contiguous kernel. Otherwise each vector is gathered element-wise.
pub fn strided_minmax<T: KernelElement>(tier: SimdTier, data: StridedBytes<'_, T>) -> (T, T) {
    T::strided_at(tier, data)
}

/// Contiguous min/max over a typed slice at the process-wide tier
///
/// # Errors
/// Returns [`Error::EmptyInput`](crate::Error::EmptyInput) for an empty slice.
pub fn minmax<T: KernelElement>(values: &[T]) -> Result<(T, T)> {
    Ok(contiguous_minmax(SimdTier::current(), ElementBytes::from_slice(values)?))
}

/// The contiguous and strided kernels for one element type at one tier
#[derive(Debug)]
pub struct KernelPair<T> {
    tier: SimdTier,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for KernelPair<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for KernelPair<T> {}

impl<T> PartialEq for KernelPair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tier == other.tier
    }
}

impl<T> Eq for KernelPair<T> {}

impl<T: KernelElement> KernelPair<T> {
    /// Kernels at the widest tier not wider than `tier` that the host supports
    pub fn new(tier: SimdTier) -> Self {
        Self {
            tier: tier.resolve(),
            _marker: PhantomData,
        }
    }

    /// The resolved tier these kernels run at
    pub fn tier(&self) -> SimdTier {
        self.tier
    }

    pub fn backend_name(&self) -> &'static str {
        T::backend_name_at(self.tier)
    }

    /// Elements per vector
    pub fn lanes(&self) -> usize {
        self.tier.lanes(T::DTYPE.item_size())
    }

    pub fn contiguous(&self, data: ElementBytes<'_, T>) -> (T, T) {
        contiguous_minmax(self.tier, data)
    }

    pub fn strided(&self, data: StridedBytes<'_, T>) -> (T, T) {
        strided_minmax(self.tier, data)
    }
}

/// A kernel pair for one of the kernel-supported element types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    F32(KernelPair<f32>),
    I16(KernelPair<i16>),
}

impl Kernel {
    /// Kernels for `dtype` at `tier`, `None` if the dtype has none
    pub fn for_dtype(dtype: DType, tier: SimdTier) -> Option<Kernel> {
        match dtype {
            DType::F32 => Some(Kernel::F32(KernelPair::new(tier))),
            DType::I16 => Some(Kernel::I16(KernelPair::new(tier))),
            _ => None,
        }
    }

    /// Whether `dtype` has vector kernels
    pub fn supports(dtype: DType) -> bool {
        matches!(dtype, DType::F32 | DType::I16)
    }

    pub fn dtype(&self) -> DType {
        match self {
            Kernel::F32(_) => DType::F32,
            Kernel::I16(_) => DType::I16,
        }
    }

    pub fn tier(&self) -> SimdTier {
        match self {
            Kernel::F32(pair) => pair.tier(),
            Kernel::I16(pair) => pair.tier(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Kernel::F32(pair) => pair.backend_name(),
            Kernel::I16(pair) => pair.backend_name(),
        }
    }

    /// Run the contiguous kernel over a buffer of whole elements
    pub fn run_contiguous(&self, bytes: &[u8]) -> Result<MinMaxResult> {
        Ok(match self {
            Kernel::F32(pair) => {
                let (min, max) = pair.contiguous(ElementBytes::new(bytes)?);
                MinMaxResult::F32(min, max)
            }
            Kernel::I16(pair) => {
                let (min, max) = pair.contiguous(ElementBytes::new(bytes)?);
                MinMaxResult::I16(min, max)
            }
        })
    }

    /// Run the strided kernel; `first` is a byte offset, `stride` is in elements
    pub fn run_strided(
        &self,
        bytes: &[u8],
        first: usize,
        len: usize,
        stride: isize,
    ) -> Result<MinMaxResult> {
        Ok(match self {
            Kernel::F32(pair) => {
                let (min, max) = pair.strided(StridedBytes::new(bytes, first, len, stride)?);
                MinMaxResult::F32(min, max)
            }
            Kernel::I16(pair) => {
                let (min, max) = pair.strided(StridedBytes::new(bytes, first, len, stride)?);
                MinMaxResult::I16(min, max)
            }
        })
    }
}
