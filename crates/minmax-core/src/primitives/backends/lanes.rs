//! Lane-parallel min/max loop shared by the vector backends
//!
//! Every vector backend runs the same algorithm and differs only in register
//! type, lane count and the three intrinsics it loads, mins and maxes with.
//! [`lane_kernels!`] stamps out the contiguous and strided kernels for one
//! (element, register) pair; [`impl_lane_primitives!`] wires them into
//! `MinMaxPrimitives`.
//!
//! The lane registers are seeded from the first vector of input rather than
//! from type sentinels, so a single run of `i16::MIN` or `f32::INFINITY`
//! reduces correctly.

use crate::numeric::Element;

/// Fold per-lane minima and maxima into one pair
#[inline(always)]
pub(crate) fn reduce<T: Element, const N: usize>(lo: &[T; N], hi: &[T; N]) -> (T, T) {
    let mut min = lo[0];
    let mut max = hi[0];
    for lane in 1..N {
        if lo[lane] < min {
            min = lo[lane];
        }
        if hi[lane] > max {
            max = hi[lane];
        }
    }
    (min, max)
}

#[inline(always)]
pub(crate) fn merge<T: Element>(acc: (T, T), other: (T, T)) -> (T, T) {
    let min = if other.0 < acc.0 { other.0 } else { acc.0 };
    let max = if other.1 > acc.1 { other.1 } else { acc.1 };
    (min, max)
}

/// Copy `N` elements spaced `step` bytes apart into `lane`
///
/// Element-wise loads into a staging buffer beat hardware gathers for this
/// access pattern.
///
/// # Safety
/// `base + k * step` must address a readable `T` for every `k < N`.
#[inline(always)]
pub(crate) unsafe fn gather<T: Element, const N: usize>(
    lane: &mut [T; N],
    base: *const u8,
    step: isize,
) {
    for (k, slot) in lane.iter_mut().enumerate() {
        *slot = base.offset(k as isize * step).cast::<T>().read_unaligned();
    }
}

/// Generate a contiguous and a strided kernel for one register type
///
/// `load` takes a `*const u8` (no alignment requirement) and returns the
/// register; `min` and `max` are the lane-wise intrinsics.
macro_rules! lane_kernels {
    (
        $(#[$attr:meta])*
        elem: $elem:ty,
        vector: $vec:ty,
        lanes: $lanes:literal,
        load: $load:ident,
        min: $min:ident,
        max: $max:ident,
        contiguous: $contiguous:ident,
        strided: $strided:ident $(,)?
    ) => {
        /// Lane-parallel `(min, max)` of a contiguous run
        ///
        /// # Safety
        /// The CPU must support the instruction set this function is compiled for.
        $(#[$attr])*
        pub(crate) unsafe fn $contiguous(
            data: $crate::source::ElementBytes<'_, $elem>,
        ) -> ($elem, $elem) {
            const LANES: usize = $lanes;
            const SIZE: usize = ::std::mem::size_of::<$elem>();

            let count = data.len();
            if count < LANES {
                return $crate::primitives::backends::scalar::minmax_pairwise(data);
            }

            let ptr = data.as_ptr();
            let full = count / LANES;
            let mut lo: $vec = $load(ptr);
            let mut hi = lo;
            for chunk in 1..full {
                let values = $load(ptr.add(chunk * LANES * SIZE));
                lo = $min(lo, values);
                hi = $max(hi, values);
            }

            let lo = ::std::mem::transmute::<$vec, [$elem; LANES]>(lo);
            let hi = ::std::mem::transmute::<$vec, [$elem; LANES]>(hi);
            let acc = $crate::primitives::backends::lanes::reduce(&lo, &hi);
            match data.tail(full * LANES) {
                Some(rest) => $crate::primitives::backends::lanes::merge(
                    acc,
                    $crate::primitives::backends::scalar::minmax_pairwise(rest),
                ),
                None => acc,
            }
        }

        /// Lane-parallel `(min, max)` of a strided progression
        ///
        /// # Safety
        /// The CPU must support the instruction set this function is compiled for.
        $(#[$attr])*
        pub(crate) unsafe fn $strided(
            data: $crate::source::StridedBytes<'_, $elem>,
        ) -> ($elem, $elem) {
            const LANES: usize = $lanes;

            let data = data.ascending();
            if let Some(contiguous) = data.as_contiguous() {
                return $contiguous(contiguous);
            }

            let count = data.len();
            if count < LANES {
                return $crate::primitives::backends::scalar::strided_pairwise(data);
            }

            let base = data.first_ptr();
            let step = data.stride_bytes();
            let block = LANES as isize * step;
            let full = count / LANES;

            let mut lane = [0 as $elem; LANES];
            $crate::primitives::backends::lanes::gather(&mut lane, base, step);
            let mut lo: $vec = $load(lane.as_ptr().cast::<u8>());
            let mut hi = lo;
            for chunk in 1..full {
                $crate::primitives::backends::lanes::gather(
                    &mut lane,
                    base.offset(chunk as isize * block),
                    step,
                );
                let values = $load(lane.as_ptr().cast::<u8>());
                lo = $min(lo, values);
                hi = $max(hi, values);
            }

            let lo = ::std::mem::transmute::<$vec, [$elem; LANES]>(lo);
            let hi = ::std::mem::transmute::<$vec, [$elem; LANES]>(hi);
            let acc = $crate::primitives::backends::lanes::reduce(&lo, &hi);
            match data.tail(full * LANES) {
                Some(rest) => $crate::primitives::backends::lanes::merge(
                    acc,
                    $crate::primitives::backends::scalar::strided_pairwise(rest),
                ),
                None => acc,
            }
        }
    };
}

/// Implement `MinMaxPrimitives` for a backend from `lane_kernels!` output
macro_rules! impl_lane_primitives {
    (
        $backend:ty, $name:literal;
        $($elem:ty => $lanes:literal, $contiguous:path, $strided:path;)+
    ) => {
        $(
            impl $crate::primitives::MinMaxPrimitives<$elem> for $backend {
                fn backend_name(&self) -> &'static str {
                    $name
                }

                fn simd_width(&self) -> usize {
                    $lanes
                }

                fn minmax_contiguous(
                    &self,
                    data: $crate::source::ElementBytes<'_, $elem>,
                ) -> ($elem, $elem) {
                    // Safety: the backend can only be constructed on a supporting CPU
                    unsafe { $contiguous(data) }
                }

                fn minmax_strided(
                    &self,
                    data: $crate::source::StridedBytes<'_, $elem>,
                ) -> ($elem, $elem) {
                    // Safety: the backend can only be constructed on a supporting CPU
                    unsafe { $strided(data) }
                }
            }
        )+
    };
}

/// Scalar fallback impl for builds without the backend's instruction set
macro_rules! impl_unavailable_primitives {
    ($backend:ty, $name:literal) => {
        impl<T: $crate::numeric::Element> $crate::primitives::MinMaxPrimitives<T> for $backend {
            fn backend_name(&self) -> &'static str {
                $name
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use {impl_lane_primitives, impl_unavailable_primitives, lane_kernels};
