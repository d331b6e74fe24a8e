//! Scalar backend implementation
//!
//! This backend works for every element type without any SIMD instructions.
//! Its pairwise routines also reduce the remainders the vector backends leave
//! behind.

use crate::numeric::Element;
use crate::primitives::MinMaxPrimitives;
use crate::source::{ElementBytes, StridedBytes};

/// Scalar backend - works for all element types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

// Generic implementation for all types
impl<T: Element> MinMaxPrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}

/// Pairwise min/max seeded with `seed`
///
/// Each pair costs one comparison to order it, then the smaller element is
/// tested only against the minimum and the larger only against the maximum.
/// An odd trailing element is skipped, so `seed` must be the last element of
/// `items`.
#[inline]
fn pairwise<T: Element>(seed: T, mut items: impl Iterator<Item = T>) -> (T, T) {
    let (mut lo, mut hi) = (seed, seed);
    while let Some(a) = items.next() {
        let Some(b) = items.next() else { break };
        let (smaller, larger) = if a < b { (a, b) } else { (b, a) };
        if smaller < lo {
            lo = smaller;
        }
        if larger > hi {
            hi = larger;
        }
    }
    (lo, hi)
}

/// Scalar `(min, max)` of a contiguous run
pub fn minmax_pairwise<T: Element>(data: ElementBytes<'_, T>) -> (T, T) {
    match data.as_slice() {
        Some(slice) => pairwise(data.last(), slice.iter().copied()),
        None => pairwise(data.last(), data.iter()),
    }
}

/// Scalar `(min, max)` of a strided progression
pub fn strided_pairwise<T: Element>(data: StridedBytes<'_, T>) -> (T, T) {
    pairwise(data.last(), data.iter())
}
