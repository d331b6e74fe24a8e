//! Layout classification for shape/stride tuples
//!
//! A kernel can only run over a view whose whole traversal is one arithmetic
//! progression of addresses. [`classify`] decides whether that holds, without
//! touching any data. Strides are in elements, not bytes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// numpy-style contiguity flags (size-1 axes are ignored)
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ContiguityFlags: u8 {
        /// Row-major, last axis fastest
        const C_CONTIGUOUS = 1 << 0;
        /// Column-major, first axis fastest
        const F_CONTIGUOUS = 1 << 1;
    }
}

/// Axis order of a contiguous layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOrder {
    RowMajor,
    ColumnMajor,
}

/// How a view's elements can be traversed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutClass {
    /// Unit stride over the whole extent, starting at the first element
    Contiguous(MemoryOrder),
    /// One constant non-zero stride from the first element
    SingleStrideLinear { stride: isize },
    /// Needs two or more independent strides, or broadcasts an axis
    Unsupported,
}

impl LayoutClass {
    /// Stride of the single progression, if there is one
    pub fn linear_stride(&self) -> Option<isize> {
        match *self {
            LayoutClass::Contiguous(_) => Some(1),
            LayoutClass::SingleStrideLinear { stride } => Some(stride),
            LayoutClass::Unsupported => None,
        }
    }

    pub fn is_contiguous(&self) -> bool {
        matches!(self, LayoutClass::Contiguous(_))
    }
}

/// Compute the contiguity flags of a shape/stride pair
///
/// Zero-size shapes are both C- and F-contiguous.
pub fn contiguity(shape: &[usize], strides: &[isize]) -> ContiguityFlags {
    debug_assert_eq!(shape.len(), strides.len());
    if shape.contains(&0) {
        return ContiguityFlags::all();
    }

    let mut flags = ContiguityFlags::empty();
    if is_packed(shape.iter().zip(strides).rev()) {
        flags |= ContiguityFlags::C_CONTIGUOUS;
    }
    if is_packed(shape.iter().zip(strides)) {
        flags |= ContiguityFlags::F_CONTIGUOUS;
    }
    flags
}

/// Axes given fastest-first; packed when each stride is the product of the
/// extents before it
fn is_packed<'a>(axes: impl Iterator<Item = (&'a usize, &'a isize)>) -> bool {
    let mut expected: isize = 1;
    for (&extent, &stride) in axes {
        if extent == 1 {
            continue;
        }
        if stride != expected {
            return false;
        }
        expected = match isize::try_from(extent).ok().and_then(|n| expected.checked_mul(n)) {
            Some(next) => next,
            None => return false,
        };
    }
    true
}

/// Classify a view's traversal
///
/// Size-1 axes are dropped first. Remaining axes are coalesced in row-major
/// order, then in column-major order; if either leaves a single axis with a
/// non-zero stride the view is `SingleStrideLinear`.
pub fn classify(shape: &[usize], strides: &[isize]) -> LayoutClass {
    debug_assert_eq!(shape.len(), strides.len());
    let flags = contiguity(shape, strides);
    if flags.contains(ContiguityFlags::C_CONTIGUOUS) {
        return LayoutClass::Contiguous(MemoryOrder::RowMajor);
    }
    if flags.contains(ContiguityFlags::F_CONTIGUOUS) {
        return LayoutClass::Contiguous(MemoryOrder::ColumnMajor);
    }

    let axes: Vec<(usize, isize)> = shape
        .iter()
        .zip(strides)
        .filter(|&(&extent, _)| extent != 1)
        .map(|(&extent, &stride)| (extent, stride))
        .collect();

    let stride = coalesce(axes.iter().copied()).or_else(|| coalesce(axes.iter().rev().copied()));
    match stride {
        Some(stride) if stride != 0 => LayoutClass::SingleStrideLinear { stride },
        _ => LayoutClass::Unsupported,
    }
}

/// Merge axes listed outermost-first into one progression
///
/// Returns the innermost stride when every outer stride equals the stride
/// and extent of the axis inside it.
fn coalesce(axes: impl DoubleEndedIterator<Item = (usize, isize)>) -> Option<isize> {
    let mut axes = axes.rev();
    let (mut extent, stride) = axes.next()?;
    for (outer_extent, outer_stride) in axes {
        let span = stride.checked_mul(isize::try_from(extent).ok()?)?;
        if outer_stride != span {
            return None;
        }
        extent = extent.checked_mul(outer_extent)?;
    }
    Some(stride)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major() {
        assert_eq!(classify(&[13], &[1]), LayoutClass::Contiguous(MemoryOrder::RowMajor));
        assert_eq!(classify(&[15, 2], &[2, 1]), LayoutClass::Contiguous(MemoryOrder::RowMajor));
        assert_eq!(
            classify(&[2, 3, 4], &[12, 4, 1]),
            LayoutClass::Contiguous(MemoryOrder::RowMajor)
        );
    }

    #[test]
    fn test_column_major() {
        // transpose of a (2, 15) row-major array
        assert_eq!(
            classify(&[15, 2], &[1, 15]),
            LayoutClass::Contiguous(MemoryOrder::ColumnMajor)
        );
        assert_eq!(
            contiguity(&[15, 2], &[1, 15]),
            ContiguityFlags::F_CONTIGUOUS
        );
    }

    #[test]
    fn test_one_dimensional_is_both_orders() {
        assert_eq!(contiguity(&[8], &[1]), ContiguityFlags::all());
        assert_eq!(contiguity(&[1, 8, 1], &[99, 1, -7]), ContiguityFlags::all());
    }

    #[test]
    fn test_size_one_axes_are_ignored() {
        assert_eq!(
            classify(&[1, 5, 1], &[3, 1, 42]),
            LayoutClass::Contiguous(MemoryOrder::RowMajor)
        );
        assert_eq!(
            classify(&[1, 5, 1], &[0, -2, 7]),
            LayoutClass::SingleStrideLinear { stride: -2 }
        );
        assert_eq!(
            classify(&[1, 1], &[5, 9]),
            LayoutClass::Contiguous(MemoryOrder::RowMajor)
        );
    }

    #[test]
    fn test_scalar_shape() {
        assert_eq!(classify(&[], &[]), LayoutClass::Contiguous(MemoryOrder::RowMajor));
    }

    #[test]
    fn test_negative_and_non_unit_strides() {
        assert_eq!(classify(&[13], &[-1]), LayoutClass::SingleStrideLinear { stride: -1 });
        assert_eq!(classify(&[7], &[2]), LayoutClass::SingleStrideLinear { stride: 2 });
        assert_eq!(classify(&[7], &[-3]), LayoutClass::SingleStrideLinear { stride: -3 });
    }

    #[test]
    fn test_coalesced_row_major_slices() {
        // a[:, ::2] of a (3, 8) array is still one progression
        assert_eq!(classify(&[3, 4], &[8, 2]), LayoutClass::SingleStrideLinear { stride: 2 });
        // fully reversed 2-D array
        assert_eq!(classify(&[2, 3], &[-3, -1]), LayoutClass::SingleStrideLinear { stride: -1 });
    }

    #[test]
    fn test_coalesced_column_major_slices() {
        // transpose of a[:, ::2]
        assert_eq!(classify(&[4, 3], &[2, 8]), LayoutClass::SingleStrideLinear { stride: 2 });
    }

    #[test]
    fn test_independent_strides_are_unsupported() {
        // a[:, :2] of a (3, 4) array: rows skip the last two columns
        assert_eq!(classify(&[3, 2], &[4, 1]), LayoutClass::Unsupported);
        // a[::-1, :] of a row-major (2, 3) array
        assert_eq!(classify(&[2, 3], &[-3, 1]), LayoutClass::Unsupported);
        assert_eq!(classify(&[2, 3, 4], &[24, 4, 1]), LayoutClass::Unsupported);
    }

    #[test]
    fn test_broadcast_axes_are_unsupported() {
        assert_eq!(classify(&[5], &[0]), LayoutClass::Unsupported);
        assert_eq!(classify(&[4, 3], &[0, 1]), LayoutClass::Unsupported);
    }

    #[test]
    fn test_empty_shapes() {
        assert_eq!(contiguity(&[0, 0], &[0, 0]), ContiguityFlags::all());
        assert_eq!(classify(&[3, 0], &[-7, 2]), LayoutClass::Contiguous(MemoryOrder::RowMajor));
    }

    #[test]
    fn test_linear_stride() {
        assert_eq!(LayoutClass::Contiguous(MemoryOrder::ColumnMajor).linear_stride(), Some(1));
        assert_eq!(LayoutClass::SingleStrideLinear { stride: -4 }.linear_stride(), Some(-4));
        assert_eq!(LayoutClass::Unsupported.linear_stride(), None);
        assert!(!LayoutClass::Unsupported.is_contiguous());
    }
}
