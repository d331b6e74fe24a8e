//! Borrowed description of a host array
//!
//! An [`ArrayView`] is what a host array library hands the dispatcher: a byte
//! buffer, the element type, the byte offset of the first logical element,
//! and per-axis extents and strides. Everything about it is checked once at
//! construction, so the dispatcher and the fallback scan can address any
//! element without further bounds reasoning.

use crate::error::{Error, Result};
use minmax_core::{classify, contiguity, ContiguityFlags, DType, Element, LayoutClass};

/// A validated, read-only N-dimensional view over a byte buffer
///
/// Strides are in elements and may be negative or zero. The stride of a
/// size-1 axis never moves the address, so it is stored as 0. The offset need
/// not be aligned to the element size.
#[derive(Clone, Debug)]
pub struct ArrayView<'a> {
    data: &'a [u8],
    dtype: DType,
    offset: usize,
    shape: Vec<usize>,
    strides: Vec<isize>,
    count: usize,
    flags: ContiguityFlags,
    layout: LayoutClass,
}

impl<'a> ArrayView<'a> {
    /// Describe `data` with element strides
    ///
    /// # Errors
    /// - [`Error::RankMismatch`] if `shape` and `strides` differ in length
    /// - [`Error::OffsetOverflow`] if the extent cannot be addressed
    /// - [`Error::OutOfBounds`] if a non-empty view reaches outside `data`
    pub fn new(
        data: &'a [u8],
        dtype: DType,
        offset: usize,
        shape: &[usize],
        strides: &[isize],
    ) -> Result<Self> {
        if shape.len() != strides.len() {
            return Err(Error::RankMismatch {
                shape: shape.len(),
                strides: strides.len(),
            });
        }

        let count = shape
            .iter()
            .try_fold(1usize, |acc, &extent| acc.checked_mul(extent))
            .filter(|&count| isize::try_from(count).is_ok())
            .ok_or(Error::OffsetOverflow)?;

        if count > 0 {
            check_bounds(data.len(), dtype.item_size(), offset, shape, strides)?;
        }
        let strides = unit_axes_pinned(shape, strides);
        let flags = contiguity(shape, &strides);
        let layout = classify(shape, &strides);
        Ok(Self {
            data,
            dtype,
            offset,
            shape: shape.to_vec(),
            strides,
            count,
            flags,
            layout,
        })
    }

    /// Describe `data` with byte strides, as host array libraries report them
    ///
    /// # Errors
    /// As [`ArrayView::new`], plus [`Error::MisalignedStride`] for a byte
    /// stride that is not a multiple of the item size.
    pub fn with_byte_strides(
        data: &'a [u8],
        dtype: DType,
        offset: usize,
        shape: &[usize],
        byte_strides: &[isize],
    ) -> Result<Self> {
        let item_size = dtype.item_size() as isize;
        let strides = byte_strides
            .iter()
            .map(|&stride| {
                if stride % item_size != 0 {
                    return Err(Error::MisalignedStride {
                        stride,
                        item_size: dtype.item_size(),
                    });
                }
                Ok(stride / item_size)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(data, dtype, offset, shape, &strides)
    }

    /// One-dimensional contiguous view of a slice
    pub fn from_slice<T: Element>(values: &'a [T]) -> Self {
        let count = values.len();
        Self {
            data: bytemuck::cast_slice(values),
            dtype: T::DTYPE,
            offset: 0,
            shape: vec![count],
            strides: vec![1],
            count,
            flags: ContiguityFlags::all(),
            layout: classify(&[count], &[1]),
        }
    }

    /// Row-major view of the first `shape.iter().product()` elements of a slice
    pub fn from_shape<T: Element>(values: &'a [T], shape: &[usize]) -> Result<Self> {
        let mut strides = vec![0isize; shape.len()];
        let mut step: isize = 1;
        for (stride, &extent) in strides.iter_mut().zip(shape).rev() {
            *stride = step;
            let extent = isize::try_from(extent).map_err(|_| Error::OffsetOverflow)?;
            step = step.checked_mul(extent).ok_or(Error::OffsetOverflow)?;
        }
        Self::new(bytemuck::cast_slice(values), T::DTYPE, 0, shape, &strides)
    }

    /// The same elements with the axis order reversed
    pub fn transposed(&self) -> Self {
        let shape: Vec<usize> = self.shape.iter().rev().copied().collect();
        let strides: Vec<isize> = self.strides.iter().rev().copied().collect();
        self.relaid(self.offset, shape, strides)
    }

    /// The same elements with `axis` walked backwards
    pub fn reversed(&self, axis: usize) -> Result<Self> {
        self.check_axis(axis)?;
        let mut strides = self.strides.clone();
        let mut offset = self.offset;
        if self.count > 0 {
            let extent = self.shape[axis] as isize;
            let reach = (extent - 1) * self.strides[axis] * self.item_size() as isize;
            offset = (offset as isize + reach) as usize;
        }
        strides[axis] = strides[axis].checked_neg().ok_or(Error::OffsetOverflow)?;
        Ok(self.relaid(offset, self.shape.clone(), strides))
    }

    /// Every `step`-th element along `axis`, starting with the first
    pub fn stepped(&self, axis: usize, step: usize) -> Result<Self> {
        self.check_axis(axis)?;
        if step == 0 {
            return Err(minmax_core::Error::ZeroStride.into());
        }
        let signed = isize::try_from(step).map_err(|_| Error::OffsetOverflow)?;
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape[axis] = shape[axis].div_ceil(step);
        strides[axis] = strides[axis].checked_mul(signed).ok_or(Error::OffsetOverflow)?;
        Ok(self.relaid(self.offset, shape, strides))
    }

    /// A view over a subset of this view's address set
    fn relaid(&self, offset: usize, shape: Vec<usize>, strides: Vec<isize>) -> Self {
        let count = shape.iter().product();
        let strides = unit_axes_pinned(&shape, &strides);
        let flags = contiguity(&shape, &strides);
        let layout = classify(&shape, &strides);
        Self {
            data: self.data,
            dtype: self.dtype,
            offset,
            shape,
            strides,
            count,
            flags,
            layout,
        }
    }

    fn check_axis(&self, axis: usize) -> Result<()> {
        if axis >= self.shape.len() {
            return Err(Error::AxisOutOfRange {
                axis,
                ndim: self.shape.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Byte offset of the first logical element
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Element strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Byte strides
    ///
    /// Exact for every non-empty view. An empty view is never addressed, so
    /// its strides saturate instead of overflowing.
    pub fn byte_strides(&self) -> Vec<isize> {
        let item_size = self.item_size() as isize;
        self.strides
            .iter()
            .map(|&stride| stride.saturating_mul(item_size))
            .collect()
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of logical elements
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn item_size(&self) -> usize {
        self.dtype.item_size()
    }

    #[inline]
    pub fn flags(&self) -> ContiguityFlags {
        self.flags
    }

    #[inline]
    pub fn layout(&self) -> LayoutClass {
        self.layout
    }

    /// The `count * item_size` bytes of a contiguous view
    pub fn contiguous_bytes(&self) -> Option<&'a [u8]> {
        if !self.layout.is_contiguous() {
            return None;
        }
        let end = self.offset.checked_add(self.count * self.item_size())?;
        self.data.get(self.offset..end)
    }

    /// Read the element at a multi-dimensional index
    pub fn get<T: Element>(&self, index: &[usize]) -> Result<Option<T>> {
        Error::check_dtype(T::DTYPE, self.dtype)?;
        if index.len() != self.ndim() {
            return Err(Error::RankMismatch {
                shape: self.ndim(),
                strides: index.len(),
            });
        }
        if index.iter().zip(&self.shape).any(|(&i, &extent)| i >= extent) {
            return Ok(None);
        }
        let offset = index
            .iter()
            .zip(&self.strides)
            .fold(self.offset as isize, |acc, (&i, &stride)| {
                acc + i as isize * stride * self.item_size() as isize
            }) as usize;
        Ok(Some(bytemuck::pod_read_unaligned(
            &self.data[offset..offset + self.item_size()],
        )))
    }
}

/// `strides` with the stride of every size-1 axis replaced by 0
fn unit_axes_pinned(shape: &[usize], strides: &[isize]) -> Vec<isize> {
    shape
        .iter()
        .zip(strides)
        .map(|(&extent, &stride)| if extent == 1 { 0 } else { stride })
        .collect()
}

/// Check that every element of a non-empty view lies inside the buffer
fn check_bounds(
    available: usize,
    item_size: usize,
    offset: usize,
    shape: &[usize],
    strides: &[isize],
) -> Result<()> {
    let item = item_size as isize;
    let base = isize::try_from(offset).map_err(|_| Error::OffsetOverflow)?;
    let (mut low, mut high) = (base, base);
    for (&extent, &stride) in shape.iter().zip(strides) {
        let reach = isize::try_from(extent - 1)
            .ok()
            .and_then(|steps| steps.checked_mul(stride))
            .and_then(|elements| elements.checked_mul(item))
            .ok_or(Error::OffsetOverflow)?;
        if reach < 0 {
            low = low.checked_add(reach).ok_or(Error::OffsetOverflow)?;
        } else {
            high = high.checked_add(reach).ok_or(Error::OffsetOverflow)?;
        }
    }
    let end = high.checked_add(item).ok_or(Error::OffsetOverflow)?;
    if low < 0 || end > available as isize {
        return Err(Error::OutOfBounds {
            start: low,
            end,
            available,
        });
    }
    Ok(())
}
