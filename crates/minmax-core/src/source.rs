//! Validated element sources over raw byte buffers
//!
//! Host arrays hand us a byte buffer whose first element need not be aligned
//! to the element type, so kernels never see `&[T]` directly. Both source
//! types check their bounds once at construction; after that every element
//! they describe is readable and there is at least one of them.

use crate::error::{Error, Result};
use crate::numeric::Element;
use std::marker::PhantomData;
use std::mem::size_of;

/// A non-empty run of contiguous elements of type `T`, possibly unaligned
#[derive(Debug)]
pub struct ElementBytes<'a, T> {
    bytes: &'a [u8],
    _marker: PhantomData<T>,
}

impl<T> Clone for ElementBytes<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ElementBytes<'_, T> {}

impl<'a, T: Element> ElementBytes<'a, T> {
    /// Wrap a buffer holding a whole, non-zero number of elements
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyInput);
        }
        if bytes.len() % size_of::<T>() != 0 {
            return Err(Error::PartialElement {
                len: bytes.len(),
                item_size: size_of::<T>(),
            });
        }
        Ok(Self {
            bytes,
            _marker: PhantomData,
        })
    }

    /// View a typed slice
    pub fn from_slice(data: &'a [T]) -> Result<Self> {
        Self::new(bytemuck::cast_slice(data))
    }

    /// Number of elements (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() / size_of::<T>()
    }

    /// Always `false`; provided for API symmetry with slices
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Typed view when the buffer happens to be aligned for `T`
    #[inline]
    pub fn as_slice(&self) -> Option<&'a [T]> {
        bytemuck::try_cast_slice(self.bytes).ok()
    }

    #[inline]
    pub fn last(&self) -> T {
        let size = size_of::<T>();
        bytemuck::pod_read_unaligned(&self.bytes[self.bytes.len() - size..])
    }

    /// Elements from index `skip` on, `None` when nothing is left
    #[inline]
    pub fn tail(&self, skip: usize) -> Option<Self> {
        let start = skip.checked_mul(size_of::<T>())?;
        let rest = self.bytes.get(start..)?;
        (!rest.is_empty()).then_some(Self {
            bytes: rest,
            _marker: PhantomData,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        self.bytes
            .chunks_exact(size_of::<T>())
            .map(bytemuck::pod_read_unaligned::<T>)
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

/// A non-empty arithmetic progression of elements of type `T`
///
/// `first` is the byte offset of element 0 inside `bytes`; element `i` lives
/// at `first + i * stride * size_of::<T>()`. The stride is in elements, is
/// never zero, and may be negative.
#[derive(Debug)]
pub struct StridedBytes<'a, T> {
    bytes: &'a [u8],
    first: usize,
    len: usize,
    stride: isize,
    _marker: PhantomData<T>,
}

impl<T> Clone for StridedBytes<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StridedBytes<'_, T> {}

impl<'a, T: Element> StridedBytes<'a, T> {
    /// Describe `len` elements starting at byte `first`, `stride` elements apart
    pub fn new(bytes: &'a [u8], first: usize, len: usize, stride: isize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        if stride == 0 {
            return Err(Error::ZeroStride);
        }
        let (start, end) = Self::byte_span(first, len, stride).ok_or(Error::OutOfBounds {
            start: isize::MIN,
            end: isize::MAX,
            available: bytes.len(),
        })?;
        if start < 0 || end > bytes.len() as isize {
            return Err(Error::OutOfBounds {
                start,
                end,
                available: bytes.len(),
            });
        }
        Ok(Self {
            bytes,
            first,
            len,
            stride,
            _marker: PhantomData,
        })
    }

    /// Half-open byte range touched by the progression
    fn byte_span(first: usize, len: usize, stride: isize) -> Option<(isize, isize)> {
        let size = size_of::<T>() as isize;
        let first = isize::try_from(first).ok()?;
        let reach = isize::try_from(len - 1)
            .ok()?
            .checked_mul(stride)?
            .checked_mul(size)?;
        let last = first.checked_add(reach)?;
        Some((first.min(last), first.max(last).checked_add(size)?))
    }

    /// Number of elements (always at least one)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; provided for API symmetry with slices
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Stride in elements
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Stride in bytes
    #[inline]
    pub fn stride_bytes(&self) -> isize {
        self.stride * size_of::<T>() as isize
    }

    #[inline]
    fn offset_of(&self, index: usize) -> usize {
        (self.first as isize + index as isize * self.stride_bytes()) as usize
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let offset = self.offset_of(index);
        Some(bytemuck::pod_read_unaligned(
            &self.bytes[offset..offset + size_of::<T>()],
        ))
    }

    #[inline]
    pub fn last(&self) -> T {
        let offset = self.offset_of(self.len - 1);
        bytemuck::pod_read_unaligned(&self.bytes[offset..offset + size_of::<T>()])
    }

    /// The same element set walked with a positive stride
    ///
    /// A negative progression is rebased onto its last element.
    pub fn ascending(self) -> Self {
        if self.stride > 0 {
            return self;
        }
        Self {
            first: self.offset_of(self.len - 1),
            stride: -self.stride,
            ..self
        }
    }

    /// Contiguous view of a unit-stride progression
    pub fn as_contiguous(&self) -> Option<ElementBytes<'a, T>> {
        if self.stride != 1 {
            return None;
        }
        let end = self.first + self.len * size_of::<T>();
        Some(ElementBytes {
            bytes: &self.bytes[self.first..end],
            _marker: PhantomData,
        })
    }

    /// Elements from index `skip` on, `None` when nothing is left
    pub fn tail(&self, skip: usize) -> Option<Self> {
        if skip >= self.len {
            return None;
        }
        Some(Self {
            first: self.offset_of(skip),
            len: self.len - skip,
            ..*self
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let this = *self;
        (0..this.len).map(move |index| {
            let offset = this.offset_of(index);
            bytemuck::pod_read_unaligned(&this.bytes[offset..offset + size_of::<T>()])
        })
    }

    /// Address of element 0
    #[inline]
    pub(crate) fn first_ptr(&self) -> *const u8 {
        self.bytes[self.first..].as_ptr()
    }
}
