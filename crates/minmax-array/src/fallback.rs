//! Generic full-scan reduction
//!
//! Handles every element type, shape and stride pattern the kernels do not,
//! including broadcast (zero-stride) axes. Floats follow numpy `amin`/`amax`:
//! any NaN makes both results NaN.

use crate::error::{Error, Result};
use crate::view::ArrayView;
use minmax_core::{with_element_type, Element, MinMaxResult};

/// `(min, max)` of every logical element of `view` read as `T`
///
/// # Errors
/// [`Error::DTypeMismatch`] if `T` is not the view's element type and
/// [`Error::EmptyArray`] if the view has no elements.
pub fn fallback_minmax<T: Element>(view: &ArrayView<'_>) -> Result<(T, T)> {
    Error::check_dtype(T::DTYPE, view.dtype())?;
    if view.is_empty() {
        return Err(Error::EmptyArray);
    }

    let mut elements = Elements::<T>::new(view);
    let Some(first) = elements.next() else {
        return Err(Error::EmptyArray);
    };
    if first.is_unordered() {
        return Ok((first, first));
    }
    let (mut min, mut max) = (first, first);
    for value in elements {
        if value.is_unordered() {
            return Ok((value, value));
        }
        if value < min {
            min = value;
        } else if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

/// Full scan of `view` typed by its own element type
pub fn fallback_result(view: &ArrayView<'_>) -> Result<MinMaxResult> {
    with_element_type!(view.dtype(), T => {
        let (min, max) = fallback_minmax::<T>(view)?;
        Ok(T::into_result(min, max))
    })
}

/// Row-major odometer over the logical elements of a view
struct Elements<'v, 'a, T> {
    view: &'v ArrayView<'a>,
    byte_strides: Vec<isize>,
    index: Vec<usize>,
    offset: isize,
    remaining: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<'v, 'a, T: Element> Elements<'v, 'a, T> {
    fn new(view: &'v ArrayView<'a>) -> Self {
        Self {
            view,
            byte_strides: view.byte_strides(),
            index: vec![0; view.ndim()],
            offset: view.offset() as isize,
            remaining: view.len(),
            _marker: std::marker::PhantomData,
        }
    }

    fn advance(&mut self) {
        let shape = self.view.shape();
        for axis in (0..shape.len()).rev() {
            self.index[axis] += 1;
            self.offset += self.byte_strides[axis];
            if self.index[axis] < shape[axis] {
                return;
            }
            self.offset -= self.byte_strides[axis] * shape[axis] as isize;
            self.index[axis] = 0;
        }
    }
}

impl<T: Element> Iterator for Elements<'_, '_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.offset as usize;
        let value = bytemuck::pod_read_unaligned(
            self.view.data().get(start..start + std::mem::size_of::<T>())?,
        );
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(value)
    }
}
