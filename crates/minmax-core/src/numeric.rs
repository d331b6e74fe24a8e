//! Element types and typed min/max results
//!
//! `DType` is the runtime tag a host array carries; `Element` is the Rust
//! type behind each tag. Only `f32` and `i16` have SIMD kernels, every other
//! element type is reduced by the generic full scan.

use bytemuck::Pod;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime element type tag
///
/// Serializes under the numpy name (`"int16"`); the Rust type name (`"i16"`)
/// is accepted on input as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    #[serde(rename = "float32", alias = "f32")]
    F32,
    #[serde(rename = "float64", alias = "f64")]
    F64,
    #[serde(rename = "int8", alias = "i8")]
    I8,
    #[serde(rename = "int16", alias = "i16")]
    I16,
    #[serde(rename = "int32", alias = "i32")]
    I32,
    #[serde(rename = "int64", alias = "i64")]
    I64,
    #[serde(rename = "uint8", alias = "u8")]
    U8,
    #[serde(rename = "uint16", alias = "u16")]
    U16,
    #[serde(rename = "uint32", alias = "u32")]
    U32,
    #[serde(rename = "uint64", alias = "u64")]
    U64,
}

impl DType {
    /// All element types, narrow to wide within each family
    pub const ALL: [DType; 10] = [
        DType::F32,
        DType::F64,
        DType::I8,
        DType::I16,
        DType::I32,
        DType::I64,
        DType::U8,
        DType::U16,
        DType::U32,
        DType::U64,
    ];

    /// Size of one element in bytes
    pub const fn item_size(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }

    /// numpy-style name of the type
    pub const fn name(self) -> &'static str {
        match self {
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::I8 => "int8",
            DType::I16 => "int16",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::U8 => "uint8",
            DType::U16 => "uint16",
            DType::U32 => "uint32",
            DType::U64 => "uint64",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A `(min, max)` pair typed as the element type it was computed over
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MinMaxResult {
    F32(f32, f32),
    F64(f64, f64),
    I8(i8, i8),
    I16(i16, i16),
    I32(i32, i32),
    I64(i64, i64),
    U8(u8, u8),
    U16(u16, u16),
    U32(u32, u32),
    U64(u64, u64),
}

impl MinMaxResult {
    /// Element type of both values
    pub fn dtype(&self) -> DType {
        match self {
            MinMaxResult::F32(..) => DType::F32,
            MinMaxResult::F64(..) => DType::F64,
            MinMaxResult::I8(..) => DType::I8,
            MinMaxResult::I16(..) => DType::I16,
            MinMaxResult::I32(..) => DType::I32,
            MinMaxResult::I64(..) => DType::I64,
            MinMaxResult::U8(..) => DType::U8,
            MinMaxResult::U16(..) => DType::U16,
            MinMaxResult::U32(..) => DType::U32,
            MinMaxResult::U64(..) => DType::U64,
        }
    }

    /// Typed pair, `None` if `T` is not the result's element type
    pub fn get<T: Element>(&self) -> Option<(T, T)> {
        T::from_result(self)
    }

    /// Both values widened to `f64`
    ///
    /// Lossy for 64-bit integers beyond 2^53.
    pub fn to_f64(&self) -> (f64, f64) {
        fn widen<T: Element>(min: T, max: T) -> (f64, f64) {
            (
                min.to_f64().unwrap_or(f64::NAN),
                max.to_f64().unwrap_or(f64::NAN),
            )
        }
        match *self {
            MinMaxResult::F32(lo, hi) => widen(lo, hi),
            MinMaxResult::F64(lo, hi) => widen(lo, hi),
            MinMaxResult::I8(lo, hi) => widen(lo, hi),
            MinMaxResult::I16(lo, hi) => widen(lo, hi),
            MinMaxResult::I32(lo, hi) => widen(lo, hi),
            MinMaxResult::I64(lo, hi) => widen(lo, hi),
            MinMaxResult::U8(lo, hi) => widen(lo, hi),
            MinMaxResult::U16(lo, hi) => widen(lo, hi),
            MinMaxResult::U32(lo, hi) => widen(lo, hi),
            MinMaxResult::U64(lo, hi) => widen(lo, hi),
        }
    }
}

/// Primitive numeric type that can be read out of a byte buffer and reduced
///
/// Comparisons use `PartialOrd`. For floats, NaN is "unordered": the SIMD
/// kernels assume it never occurs, the generic scan propagates it.
pub trait Element: Pod + PartialOrd + ToPrimitive + fmt::Debug + Send + Sync + 'static {
    /// Runtime tag for this type
    const DTYPE: DType;

    /// Whether the value is outside the type's total order (NaN)
    #[inline(always)]
    fn is_unordered(self) -> bool {
        false
    }

    /// Wrap a pair into the matching result variant
    fn into_result(min: Self, max: Self) -> MinMaxResult;

    /// Unwrap a result of this element type
    fn from_result(result: &MinMaxResult) -> Option<(Self, Self)>;
}

macro_rules! impl_element {
    ($type:ty, $variant:ident) => {
        impl_element!($type, $variant, {});
    };
    ($type:ty, $variant:ident, float) => {
        impl_element!($type, $variant, {
            #[inline(always)]
            fn is_unordered(self) -> bool {
                self.is_nan()
            }
        });
    };
    ($type:ty, $variant:ident, { $($extra:tt)* }) => {
        impl Element for $type {
            const DTYPE: DType = DType::$variant;

            $($extra)*

            #[inline]
            fn into_result(min: Self, max: Self) -> MinMaxResult {
                MinMaxResult::$variant(min, max)
            }

            #[inline]
            fn from_result(result: &MinMaxResult) -> Option<(Self, Self)> {
                match *result {
                    MinMaxResult::$variant(lo, hi) => Some((lo, hi)),
                    _ => None,
                }
            }
        }
    };
}

impl_element!(f32, F32, float);
impl_element!(f64, F64, float);
impl_element!(i8, I8);
impl_element!(i16, I16);
impl_element!(i32, I32);
impl_element!(i64, I64);
impl_element!(u8, U8);
impl_element!(u16, U16);
impl_element!(u32, U32);
impl_element!(u64, U64);

/// Evaluate a generic expression with `$t` bound to the Rust type of a `DType`
///
/// ```rust
/// use minmax_core::{with_element_type, DType};
///
/// let size = with_element_type!(DType::I16, T => std::mem::size_of::<T>());
/// assert_eq!(size, 2);
/// ```
#[macro_export]
macro_rules! with_element_type {
    ($dtype:expr, $t:ident => $body:expr) => {
        match $dtype {
            $crate::DType::F32 => {
                type $t = f32;
                $body
            }
            $crate::DType::F64 => {
                type $t = f64;
                $body
            }
            $crate::DType::I8 => {
                type $t = i8;
                $body
            }
            $crate::DType::I16 => {
                type $t = i16;
                $body
            }
            $crate::DType::I32 => {
                type $t = i32;
                $body
            }
            $crate::DType::I64 => {
                type $t = i64;
                $body
            }
            $crate::DType::U8 => {
                type $t = u8;
                $body
            }
            $crate::DType::U16 => {
                type $t = u16;
                $body
            }
            $crate::DType::U32 => {
                type $t = u32;
                $body
            }
            $crate::DType::U64 => {
                type $t = u64;
                $body
            }
        }
    };
}
