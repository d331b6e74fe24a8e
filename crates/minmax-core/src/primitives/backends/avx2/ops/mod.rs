//! Operation-centric modules for AVX2 min/max primitives

pub mod minmax;

pub use minmax::MinMax;
