//! Min/max primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single `MinMaxPrimitives<T>` trait whose default methods are scalar
//! - Concrete backend types: `ScalarBackend`, `Sse2Backend`, `Avx2Backend`,
//!   `Avx512Backend`, `NeonBackend`
//! - SIMD backends are only constructible on a CPU that supports them
//! - No heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use minmax_core::primitives::{Avx2Backend, MinMaxPrimitives, ScalarBackend};
//! use minmax_core::ElementBytes;
//!
//! let data = ElementBytes::from_slice(&[3.0f32, -1.0, 2.0]).unwrap();
//! let extremes = match Avx2Backend::try_new() {
//!     Some(backend) => backend.minmax_contiguous(data),
//!     None => ScalarBackend::new().minmax_contiguous(data),
//! };
//! assert_eq!(extremes, (-1.0, 3.0));
//! ```

pub mod backends;
pub mod traits;

pub use backends::{Avx2Backend, Avx512Backend, NeonBackend, ScalarBackend, Sse2Backend};
pub use traits::MinMaxPrimitives;

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    if Avx512Backend::is_available() {
        return "avx512";
    }
    if Avx2Backend::is_available() {
        return "avx2";
    }
    if Sse2Backend::is_available() {
        return "sse2";
    }
    if NeonBackend::is_available() {
        return "neon";
    }
    "scalar"
}
