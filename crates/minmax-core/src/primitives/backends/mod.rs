//! Concrete backend implementations
//!
//! One type per instruction set, no Box and no dyn. Every backend type exists
//! in every build; those whose instruction set is not compiled in fall back
//! to the scalar trait defaults and are never constructible.

pub mod avx2;
pub mod avx512;
pub(crate) mod lanes;
pub mod neon;
pub mod scalar;
pub mod sse2;

pub use avx2::Avx2Backend;
pub use avx512::Avx512Backend;
pub use neon::NeonBackend;
pub use scalar::ScalarBackend;
pub use sse2::Sse2Backend;
