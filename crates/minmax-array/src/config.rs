//! Dispatcher configuration

use minmax_core::SimdTier;
use serde::{Deserialize, Serialize};

/// Settings for a [`Dispatcher`](crate::Dispatcher)
///
/// Missing fields deserialize to their defaults:
///
/// ```rust
/// use minmax_array::DispatchConfig;
/// use minmax_core::SimdTier;
///
/// let config: DispatchConfig = serde_json::from_str(r#"{ "simd": "sse2" }"#).unwrap();
/// assert_eq!(config.simd, Some(SimdTier::Sse2));
/// assert!(!config.force_fallback);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Tier to run kernels at; `None` uses the process-wide detected tier
    pub simd: Option<SimdTier>,
    /// Route every array through the generic scan
    pub force_fallback: bool,
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kernel tier
    pub fn with_simd(mut self, tier: SimdTier) -> Self {
        self.simd = Some(tier);
        self
    }

    /// Set whether every array takes the generic scan
    pub fn with_force_fallback(mut self, force: bool) -> Self {
        self.force_fallback = force;
        self
    }

    /// The tier this configuration runs at on this host
    pub fn effective_tier(&self) -> SimdTier {
        match self.simd {
            Some(tier) => tier.resolve(),
            None => SimdTier::current(),
        }
    }
}
