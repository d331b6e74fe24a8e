//! SIMD capability tiers
//!
//! The tier decides the vector width every kernel runs at. Detection happens
//! once per process and is memoized without a lock: two threads racing on
//! the first call both compute the same answer and store the same byte.
//!
//! Kernels never trust a tier blindly. [`SimdTier::resolve`] degrades a
//! requested tier to the widest one the host can actually execute, so a tier
//! injected by a caller or a configuration file cannot reach an unsupported
//! instruction.

use crate::error::{Error, Result};
use crate::primitives::{Avx2Backend, Avx512Backend, NeonBackend, Sse2Backend};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable capping the memoized tier
pub const TIER_ENV_VAR: &str = "FAST_MINMAX_SIMD";

const UNDETECTED: u8 = u8::MAX;

static CURRENT: AtomicU8 = AtomicU8::new(UNDETECTED);

/// Instruction set tier, ordered from narrowest to widest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimdTier {
    /// No vector instructions
    Scalar = 0,
    /// 128-bit ARM Advanced SIMD
    Neon = 1,
    /// 128-bit SSE2
    Sse2 = 2,
    /// 256-bit AVX2
    Avx2 = 3,
    /// 512-bit AVX-512 (F + BW)
    Avx512 = 4,
}

impl SimdTier {
    /// Every tier, narrowest first
    pub const ALL: [SimdTier; 5] = [
        SimdTier::Scalar,
        SimdTier::Neon,
        SimdTier::Sse2,
        SimdTier::Avx2,
        SimdTier::Avx512,
    ];

    /// Probe the host for the widest usable tier
    ///
    /// Pure and uncached; see [`SimdTier::current`] for the memoized value.
    pub fn detect() -> SimdTier {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| tier.is_available())
            .unwrap_or(SimdTier::Scalar)
    }

    /// The process-wide tier, detected on first use
    ///
    /// Honors [`TIER_ENV_VAR`] as an upper bound on the detected tier.
    pub fn current() -> SimdTier {
        if let Some(tier) = Self::from_u8(CURRENT.load(Ordering::Relaxed)) {
            return tier;
        }
        let tier = Self::detect_with_env();
        CURRENT.store(tier as u8, Ordering::Relaxed);
        tier
    }

    fn detect_with_env() -> SimdTier {
        let detected = Self::detect();
        let Ok(requested) = std::env::var(TIER_ENV_VAR) else {
            log::debug!("detected SIMD tier {detected}");
            return detected;
        };
        match requested.parse::<SimdTier>() {
            Ok(cap) => {
                let tier = cap.min(detected).resolve();
                if cap > detected {
                    log::warn!(
                        "{TIER_ENV_VAR}={requested} is not supported by this CPU, using {tier}"
                    );
                } else {
                    log::debug!("SIMD tier capped by {TIER_ENV_VAR}: {tier} (detected {detected})");
                }
                tier
            }
            Err(err) => {
                log::warn!("ignoring {TIER_ENV_VAR}: {err}");
                detected
            }
        }
    }

    fn from_u8(raw: u8) -> Option<SimdTier> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Whether the host can execute this tier's kernels in this build
    pub fn is_available(self) -> bool {
        match self {
            SimdTier::Scalar => true,
            SimdTier::Neon => NeonBackend::is_available(),
            SimdTier::Sse2 => Sse2Backend::is_available(),
            SimdTier::Avx2 => Avx2Backend::is_available(),
            SimdTier::Avx512 => Avx512Backend::is_available(),
        }
    }

    /// The next tier to try when this one is unavailable
    pub fn narrower(self) -> Option<SimdTier> {
        (self as usize).checked_sub(1).and_then(|raw| Self::ALL.get(raw).copied())
    }

    /// Degrade to the widest available tier not wider than `self`
    pub fn resolve(self) -> SimdTier {
        let mut tier = self;
        while !tier.is_available() {
            match tier.narrower() {
                Some(next) => tier = next,
                None => return SimdTier::Scalar,
            }
        }
        tier
    }

    /// Vector register width in bits (0 for scalar)
    pub const fn register_bits(self) -> usize {
        match self {
            SimdTier::Scalar => 0,
            SimdTier::Neon | SimdTier::Sse2 => 128,
            SimdTier::Avx2 => 256,
            SimdTier::Avx512 => 512,
        }
    }

    /// Elements of `item_size` bytes processed per vector
    pub const fn lanes(self, item_size: usize) -> usize {
        match self.register_bits() {
            0 => 1,
            bits => bits / 8 / item_size,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SimdTier::Scalar => "scalar",
            SimdTier::Neon => "neon",
            SimdTier::Sse2 => "sse2",
            SimdTier::Avx2 => "avx2",
            SimdTier::Avx512 => "avx512",
        }
    }
}

impl Default for SimdTier {
    fn default() -> Self {
        SimdTier::current()
    }
}

impl fmt::Display for SimdTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimdTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_tier(name))
    }
}
