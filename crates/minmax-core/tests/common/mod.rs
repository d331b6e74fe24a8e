//! Shared utilities for integration tests

#![allow(dead_code)]

use minmax_core::{Element, SimdTier};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate array lengths that test edge cases for SIMD operations
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        1,   // Single element
        2,   // Pair
        3,   // Odd, below every vector width
        4,   // SSE2/NEON f32 width
        5,   // SSE2/NEON f32 width + 1
        7,   // AVX2 f32 width - 1
        8,   // AVX2 f32 width, SSE2 i16 width
        9,   // AVX2 f32 width + 1
        15,  // AVX-512 f32 width - 1
        16,  // AVX-512 f32 width, AVX2 i16 width
        17,  // AVX-512 f32 width + 1
        31,  // AVX-512 i16 width - 1
        32,  // AVX-512 i16 width
        33,  // AVX-512 i16 width + 1
        63,  // Almost two vectors
        64,  // Cache line of f32
        100, // Round number
        127, // Mersenne prime
        1000,
    ]
}

/// Tiers that can actually run on this host
pub fn available_tiers() -> Vec<SimdTier> {
    SimdTier::ALL
        .into_iter()
        .filter(|tier| tier.is_available())
        .collect()
}

/// Two-pass reference scan
pub fn naive_minmax<T: Element>(values: &[T]) -> (T, T) {
    let mut min = values[0];
    for &value in values {
        if value < min {
            min = value;
        }
    }
    let mut max = values[0];
    for &value in values {
        if value > max {
            max = value;
        }
    }
    (min, max)
}

pub fn random_f32(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0e6f32..1.0e6)).collect()
}

pub fn random_i16(len: usize, seed: u64) -> Vec<i16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<i16>()).collect()
}

/// Copy `values` into a fresh buffer after `shift` padding bytes
pub fn shifted_bytes<T: Element>(values: &[T], shift: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; shift];
    buffer.extend_from_slice(bytemuck::cast_slice(values));
    buffer
}
