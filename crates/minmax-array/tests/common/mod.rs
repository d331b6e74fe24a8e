//! Shared utilities for integration tests

#![allow(dead_code)]

use minmax_array::ArrayView;
use minmax_core::{Element, MinMaxResult, SimdTier};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate array lengths that test edge cases for SIMD operations
pub fn edge_case_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 100, 127, 1000]
}

pub fn available_tiers() -> Vec<SimdTier> {
    SimdTier::ALL
        .into_iter()
        .filter(|tier| tier.is_available())
        .collect()
}

/// Reference result: visit every logical element through `ArrayView::get`
pub fn naive_result<T: Element>(view: &ArrayView<'_>) -> MinMaxResult {
    let mut values = Vec::with_capacity(view.len());
    let mut index = vec![0usize; view.ndim()];
    for _ in 0..view.len() {
        values.push(view.get::<T>(&index).unwrap().unwrap());
        for axis in (0..index.len()).rev() {
            index[axis] += 1;
            if index[axis] < view.shape()[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
    let mut min = values[0];
    let mut max = values[0];
    for &value in &values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    T::into_result(min, max)
}

pub fn random_f32(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0e3f32..1.0e3)).collect()
}

pub fn random_i16(len: usize, seed: u64) -> Vec<i16> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<i16>()).collect()
}

pub fn random_i64(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<i64>()).collect()
}
