//! End-to-end scenarios through the facade crate

use fast_minmax::prelude::*;
use fast_minmax::{Error, FallbackReason};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_float_contiguous() {
    init_tracing();
    let values = [0.0f32, 1.0, -2.0, 0.0];
    assert_eq!(
        minmax(&ArrayView::from_slice(&values)).unwrap(),
        MinMaxResult::F32(-2.0, 1.0)
    );
}

#[test]
fn test_short_contiguous() {
    init_tracing();
    let values = [1i16, -2, -5];
    assert_eq!(
        minmax(&ArrayView::from_slice(&values)).unwrap(),
        MinMaxResult::I16(-5, 1)
    );
}

#[test]
fn test_reversed_arange() {
    init_tracing();
    let values: Vec<i16> = (0..13).collect();
    let view = ArrayView::from_slice(&values).reversed(0).unwrap();
    assert_eq!(view.layout(), LayoutClass::SingleStrideLinear { stride: -1 });
    assert_eq!(minmax(&view).unwrap(), MinMaxResult::I16(0, 12));
}

#[test]
fn test_row_major_grid() {
    init_tracing();
    let values: Vec<f32> = (0..30).map(|i| ((i * 17) % 30) as f32 - 4.0).collect();
    let view = ArrayView::from_shape(&values, &[15, 2]).unwrap();
    assert!(matches!(Dispatcher::new().route(&view), Route::Contiguous(_)));
    assert_eq!(minmax(&view).unwrap(), MinMaxResult::F32(-4.0, 25.0));
}

#[test]
fn test_unsupported_dtype_falls_back() {
    init_tracing();
    let values: Vec<f64> = (0..17).map(|i| (i as f64).sin()).collect();
    let view = ArrayView::from_slice(&values);
    assert_eq!(
        Dispatcher::new().route(&view),
        Route::Fallback(FallbackReason::UnsupportedType)
    );
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(minmax(&view).unwrap(), MinMaxResult::F64(min, max));
}

#[test]
fn test_empty_array() {
    init_tracing();
    let view = ArrayView::new(&[], DType::F32, 0, &[0, 0], &[0, 1]).unwrap();
    assert_eq!(minmax(&view).unwrap_err(), Error::EmptyArray);
}

#[test]
fn test_scalar_tier_agrees_with_detected_tier() {
    init_tracing();
    let values: Vec<i16> = (0..999).map(|i| ((i * 7919) % 2003) as i16 - 1000).collect();
    let view = ArrayView::from_slice(&values).stepped(0, 3).unwrap();
    let scalar = Dispatcher::from_config(&DispatchConfig::new().with_simd(SimdTier::Scalar));
    assert_eq!(scalar.compute(&view).unwrap(), Dispatcher::new().compute(&view).unwrap());
}
