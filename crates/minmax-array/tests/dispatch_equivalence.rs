//! Dispatch tests comparing every route with a naive element-by-element scan

mod common;

use common::{
    available_tiers, edge_case_lengths, naive_result, random_f32, random_i16, random_i64,
};
use minmax_array::{
    minmax, ArrayView, DispatchConfig, Dispatcher, Error, FallbackReason, Route,
};
use minmax_core::{DType, Element, Kernel, MinMaxResult, SimdTier};
use proptest::prelude::*;
use rayon::prelude::*;

/// Compute on every tier and with the forced fallback, comparing with the reference
fn check_all_routes<T: Element>(view: &ArrayView<'_>, context: &str) {
    let expected = naive_result::<T>(view);
    for tier in available_tiers() {
        let got = Dispatcher::with_tier(tier).compute(view).unwrap();
        assert_eq!(got, expected, "{tier} mismatch for {context}");
    }
    let forced = Dispatcher::from_config(&DispatchConfig::new().with_force_fallback(true));
    assert_eq!(forced.compute(view).unwrap(), expected, "fallback mismatch for {context}");
}

#[test]
fn test_concrete_scenarios() {
    let floats = [0.0f32, 1.0, -2.0, 0.0];
    assert_eq!(
        minmax(&ArrayView::from_slice(&floats)).unwrap(),
        MinMaxResult::F32(-2.0, 1.0)
    );

    let shorts = [1i16, -2, -5];
    assert_eq!(
        minmax(&ArrayView::from_slice(&shorts)).unwrap(),
        MinMaxResult::I16(-5, 1)
    );

    let arange: Vec<i64> = (0..13).collect();
    let reversed = ArrayView::from_slice(&arange).reversed(0).unwrap();
    assert_eq!(minmax(&reversed).unwrap(), MinMaxResult::I64(0, 12));
    let arange: Vec<f32> = (0..13).map(|i| i as f32).collect();
    let reversed = ArrayView::from_slice(&arange).reversed(0).unwrap();
    assert_eq!(minmax(&reversed).unwrap(), MinMaxResult::F32(0.0, 12.0));

    let grid = random_f32(30, 5);
    let view = ArrayView::from_shape(&grid, &[15, 2]).unwrap();
    assert!(matches!(Dispatcher::new().route(&view), Route::Contiguous(_)));
    check_all_routes::<f32>(&view, "(15, 2) row-major");

    let doubles = random_f32(17, 6).into_iter().map(f64::from).collect::<Vec<_>>();
    let view = ArrayView::from_slice(&doubles);
    assert_eq!(
        Dispatcher::new().route(&view),
        Route::Fallback(FallbackReason::UnsupportedType)
    );
    let result = minmax(&view).unwrap();
    assert_eq!(result.dtype(), DType::F64);
    assert_eq!(result, naive_result::<f64>(&view));

    let view = ArrayView::new(&[], DType::F32, 0, &[0, 0], &[0, 1]).unwrap();
    assert_eq!(minmax(&view).unwrap_err(), Error::EmptyArray);
}

#[test]
fn test_contiguous_lengths() {
    for len in edge_case_lengths() {
        let floats = random_f32(len, len as u64);
        check_all_routes::<f32>(&ArrayView::from_slice(&floats), &format!("f32 len={len}"));
        let shorts = random_i16(len, 1000 + len as u64);
        check_all_routes::<i16>(&ArrayView::from_slice(&shorts), &format!("i16 len={len}"));
    }
}

#[test]
fn test_unaligned_data_pointer() {
    let values = random_f32(101, 77);
    for shift in 1..4 {
        let mut buffer = vec![0u8; shift];
        buffer.extend_from_slice(bytemuck::cast_slice(&values));
        let view = ArrayView::new(&buffer, DType::F32, shift, &[101], &[1]).unwrap();
        check_all_routes::<f32>(&view, &format!("shift={shift}"));
        let stepped = view.stepped(0, 3).unwrap();
        check_all_routes::<f32>(&stepped, &format!("shift={shift} step=3"));
    }
}

#[test]
fn test_column_major_uses_contiguous_kernel() {
    let values = random_i16(2 * 40, 3);
    let view = ArrayView::from_shape(&values, &[2, 40]).unwrap().transposed();
    match Dispatcher::new().route(&view) {
        Route::Contiguous(kernel) => assert_eq!(kernel.dtype(), DType::I16),
        route => panic!("expected contiguous route, got {route}"),
    }
    check_all_routes::<i16>(&view, "column-major (40, 2)");
}

#[test]
fn test_coalesced_slices_use_strided_kernel() {
    let values = random_f32(3 * 64, 9);
    let grid = ArrayView::from_shape(&values, &[3, 64]).unwrap();

    // a[:, ::2]
    let sliced = grid.stepped(1, 2).unwrap();
    assert!(matches!(
        Dispatcher::new().route(&sliced),
        Route::Strided { stride: 2, .. }
    ));
    check_all_routes::<f32>(&sliced, "a[:, ::2]");

    // a[::-1, ::-1]
    let flipped = grid.reversed(0).unwrap().reversed(1).unwrap();
    assert!(matches!(
        Dispatcher::new().route(&flipped),
        Route::Strided { stride: -1, .. }
    ));
    check_all_routes::<f32>(&flipped, "a[::-1, ::-1]");

    // a[:, ::-2]
    let backwards = grid.reversed(1).unwrap().stepped(1, 2).unwrap();
    check_all_routes::<f32>(&backwards, "a[:, ::-2]");
}

#[test]
fn test_irregular_layouts_fall_back() {
    let values = random_i16(12 * 12, 21);
    let grid = ArrayView::from_shape(&values, &[12, 12]).unwrap();

    // a[:, :5]
    let narrow = ArrayView::new(grid.data(), DType::I16, 0, &[12, 5], &[12, 1]).unwrap();
    assert_eq!(
        Dispatcher::new().route(&narrow),
        Route::Fallback(FallbackReason::UnsupportedLayout)
    );
    check_all_routes::<i16>(&narrow, "a[:, :5]");

    let reversed_rows = grid.reversed(0).unwrap();
    check_all_routes::<i16>(&reversed_rows, "a[::-1, :]");

    let broadcast = ArrayView::new(grid.data(), DType::I16, 2, &[7, 12], &[0, 1]).unwrap();
    check_all_routes::<i16>(&broadcast, "broadcast rows");
}

#[test]
fn test_unsupported_types_keep_their_dtype() {
    let values = random_i64(50, 8);
    let view = ArrayView::from_slice(&values);
    let result = minmax(&view).unwrap();
    assert_eq!(result.dtype(), DType::I64);
    assert_eq!(result, naive_result::<i64>(&view));

    let bytes: Vec<u8> = (0..=255).collect();
    let result = minmax(&ArrayView::from_slice(&bytes).stepped(0, 7).unwrap()).unwrap();
    assert_eq!(result, MinMaxResult::U8(0, 252));
}

#[test]
fn test_huge_unit_axis_strides_reach_fallback() {
    // relaxed-strides numpy reports isize::MAX for size-1 axes
    let doubles = [1.5f64, -2.0, 7.25];
    let bytes: &[u8] = bytemuck::cast_slice(&doubles);
    let view = ArrayView::new(bytes, DType::F64, 0, &[3, 1], &[1, isize::MAX / 4]).unwrap();
    assert_eq!(minmax(&view).unwrap(), MinMaxResult::F64(-2.0, 7.25));

    let view = ArrayView::new(bytes, DType::F64, 8, &[1, 2], &[isize::MAX, 1]).unwrap();
    assert_eq!(minmax(&view).unwrap(), MinMaxResult::F64(-2.0, 7.25));

    let floats = random_f32(40, 5);
    let bytes: &[u8] = bytemuck::cast_slice(&floats);
    let view = ArrayView::new(bytes, DType::F32, 0, &[1, 20, 1], &[isize::MAX, 2, isize::MIN])
        .unwrap();
    assert_eq!(view.layout(), minmax_core::LayoutClass::SingleStrideLinear { stride: 2 });
    check_all_routes::<f32>(&view, "size-1 axes with extreme strides");
}

#[test]
fn test_fallback_nan_semantics() {
    let values = [2.0f32, f32::NAN, -1.0, 4.0];
    let forced = Dispatcher::from_config(&DispatchConfig::new().with_force_fallback(true));
    let (min, max) = forced
        .compute(&ArrayView::from_slice(&values))
        .unwrap()
        .get::<f32>()
        .unwrap();
    assert!(min.is_nan());
    assert!(max.is_nan());

    let doubles = [f64::NAN, 1.0];
    let (min, max) = minmax(&ArrayView::from_slice(&doubles)).unwrap().to_f64();
    assert!(min.is_nan() && max.is_nan());
}

#[test]
fn test_config_from_json() {
    let config: DispatchConfig =
        serde_json::from_str(r#"{ "simd": "scalar", "force_fallback": false }"#).unwrap();
    let dispatcher = Dispatcher::from_config(&config);
    assert_eq!(dispatcher.tier(), SimdTier::Scalar);
    let values = random_f32(64, 1);
    let view = ArrayView::from_slice(&values);
    match dispatcher.route(&view) {
        Route::Contiguous(Kernel::F32(pair)) => assert_eq!(pair.tier(), SimdTier::Scalar),
        route => panic!("unexpected route {route}"),
    }
    assert_eq!(dispatcher.compute(&view).unwrap(), naive_result::<f32>(&view));
}

#[test]
fn test_concurrent_calls_share_views() {
    let values = random_f32(10_000, 123);
    let view = ArrayView::from_slice(&values);
    let sliced = view.stepped(0, 3).unwrap();
    let expected = naive_result::<f32>(&view);
    let expected_sliced = naive_result::<f32>(&sliced);

    let results: Vec<(MinMaxResult, MinMaxResult)> = (0..64)
        .into_par_iter()
        .map(|_| (minmax(&view).unwrap(), minmax(&sliced).unwrap()))
        .collect();
    for (full, stepped) in results {
        assert_eq!(full, expected);
        assert_eq!(stepped, expected_sliced);
    }
}

proptest! {
    #[test]
    fn prop_i16_grid_routes_agree(
        values in prop::collection::vec(any::<i16>(), 1..400),
        cols in 1usize..9,
        step in 1usize..4,
        flip in any::<bool>(),
    ) {
        let rows = values.len() / cols;
        prop_assume!(rows > 0);
        let grid = ArrayView::from_shape(&values, &[rows, cols]).unwrap();
        let mut view = grid.stepped(1, step).unwrap();
        if flip {
            view = view.reversed(0).unwrap();
        }
        let expected = naive_result::<i16>(&view);
        for tier in available_tiers() {
            prop_assert_eq!(Dispatcher::with_tier(tier).compute(&view).unwrap(), expected);
        }
        prop_assert_eq!(minmax_array::fallback_result(&view).unwrap(), expected);
    }

    #[test]
    fn prop_f32_result_is_drawn_from_input(
        values in prop::collection::vec(-1.0e6f32..1.0e6, 1..500),
        step in 1usize..6,
    ) {
        let view = ArrayView::from_slice(&values).stepped(0, step).unwrap();
        let (min, max) = minmax(&view).unwrap().get::<f32>().unwrap();
        prop_assert!(min <= max);
        prop_assert!(values.iter().step_by(step).any(|&v| v == min));
        prop_assert!(values.iter().step_by(step).any(|&v| v == max));
    }
}
