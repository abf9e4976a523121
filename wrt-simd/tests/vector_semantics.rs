//! End-to-end checks of vector values through the public API and the
//! operation table.

use wrt_error::codes;
use wrt_simd::{
    execute, F32x4, I16x8, I32x4, I64x2, I8x16, Shape, SimdOp, SimdValue, V128,
};

#[test]
fn default_value_is_all_zero() {
    assert_eq!(V128::default().to_bits(), 0);
    assert_eq!(V128::default().to_f64x2(), [0.0, 0.0]);
}

#[test]
fn bits_pass_through_unchanged() {
    let bits = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210;
    assert_eq!(V128::from_bits(bits).to_bits(), bits);
}

#[test]
fn i8x16_add_wraps() {
    let r = I8x16::add(I8x16::splat(127), I8x16::splat(1));
    assert_eq!(r, I8x16::splat(-128));
    assert!(r.to_i8x16().iter().all(|&lane| lane == -128));
}

#[test]
fn reductions_at_the_boundary() {
    for shape_zero in [I8x16::splat(0), I16x8::splat(0), I32x4::splat(0), I64x2::splat(0)] {
        assert!(!I8x16::all_true(shape_zero));
        assert!(!shape_zero.any_true());
    }
    let v = V128::from_i32x4([0, 0, 0, 1]);
    assert!(I32x4::any_true(v));
    assert!(!I32x4::all_true(v));
    // The same bits seen through a wider shape.
    assert!(!I64x2::all_true(v));
    assert!(I64x2::any_true(v));
}

#[test]
fn avgr_u_at_maximum_lanes() {
    let max8 = I8x16::splat(-1);
    assert_eq!(I8x16::avgr_u(max8, max8), max8);
    let max16 = I16x8::splat(-1);
    assert_eq!(I16x8::avgr_u(max16, max16), max16);
    let max32 = I32x4::splat(-1);
    assert_eq!(I32x4::avgr_u(max32, max32), max32);
    let max64 = I64x2::splat(-1);
    assert_eq!(I64x2::avgr_u(max64, max64), max64);

    // (2^W - 1 + 0 + 1) / 2 = 2^(W-1): only the top bit survives.
    assert_eq!(I32x4::avgr_u(max32, V128::ZERO), I32x4::splat(i32::MIN));
    assert_eq!(I64x2::avgr_u(max64, V128::ZERO), I64x2::splat(i64::MIN));
}

#[test]
fn f32x4_min_with_nan_is_stable() {
    let a = F32x4::splat(f32::NAN);
    let b = F32x4::splat(1.0);
    let first = F32x4::min(a, b);
    for _ in 0..8 {
        assert_eq!(F32x4::min(a, b).to_bits(), first.to_bits());
    }
    assert!(first.to_f32x4().iter().all(|lane| lane.is_nan()));
    assert_eq!(F32x4::min(b, a).to_bits(), first.to_bits());
}

#[test]
fn shapes_share_one_value() {
    let bytes = I8x16::splat(1);
    let words = I32x4::add(bytes, I32x4::splat(1));
    assert_eq!(I32x4::extract_lane_s(words, 2), 0x0101_0102);
    assert_eq!(I8x16::extract_lane_u(words, 0), 2);
}

#[test]
fn of_strings_reports_lane_count() {
    for shape in Shape::ALL {
        let literals = vec!["0"; shape.lanes() + 1];
        let err = V128::of_strings(shape, &literals).unwrap_err();
        assert_eq!(err.code, codes::INVALID_LANE_COUNT, "{shape}");
    }
}

#[test]
fn of_strings_propagates_literal_errors() {
    let err = V128::of_strings(Shape::I8x16, &["-129"; 16]).unwrap_err();
    assert_eq!(err.code, codes::INVALID_LITERAL);
    let err = V128::of_strings(Shape::F32x4, &["1e39", "0", "0", "0"]).unwrap_err();
    assert_eq!(err.code, codes::INVALID_LITERAL);
    let err = V128::of_strings(Shape::F64x2, &["nan:0x0", "0"]).unwrap_err();
    assert_eq!(err.code, codes::INVALID_LITERAL);
}

#[test]
fn of_strings_accepts_both_integer_forms() {
    let v = V128::of_strings(Shape::I8x16, &[
        "255", "-128", "+127", "0x80", "1_0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0",
        "0",
    ])
    .unwrap();
    assert_eq!(&v.to_i8x16()[..5], &[-1, -128, 127, -128, 10]);
}

#[test]
fn dispatcher_runs_a_small_program() {
    // (i32x4.extract_lane 1 (i32x4.mul (i32x4.splat 6) (v128.const i32x4 1 2 3 4)))
    let splat = execute(SimdOp::I32x4Splat, &[SimdValue::I32(6)]).unwrap();
    let constant = V128::of_strings(Shape::I32x4, &["1", "2", "3", "4"]).unwrap();
    let product = execute(SimdOp::I32x4Mul, &[splat, constant.into()]).unwrap();
    let lane = execute(SimdOp::I32x4ExtractLane { lane: 1 }, &[product]).unwrap();
    assert_eq!(lane, SimdValue::I32(12));
}

#[test]
fn dispatcher_errors_are_recoverable() {
    let v: SimdValue = V128::ZERO.into();
    let err = execute(SimdOp::I8x16ReplaceLane { lane: 16 }, &[v, SimdValue::I32(0)]).unwrap_err();
    assert_eq!(err.code, codes::LANE_INDEX_OUT_OF_RANGE);
    let err = execute(SimdOp::V128Bitselect, &[v, v]).unwrap_err();
    assert_eq!(err.code, codes::INVALID_OPERAND_COUNT);
    let err = execute(SimdOp::F32x4ReplaceLane { lane: 0 }, &[v, SimdValue::I32(0)]).unwrap_err();
    assert_eq!(err.code, codes::TYPE_MISMATCH);
}

#[test]
fn every_shape_tagged_op_agrees_with_the_shape_table() {
    let ops = [
        SimdOp::I8x16Add,
        SimdOp::I16x8Mul,
        SimdOp::I32x4Shl,
        SimdOp::I64x2Neg,
        SimdOp::F32x4Pmin,
        SimdOp::F64x2Ceil,
    ];
    for (op, shape) in ops.iter().zip(Shape::ALL) {
        assert_eq!(op.shape(), Some(shape));
    }
}
