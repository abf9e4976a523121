// WRT - wrt-simd
// Module: SIMD Operation Table
// SW-REQ-ID: REQ_SIMD_INST_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Operation table used by an instruction dispatcher.
//!
//! [`SimdOp`] names every vector instruction implemented by this crate and
//! [`execute`] applies one to its operands. Unlike the engines, which
//! assert on malformed lane indices, `execute` validates operand count,
//! operand types and lane immediates and reports an [`Error`] instead.

use wrt_math::{FloatBits32, FloatBits64};

use crate::{
    lanes::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16},
    prelude::{Error, LaneIndexOutOfRange, Result},
    shape::Shape,
    v128::V128,
};

/// Operand or result of a vector instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdValue {
    /// 128-bit vector
    V128(V128),
    /// 32-bit integer scalar
    I32(i32),
    /// 64-bit integer scalar
    I64(i64),
    /// 32-bit float scalar, bit exact
    F32(FloatBits32),
    /// 64-bit float scalar, bit exact
    F64(FloatBits64),
}

impl SimdValue {
    /// Name of the value type, as in the text format.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            SimdValue::V128(_) => "v128",
            SimdValue::I32(_) => "i32",
            SimdValue::I64(_) => "i64",
            SimdValue::F32(_) => "f32",
            SimdValue::F64(_) => "f64",
        }
    }

    /// The vector, if this is one.
    #[must_use]
    pub fn as_v128(&self) -> Option<V128> {
        match self {
            SimdValue::V128(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<V128> for SimdValue {
    fn from(v: V128) -> Self {
        SimdValue::V128(v)
    }
}

impl From<i32> for SimdValue {
    fn from(x: i32) -> Self {
        SimdValue::I32(x)
    }
}

impl From<i64> for SimdValue {
    fn from(x: i64) -> Self {
        SimdValue::I64(x)
    }
}

impl From<f32> for SimdValue {
    fn from(x: f32) -> Self {
        SimdValue::F32(FloatBits32::from_float(x))
    }
}

impl From<f64> for SimdValue {
    fn from(x: f64) -> Self {
        SimdValue::F64(FloatBits64::from_float(x))
    }
}

/// Vector instructions.
///
/// Variant names are the text-format opcodes in camel case
/// (`i8x16.extract_lane_s` is [`SimdOp::I8x16ExtractLaneS`]); `lane` fields
/// hold the lane immediate.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdOp {
    // --- Bitwise Operations ---
    V128Not,
    V128And,
    V128Or,
    V128Xor,
    V128AndNot,
    V128Bitselect,
    V128AnyTrue,

    // --- Splat Operations ---
    I8x16Splat,
    I16x8Splat,
    I32x4Splat,
    I64x2Splat,
    F32x4Splat,
    F64x2Splat,

    // --- Lane Access Operations ---
    I8x16ExtractLaneS { lane: u8 },
    I8x16ExtractLaneU { lane: u8 },
    I8x16ReplaceLane { lane: u8 },
    I16x8ExtractLaneS { lane: u8 },
    I16x8ExtractLaneU { lane: u8 },
    I16x8ReplaceLane { lane: u8 },
    I32x4ExtractLane { lane: u8 },
    I32x4ReplaceLane { lane: u8 },
    I64x2ExtractLane { lane: u8 },
    I64x2ReplaceLane { lane: u8 },
    F32x4ExtractLane { lane: u8 },
    F32x4ReplaceLane { lane: u8 },
    F64x2ExtractLane { lane: u8 },
    F64x2ReplaceLane { lane: u8 },

    // --- Byte Permutation ---
    I8x16Swizzle,
    I8x16Shuffle { lanes: [u8; 16] },

    // --- Comparison Operations ---
    I8x16Eq,
    I8x16Ne,
    I8x16LtS,
    I8x16LtU,
    I8x16GtS,
    I8x16GtU,
    I8x16LeS,
    I8x16LeU,
    I8x16GeS,
    I8x16GeU,
    I16x8Eq,
    I16x8Ne,
    I16x8LtS,
    I16x8LtU,
    I16x8GtS,
    I16x8GtU,
    I16x8LeS,
    I16x8LeU,
    I16x8GeS,
    I16x8GeU,
    I32x4Eq,
    I32x4Ne,
    I32x4LtS,
    I32x4LtU,
    I32x4GtS,
    I32x4GtU,
    I32x4LeS,
    I32x4LeU,
    I32x4GeS,
    I32x4GeU,
    I64x2Eq,
    I64x2Ne,
    I64x2LtS,
    I64x2GtS,
    I64x2LeS,
    I64x2GeS,
    F32x4Eq,
    F32x4Ne,
    F32x4Lt,
    F32x4Gt,
    F32x4Le,
    F32x4Ge,
    F64x2Eq,
    F64x2Ne,
    F64x2Lt,
    F64x2Gt,
    F64x2Le,
    F64x2Ge,

    // --- Integer Arithmetic ---
    I8x16Abs,
    I8x16Neg,
    I8x16Add,
    I8x16AddSatS,
    I8x16AddSatU,
    I8x16Sub,
    I8x16SubSatS,
    I8x16SubSatU,
    I8x16MinS,
    I8x16MinU,
    I8x16MaxS,
    I8x16MaxU,
    I8x16AvgrU,
    I16x8Abs,
    I16x8Neg,
    I16x8Add,
    I16x8AddSatS,
    I16x8AddSatU,
    I16x8Sub,
    I16x8SubSatS,
    I16x8SubSatU,
    I16x8Mul,
    I16x8MinS,
    I16x8MinU,
    I16x8MaxS,
    I16x8MaxU,
    I16x8AvgrU,
    I32x4Abs,
    I32x4Neg,
    I32x4Add,
    I32x4Sub,
    I32x4Mul,
    I32x4MinS,
    I32x4MinU,
    I32x4MaxS,
    I32x4MaxU,
    I64x2Abs,
    I64x2Neg,
    I64x2Add,
    I64x2Sub,
    I64x2Mul,

    // --- Reductions ---
    I8x16AllTrue,
    I8x16Bitmask,
    I16x8AllTrue,
    I16x8Bitmask,
    I32x4AllTrue,
    I32x4Bitmask,
    I64x2AllTrue,
    I64x2Bitmask,

    // --- Shift Operations ---
    I8x16Shl,
    I8x16ShrS,
    I8x16ShrU,
    I16x8Shl,
    I16x8ShrS,
    I16x8ShrU,
    I32x4Shl,
    I32x4ShrS,
    I32x4ShrU,
    I64x2Shl,
    I64x2ShrS,
    I64x2ShrU,

    // --- Float Arithmetic ---
    F32x4Abs,
    F32x4Neg,
    F32x4Sqrt,
    F32x4Add,
    F32x4Sub,
    F32x4Mul,
    F32x4Div,
    F32x4Min,
    F32x4Max,
    F32x4Pmin,
    F32x4Pmax,
    F32x4Ceil,
    F32x4Floor,
    F32x4Trunc,
    F32x4Nearest,
    F64x2Abs,
    F64x2Neg,
    F64x2Sqrt,
    F64x2Add,
    F64x2Sub,
    F64x2Mul,
    F64x2Div,
    F64x2Min,
    F64x2Max,
    F64x2Pmin,
    F64x2Pmax,
    F64x2Ceil,
    F64x2Floor,
    F64x2Trunc,
    F64x2Nearest,
}

impl SimdOp {
    /// Get the number of input values this operation expects
    #[must_use]
    pub fn input_count(&self) -> usize {
        use SimdOp::*;
        match self {
            // Splat and extract take one scalar or one vector
            I8x16Splat | I16x8Splat | I32x4Splat | I64x2Splat | F32x4Splat | F64x2Splat
            | I8x16ExtractLaneS { .. }
            | I8x16ExtractLaneU { .. }
            | I16x8ExtractLaneS { .. }
            | I16x8ExtractLaneU { .. }
            | I32x4ExtractLane { .. }
            | I64x2ExtractLane { .. }
            | F32x4ExtractLane { .. }
            | F64x2ExtractLane { .. } => 1,

            // Unary vector operations
            V128Not | V128AnyTrue | I8x16Abs | I8x16Neg | I16x8Abs | I16x8Neg | I32x4Abs
            | I32x4Neg | I64x2Abs | I64x2Neg | I8x16AllTrue | I8x16Bitmask | I16x8AllTrue
            | I16x8Bitmask | I32x4AllTrue | I32x4Bitmask | I64x2AllTrue | I64x2Bitmask
            | F32x4Abs | F32x4Neg | F32x4Sqrt | F32x4Ceil | F32x4Floor | F32x4Trunc
            | F32x4Nearest | F64x2Abs | F64x2Neg | F64x2Sqrt | F64x2Ceil | F64x2Floor
            | F64x2Trunc | F64x2Nearest => 1,

            V128Bitselect => 3,

            // Binary operations, replace lane (vector, scalar) and shifts
            // (vector, i32 count)
            _ => 2,
        }
    }

    /// Shape the operation interprets its vectors with, or `None` for
    /// shape-independent `v128` operations.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        use SimdOp::*;
        let shape = match self {
            V128Not | V128And | V128Or | V128Xor | V128AndNot | V128Bitselect | V128AnyTrue => {
                return None;
            },

            I8x16Splat | I8x16ExtractLaneS { .. } | I8x16ExtractLaneU { .. }
            | I8x16ReplaceLane { .. } | I8x16Swizzle | I8x16Shuffle { .. } | I8x16Eq
            | I8x16Ne | I8x16LtS | I8x16LtU | I8x16GtS | I8x16GtU | I8x16LeS | I8x16LeU
            | I8x16GeS | I8x16GeU | I8x16Abs | I8x16Neg | I8x16Add | I8x16AddSatS
            | I8x16AddSatU | I8x16Sub | I8x16SubSatS | I8x16SubSatU | I8x16MinS
            | I8x16MinU | I8x16MaxS | I8x16MaxU | I8x16AvgrU | I8x16AllTrue
            | I8x16Bitmask | I8x16Shl | I8x16ShrS | I8x16ShrU => Shape::I8x16,

            I16x8Splat | I16x8ExtractLaneS { .. } | I16x8ExtractLaneU { .. }
            | I16x8ReplaceLane { .. } | I16x8Eq | I16x8Ne | I16x8LtS | I16x8LtU
            | I16x8GtS | I16x8GtU | I16x8LeS | I16x8LeU | I16x8GeS | I16x8GeU
            | I16x8Abs | I16x8Neg | I16x8Add | I16x8AddSatS | I16x8AddSatU | I16x8Sub
            | I16x8SubSatS | I16x8SubSatU | I16x8Mul | I16x8MinS | I16x8MinU
            | I16x8MaxS | I16x8MaxU | I16x8AvgrU | I16x8AllTrue | I16x8Bitmask
            | I16x8Shl | I16x8ShrS | I16x8ShrU => Shape::I16x8,

            I32x4Splat | I32x4ExtractLane { .. } | I32x4ReplaceLane { .. } | I32x4Eq
            | I32x4Ne | I32x4LtS | I32x4LtU | I32x4GtS | I32x4GtU | I32x4LeS | I32x4LeU
            | I32x4GeS | I32x4GeU | I32x4Abs | I32x4Neg | I32x4Add | I32x4Sub | I32x4Mul
            | I32x4MinS | I32x4MinU | I32x4MaxS | I32x4MaxU | I32x4AllTrue
            | I32x4Bitmask | I32x4Shl | I32x4ShrS | I32x4ShrU => Shape::I32x4,

            I64x2Splat | I64x2ExtractLane { .. } | I64x2ReplaceLane { .. } | I64x2Eq
            | I64x2Ne | I64x2LtS | I64x2GtS | I64x2LeS | I64x2GeS | I64x2Abs | I64x2Neg
            | I64x2Add | I64x2Sub | I64x2Mul | I64x2AllTrue | I64x2Bitmask | I64x2Shl
            | I64x2ShrS | I64x2ShrU => Shape::I64x2,

            F32x4Splat | F32x4ExtractLane { .. } | F32x4ReplaceLane { .. } | F32x4Eq
            | F32x4Ne | F32x4Lt | F32x4Gt | F32x4Le | F32x4Ge | F32x4Abs | F32x4Neg
            | F32x4Sqrt | F32x4Add | F32x4Sub | F32x4Mul | F32x4Div | F32x4Min
            | F32x4Max | F32x4Pmin | F32x4Pmax | F32x4Ceil | F32x4Floor | F32x4Trunc
            | F32x4Nearest => Shape::F32x4,

            F64x2Splat | F64x2ExtractLane { .. } | F64x2ReplaceLane { .. } | F64x2Eq
            | F64x2Ne | F64x2Lt | F64x2Gt | F64x2Le | F64x2Ge | F64x2Abs | F64x2Neg
            | F64x2Sqrt | F64x2Add | F64x2Sub | F64x2Mul | F64x2Div | F64x2Min
            | F64x2Max | F64x2Pmin | F64x2Pmax | F64x2Ceil | F64x2Floor | F64x2Trunc
            | F64x2Nearest => Shape::F64x2,
        };
        Some(shape)
    }

    /// Lane index immediate of an extract or replace operation.
    #[must_use]
    pub fn lane_immediate(&self) -> Option<u8> {
        use SimdOp::*;
        match *self {
            I8x16ExtractLaneS { lane }
            | I8x16ExtractLaneU { lane }
            | I8x16ReplaceLane { lane }
            | I16x8ExtractLaneS { lane }
            | I16x8ExtractLaneU { lane }
            | I16x8ReplaceLane { lane }
            | I32x4ExtractLane { lane }
            | I32x4ReplaceLane { lane }
            | I64x2ExtractLane { lane }
            | I64x2ReplaceLane { lane }
            | F32x4ExtractLane { lane }
            | F32x4ReplaceLane { lane }
            | F64x2ExtractLane { lane }
            | F64x2ReplaceLane { lane } => Some(lane),
            _ => None,
        }
    }

    /// Check the immediates against the operation's shape.
    fn validate_immediates(&self) -> Result<()> {
        if let (Some(lane), Some(shape)) = (self.lane_immediate(), self.shape()) {
            if usize::from(lane) >= shape.lanes() {
                #[cfg(feature = "log")]
                log::debug!("{self:?}: lane {lane} out of range for {shape}");
                return Err(LaneIndexOutOfRange {
                    lane:  usize::from(lane),
                    lanes: shape.lanes(),
                }
                .into());
            }
        }
        if let SimdOp::I8x16Shuffle { lanes } = self {
            if let Some(&lane) = lanes.iter().find(|&&lane| lane >= 32) {
                #[cfg(feature = "log")]
                log::debug!("i8x16.shuffle: lane {lane} out of range");
                return Err(LaneIndexOutOfRange {
                    lane:  usize::from(lane),
                    lanes: 32,
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
fn mismatch(expected: &'static str, found: &SimdValue) -> Error {
    #[cfg(feature = "log")]
    log::debug!("expected {expected} operand, found {}", found.type_name());
    Error::type_mismatch("SIMD operand has the wrong value type")
}

fn v128_at(inputs: &[SimdValue], index: usize) -> Result<V128> {
    match inputs[index] {
        SimdValue::V128(v) => Ok(v),
        ref other => Err(mismatch("v128", other)),
    }
}

fn i32_at(inputs: &[SimdValue], index: usize) -> Result<i32> {
    match inputs[index] {
        SimdValue::I32(x) => Ok(x),
        ref other => Err(mismatch("i32", other)),
    }
}

fn i64_at(inputs: &[SimdValue], index: usize) -> Result<i64> {
    match inputs[index] {
        SimdValue::I64(x) => Ok(x),
        ref other => Err(mismatch("i64", other)),
    }
}

fn f32_at(inputs: &[SimdValue], index: usize) -> Result<f32> {
    match inputs[index] {
        SimdValue::F32(x) => Ok(x.value()),
        ref other => Err(mismatch("f32", other)),
    }
}

fn f64_at(inputs: &[SimdValue], index: usize) -> Result<f64> {
    match inputs[index] {
        SimdValue::F64(x) => Ok(x.value()),
        ref other => Err(mismatch("f64", other)),
    }
}

fn unary(inputs: &[SimdValue], f: fn(V128) -> V128) -> Result<SimdValue> {
    Ok(SimdValue::V128(f(v128_at(inputs, 0)?)))
}

fn binary(inputs: &[SimdValue], f: fn(V128, V128) -> V128) -> Result<SimdValue> {
    Ok(SimdValue::V128(f(v128_at(inputs, 0)?, v128_at(inputs, 1)?)))
}

fn shift(inputs: &[SimdValue], f: fn(V128, u32) -> V128) -> Result<SimdValue> {
    // The count is an i32 operand; the engines reduce it modulo the lane width.
    Ok(SimdValue::V128(f(v128_at(inputs, 0)?, i32_at(inputs, 1)? as u32)))
}

fn test(inputs: &[SimdValue], f: fn(V128) -> bool) -> Result<SimdValue> {
    Ok(SimdValue::I32(i32::from(f(v128_at(inputs, 0)?))))
}

fn bitmask(inputs: &[SimdValue], f: fn(V128) -> u32) -> Result<SimdValue> {
    Ok(SimdValue::I32(f(v128_at(inputs, 0)?) as i32))
}

/// Apply `op` to `inputs`, given in stack order (first operand first).
///
/// # Errors
///
/// - `INVALID_OPERAND_COUNT` if `inputs.len()` differs from
///   [`SimdOp::input_count`]
/// - `TYPE_MISMATCH` if an operand has the wrong value type
/// - `LANE_INDEX_OUT_OF_RANGE` if a lane immediate exceeds the shape
#[allow(clippy::too_many_lines)]
pub fn execute(op: SimdOp, inputs: &[SimdValue]) -> Result<SimdValue> {
    use SimdOp::*;

    #[cfg(feature = "log")]
    log::trace!("execute {op:?} on {} operand(s)", inputs.len());

    if inputs.len() != op.input_count() {
        #[cfg(feature = "log")]
        log::debug!(
            "{op:?} expects {} operand(s), got {}",
            op.input_count(),
            inputs.len()
        );
        return Err(Error::invalid_operand_count(
            "SIMD operand count does not match the instruction",
        ));
    }
    op.validate_immediates()?;

    match op {
        V128Not => unary(inputs, V128::lognot),
        V128And => binary(inputs, V128::and),
        V128Or => binary(inputs, V128::or),
        V128Xor => binary(inputs, V128::xor),
        V128AndNot => binary(inputs, V128::andnot),
        V128Bitselect => Ok(SimdValue::V128(v128_at(inputs, 0)?.bitselect(
            v128_at(inputs, 1)?,
            v128_at(inputs, 2)?,
        ))),
        V128AnyTrue => test(inputs, V128::any_true),

        // Integer scalars are truncated to the lane width.
        I8x16Splat => Ok(SimdValue::V128(I8x16::splat(i32_at(inputs, 0)? as i8))),
        I16x8Splat => Ok(SimdValue::V128(I16x8::splat(i32_at(inputs, 0)? as i16))),
        I32x4Splat => Ok(SimdValue::V128(I32x4::splat(i32_at(inputs, 0)?))),
        I64x2Splat => Ok(SimdValue::V128(I64x2::splat(i64_at(inputs, 0)?))),
        F32x4Splat => Ok(SimdValue::V128(F32x4::splat(f32_at(inputs, 0)?))),
        F64x2Splat => Ok(SimdValue::V128(F64x2::splat(f64_at(inputs, 0)?))),

        I8x16ExtractLaneS { lane } => Ok(SimdValue::I32(i32::from(I8x16::extract_lane_s(
            v128_at(inputs, 0)?,
            lane.into(),
        )))),
        I8x16ExtractLaneU { lane } => Ok(SimdValue::I32(i32::from(I8x16::extract_lane_u(
            v128_at(inputs, 0)?,
            lane.into(),
        )))),
        I16x8ExtractLaneS { lane } => Ok(SimdValue::I32(i32::from(I16x8::extract_lane_s(
            v128_at(inputs, 0)?,
            lane.into(),
        )))),
        I16x8ExtractLaneU { lane } => Ok(SimdValue::I32(i32::from(I16x8::extract_lane_u(
            v128_at(inputs, 0)?,
            lane.into(),
        )))),
        I32x4ExtractLane { lane } => Ok(SimdValue::I32(I32x4::extract_lane_s(
            v128_at(inputs, 0)?,
            lane.into(),
        ))),
        I64x2ExtractLane { lane } => Ok(SimdValue::I64(I64x2::extract_lane_s(
            v128_at(inputs, 0)?,
            lane.into(),
        ))),
        F32x4ExtractLane { lane } => Ok(SimdValue::F32(FloatBits32::from_float(
            F32x4::extract_lane(v128_at(inputs, 0)?, lane.into()),
        ))),
        F64x2ExtractLane { lane } => Ok(SimdValue::F64(FloatBits64::from_float(
            F64x2::extract_lane(v128_at(inputs, 0)?, lane.into()),
        ))),

        I8x16ReplaceLane { lane } => Ok(SimdValue::V128(I8x16::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            i32_at(inputs, 1)? as i8,
        ))),
        I16x8ReplaceLane { lane } => Ok(SimdValue::V128(I16x8::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            i32_at(inputs, 1)? as i16,
        ))),
        I32x4ReplaceLane { lane } => Ok(SimdValue::V128(I32x4::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            i32_at(inputs, 1)?,
        ))),
        I64x2ReplaceLane { lane } => Ok(SimdValue::V128(I64x2::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            i64_at(inputs, 1)?,
        ))),
        F32x4ReplaceLane { lane } => Ok(SimdValue::V128(F32x4::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            f32_at(inputs, 1)?,
        ))),
        F64x2ReplaceLane { lane } => Ok(SimdValue::V128(F64x2::replace_lane(
            v128_at(inputs, 0)?,
            lane.into(),
            f64_at(inputs, 1)?,
        ))),

        I8x16Swizzle => binary(inputs, I8x16::swizzle),
        I8x16Shuffle { lanes } => Ok(SimdValue::V128(I8x16::shuffle(
            v128_at(inputs, 0)?,
            v128_at(inputs, 1)?,
            lanes,
        ))),

        I8x16Eq => binary(inputs, I8x16::eq),
        I8x16Ne => binary(inputs, I8x16::ne),
        I8x16LtS => binary(inputs, I8x16::lt_s),
        I8x16LtU => binary(inputs, I8x16::lt_u),
        I8x16GtS => binary(inputs, I8x16::gt_s),
        I8x16GtU => binary(inputs, I8x16::gt_u),
        I8x16LeS => binary(inputs, I8x16::le_s),
        I8x16LeU => binary(inputs, I8x16::le_u),
        I8x16GeS => binary(inputs, I8x16::ge_s),
        I8x16GeU => binary(inputs, I8x16::ge_u),
        I16x8Eq => binary(inputs, I16x8::eq),
        I16x8Ne => binary(inputs, I16x8::ne),
        I16x8LtS => binary(inputs, I16x8::lt_s),
        I16x8LtU => binary(inputs, I16x8::lt_u),
        I16x8GtS => binary(inputs, I16x8::gt_s),
        I16x8GtU => binary(inputs, I16x8::gt_u),
        I16x8LeS => binary(inputs, I16x8::le_s),
        I16x8LeU => binary(inputs, I16x8::le_u),
        I16x8GeS => binary(inputs, I16x8::ge_s),
        I16x8GeU => binary(inputs, I16x8::ge_u),
        I32x4Eq => binary(inputs, I32x4::eq),
        I32x4Ne => binary(inputs, I32x4::ne),
        I32x4LtS => binary(inputs, I32x4::lt_s),
        I32x4LtU => binary(inputs, I32x4::lt_u),
        I32x4GtS => binary(inputs, I32x4::gt_s),
        I32x4GtU => binary(inputs, I32x4::gt_u),
        I32x4LeS => binary(inputs, I32x4::le_s),
        I32x4LeU => binary(inputs, I32x4::le_u),
        I32x4GeS => binary(inputs, I32x4::ge_s),
        I32x4GeU => binary(inputs, I32x4::ge_u),
        I64x2Eq => binary(inputs, I64x2::eq),
        I64x2Ne => binary(inputs, I64x2::ne),
        I64x2LtS => binary(inputs, I64x2::lt_s),
        I64x2GtS => binary(inputs, I64x2::gt_s),
        I64x2LeS => binary(inputs, I64x2::le_s),
        I64x2GeS => binary(inputs, I64x2::ge_s),
        F32x4Eq => binary(inputs, F32x4::eq),
        F32x4Ne => binary(inputs, F32x4::ne),
        F32x4Lt => binary(inputs, F32x4::lt),
        F32x4Gt => binary(inputs, F32x4::gt),
        F32x4Le => binary(inputs, F32x4::le),
        F32x4Ge => binary(inputs, F32x4::ge),
        F64x2Eq => binary(inputs, F64x2::eq),
        F64x2Ne => binary(inputs, F64x2::ne),
        F64x2Lt => binary(inputs, F64x2::lt),
        F64x2Gt => binary(inputs, F64x2::gt),
        F64x2Le => binary(inputs, F64x2::le),
        F64x2Ge => binary(inputs, F64x2::ge),

        I8x16Abs => unary(inputs, I8x16::abs),
        I8x16Neg => unary(inputs, I8x16::neg),
        I8x16Add => binary(inputs, I8x16::add),
        I8x16AddSatS => binary(inputs, I8x16::add_sat_s),
        I8x16AddSatU => binary(inputs, I8x16::add_sat_u),
        I8x16Sub => binary(inputs, I8x16::sub),
        I8x16SubSatS => binary(inputs, I8x16::sub_sat_s),
        I8x16SubSatU => binary(inputs, I8x16::sub_sat_u),
        I8x16MinS => binary(inputs, I8x16::min_s),
        I8x16MinU => binary(inputs, I8x16::min_u),
        I8x16MaxS => binary(inputs, I8x16::max_s),
        I8x16MaxU => binary(inputs, I8x16::max_u),
        I8x16AvgrU => binary(inputs, I8x16::avgr_u),
        I16x8Abs => unary(inputs, I16x8::abs),
        I16x8Neg => unary(inputs, I16x8::neg),
        I16x8Add => binary(inputs, I16x8::add),
        I16x8AddSatS => binary(inputs, I16x8::add_sat_s),
        I16x8AddSatU => binary(inputs, I16x8::add_sat_u),
        I16x8Sub => binary(inputs, I16x8::sub),
        I16x8SubSatS => binary(inputs, I16x8::sub_sat_s),
        I16x8SubSatU => binary(inputs, I16x8::sub_sat_u),
        I16x8Mul => binary(inputs, I16x8::mul),
        I16x8MinS => binary(inputs, I16x8::min_s),
        I16x8MinU => binary(inputs, I16x8::min_u),
        I16x8MaxS => binary(inputs, I16x8::max_s),
        I16x8MaxU => binary(inputs, I16x8::max_u),
        I16x8AvgrU => binary(inputs, I16x8::avgr_u),
        I32x4Abs => unary(inputs, I32x4::abs),
        I32x4Neg => unary(inputs, I32x4::neg),
        I32x4Add => binary(inputs, I32x4::add),
        I32x4Sub => binary(inputs, I32x4::sub),
        I32x4Mul => binary(inputs, I32x4::mul),
        I32x4MinS => binary(inputs, I32x4::min_s),
        I32x4MinU => binary(inputs, I32x4::min_u),
        I32x4MaxS => binary(inputs, I32x4::max_s),
        I32x4MaxU => binary(inputs, I32x4::max_u),
        I64x2Abs => unary(inputs, I64x2::abs),
        I64x2Neg => unary(inputs, I64x2::neg),
        I64x2Add => binary(inputs, I64x2::add),
        I64x2Sub => binary(inputs, I64x2::sub),
        I64x2Mul => binary(inputs, I64x2::mul),

        I8x16AllTrue => test(inputs, I8x16::all_true),
        I8x16Bitmask => bitmask(inputs, I8x16::bitmask),
        I16x8AllTrue => test(inputs, I16x8::all_true),
        I16x8Bitmask => bitmask(inputs, I16x8::bitmask),
        I32x4AllTrue => test(inputs, I32x4::all_true),
        I32x4Bitmask => bitmask(inputs, I32x4::bitmask),
        I64x2AllTrue => test(inputs, I64x2::all_true),
        I64x2Bitmask => bitmask(inputs, I64x2::bitmask),

        I8x16Shl => shift(inputs, I8x16::shl),
        I8x16ShrS => shift(inputs, I8x16::shr_s),
        I8x16ShrU => shift(inputs, I8x16::shr_u),
        I16x8Shl => shift(inputs, I16x8::shl),
        I16x8ShrS => shift(inputs, I16x8::shr_s),
        I16x8ShrU => shift(inputs, I16x8::shr_u),
        I32x4Shl => shift(inputs, I32x4::shl),
        I32x4ShrS => shift(inputs, I32x4::shr_s),
        I32x4ShrU => shift(inputs, I32x4::shr_u),
        I64x2Shl => shift(inputs, I64x2::shl),
        I64x2ShrS => shift(inputs, I64x2::shr_s),
        I64x2ShrU => shift(inputs, I64x2::shr_u),

        F32x4Abs => unary(inputs, F32x4::abs),
        F32x4Neg => unary(inputs, F32x4::neg),
        F32x4Sqrt => unary(inputs, F32x4::sqrt),
        F32x4Add => binary(inputs, F32x4::add),
        F32x4Sub => binary(inputs, F32x4::sub),
        F32x4Mul => binary(inputs, F32x4::mul),
        F32x4Div => binary(inputs, F32x4::div),
        F32x4Min => binary(inputs, F32x4::min),
        F32x4Max => binary(inputs, F32x4::max),
        F32x4Pmin => binary(inputs, F32x4::pmin),
        F32x4Pmax => binary(inputs, F32x4::pmax),
        F32x4Ceil => unary(inputs, F32x4::ceil),
        F32x4Floor => unary(inputs, F32x4::floor),
        F32x4Trunc => unary(inputs, F32x4::trunc),
        F32x4Nearest => unary(inputs, F32x4::nearest),
        F64x2Abs => unary(inputs, F64x2::abs),
        F64x2Neg => unary(inputs, F64x2::neg),
        F64x2Sqrt => unary(inputs, F64x2::sqrt),
        F64x2Add => binary(inputs, F64x2::add),
        F64x2Sub => binary(inputs, F64x2::sub),
        F64x2Mul => binary(inputs, F64x2::mul),
        F64x2Div => binary(inputs, F64x2::div),
        F64x2Min => binary(inputs, F64x2::min),
        F64x2Max => binary(inputs, F64x2::max),
        F64x2Pmin => binary(inputs, F64x2::pmin),
        F64x2Pmax => binary(inputs, F64x2::pmax),
        F64x2Ceil => unary(inputs, F64x2::ceil),
        F64x2Floor => unary(inputs, F64x2::floor),
        F64x2Trunc => unary(inputs, F64x2::trunc),
        F64x2Nearest => unary(inputs, F64x2::nearest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::codes;

    #[test]
    fn test_simd_op_input_count() {
        assert_eq!(SimdOp::I8x16Add.input_count(), 2);
        assert_eq!(SimdOp::I8x16Neg.input_count(), 1);
        assert_eq!(SimdOp::V128Bitselect.input_count(), 3);
        assert_eq!(SimdOp::I8x16Splat.input_count(), 1);
        assert_eq!(SimdOp::I32x4ReplaceLane { lane: 0 }.input_count(), 2);
        assert_eq!(SimdOp::I64x2ShrU.input_count(), 2);
    }

    #[test]
    fn test_simd_op_shape() {
        assert_eq!(SimdOp::V128Xor.shape(), None);
        assert_eq!(SimdOp::I8x16Shuffle { lanes: [0; 16] }.shape(), Some(Shape::I8x16));
        assert_eq!(SimdOp::F64x2Nearest.shape(), Some(Shape::F64x2));
        assert_eq!(SimdOp::I16x8ExtractLaneU { lane: 1 }.shape(), Some(Shape::I16x8));
    }

    #[test]
    fn test_operand_count_is_checked() {
        let err = execute(SimdOp::I32x4Add, &[SimdValue::V128(V128::ZERO)]).unwrap_err();
        assert_eq!(err.code, codes::INVALID_OPERAND_COUNT);
    }

    #[test]
    fn test_operand_type_is_checked() {
        let err = execute(SimdOp::I32x4Splat, &[SimdValue::I64(1)]).unwrap_err();
        assert_eq!(err.code, codes::TYPE_MISMATCH);
        let err = execute(SimdOp::V128Not, &[SimdValue::I32(1)]).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_lane_immediate_is_checked() {
        let inputs = [SimdValue::V128(V128::ZERO)];
        let err = execute(SimdOp::F64x2ExtractLane { lane: 2 }, &inputs).unwrap_err();
        assert_eq!(err.code, codes::LANE_INDEX_OUT_OF_RANGE);
        let ok = execute(SimdOp::I8x16ExtractLaneS { lane: 15 }, &inputs).unwrap();
        assert_eq!(ok, SimdValue::I32(0));
        let shuffle = SimdOp::I8x16Shuffle { lanes: [32; 16] };
        let inputs: [SimdValue; 2] = [V128::ZERO.into(), V128::ZERO.into()];
        assert!(execute(shuffle, &inputs).is_err());
    }

    #[test]
    fn test_splat_truncates_scalar() {
        let r = execute(SimdOp::I8x16Splat, &[SimdValue::I32(0x1ff)]).unwrap();
        assert_eq!(r, SimdValue::V128(I8x16::splat(-1)));
    }

    #[test]
    fn test_extract_extends() {
        let v = SimdValue::V128(I16x8::splat(-2));
        let s = execute(SimdOp::I16x8ExtractLaneS { lane: 0 }, &[v]).unwrap();
        let u = execute(SimdOp::I16x8ExtractLaneU { lane: 0 }, &[v]).unwrap();
        assert_eq!(s, SimdValue::I32(-2));
        assert_eq!(u, SimdValue::I32(0xfffe));
    }

    #[test]
    fn test_shift_takes_i32_count() {
        let v = SimdValue::V128(I64x2::splat(1));
        let r = execute(SimdOp::I64x2Shl, &[v, SimdValue::I32(65)]).unwrap();
        assert_eq!(r, SimdValue::V128(I64x2::splat(2)));
    }

    #[test]
    fn test_float_scalars_keep_bits() {
        let nan = f32::from_bits(0x7fa0_0000);
        let v = execute(SimdOp::F32x4Splat, &[nan.into()]).unwrap();
        let lane = execute(SimdOp::F32x4ExtractLane { lane: 3 }, &[v]).unwrap();
        assert_eq!(lane, SimdValue::F32(FloatBits32::from_bits(0x7fa0_0000)));
    }

    #[test]
    fn test_reductions_return_i32() {
        let v = SimdValue::V128(V128::from_i32x4([0, 0, 0, 1]));
        assert_eq!(execute(SimdOp::V128AnyTrue, &[v]).unwrap(), SimdValue::I32(1));
        assert_eq!(execute(SimdOp::I32x4AllTrue, &[v]).unwrap(), SimdValue::I32(0));
        assert_eq!(execute(SimdOp::I32x4Bitmask, &[v]).unwrap(), SimdValue::I32(0));
    }
}
