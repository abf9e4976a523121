// WRT - wrt-simd
// Module: Floating-Point Lane Engine
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Lanewise IEEE 754 operations, written once for `f32x4` and `f64x2`.
//!
//! A true comparison lane holds the all-ones pattern of the lane width
//! (a NaN when read as a float); a false lane holds `+0.0`. NaN results
//! follow the lane's deterministic NaN rule, see [`FloatLane`].

use core::marker::PhantomData;

use wrt_math::FloatLane;

use crate::{lanes::LaneLayout, prelude::LaneIndexOutOfRange, v128::V128};

/// Floating-point operation set of one shape, e.g. `F32x4::add(a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct FloatEngine<S>(PhantomData<S>);

type Lane<S> = <S as LaneLayout>::Lane;

impl<S> FloatEngine<S>
where
    S: LaneLayout,
    S::Lane: FloatLane,
{
    #[inline]
    fn map(v: V128, f: impl Fn(Lane<S>) -> Lane<S>) -> V128 {
        let mut lanes = S::to_lanes(v);
        for lane in lanes.as_mut() {
            *lane = f(*lane);
        }
        S::from_lanes(lanes)
    }

    #[inline]
    fn zip(a: V128, b: V128, f: impl Fn(Lane<S>, Lane<S>) -> Lane<S>) -> V128 {
        let mut lanes = S::to_lanes(a);
        for (lane, rhs) in lanes.as_mut().iter_mut().zip(S::to_lanes(b)) {
            *lane = f(*lane, rhs);
        }
        S::from_lanes(lanes)
    }

    #[inline]
    fn compare(a: V128, b: V128, pred: impl Fn(Lane<S>, Lane<S>) -> bool) -> V128 {
        Self::zip(a, b, |x, y| {
            if pred(x, y) {
                <Lane<S> as FloatLane>::TRUE_MASK
            } else {
                <Lane<S> as FloatLane>::ZERO
            }
        })
    }

    /// Every lane set to `x`, bit for bit.
    #[must_use]
    pub fn splat(x: Lane<S>) -> V128 {
        let mut lanes = S::to_lanes(V128::ZERO);
        lanes.as_mut().fill(x);
        S::from_lanes(lanes)
    }

    /// Lane `lane`.
    ///
    /// # Panics
    ///
    /// If `lane >= LANES`. Lane indices are immediates validated when the
    /// instruction is decoded.
    #[must_use]
    pub fn extract_lane(v: V128, lane: usize) -> Lane<S> {
        assert!(lane < S::LANES, "{}", LaneIndexOutOfRange { lane, lanes: S::LANES });
        S::to_lanes(v).as_ref()[lane]
    }

    /// `v` with lane `lane` replaced by `x`.
    ///
    /// # Panics
    ///
    /// If `lane >= LANES`.
    #[must_use]
    pub fn replace_lane(v: V128, lane: usize, x: Lane<S>) -> V128 {
        assert!(lane < S::LANES, "{}", LaneIndexOutOfRange { lane, lanes: S::LANES });
        let mut lanes = S::to_lanes(v);
        lanes.as_mut()[lane] = x;
        S::from_lanes(lanes)
    }

    /// Lanewise `==`; false for NaN operands.
    #[must_use]
    pub fn eq(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::feq)
    }

    /// Lanewise `!=`; true for NaN operands.
    #[must_use]
    pub fn ne(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::fne)
    }

    /// Lanewise `<`.
    #[must_use]
    pub fn lt(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::flt)
    }

    /// Lanewise `<=`.
    #[must_use]
    pub fn le(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::fle)
    }

    /// Lanewise `>`.
    #[must_use]
    pub fn gt(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::fgt)
    }

    /// Lanewise `>=`.
    #[must_use]
    pub fn ge(a: V128, b: V128) -> V128 {
        Self::compare(a, b, FloatLane::fge)
    }

    /// Clear every sign bit.
    #[must_use]
    pub fn abs(v: V128) -> V128 {
        Self::map(v, FloatLane::fabs)
    }

    /// Flip every sign bit.
    #[must_use]
    pub fn neg(v: V128) -> V128 {
        Self::map(v, FloatLane::fneg)
    }

    /// Lanewise square root.
    #[must_use]
    pub fn sqrt(v: V128) -> V128 {
        Self::map(v, FloatLane::fsqrt)
    }

    /// Lanewise addition.
    #[must_use]
    pub fn add(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fadd)
    }

    /// Lanewise subtraction.
    #[must_use]
    pub fn sub(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fsub)
    }

    /// Lanewise multiplication.
    #[must_use]
    pub fn mul(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fmul)
    }

    /// Lanewise division.
    #[must_use]
    pub fn div(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fdiv)
    }

    /// Lanewise minimum; NaN if either lane is NaN, `-0.0` below `+0.0`.
    #[must_use]
    pub fn min(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fmin)
    }

    /// Lanewise maximum; NaN if either lane is NaN, `+0.0` above `-0.0`.
    #[must_use]
    pub fn max(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fmax)
    }

    /// Lanewise `b < a ? b : a`.
    #[must_use]
    pub fn pmin(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fpmin)
    }

    /// Lanewise `a < b ? b : a`.
    #[must_use]
    pub fn pmax(a: V128, b: V128) -> V128 {
        Self::zip(a, b, FloatLane::fpmax)
    }

    /// Round every lane toward positive infinity.
    #[must_use]
    pub fn ceil(v: V128) -> V128 {
        Self::map(v, FloatLane::fceil)
    }

    /// Round every lane toward negative infinity.
    #[must_use]
    pub fn floor(v: V128) -> V128 {
        Self::map(v, FloatLane::ffloor)
    }

    /// Round every lane toward zero.
    #[must_use]
    pub fn trunc(v: V128) -> V128 {
        Self::map(v, FloatLane::ftrunc)
    }

    /// Round every lane to nearest, ties to even.
    #[must_use]
    pub fn nearest(v: V128) -> V128 {
        Self::map(v, FloatLane::fnearest)
    }
}
