// WRT - wrt-simd
// Module: Integer Lane Engine
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Lanewise integer operations, written once for every integer shape.
//!
//! [`IntEngine`] is instantiated over a [`LaneLayout`] whose lane type
//! implements [`IntLane`]. Arithmetic wraps at the lane width; comparisons
//! produce all-ones or all-zeros lanes.

use core::marker::PhantomData;

use wrt_math::IntLane;

use crate::{lanes::LaneLayout, prelude::LaneIndexOutOfRange, v128::V128};

/// Integer operation set of one shape. Never constructed; all operations
/// are associated functions, e.g. `I32x4::add(a, b)`.
#[derive(Debug, Clone, Copy)]
pub struct IntEngine<S>(PhantomData<S>);

type Lane<S> = <S as LaneLayout>::Lane;

#[inline]
fn mask<L: IntLane>(flag: bool) -> L {
    if flag { L::ALL_ONES } else { L::ZERO }
}

#[inline]
fn check_lane<S: LaneLayout>(lane: usize) {
    assert!(
        lane < S::LANES,
        "{}",
        LaneIndexOutOfRange {
            lane,
            lanes: S::LANES,
        }
    );
}

impl<S> IntEngine<S>
where
    S: LaneLayout,
    S::Lane: IntLane,
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
        Self::zip(a, b, |x, y| mask(pred(x, y)))
    }

    /// Every lane set to `x`.
    #[must_use]
    pub fn splat(x: Lane<S>) -> V128 {
        let mut lanes = S::to_lanes(V128::ZERO);
        lanes.as_mut().fill(x);
        S::from_lanes(lanes)
    }

    /// Lane `lane` as a signed value.
    ///
    /// # Panics
    ///
    /// If `lane >= LANES`. Lane indices are immediates validated when the
    /// instruction is decoded.
    #[must_use]
    pub fn extract_lane_s(v: V128, lane: usize) -> Lane<S> {
        check_lane::<S>(lane);
        S::to_lanes(v).as_ref()[lane]
    }

    /// Lane `lane` reinterpreted as unsigned.
    ///
    /// # Panics
    ///
    /// If `lane >= LANES`.
    #[must_use]
    pub fn extract_lane_u(v: V128, lane: usize) -> <Lane<S> as IntLane>::Unsigned {
        Self::extract_lane_s(v, lane).to_unsigned()
    }

    /// `v` with lane `lane` replaced by `x`.
    ///
    /// # Panics
    ///
    /// If `lane >= LANES`.
    #[must_use]
    pub fn replace_lane(v: V128, lane: usize, x: Lane<S>) -> V128 {
        check_lane::<S>(lane);
        let mut lanes = S::to_lanes(v);
        lanes.as_mut()[lane] = x;
        S::from_lanes(lanes)
    }

    /// Lanewise `==`.
    #[must_use]
    pub fn eq(a: V128, b: V128) -> V128 {
        Self::compare(a, b, |x, y| x == y)
    }

    /// Lanewise `!=`.
    #[must_use]
    pub fn ne(a: V128, b: V128) -> V128 {
        Self::compare(a, b, |x, y| x != y)
    }

    /// Lanewise signed `<`.
    #[must_use]
    pub fn lt_s(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::lt_s)
    }

    /// Lanewise unsigned `<`.
    #[must_use]
    pub fn lt_u(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::lt_u)
    }

    /// Lanewise signed `<=`.
    #[must_use]
    pub fn le_s(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::le_s)
    }

    /// Lanewise unsigned `<=`.
    #[must_use]
    pub fn le_u(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::le_u)
    }

    /// Lanewise signed `>`.
    #[must_use]
    pub fn gt_s(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::gt_s)
    }

    /// Lanewise unsigned `>`.
    #[must_use]
    pub fn gt_u(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::gt_u)
    }

    /// Lanewise signed `>=`.
    #[must_use]
    pub fn ge_s(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::ge_s)
    }

    /// Lanewise unsigned `>=`.
    #[must_use]
    pub fn ge_u(a: V128, b: V128) -> V128 {
        Self::compare(a, b, IntLane::ge_u)
    }

    /// Lanewise absolute value; the minimum value maps to itself.
    #[must_use]
    pub fn abs(v: V128) -> V128 {
        Self::map(v, IntLane::wrapping_abs)
    }

    /// Lanewise two's complement negation.
    #[must_use]
    pub fn neg(v: V128) -> V128 {
        Self::map(v, IntLane::wrapping_neg)
    }

    /// Lanewise wrapping addition.
    #[must_use]
    pub fn add(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::wrapping_add)
    }

    /// Lanewise wrapping subtraction.
    #[must_use]
    pub fn sub(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::wrapping_sub)
    }

    /// Lanewise wrapping multiplication.
    #[must_use]
    pub fn mul(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::wrapping_mul)
    }

    /// Lanewise signed minimum.
    #[must_use]
    pub fn min_s(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::min_s)
    }

    /// Lanewise unsigned minimum.
    #[must_use]
    pub fn min_u(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::min_u)
    }

    /// Lanewise signed maximum.
    #[must_use]
    pub fn max_s(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::max_s)
    }

    /// Lanewise unsigned maximum.
    #[must_use]
    pub fn max_u(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::max_u)
    }

    /// Lanewise unsigned rounding average `(a + b + 1) / 2`.
    #[must_use]
    pub fn avgr_u(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::avgr_u)
    }

    /// Lanewise signed saturating addition.
    #[must_use]
    pub fn add_sat_s(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::add_sat_s)
    }

    /// Lanewise unsigned saturating addition.
    #[must_use]
    pub fn add_sat_u(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::add_sat_u)
    }

    /// Lanewise signed saturating subtraction.
    #[must_use]
    pub fn sub_sat_s(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::sub_sat_s)
    }

    /// Lanewise unsigned saturating subtraction.
    #[must_use]
    pub fn sub_sat_u(a: V128, b: V128) -> V128 {
        Self::zip(a, b, IntLane::sub_sat_u)
    }

    /// Whether any lane is nonzero.
    #[must_use]
    pub fn any_true(v: V128) -> bool {
        S::to_lanes(v).into_iter().any(|lane| lane != <Lane<S> as IntLane>::ZERO)
    }

    /// Whether every lane is nonzero.
    #[must_use]
    pub fn all_true(v: V128) -> bool {
        S::to_lanes(v).into_iter().all(|lane| lane != <Lane<S> as IntLane>::ZERO)
    }

    /// Lane sign bits packed into the low bits of a `u32`, lane 0 lowest.
    #[must_use]
    pub fn bitmask(v: V128) -> u32 {
        S::to_lanes(v)
            .into_iter()
            .enumerate()
            .filter(|(_, lane)| lane.is_negative())
            .fold(0u32, |bits, (i, _)| bits | (1u32 << i))
    }

    /// Shift every lane left by `count mod BITS`.
    #[must_use]
    pub fn shl(v: V128, count: u32) -> V128 {
        Self::map(v, |lane| lane.shl(count))
    }

    /// Arithmetic right shift of every lane by `count mod BITS`.
    #[must_use]
    pub fn shr_s(v: V128, count: u32) -> V128 {
        Self::map(v, |lane| lane.shr_s(count))
    }

    /// Logical right shift of every lane by `count mod BITS`.
    #[must_use]
    pub fn shr_u(v: V128, count: u32) -> V128 {
        Self::map(v, |lane| lane.shr_u(count))
    }
}
