// WRT - wrt-math
// Module: Integer Lane Arithmetic
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-width integer arithmetic used for vector lanes.
//!
//! [`IntLane`] is implemented for `i8`, `i16`, `i32` and `i64`. Lanes are
//! stored signed; the unsigned interpretation is obtained through
//! [`IntLane::to_unsigned`], which is a pure reinterpretation of the bits.
//! All arithmetic wraps modulo `2^BITS`.

use core::fmt;

use crate::{literal, prelude::Result};

/// Scalar integer capability for one lane width.
pub trait IntLane: Copy + Eq + Ord + Default + fmt::Debug + fmt::Display + 'static {
    /// Unsigned type of the same width.
    type Unsigned: Copy + Ord + fmt::Debug + fmt::Display;

    /// Lane width in bits.
    const BITS: u32;
    /// All bits zero.
    const ZERO: Self;
    /// All bits one (`-1` in two's complement).
    const ALL_ONES: Self;

    /// Reinterpret the bits as unsigned.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Keep the low `BITS` bits of `value`.
    fn from_u64_truncating(value: u64) -> Self;

    /// Modular addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Modular subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Modular multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Modular negation; `MIN` maps to itself.
    fn wrapping_neg(self) -> Self;
    /// Modular absolute value; `MIN` maps to itself.
    fn wrapping_abs(self) -> Self;

    /// Signed saturating addition.
    fn add_sat_s(self, rhs: Self) -> Self;
    /// Unsigned saturating addition.
    fn add_sat_u(self, rhs: Self) -> Self;
    /// Signed saturating subtraction.
    fn sub_sat_s(self, rhs: Self) -> Self;
    /// Unsigned saturating subtraction.
    fn sub_sat_u(self, rhs: Self) -> Self;

    /// Unsigned rounding average `(a + b + 1) / 2`, computed without
    /// overflow.
    fn avgr_u(self, rhs: Self) -> Self;

    /// Left shift by `count mod BITS`.
    fn shl(self, count: u32) -> Self;
    /// Arithmetic right shift by `count mod BITS`.
    fn shr_s(self, count: u32) -> Self;
    /// Logical right shift by `count mod BITS`.
    fn shr_u(self, count: u32) -> Self;

    /// Parse a lane literal in WebAssembly text syntax.
    fn parse_literal(text: &str) -> Result<Self>;

    /// Signed `<`.
    fn lt_s(self, rhs: Self) -> bool {
        self < rhs
    }

    /// Unsigned `<`.
    fn lt_u(self, rhs: Self) -> bool {
        self.to_unsigned() < rhs.to_unsigned()
    }

    /// Signed `<=`.
    fn le_s(self, rhs: Self) -> bool {
        self <= rhs
    }

    /// Unsigned `<=`.
    fn le_u(self, rhs: Self) -> bool {
        self.to_unsigned() <= rhs.to_unsigned()
    }

    /// Signed `>`.
    fn gt_s(self, rhs: Self) -> bool {
        rhs.lt_s(self)
    }

    /// Unsigned `>`.
    fn gt_u(self, rhs: Self) -> bool {
        rhs.lt_u(self)
    }

    /// Signed `>=`.
    fn ge_s(self, rhs: Self) -> bool {
        rhs.le_s(self)
    }

    /// Unsigned `>=`.
    fn ge_u(self, rhs: Self) -> bool {
        rhs.le_u(self)
    }

    /// Signed minimum.
    fn min_s(self, rhs: Self) -> Self {
        if self.lt_s(rhs) { self } else { rhs }
    }

    /// Unsigned minimum.
    fn min_u(self, rhs: Self) -> Self {
        if self.lt_u(rhs) { self } else { rhs }
    }

    /// Signed maximum.
    fn max_s(self, rhs: Self) -> Self {
        if self.gt_s(rhs) { self } else { rhs }
    }

    /// Unsigned maximum.
    fn max_u(self, rhs: Self) -> Self {
        if self.gt_u(rhs) { self } else { rhs }
    }

    /// Whether the sign bit is set.
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_int_lane {
    ($t:ty, $u:ty, $wide:ty) => {
        impl IntLane for $t {
            type Unsigned = $u;

            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ALL_ONES: Self = -1;

            #[inline]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline]
            fn from_u64_truncating(value: u64) -> Self {
                value as $u as $t
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_neg(self) -> Self {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn wrapping_abs(self) -> Self {
                <$t>::wrapping_abs(self)
            }

            #[inline]
            fn add_sat_s(self, rhs: Self) -> Self {
                <$t>::saturating_add(self, rhs)
            }

            #[inline]
            fn add_sat_u(self, rhs: Self) -> Self {
                (self as $u).saturating_add(rhs as $u) as $t
            }

            #[inline]
            fn sub_sat_s(self, rhs: Self) -> Self {
                <$t>::saturating_sub(self, rhs)
            }

            #[inline]
            fn sub_sat_u(self, rhs: Self) -> Self {
                (self as $u).saturating_sub(rhs as $u) as $t
            }

            #[inline]
            fn avgr_u(self, rhs: Self) -> Self {
                let sum = <$wide>::from(self as $u) + <$wide>::from(rhs as $u) + 1;
                (sum / 2) as $u as $t
            }

            #[inline]
            fn shl(self, count: u32) -> Self {
                <$t>::wrapping_shl(self, count % Self::BITS)
            }

            #[inline]
            fn shr_s(self, count: u32) -> Self {
                <$t>::wrapping_shr(self, count % Self::BITS)
            }

            #[inline]
            fn shr_u(self, count: u32) -> Self {
                (self as $u).wrapping_shr(count % Self::BITS) as $t
            }

            fn parse_literal(text: &str) -> Result<Self> {
                literal::parse_int(text, Self::BITS).map(Self::from_u64_truncating)
            }
        }
    };
}

impl_int_lane!(i8, u8, u16);
impl_int_lane!(i16, u16, u32);
impl_int_lane!(i32, u32, u64);
impl_int_lane!(i64, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_arithmetic() {
        assert_eq!(IntLane::wrapping_add(127i8, 1), -128);
        assert_eq!(IntLane::wrapping_neg(i16::MIN), i16::MIN);
        assert_eq!(IntLane::wrapping_abs(i32::MIN), i32::MIN);
        assert_eq!(IntLane::wrapping_mul(i64::MAX, 2), -2);
    }

    #[test]
    fn test_unsigned_ordering() {
        assert!((-1i8).gt_u(1));
        assert!((-1i8).lt_s(1));
        assert_eq!((-1i16).min_u(5), 5);
        assert_eq!((-1i16).max_u(5), -1);
        assert_eq!((-1i32).min_s(5), -1);
    }

    #[test]
    fn test_avgr_u_boundaries() {
        assert_eq!(IntLane::avgr_u(-1i8, -1i8), -1);
        assert_eq!(IntLane::avgr_u(u16::MAX as i16, 0), i16::MIN);
        assert_eq!(IntLane::avgr_u(-1i64, -1i64), -1);
        assert_eq!(IntLane::avgr_u(1i32, 2i32), 2);
        assert_eq!(IntLane::avgr_u(0i32, 0i32), 0);
    }

    #[test]
    fn test_shift_counts_wrap() {
        assert_eq!(IntLane::shl(1i8, 9), 2);
        assert_eq!(IntLane::shr_s(-128i8, 15), -1);
        assert_eq!(IntLane::shr_u(-128i8, 15), 1);
        assert_eq!(IntLane::shl(1i64, 64), 1);
    }

    #[test]
    fn test_saturating() {
        assert_eq!(120i8.add_sat_s(10), 127);
        assert_eq!((-1i8).add_sat_u(1), -1);
        assert_eq!(0i16.sub_sat_u(1), 0);
        assert_eq!(i16::MIN.sub_sat_s(1), i16::MIN);
    }

    #[test]
    fn test_extension() {
        assert_eq!(i16::from_u64_truncating(0x1_8000), i16::MIN);
    }
}
