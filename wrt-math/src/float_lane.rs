// WRT - wrt-math
// Module: Floating-Point Lane Arithmetic
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! IEEE 754 arithmetic for vector lanes with WebAssembly NaN rules.
//!
//! Every operation that can produce a NaN returns a deterministic one: the
//! first NaN operand with its quiet bit set, or the positive canonical NaN
//! when no operand was NaN. `abs` and `neg` only touch the sign bit.

use core::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

use crate::{
    literal::{self, FloatFormat},
    prelude::Result,
};

/// Scalar floating-point capability for one lane width.
pub trait FloatLane:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Bit layout of the format.
    const FORMAT: FloatFormat;
    /// Positive zero, the `false` lane of a comparison.
    const ZERO: Self;
    /// All-ones integer pattern reinterpreted as a float, the `true` lane of
    /// a comparison.
    const TRUE_MASK: Self;

    /// Raw bits, zero-extended.
    fn to_raw(self) -> u64;
    /// Float from the low bits of `raw`, one lane width wide.
    fn from_raw(raw: u64) -> Self;

    /// Hardware square root.
    fn raw_sqrt(self) -> Self;
    /// Round toward positive infinity.
    fn raw_ceil(self) -> Self;
    /// Round toward negative infinity.
    fn raw_floor(self) -> Self;
    /// Round toward zero.
    fn raw_trunc(self) -> Self;
    /// Round to nearest, ties to even.
    fn raw_nearest(self) -> Self;

    /// Correctly rounded decimal conversion of a validated literal.
    /// Returns the raw bits and whether the value overflowed to infinity.
    fn parse_decimal(text: &str) -> Option<(u64, bool)>;

    /// Whether the value is a NaN.
    fn is_nan(self) -> bool {
        let raw = self.to_raw();
        let exponent = raw & Self::FORMAT.exponent_mask();
        exponent == Self::FORMAT.exponent_mask() && raw & Self::FORMAT.mantissa_mask() != 0
    }

    /// Whether the sign bit is set (including `-0.0` and negative NaNs).
    fn is_sign_negative(self) -> bool {
        self.to_raw() & Self::FORMAT.sign_bit() != 0
    }

    /// The positive canonical NaN.
    fn canonical_nan() -> Self {
        Self::from_raw(Self::FORMAT.canonical_nan())
    }

    /// `self` with the quiet bit forced on.
    fn quieted(self) -> Self {
        Self::from_raw(self.to_raw() | Self::FORMAT.quiet_bit())
    }

    /// Result NaN of a unary operation.
    fn nan_of(self) -> Self {
        if self.is_nan() { self.quieted() } else { Self::canonical_nan() }
    }

    /// Result NaN of a binary operation.
    fn nan_of2(self, rhs: Self) -> Self {
        if self.is_nan() {
            self.quieted()
        } else if rhs.is_nan() {
            rhs.quieted()
        } else {
            Self::canonical_nan()
        }
    }

    /// Clear the sign bit.
    fn fabs(self) -> Self {
        Self::from_raw(self.to_raw() & !Self::FORMAT.sign_bit())
    }

    /// Flip the sign bit.
    fn fneg(self) -> Self {
        Self::from_raw(self.to_raw() ^ Self::FORMAT.sign_bit())
    }

    /// Square root.
    fn fsqrt(self) -> Self {
        let result = self.raw_sqrt();
        if result.is_nan() { self.nan_of() } else { result }
    }

    /// Addition.
    fn fadd(self, rhs: Self) -> Self {
        binary_result(self, rhs, self + rhs)
    }

    /// Subtraction.
    fn fsub(self, rhs: Self) -> Self {
        binary_result(self, rhs, self - rhs)
    }

    /// Multiplication.
    fn fmul(self, rhs: Self) -> Self {
        binary_result(self, rhs, self * rhs)
    }

    /// Division.
    fn fdiv(self, rhs: Self) -> Self {
        binary_result(self, rhs, self / rhs)
    }

    /// WebAssembly `fmin`: NaN if either operand is NaN, `-0 < +0`.
    fn fmin(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            self.nan_of2(rhs)
        } else if self == rhs {
            // Equal values differ at most in the sign of zero.
            Self::from_raw(self.to_raw() | rhs.to_raw())
        } else if self < rhs {
            self
        } else {
            rhs
        }
    }

    /// WebAssembly `fmax`: NaN if either operand is NaN, `-0 < +0`.
    fn fmax(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            self.nan_of2(rhs)
        } else if self == rhs {
            Self::from_raw(self.to_raw() & rhs.to_raw())
        } else if self > rhs {
            self
        } else {
            rhs
        }
    }

    /// Pseudo-minimum: `rhs < self ? rhs : self`.
    fn fpmin(self, rhs: Self) -> Self {
        if rhs < self { rhs } else { self }
    }

    /// Pseudo-maximum: `self < rhs ? rhs : self`.
    fn fpmax(self, rhs: Self) -> Self {
        if self < rhs { rhs } else { self }
    }

    /// Round toward positive infinity.
    fn fceil(self) -> Self {
        unary_result(self, self.raw_ceil())
    }

    /// Round toward negative infinity.
    fn ffloor(self) -> Self {
        unary_result(self, self.raw_floor())
    }

    /// Round toward zero.
    fn ftrunc(self) -> Self {
        unary_result(self, self.raw_trunc())
    }

    /// Round to nearest, ties to even.
    fn fnearest(self) -> Self {
        unary_result(self, self.raw_nearest())
    }

    /// IEEE `==`.
    fn feq(self, rhs: Self) -> bool {
        self == rhs
    }

    /// IEEE `!=`; true when either operand is NaN.
    fn fne(self, rhs: Self) -> bool {
        self != rhs
    }

    /// IEEE `<`.
    fn flt(self, rhs: Self) -> bool {
        self < rhs
    }

    /// IEEE `<=`.
    fn fle(self, rhs: Self) -> bool {
        self <= rhs
    }

    /// IEEE `>`.
    fn fgt(self, rhs: Self) -> bool {
        self > rhs
    }

    /// IEEE `>=`.
    fn fge(self, rhs: Self) -> bool {
        self >= rhs
    }

    /// Parse a lane literal in WebAssembly text syntax.
    fn parse_literal(text: &str) -> Result<Self> {
        literal::parse_float(text, Self::FORMAT, Self::parse_decimal).map(Self::from_raw)
    }
}

fn unary_result<F: FloatLane>(operand: F, result: F) -> F {
    if result.is_nan() { operand.nan_of() } else { result }
}

fn binary_result<F: FloatLane>(lhs: F, rhs: F, result: F) -> F {
    if result.is_nan() { lhs.nan_of2(rhs) } else { result }
}

macro_rules! impl_float_lane {
    ($t:ty, $bits:ty, $format:expr) => {
        impl FloatLane for $t {
            const FORMAT: FloatFormat = $format;
            const ZERO: Self = 0.0;
            const TRUE_MASK: Self = <$t>::from_bits(u64::MAX as $bits);

            #[inline]
            fn to_raw(self) -> u64 {
                u64::from(self.to_bits())
            }

            #[inline]
            fn from_raw(raw: u64) -> Self {
                <$t>::from_bits(raw as $bits)
            }

            fn raw_sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn raw_ceil(self) -> Self {
                <$t>::ceil(self)
            }

            fn raw_floor(self) -> Self {
                <$t>::floor(self)
            }

            fn raw_trunc(self) -> Self {
                <$t>::trunc(self)
            }

            fn raw_nearest(self) -> Self {
                <$t>::round_ties_even(self)
            }

            fn parse_decimal(text: &str) -> Option<(u64, bool)> {
                text.parse::<$t>().ok().map(|v| (u64::from(v.to_bits()), v.is_infinite()))
            }
        }
    };
}

impl_float_lane!(f32, u32, FloatFormat::BINARY32);
impl_float_lane!(f64, u64, FloatFormat::BINARY64);
