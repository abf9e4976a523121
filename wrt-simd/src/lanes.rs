// WRT - wrt-simd
// Module: Shape Instantiations
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The six lane layouts and the engines instantiated over them.
//!
//! A layout binds a shape to its scalar lane type and to the pair of
//! conversions between a [`V128`] and its lane array. The engines are
//! written once against [`LaneLayout`]; the aliases at the bottom of this
//! module give each shape its own operation namespace:
//!
//! ```
//! use wrt_simd::{I32x4, I8x16, V128};
//!
//! let bytes = I8x16::splat(1);
//! let words = I32x4::add(bytes, V128::ZERO);
//! assert_eq!(I32x4::extract_lane_s(words, 0), 0x0101_0101);
//! ```

use wrt_math::{FloatLane, IntLane};

use crate::{
    float_engine::FloatEngine, int_engine::IntEngine, prelude::Result, shape::Shape, v128::V128,
};

/// Binds a shape to its lane type and lane conversions.
pub trait LaneLayout: 'static {
    /// Scalar type of one lane.
    type Lane: Copy + PartialEq + core::fmt::Debug;
    /// Fixed-size lane array, `[Self::Lane; LANES]`.
    type Lanes: Copy
        + AsRef<[Self::Lane]>
        + AsMut<[Self::Lane]>
        + IntoIterator<Item = Self::Lane>;

    /// Shape tag.
    const SHAPE: Shape;
    /// Number of lanes.
    const LANES: usize;

    /// Decode a vector into lanes.
    fn to_lanes(v: V128) -> Self::Lanes;
    /// Encode lanes into a vector.
    fn from_lanes(lanes: Self::Lanes) -> V128;
    /// Parse one lane literal.
    fn parse_lane(text: &str) -> Result<Self::Lane>;
}

macro_rules! lane_layout {
    ($(#[$meta:meta])* $name:ident, $lane:ty, $n:literal, $shape:ident, $to:ident, $from:ident, $parse:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl LaneLayout for $name {
            type Lane = $lane;
            type Lanes = [$lane; $n];

            const SHAPE: Shape = Shape::$shape;
            const LANES: usize = $n;

            #[inline]
            fn to_lanes(v: V128) -> Self::Lanes {
                v.$to()
            }

            #[inline]
            fn from_lanes(lanes: Self::Lanes) -> V128 {
                V128::$from(lanes)
            }

            fn parse_lane(text: &str) -> Result<$lane> {
                ($parse)(text)
            }
        }
    };
}

lane_layout!(
    /// Sixteen `i8` lanes.
    I8x16Lanes, i8, 16, I8x16, to_i8x16, from_i8x16, <i8 as IntLane>::parse_literal
);
lane_layout!(
    /// Eight `i16` lanes.
    I16x8Lanes, i16, 8, I16x8, to_i16x8, from_i16x8, <i16 as IntLane>::parse_literal
);
lane_layout!(
    /// Four `i32` lanes.
    I32x4Lanes, i32, 4, I32x4, to_i32x4, from_i32x4, <i32 as IntLane>::parse_literal
);
lane_layout!(
    /// Two `i64` lanes.
    I64x2Lanes, i64, 2, I64x2, to_i64x2, from_i64x2, <i64 as IntLane>::parse_literal
);
lane_layout!(
    /// Four `f32` lanes.
    F32x4Lanes, f32, 4, F32x4, to_f32x4, from_f32x4, <f32 as FloatLane>::parse_literal
);
lane_layout!(
    /// Two `f64` lanes.
    F64x2Lanes, f64, 2, F64x2, to_f64x2, from_f64x2, <f64 as FloatLane>::parse_literal
);

/// Operations on sixteen 8-bit integer lanes.
pub type I8x16 = IntEngine<I8x16Lanes>;
/// Operations on eight 16-bit integer lanes.
pub type I16x8 = IntEngine<I16x8Lanes>;
/// Operations on four 32-bit integer lanes.
pub type I32x4 = IntEngine<I32x4Lanes>;
/// Operations on two 64-bit integer lanes.
pub type I64x2 = IntEngine<I64x2Lanes>;
/// Operations on four binary32 lanes.
pub type F32x4 = FloatEngine<F32x4Lanes>;
/// Operations on two binary64 lanes.
pub type F64x2 = FloatEngine<F64x2Lanes>;

impl IntEngine<I8x16Lanes> {
    /// Select bytes of `a` by the indices in `s`; indices `>= 16` give 0.
    #[must_use]
    pub fn swizzle(a: V128, s: V128) -> V128 {
        let bytes = a.bytes();
        let mut out = [0u8; 16];
        for (dst, index) in out.iter_mut().zip(s.bytes()) {
            *dst = bytes.get(usize::from(index)).copied().unwrap_or(0);
        }
        V128::from_bytes(out)
    }

    /// Select bytes from the 32-byte concatenation `a ++ b`.
    ///
    /// # Panics
    ///
    /// If any index is `>= 32`. Indices are immediates checked when the
    /// instruction is decoded.
    #[must_use]
    pub fn shuffle(a: V128, b: V128, lanes: [u8; 16]) -> V128 {
        let (low, high) = (a.bytes(), b.bytes());
        let mut out = [0u8; 16];
        for (dst, index) in out.iter_mut().zip(lanes) {
            let index = usize::from(index);
            assert!(index < 32, "shuffle lane index {index} out of range");
            *dst = if index < 16 { low[index] } else { high[index - 16] };
        }
        V128::from_bytes(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants_match_shape() {
        assert_eq!(I8x16Lanes::LANES, I8x16Lanes::SHAPE.lanes());
        assert_eq!(I16x8Lanes::LANES, I16x8Lanes::SHAPE.lanes());
        assert_eq!(I32x4Lanes::LANES, I32x4Lanes::SHAPE.lanes());
        assert_eq!(I64x2Lanes::LANES, I64x2Lanes::SHAPE.lanes());
        assert_eq!(F32x4Lanes::LANES, F32x4Lanes::SHAPE.lanes());
        assert_eq!(F64x2Lanes::LANES, F64x2Lanes::SHAPE.lanes());
    }

    #[test]
    fn test_swizzle() {
        let a = V128::from_bytes([10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25]);
        let s = V128::from_bytes([15, 0, 16, 255, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let r = I8x16::swizzle(a, s).bytes();
        assert_eq!(&r[..6], &[25, 10, 0, 0, 11, 11]);
    }

    #[test]
    fn test_shuffle() {
        let a = V128::filled(1);
        let b = V128::filled(2);
        let mut lanes = [0u8; 16];
        lanes[1] = 16;
        lanes[2] = 31;
        let r = I8x16::shuffle(a, b, lanes).bytes();
        assert_eq!(&r[..3], &[1, 2, 2]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_shuffle_rejects_wide_index() {
        let _ = I8x16::shuffle(V128::ZERO, V128::ZERO, [32; 16]);
    }
}
