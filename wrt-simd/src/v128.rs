// WRT - wrt-simd
// Module: 128-bit Vector Value
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Storage of a 128-bit vector and its six lane views.
//!
//! A [`V128`] is sixteen bytes in little-endian lane order. Every view
//! (`to_i8x16`, `to_f64x2`, ...) is a pure decoding of those bytes, and each
//! `from_*` constructor is its exact inverse, so a value produced through
//! one shape can be consumed through any other without loss.

use core::fmt;

use wrt_math::{FloatBits32, FloatBits64, LittleEndian};

use crate::{
    lanes::{self, LaneLayout},
    prelude::{Error, InvalidLaneCount, Result},
    shape::Shape,
};

/// An immutable 128-bit vector value with no shape of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct V128([u8; 16]);

macro_rules! lane_view {
    ($(#[$to_doc:meta])* $to:ident, $(#[$from_doc:meta])* $from:ident, $t:ty, $n:literal) => {
        $(#[$to_doc])*
        #[must_use]
        pub fn $to(self) -> [$t; $n] {
            const SIZE: usize = 16 / $n;
            let mut lanes = [<$t>::default(); $n];
            for (lane, chunk) in lanes.iter_mut().zip(self.0.chunks_exact(SIZE)) {
                let mut raw = [0u8; SIZE];
                raw.copy_from_slice(chunk);
                *lane = <$t>::from_le_bytes(raw);
            }
            lanes
        }

        $(#[$from_doc])*
        #[must_use]
        pub fn $from(lanes: [$t; $n]) -> Self {
            let mut bytes = [0u8; 16];
            for (chunk, lane) in bytes.chunks_exact_mut(16 / $n).zip(lanes) {
                chunk.copy_from_slice(&lane.to_le_bytes());
            }
            Self(bytes)
        }
    };
}

impl V128 {
    /// All 128 bits clear.
    pub const ZERO: Self = Self([0; 16]);

    /// Storage with every byte set to `fill`.
    #[must_use]
    pub const fn filled(fill: u8) -> Self {
        Self([fill; 16])
    }

    /// Wraps sixteen bytes in little-endian order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The sixteen bytes in little-endian order.
    #[must_use]
    pub const fn bytes(self) -> [u8; 16] {
        self.0
    }

    /// Value whose little-endian encoding is `bits`.
    #[must_use]
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits.to_le_bytes())
    }

    /// The 128 bits as one integer.
    #[must_use]
    pub const fn to_bits(self) -> u128 {
        u128::from_le_bytes(self.0)
    }

    /// Value built from its low and high 64-bit words.
    #[must_use]
    pub const fn from_u64_pair(low: u64, high: u64) -> Self {
        Self::from_bits(((high as u128) << 64) | low as u128)
    }

    /// The low and high 64-bit words.
    #[must_use]
    pub const fn to_u64_pair(self) -> (u64, u64) {
        let bits = self.to_bits();
        (bits as u64, (bits >> 64) as u64)
    }

    lane_view!(
        /// Sixteen 8-bit lanes.
        to_i8x16,
        /// Inverse of [`V128::to_i8x16`].
        from_i8x16, i8, 16
    );
    lane_view!(
        /// Eight 16-bit lanes.
        to_i16x8,
        /// Inverse of [`V128::to_i16x8`].
        from_i16x8, i16, 8
    );
    lane_view!(
        /// Four 32-bit lanes.
        to_i32x4,
        /// Inverse of [`V128::to_i32x4`].
        from_i32x4, i32, 4
    );
    lane_view!(
        /// Two 64-bit lanes.
        to_i64x2,
        /// Inverse of [`V128::to_i64x2`].
        from_i64x2, i64, 2
    );
    lane_view!(
        /// Four binary32 lanes; NaN payloads are preserved.
        to_f32x4,
        /// Inverse of [`V128::to_f32x4`].
        from_f32x4, f32, 4
    );
    lane_view!(
        /// Two binary64 lanes; NaN payloads are preserved.
        to_f64x2,
        /// Inverse of [`V128::to_f64x2`].
        from_f64x2, f64, 2
    );

    /// Parse one literal per lane of `shape`.
    ///
    /// # Errors
    ///
    /// `INVALID_LANE_COUNT` if `literals.len() != shape.lanes()`, otherwise
    /// the `INVALID_LITERAL` error of the first lane that fails to parse.
    pub fn of_strings(shape: Shape, literals: &[&str]) -> Result<Self> {
        if literals.len() != shape.lanes() {
            return Err(InvalidLaneCount {
                expected: shape.lanes(),
                actual:   literals.len(),
            }
            .into());
        }
        match shape {
            Shape::I8x16 => parse_lanes::<lanes::I8x16Lanes>(literals),
            Shape::I16x8 => parse_lanes::<lanes::I16x8Lanes>(literals),
            Shape::I32x4 => parse_lanes::<lanes::I32x4Lanes>(literals),
            Shape::I64x2 => parse_lanes::<lanes::I64x2Lanes>(literals),
            Shape::F32x4 => parse_lanes::<lanes::F32x4Lanes>(literals),
            Shape::F64x2 => parse_lanes::<lanes::F64x2Lanes>(literals),
        }
    }

    /// Render the lanes of `shape` in text-format syntax, e.g.
    /// `i16x8 0x0001 0x0000 ...`.
    ///
    /// Integer lanes are printed as zero-padded hex, float lanes as the
    /// shortest decimal that reads back to the same bits (`nan:0x...` for
    /// NaNs). The output is accepted by [`V128::of_strings`] after the
    /// shape name.
    #[must_use]
    pub fn to_string_as(self, shape: Shape) -> String {
        let digits = shape.lane_bytes() * 2;
        let lanes: Vec<String> = match shape {
            Shape::I8x16 => hex_lanes(self.to_i8x16().map(|l| u64::from(l as u8)), digits),
            Shape::I16x8 => hex_lanes(self.to_i16x8().map(|l| u64::from(l as u16)), digits),
            Shape::I32x4 => hex_lanes(self.to_i32x4().map(|l| u64::from(l as u32)), digits),
            Shape::I64x2 => hex_lanes(self.to_i64x2().map(|l| l as u64), digits),
            Shape::F32x4 => self
                .to_f32x4()
                .iter()
                .map(|l| FloatBits32::from_float(*l).to_string())
                .collect(),
            Shape::F64x2 => self
                .to_f64x2()
                .iter()
                .map(|l| FloatBits64::from_float(*l).to_string())
                .collect(),
        };
        format!("{shape} {}", lanes.join(" "))
    }
}

fn hex_lanes<const N: usize>(lanes: [u64; N], digits: usize) -> Vec<String> {
    lanes
        .iter()
        .map(|lane| format!("0x{lane:0digits$x}"))
        .collect()
}

fn parse_lanes<S: LaneLayout>(literals: &[&str]) -> Result<V128> {
    let mut lanes = S::to_lanes(V128::ZERO);
    for (lane, text) in lanes.as_mut().iter_mut().zip(literals) {
        *lane = S::parse_lane(text)?;
    }
    Ok(S::from_lanes(lanes))
}

impl fmt::Display for V128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_as(Shape::I32x4))
    }
}

impl fmt::LowerHex for V128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:032x}", self.to_bits())
    }
}

impl From<u128> for V128 {
    fn from(bits: u128) -> Self {
        Self::from_bits(bits)
    }
}

impl From<V128> for u128 {
    fn from(value: V128) -> Self {
        value.to_bits()
    }
}

impl From<[u8; 16]> for V128 {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl LittleEndian for V128 {
    fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::type_mismatch("v128 requires exactly 16 bytes"))?;
        Ok(Self(bytes))
    }

    fn to_le_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}
