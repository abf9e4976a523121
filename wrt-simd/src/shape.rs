// WRT - wrt-simd
// Module: Vector Shapes
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Lane layouts of a 128-bit vector.

use core::fmt;

/// How the 128 bits of a vector are partitioned into lanes.
///
/// A vector value carries no shape of its own; the shape is selected by the
/// instruction operating on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    /// Sixteen 8-bit integer lanes
    I8x16,
    /// Eight 16-bit integer lanes
    I16x8,
    /// Four 32-bit integer lanes
    I32x4,
    /// Two 64-bit integer lanes
    I64x2,
    /// Four binary32 lanes
    F32x4,
    /// Two binary64 lanes
    F64x2,
}

impl Shape {
    /// Every shape, integer shapes first.
    pub const ALL: [Shape; 6] = [
        Shape::I8x16,
        Shape::I16x8,
        Shape::I32x4,
        Shape::I64x2,
        Shape::F32x4,
        Shape::F64x2,
    ];

    /// Number of lanes.
    #[must_use]
    pub const fn lanes(self) -> usize {
        match self {
            Shape::I8x16 => 16,
            Shape::I16x8 => 8,
            Shape::I32x4 | Shape::F32x4 => 4,
            Shape::I64x2 | Shape::F64x2 => 2,
        }
    }

    /// Width of one lane in bits.
    #[must_use]
    pub const fn lane_bits(self) -> u32 {
        128 / self.lanes() as u32
    }

    /// Width of one lane in bytes.
    #[must_use]
    pub const fn lane_bytes(self) -> usize {
        (self.lane_bits() / 8) as usize
    }

    /// Text-format name, e.g. `i32x4`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::I8x16 => "i8x16",
            Shape::I16x8 => "i16x8",
            Shape::I32x4 => "i32x4",
            Shape::I64x2 => "i64x2",
            Shape::F32x4 => "f32x4",
            Shape::F64x2 => "f64x2",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
