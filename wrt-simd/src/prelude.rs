// WRT - wrt-simd
// Module: Prelude
// SW-REQ-ID: N/A
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `wrt-simd`

pub use wrt_error::prelude::*;
pub use wrt_math::prelude::{FloatBits32, FloatBits64, FloatLane, IntLane, LittleEndian};

pub use crate::{
    lanes::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, LaneLayout},
    ops::{execute, SimdOp, SimdValue},
    shape::Shape,
    v128::V128,
};
