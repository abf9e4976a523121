// WRT - wrt-math
// Module: Prelude
// SW-REQ-ID: N/A
//
// Copyright (c) 2024 Your Name/Organization
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Crate prelude for `wrt-math`
//!
//! Re-exports the lane capability traits together with the `wrt-error`
//! prelude so that dependants need a single import.

// Re-export from wrt-error using its prelude
pub use wrt_error::prelude::*;

pub use crate::{
    float_bits::{FloatBits32, FloatBits64},
    float_lane::FloatLane,
    int_lane::IntLane,
    literal::FloatFormat,
    traits::LittleEndian,
};
