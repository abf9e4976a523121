// Copyright (c) 2025 R T
// SPDX-License-Identifier: MIT
// Project: WRT
// Module: wrt-math (SW-REQ-ID-TBD)

//! Scalar lane arithmetic for WRT.
//!
//! Provides the fixed-width integer and IEEE 754 operations that WebAssembly
//! vector lanes are built from, together with the lane literal grammar of
//! the text format.
//!
//! ```
//! use wrt_math::{FloatLane, IntLane};
//!
//! assert_eq!(IntLane::wrapping_add(127i8, 1), -128);
//! assert_eq!(IntLane::avgr_u(-1i8, -1i8), -1);
//! assert_eq!(FloatLane::fmin(0.0f32, -0.0).to_bits(), (-0.0f32).to_bits());
//! assert_eq!(<i16 as IntLane>::parse_literal("0xffff").unwrap(), -1);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![deny(clippy::todo, clippy::unimplemented)]
#![warn(clippy::pedantic)]
// Allow specific lints necessary for low-level math/Wasm ops, matching Cargo.toml
#![allow(clippy::float_arithmetic, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

// Modules
pub mod float_bits;
pub mod float_lane;
pub mod int_lane;
pub mod literal;
pub mod prelude;
pub mod traits;

pub use float_bits::{FloatBits32, FloatBits64};
pub use float_lane::FloatLane;
pub use int_lane::IntLane;
pub use traits::LittleEndian;
