// WRT - wrt-simd
// Module: WebAssembly 128-bit SIMD Values
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)] // Rule 2

//! WebAssembly `v128` values and the semantics of the vector instructions.
//!
//! A [`V128`] is sixteen bytes with no shape attached. Each instruction
//! chooses one of six lane layouts ([`Shape`]) and operates through the
//! matching engine:
//!
//! - `bitwise`: shape-independent logic (`and`, `or`, `bitselect`, ...)
//! - `int_engine`: lanewise integer operations for `i8x16`, `i16x8`,
//!   `i32x4` and `i64x2`
//! - `float_engine`: lanewise IEEE 754 operations for `f32x4` and `f64x2`
//! - `lanes`: the shape instantiations, exported as [`I8x16`] ... [`F64x2`]
//! - `ops`: an operation table for instruction dispatchers
//!
//! Every operation is a pure function returning a fresh value.
//!
//! ```
//! use wrt_simd::{I32x4, I8x16, Shape, V128};
//!
//! let v = I8x16::add(I8x16::splat(127), I8x16::splat(1));
//! assert_eq!(v, I8x16::splat(-128));
//!
//! // Any shape may consume a value produced by another.
//! let words = V128::of_strings(Shape::I32x4, &["0", "0", "0", "1"])?;
//! assert!(I32x4::any_true(words));
//! assert!(!I32x4::all_true(words));
//! # Ok::<(), wrt_simd::Error>(())
//! ```

#![warn(clippy::missing_panics_doc)]

pub mod bitwise;
pub mod float_engine;
pub mod int_engine;
pub mod lanes;
pub mod ops;
pub mod prelude;
pub mod shape;
pub mod v128;

pub use float_engine::FloatEngine;
pub use int_engine::IntEngine;
pub use lanes::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, LaneLayout};
pub use ops::{execute, SimdOp, SimdValue};
pub use shape::Shape;
pub use v128::V128;
pub use wrt_error::{Error, Result};
