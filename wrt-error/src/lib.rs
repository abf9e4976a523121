// WRT - wrt-error
// Module: WRT Error Handling
// SW-REQ-ID: REQ_004
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! WRT Error handling library
//!
//! This library provides the error type shared by the WRT vector crates.
//! Errors are flat `Copy` values so that every layer can report a failure
//! without allocating.
//!
//! # Error Categories
//!
//! ## Parse Errors
//! - Lane literal count mismatch (`INVALID_LANE_COUNT`)
//! - Lane literal grammar violations (`INVALID_LITERAL`)
//!
//! ## Validation Errors
//! - Lane index out of range
//! - Wrong operand count for an instruction
//!
//! ## Type Errors
//! - Operand of the wrong value type
//!
//! # Usage
//!
//! ```
//! use wrt_error::{codes, kinds, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Parse,
//!     codes::INVALID_LITERAL,
//!     "integer literal out of range",
//! );
//! assert!(error.is_parse_error());
//!
//! let lane_error: Error = kinds::LaneIndexOutOfRange { lane: 4, lanes: 4 }.into();
//! assert_eq!(lane_error.code, codes::LANE_INDEX_OUT_OF_RANGE);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Standard library support
#[cfg(feature = "std")]
extern crate std;

/// Error codes for wrt
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for WRT operations.
pub type Result<T> = core::result::Result<T, Error>;
