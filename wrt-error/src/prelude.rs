// WRT - wrt-error
// Module: WRT Error Prelude
// SW-REQ-ID: REQ_004
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for wrt-error
//!
//! Re-exports the error types the WRT crates import together.

// Re-export error types from this crate
pub use crate::{
    codes,
    kinds::{self, InvalidLaneCount, InvalidLiteral, LaneIndexOutOfRange},
    Error, ErrorCategory, Result,
};
