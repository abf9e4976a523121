// WRT - wrt-error
// Module: WRT Error Codes
// SW-REQ-ID: REQ_004
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for WRT

// Core error codes (1000-1999)
/// Type mismatch error
pub const TYPE_MISMATCH: u16 = 1009;

// Validation error codes (5000-5999)
/// Wrong number of operands for an instruction
pub const INVALID_OPERAND_COUNT: u16 = 5010;

// SIMD error codes (8700-8799)
/// Number of lane literals does not match the shape's lane count
pub const INVALID_LANE_COUNT: u16 = 8701;
/// A lane literal is not valid under its lane grammar
pub const INVALID_LITERAL: u16 = 8702;
/// Lane index outside `[0, lanes)`
pub const LANE_INDEX_OUT_OF_RANGE: u16 = 8703;
