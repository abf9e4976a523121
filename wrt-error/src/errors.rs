// WRT - wrt-error
// Module: WRT Error Types
// SW-REQ-ID: REQ_004
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error type for the WRT vector core
//!
//! Errors are small `Copy` values made of a category, a numeric code and a
//! static message, so they can be produced without allocation.

use core::fmt;

use crate::{codes, kinds};

/// `Error` categories for WRT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Validation errors
    Validation = 5,
    /// Type errors
    Type       = 6,
    /// Parse errors
    Parse      = 10,
}

/// WRT `Error` type
///
/// It provides categorized errors with error codes and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Literal list length differs from the shape's lane count
    pub const INVALID_LANE_COUNT: Self = Self::new(
        ErrorCategory::Parse,
        codes::INVALID_LANE_COUNT,
        "Literal count does not match lane count",
    );
    /// Lane index outside `[0, lanes)`
    pub const LANE_INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Validation,
        codes::LANE_INDEX_OUT_OF_RANGE,
        "Lane index out of range",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an invalid literal error
    #[must_use]
    pub const fn invalid_literal(message: &'static str) -> Self {
        Self::new(ErrorCategory::Parse, codes::INVALID_LITERAL, message)
    }

    /// Create an operand count error
    #[must_use]
    pub const fn invalid_operand_count(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Validation,
            codes::INVALID_OPERAND_COUNT,
            message,
        )
    }

    /// Create a type mismatch error
    #[must_use]
    pub const fn type_mismatch(message: &'static str) -> Self {
        Self::new(ErrorCategory::Type, codes::TYPE_MISMATCH, message)
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a type error
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.category == ErrorCategory::Type
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

// -- From<kinds::X> for Error implementations --
impl From<kinds::InvalidLaneCount> for Error {
    fn from(_e: kinds::InvalidLaneCount) -> Self {
        Self::INVALID_LANE_COUNT
    }
}

impl From<kinds::InvalidLiteral> for Error {
    fn from(e: kinds::InvalidLiteral) -> Self {
        Self::invalid_literal(e.0)
    }
}

impl From<kinds::LaneIndexOutOfRange> for Error {
    fn from(_e: kinds::LaneIndexOutOfRange) -> Self {
        Self::LANE_INDEX_OUT_OF_RANGE
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_literal("integer literal out of range");
        assert_eq!(
            err.to_string(),
            "[Parse][E21FE] integer literal out of range"
        );
    }

    #[test]
    fn test_kind_conversion() {
        let err: Error = kinds::InvalidLaneCount {
            expected: 16,
            actual:   2,
        }
        .into();
        assert_eq!(err.code, codes::INVALID_LANE_COUNT);
        assert!(err.is_parse_error());

        let err: Error = kinds::LaneIndexOutOfRange { lane: 4, lanes: 4 }.into();
        assert_eq!(err, Error::LANE_INDEX_OUT_OF_RANGE);
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_literal_message_is_preserved() {
        let err: Error = kinds::InvalidLiteral("unexpected character").into();
        assert_eq!(err.message, "unexpected character");
        assert_eq!(err.category, ErrorCategory::Parse);
    }
}
