// WRT - wrt-error
// Module: WRT Error Kinds
// SW-REQ-ID: REQ_004
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Typed error kinds raised by the vector core.
//!
//! Each kind carries the detail a caller may want to inspect and converts
//! into the flat [`Error`](crate::Error) through `From`.

use core::fmt::{self, Display};

/// The number of lane literals given for a shape did not match its lane
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLaneCount {
    /// Lane count of the requested shape
    pub expected: usize,
    /// Number of literals supplied
    pub actual:   usize,
}

impl Display for InvalidLaneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid lane count: expected {} literals, got {}",
            self.expected, self.actual
        )
    }
}

/// A lane literal failed to parse under its scalar grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLiteral(pub &'static str);

impl Display for InvalidLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid literal: {}", self.0)
    }
}

/// A lane index fell outside `[0, lanes)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneIndexOutOfRange {
    /// Requested lane
    pub lane:  usize,
    /// Lane count of the shape
    pub lanes: usize,
}

impl Display for LaneIndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lane index {} out of range for {} lanes", self.lane, self.lanes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        let kind = InvalidLaneCount {
            expected: 4,
            actual:   3,
        };
        assert_eq!(
            kind.to_string(),
            "Invalid lane count: expected 4 literals, got 3"
        );

        let kind = LaneIndexOutOfRange { lane: 16, lanes: 16 };
        assert_eq!(kind.to_string(), "Lane index 16 out of range for 16 lanes");
    }
}
