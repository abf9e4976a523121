//! Tests for error conversion from the typed kinds

use wrt_error::{
    Error, ErrorCategory, codes,
    kinds::{InvalidLaneCount, InvalidLiteral, LaneIndexOutOfRange},
};

#[test]
fn test_error_from_invalid_lane_count() {
    let error: Error = Error::from(InvalidLaneCount {
        expected: 4,
        actual:   5,
    });

    assert_eq!(error.category, ErrorCategory::Parse);
    assert_eq!(error.code, codes::INVALID_LANE_COUNT);
    assert_eq!(error, Error::INVALID_LANE_COUNT);
}

#[test]
fn test_error_from_invalid_literal() {
    let error: Error = Error::from(InvalidLiteral("missing digits"));

    assert_eq!(error.category, ErrorCategory::Parse);
    assert_eq!(error.code, codes::INVALID_LITERAL);
    assert_eq!(error.message, "missing digits");
}

#[test]
fn test_error_categories() {
    let error: Error = LaneIndexOutOfRange { lane: 16, lanes: 16 }.into();
    assert!(error.is_validation_error());

    assert!(Error::type_mismatch("expected v128").is_type_error());
    assert_eq!(
        Error::invalid_operand_count("expected 2 operands").category,
        ErrorCategory::Validation
    );
}

#[test]
fn test_error_codes_are_distinct() {
    let all = [
        codes::INVALID_LANE_COUNT,
        codes::INVALID_LITERAL,
        codes::LANE_INDEX_OUT_OF_RANGE,
        codes::INVALID_OPERAND_COUNT,
        codes::TYPE_MISMATCH,
    ];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
