// WRT - wrt-math
// Module: Numeric Literal Grammar
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Parsing of numeric lane literals in WebAssembly text syntax.
//!
//! Integers accept an unsigned form (`0 ..= 2^N-1`) and a signed form with
//! an explicit `+` or `-` (`-2^(N-1) ..= 2^(N-1)-1`), in decimal or `0x`
//! hexadecimal, with single `_` separators between digits.
//!
//! Floats accept decimal and hexadecimal notation, `inf`, `nan` and
//! `nan:0x<payload>`. Results are returned as raw bit patterns so that NaN
//! payloads survive untouched.

use crate::prelude::{Error, Result};

/// Split an optional leading sign. Returns `(negative, explicit, rest)`.
fn split_sign(text: &str) -> (bool, bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, true, rest)
    } else {
        (false, false, text)
    }
}

/// Parse a digit sequence with `_` separators into a `u128`.
fn parse_digits(digits: &str, radix: u32) -> Result<u128> {
    if digits.is_empty() {
        return Err(Error::invalid_literal("missing digits"));
    }
    let mut value: u128 = 0;
    let mut last_was_digit = false;
    for ch in digits.chars() {
        if ch == '_' {
            if !last_was_digit {
                return Err(Error::invalid_literal("misplaced digit separator"));
            }
            last_was_digit = false;
            continue;
        }
        let digit = ch
            .to_digit(radix)
            .ok_or(Error::invalid_literal("unexpected character in literal"))?;
        value = value
            .checked_mul(u128::from(radix))
            .and_then(|v| v.checked_add(u128::from(digit)))
            .ok_or(Error::invalid_literal("integer literal out of range"))?;
        last_was_digit = true;
    }
    if !last_was_digit {
        return Err(Error::invalid_literal("misplaced digit separator"));
    }
    Ok(value)
}

/// Parse an integer literal for a lane of `bits` width.
///
/// The result holds the two's complement bit pattern in its low `bits`
/// bits; higher bits are zero.
pub fn parse_int(text: &str, bits: u32) -> Result<u64> {
    debug_assert!(bits > 0 && bits <= 64);
    let (negative, explicit_sign, body) = split_sign(text);
    let magnitude = match body.strip_prefix("0x") {
        Some(hex) => parse_digits(hex, 16)?,
        None => parse_digits(body, 10)?,
    };

    let half = 1u128 << (bits - 1);
    let in_range = if negative {
        magnitude <= half
    } else if explicit_sign {
        magnitude < half
    } else {
        magnitude <= (1u128 << bits) - 1
    };
    if !in_range {
        return Err(Error::invalid_literal("integer literal out of range"));
    }

    let mask = (1u128 << bits) - 1;
    let pattern = if negative {
        magnitude.wrapping_neg() & mask
    } else {
        magnitude
    };
    Ok(pattern as u64)
}

/// Bit layout of an IEEE 754 binary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    /// Explicit mantissa bits (23 for binary32, 52 for binary64).
    pub mantissa_bits: u32,
    /// Exponent bits (8 for binary32, 11 for binary64).
    pub exponent_bits: u32,
}

impl FloatFormat {
    /// IEEE 754 binary32
    pub const BINARY32: Self = Self {
        mantissa_bits: 23,
        exponent_bits: 8,
    };
    /// IEEE 754 binary64
    pub const BINARY64: Self = Self {
        mantissa_bits: 52,
        exponent_bits: 11,
    };

    /// Mask of the explicit mantissa bits.
    #[must_use]
    pub const fn mantissa_mask(self) -> u64 {
        (1u64 << self.mantissa_bits) - 1
    }

    /// Mask of the biased exponent field.
    #[must_use]
    pub const fn exponent_mask(self) -> u64 {
        ((1u64 << self.exponent_bits) - 1) << self.mantissa_bits
    }

    /// The sign bit.
    #[must_use]
    pub const fn sign_bit(self) -> u64 {
        1u64 << (self.mantissa_bits + self.exponent_bits)
    }

    const fn bias(self) -> i64 {
        (1i64 << (self.exponent_bits - 1)) - 1
    }

    /// The most significant mantissa bit, set on quiet NaNs.
    #[must_use]
    pub const fn quiet_bit(self) -> u64 {
        1u64 << (self.mantissa_bits - 1)
    }

    /// Canonical quiet NaN with positive sign.
    #[must_use]
    pub const fn canonical_nan(self) -> u64 {
        self.exponent_mask() | self.quiet_bit()
    }
}

/// Parse a float literal into the bit pattern of `format`.
///
/// `parse_decimal` converts a validated decimal literal (separators already
/// removed) with correct rounding for the target width.
pub fn parse_float<F>(text: &str, format: FloatFormat, parse_decimal: F) -> Result<u64>
where
    F: FnOnce(&str) -> Option<(u64, bool)>,
{
    let (negative, _, body) = split_sign(text);
    let sign = if negative { format.sign_bit() } else { 0 };

    let magnitude = if body == "inf" {
        format.exponent_mask()
    } else if body == "nan" {
        format.canonical_nan()
    } else if let Some(payload) = body.strip_prefix("nan:0x") {
        let payload = parse_digits(payload, 16)?;
        if payload == 0 || payload > u128::from(format.mantissa_mask()) {
            return Err(Error::invalid_literal("NaN payload out of range"));
        }
        format.exponent_mask() | payload as u64
    } else if let Some(hex) = body.strip_prefix("0x") {
        parse_hex_float(hex, format)?
    } else {
        let cleaned = validate_decimal(body)?;
        let (bits, infinite) =
            parse_decimal(&cleaned).ok_or(Error::invalid_literal("malformed float literal"))?;
        if infinite {
            return Err(Error::invalid_literal("float literal out of range"));
        }
        bits & !format.sign_bit()
    };
    Ok(sign | magnitude)
}

/// Check decimal float syntax and strip digit separators.
fn validate_decimal(body: &str) -> Result<String> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], Some(&mantissa[pos + 1..])),
        None => (mantissa, None),
    };
    parse_digit_run(int_part, 10)?;
    if let Some(frac) = frac_part {
        if !frac.is_empty() {
            parse_digit_run(frac, 10)?;
        }
    }
    if let Some(exp) = exponent {
        let (_, _, exp_digits) = split_sign(exp);
        parse_digit_run(exp_digits, 10)?;
    }
    Ok(body.chars().filter(|c| *c != '_').collect())
}

/// Validate a digit run without accumulating a value (runs may be longer
/// than any integer type).
fn parse_digit_run(digits: &str, radix: u32) -> Result<()> {
    if digits.is_empty() {
        return Err(Error::invalid_literal("missing digits"));
    }
    let mut last_was_digit = false;
    for ch in digits.chars() {
        if ch == '_' {
            if !last_was_digit {
                return Err(Error::invalid_literal("misplaced digit separator"));
            }
            last_was_digit = false;
        } else if ch.is_digit(radix) {
            last_was_digit = true;
        } else {
            return Err(Error::invalid_literal("unexpected character in literal"));
        }
    }
    if last_was_digit {
        Ok(())
    } else {
        Err(Error::invalid_literal("misplaced digit separator"))
    }
}

/// Parse the part of a hexadecimal float after `0x`.
fn parse_hex_float(body: &str, format: FloatFormat) -> Result<u64> {
    let (mantissa, exponent) = match body.find(['p', 'P']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    parse_digit_run(int_part, 16)?;
    if !frac_part.is_empty() {
        parse_digit_run(frac_part, 16)?;
    }

    let mut exp2: i64 = match exponent {
        Some(exp) => {
            let (negative, _, digits) = split_sign(exp);
            parse_digit_run(digits, 10)?;
            // Clamp huge exponents; they saturate to zero or overflow anyway.
            let magnitude = parse_digits(digits, 10).map_or(i64::from(i32::MAX), |v| {
                i64::try_from(v).unwrap_or(i64::from(i32::MAX)).min(i64::from(i32::MAX))
            });
            if negative { -magnitude } else { magnitude }
        },
        None => 0,
    };

    let mut mant: u128 = 0;
    let mut sticky = false;
    for (ch, is_frac) in int_part
        .chars()
        .map(|c| (c, false))
        .chain(frac_part.chars().map(|c| (c, true)))
    {
        let Some(digit) = ch.to_digit(16) else {
            continue;
        };
        if mant >> 120 == 0 {
            mant = (mant << 4) | u128::from(digit);
            if is_frac {
                exp2 -= 4;
            }
        } else {
            sticky |= digit != 0;
            if !is_frac {
                exp2 += 4;
            }
        }
    }

    round_to_format(mant, exp2, sticky, format)
        .ok_or(Error::invalid_literal("float literal out of range"))
}

/// Round `mant * 2^exp2` (plus a sticky tail) to nearest-even in `format`.
/// Returns `None` on overflow to infinity.
fn round_to_format(mant: u128, exp2: i64, sticky: bool, format: FloatFormat) -> Option<u64> {
    if mant == 0 {
        return Some(0);
    }
    let msb = i64::from(127 - mant.leading_zeros());
    let unbiased = msb + exp2;
    let bias = format.bias();
    let emin = 1 - bias;
    let precision = i64::from(format.mantissa_bits) + 1;

    let keep = if unbiased >= emin {
        precision
    } else {
        precision - (emin - unbiased)
    };
    if keep < 0 {
        return Some(0);
    }

    let drop = msb + 1 - keep;
    let mut kept = if drop <= 0 {
        mant << (-drop) as u32
    } else {
        let (kept, rem, half) = if drop >= 128 {
            (0u128, mant, 1u128 << 127)
        } else {
            let drop = drop as u32;
            (mant >> drop, mant & ((1u128 << drop) - 1), 1u128 << (drop - 1))
        };
        let round_up = rem > half || (rem == half && (sticky || kept & 1 == 1));
        if round_up { kept + 1 } else { kept }
    };

    let mut exponent = unbiased;
    if keep == precision && kept >> precision != 0 {
        kept >>= 1;
        exponent += 1;
    }

    if keep < precision {
        // Subnormal: a carry into bit `mantissa_bits` lands in the exponent
        // field and yields the smallest normal.
        return Some(kept as u64);
    }
    if exponent > bias {
        return None;
    }
    let biased = (exponent + bias) as u64;
    Some((biased << format.mantissa_bits) | (kept as u64 & format.mantissa_mask()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f32_bits(text: &str) -> Result<u64> {
        parse_float(text, FloatFormat::BINARY32, |s| {
            s.parse::<f32>().ok().map(|v| (u64::from(v.to_bits()), v.is_infinite()))
        })
    }

    fn f64_bits(text: &str) -> Result<u64> {
        parse_float(text, FloatFormat::BINARY64, |s| {
            s.parse::<f64>().ok().map(|v| (v.to_bits(), v.is_infinite()))
        })
    }

    #[test]
    fn test_int_forms() {
        assert_eq!(parse_int("255", 8).unwrap(), 0xff);
        assert_eq!(parse_int("-128", 8).unwrap(), 0x80);
        assert_eq!(parse_int("-1", 16).unwrap(), 0xffff);
        assert_eq!(parse_int("0xdead_beef", 32).unwrap(), 0xdead_beef);
        assert_eq!(parse_int("+127", 8).unwrap(), 127);
        assert_eq!(parse_int("18446744073709551615", 64).unwrap(), u64::MAX);
        assert_eq!(parse_int("-9223372036854775808", 64).unwrap(), 1u64 << 63);
    }

    #[test]
    fn test_int_rejects() {
        assert!(parse_int("256", 8).is_err());
        assert!(parse_int("+128", 8).is_err());
        assert!(parse_int("-129", 8).is_err());
        assert!(parse_int("", 8).is_err());
        assert!(parse_int("1__0", 8).is_err());
        assert!(parse_int("_1", 8).is_err());
        assert!(parse_int("1_", 8).is_err());
        assert!(parse_int("0x", 8).is_err());
        assert!(parse_int("12a", 32).is_err());
    }

    #[test]
    fn test_float_decimal() {
        assert_eq!(f32_bits("1.5").unwrap(), u64::from(1.5f32.to_bits()));
        assert_eq!(f32_bits("-0").unwrap(), u64::from((-0.0f32).to_bits()));
        assert_eq!(f64_bits("1_000.25e1").unwrap(), 10002.5f64.to_bits());
        assert_eq!(f64_bits("1.").unwrap(), 1.0f64.to_bits());
        assert!(f32_bits(".5").is_err());
        assert!(f32_bits("1e39").is_err());
        assert!(f32_bits("abc").is_err());
    }

    #[test]
    fn test_float_special() {
        assert_eq!(f32_bits("inf").unwrap(), 0x7f80_0000);
        assert_eq!(f32_bits("-inf").unwrap(), 0xff80_0000);
        assert_eq!(f32_bits("nan").unwrap(), 0x7fc0_0000);
        assert_eq!(f32_bits("-nan:0x1").unwrap(), 0xff80_0001);
        assert_eq!(f64_bits("nan:0x8_0000_0000_0000").unwrap(), 0x7ff8_0000_0000_0000);
        assert!(f32_bits("nan:0x0").is_err());
        assert!(f32_bits("nan:0x800000").is_err());
    }

    #[test]
    fn test_float_hex() {
        assert_eq!(f32_bits("0x1p0").unwrap(), u64::from(1.0f32.to_bits()));
        assert_eq!(f32_bits("0x1.8p1").unwrap(), u64::from(3.0f32.to_bits()));
        assert_eq!(f64_bits("-0x10").unwrap(), (-16.0f64).to_bits());
        assert_eq!(f32_bits("0x1p-149").unwrap(), 1);
        assert_eq!(f32_bits("0x1p-150").unwrap(), 0);
        assert_eq!(f32_bits("0x1.8p-150").unwrap(), 1);
        assert_eq!(f32_bits("0x1.fffffep127").unwrap(), u64::from(f32::MAX.to_bits()));
        assert!(f32_bits("0x1p128").is_err());
        // Rounds to even at the halfway point.
        assert_eq!(f32_bits("0x1.000001p0").unwrap(), u64::from(1.0f32.to_bits()));
        assert_eq!(f32_bits("0x1.000003p0").unwrap(), u64::from(1.0f32.to_bits()) + 2);
        assert_eq!(f64_bits("0x1.fffffffffffffp1023").unwrap(), f64::MAX.to_bits());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn decimal_display_reads_back(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
                prop_assert_eq!(f64_bits(&value.to_string()).unwrap(), value.to_bits());
            }

            #[test]
            fn hex_notation_of_normals_is_exact(
                mantissa in 0u64..(1 << 52),
                exponent in -1022i32..=1023,
                negative in any::<bool>(),
            ) {
                let sign = if negative { "-" } else { "" };
                let text = format!("{sign}0x1.{mantissa:013x}p{exponent}");
                let expected = (u64::from(negative) << 63)
                    | (((exponent + 1023) as u64) << 52)
                    | mantissa;
                prop_assert_eq!(f64_bits(&text).unwrap(), expected);
            }

            #[test]
            fn integer_literals_match_std(value in any::<i32>()) {
                prop_assert_eq!(parse_int(&format!("{value:+}"), 32).unwrap(), u64::from(value as u32));
                prop_assert_eq!(parse_int(&format!("{:#x}", value as u32), 32).unwrap(), u64::from(value as u32));
            }
        }
    }
}
