// WRT - wrt-math
// Module: Float Bit Patterns
// SW-REQ-ID: REQ_018 (Partially, as type representation)
//
// Copyright (c) 2024 Your Name/Organization
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bit-exact wrappers for `f32` and `f64` scalar operands.
//!
//! Lane values that cross an API boundary (a scalar fed to `splat` or
//! `replace_lane`, a scalar returned by `extract_lane`) must keep their NaN
//! payload and sign. The wrappers compare and hash on the raw bits so that
//! two NaNs with the same pattern are equal.

use core::fmt;

use wrt_error::{Error, Result};

use crate::{float_lane::FloatLane, traits::LittleEndian};

macro_rules! float_bits {
    ($(#[$meta:meta])* $name:ident, $float:ty, $bits:ty, $bytes:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub $bits);

        impl $name {
            /// Positive canonical quiet NaN.
            pub const NAN: Self = Self(<$float as FloatLane>::FORMAT.canonical_nan() as $bits);

            /// Wraps a float value, keeping its exact bit pattern.
            #[must_use]
            pub fn from_float(val: $float) -> Self {
                Self(val.to_bits())
            }

            /// The float value represented by these bits.
            #[must_use]
            pub fn value(self) -> $float {
                <$float>::from_bits(self.0)
            }

            /// Raw bits.
            #[must_use]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Wraps raw bits.
            #[must_use]
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            /// Whether the pattern encodes a NaN.
            #[must_use]
            pub fn is_nan(self) -> bool {
                self.value().is_nan()
            }
        }

        impl From<$float> for $name {
            fn from(val: $float) -> Self {
                Self::from_float(val)
            }
        }

        impl From<$name> for $float {
            fn from(bits: $name) -> Self {
                bits.value()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let value = self.value();
                if value.is_nan() {
                    let sign = if value.is_sign_negative() { "-" } else { "" };
                    let payload = self.0 & <$float as FloatLane>::FORMAT.mantissa_mask() as $bits;
                    write!(f, "{sign}nan:0x{payload:x}")
                } else {
                    write!(f, "{value}")
                }
            }
        }

        impl LittleEndian for $name {
            fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; $bytes] = bytes.try_into().map_err(|_| {
                    Error::type_mismatch(concat!(
                        stringify!($name),
                        " requires exactly ",
                        stringify!($bytes),
                        " bytes"
                    ))
                })?;
                Ok(Self(<$bits>::from_le_bytes(arr)))
            }

            fn to_le_bytes(&self) -> Vec<u8> {
                self.0.to_le_bytes().to_vec()
            }
        }
    };
}

float_bits!(
    /// Bit pattern of an `f32` with bitwise equality and hashing.
    FloatBits32, f32, u32, 4
);
float_bits!(
    /// Bit pattern of an `f64` with bitwise equality and hashing.
    FloatBits64, f64, u64, 8
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_equality_is_bitwise() {
        let a = FloatBits32::from_float(f32::from_bits(0x7fc0_0001));
        let b = FloatBits32::from_bits(0x7fc0_0001);
        assert_eq!(a, b);
        assert_ne!(a, FloatBits32::NAN);
        assert!(a.is_nan());
    }

    #[test]
    fn test_signed_zero_is_distinct() {
        assert_ne!(FloatBits64::from(0.0), FloatBits64::from(-0.0));
    }

    #[test]
    fn test_canonical_nan_pattern() {
        assert_eq!(FloatBits32::NAN.to_bits(), 0x7fc0_0000);
        assert_eq!(FloatBits64::NAN.to_bits(), 0x7ff8_0000_0000_0000);
    }

    #[test]
    fn test_display() {
        assert_eq!(FloatBits32::from(1.5).to_string(), "1.5");
        assert_eq!(FloatBits32::from_bits(0xffc0_0001).to_string(), "-nan:0x400001");
    }

    #[test]
    fn test_le_bytes() {
        let bits = FloatBits64::from_le_bytes(&1.0f64.to_le_bytes()).unwrap();
        assert_eq!(bits.value(), 1.0);
        assert_eq!(bits.to_le_bytes(), 1.0f64.to_le_bytes().to_vec());
        assert!(FloatBits32::from_le_bytes(&[0; 3]).is_err());
    }
}
