// WRT - wrt-simd
// Module: Bitwise Vector Operations
// SW-REQ-ID: REQ_SIMD_001
//
// Copyright (c) 2025 The WRT Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Shape-independent logic on a [`V128`].
//!
//! The vector is viewed as two 64-bit words; bitwise logic commutes with
//! any lane reinterpretation, so none of these operations takes a shape.

use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::v128::V128;

#[inline]
fn map_words(v: V128, f: impl Fn(u64) -> u64) -> V128 {
    let (low, high) = v.to_u64_pair();
    V128::from_u64_pair(f(low), f(high))
}

#[inline]
fn zip_words(a: V128, b: V128, f: impl Fn(u64, u64) -> u64) -> V128 {
    let (a_low, a_high) = a.to_u64_pair();
    let (b_low, b_high) = b.to_u64_pair();
    V128::from_u64_pair(f(a_low, b_low), f(a_high, b_high))
}

impl V128 {
    /// Bitwise complement.
    #[must_use]
    pub fn lognot(self) -> Self {
        map_words(self, |w| !w)
    }

    /// Bitwise and.
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        zip_words(self, rhs, |a, b| a & b)
    }

    /// Bitwise or.
    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        zip_words(self, rhs, |a, b| a | b)
    }

    /// Bitwise exclusive or.
    #[must_use]
    pub fn xor(self, rhs: Self) -> Self {
        zip_words(self, rhs, |a, b| a ^ b)
    }

    /// `self & !rhs`.
    #[must_use]
    pub fn andnot(self, rhs: Self) -> Self {
        zip_words(self, rhs, |a, b| a & !b)
    }

    /// Take bits of `self` where `mask` is set and bits of `other` where
    /// it is clear.
    #[must_use]
    pub fn bitselect(self, other: Self, mask: Self) -> Self {
        self.and(mask).or(other.andnot(mask))
    }

    /// Whether any bit is set.
    #[must_use]
    pub fn any_true(self) -> bool {
        let (low, high) = self.to_u64_pair();
        (low | high) != 0
    }
}

impl Not for V128 {
    type Output = V128;

    fn not(self) -> V128 {
        self.lognot()
    }
}

impl BitAnd for V128 {
    type Output = V128;

    fn bitand(self, rhs: V128) -> V128 {
        self.and(rhs)
    }
}

impl BitOr for V128 {
    type Output = V128;

    fn bitor(self, rhs: V128) -> V128 {
        self.or(rhs)
    }
}

impl BitXor for V128 {
    type Output = V128;

    fn bitxor(self, rhs: V128) -> V128 {
        self.xor(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: u128 = 0xff00_ff00_1234_5678_0000_ffff_aaaa_5555;
    const B: u128 = 0x0f0f_0f0f_ffff_0000_1111_2222_ffff_0000;

    #[test]
    fn test_matches_u128_logic() {
        let (a, b) = (V128::from_bits(A), V128::from_bits(B));
        assert_eq!(a.lognot().to_bits(), !A);
        assert_eq!(a.and(b).to_bits(), A & B);
        assert_eq!(a.or(b).to_bits(), A | B);
        assert_eq!(a.xor(b).to_bits(), A ^ B);
        assert_eq!(a.andnot(b).to_bits(), A & !B);
    }

    #[test]
    fn test_operators() {
        let (a, b) = (V128::from_bits(A), V128::from_bits(B));
        assert_eq!(!a, a.lognot());
        assert_eq!(a & b, a.and(b));
        assert_eq!(a | b, a.or(b));
        assert_eq!(a ^ b, a.xor(b));
    }

    #[test]
    fn test_bitselect() {
        let ones = V128::filled(0xff);
        let mask = V128::from_u64_pair(u64::MAX, 0);
        let r = ones.bitselect(V128::ZERO, mask);
        assert_eq!(r.to_u64_pair(), (u64::MAX, 0));
        let r = V128::from_bits(A).bitselect(V128::from_bits(B), V128::from_bits(B));
        assert_eq!(r.to_bits(), (A & B) | (B & !B));
    }

    #[test]
    fn test_any_true() {
        assert!(!V128::ZERO.any_true());
        assert!(V128::from_bits(1 << 127).any_true());
        assert!(V128::from_bits(1).any_true());
    }
}
