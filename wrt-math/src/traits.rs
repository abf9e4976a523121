// Copyright (c) 2025 R T
// SPDX-License-Identifier: MIT
// Project: WRT
// Module: wrt-math::traits (SW-REQ-ID-TBD)

//! Common traits used within the wrt-math crate.

use crate::prelude::Result;

/// Trait for types that can be converted to/from little-endian byte
/// representation, the byte order of WebAssembly linear memory.
pub trait LittleEndian: Sized {
    /// Creates an instance from little-endian bytes.
    /// Returns an error if the byte slice has incorrect length.
    fn from_le_bytes(bytes: &[u8]) -> Result<Self>;

    /// Converts the instance to little-endian bytes.
    fn to_le_bytes(&self) -> Vec<u8>;
}
