// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-range uppercase transform.
//!
//! Only `a`..=`z` changes. Everything else, including bytes of a
//! single-byte code page such as Windows-1251, is copied unchanged, so
//! input never needs decoding.

/// Uppercase `line` in place.
pub fn upcase_in_place(line: &mut [u8]) {
    line.make_ascii_uppercase();
}

/// Return an uppercased copy of `line`.
pub fn upcase(line: &[u8]) -> Vec<u8> {
    let mut out = line.to_vec();
    upcase_in_place(&mut out);
    out
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
