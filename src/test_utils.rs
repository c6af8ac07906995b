//! Shared test utilities for bit-string operations.
//!
//! This module provides common helper functions used across test modules to reduce
//! code duplication and provide a consistent testing interface.

use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bitstring::{Bit, BitString};

/// Parses a bit-string literal, panicking on anything but `'0'` and `'1'`.
///
/// # Examples
/// ```ignore
/// let ten = bits("1010");
/// let padded = bits("0011");  // leading zeros are kept
/// let empty = bits("");       // the empty sequence
/// ```
pub fn bits(literal: &str) -> BitString {
    match literal.parse() {
        Ok(value) => value,
        Err(err) => panic!("invalid bit-string literal {literal:?}: {err}"),
    }
}

/// Value of a bit-string as a big integer, for checking results.
pub fn value_of(value: &BitString) -> BigUint {
    value.to_biguint()
}

/// Deterministic generator so randomized tests are reproducible.
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Random bit-string of 1 to `max_len` digits. Leading zeros are common, so
/// callers see unnormalized inputs as well as canonical ones.
pub fn random_bits(rng: &mut StdRng, max_len: usize) -> BitString {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| Bit::from(rng.gen_bool(0.5))).collect()
}
