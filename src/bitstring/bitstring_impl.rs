//! Core bit-string type.
//!
//! This module provides `BitString`, an immutable unsigned integer written as a
//! sequence of bits, most-significant bit first. Leading zeros are kept as
//! given; [`BitString::normalized`] produces the canonical form.

use std::fmt;
use std::str::FromStr;

use crate::error::BitStringError;

use super::bit::Bit;

/// Unsigned integer stored as its binary digits, most-significant bit first.
///
/// Equality is structural: `"010"` and `"10"` are different bit-strings with the
/// same value. Use [`BitString::numeric_cmp`] to compare values. The empty
/// sequence is a valid intermediate state and reads as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    pub(super) bits: Vec<Bit>,
}

impl BitString {
    /// Creates a bit-string from its digits, most-significant first.
    pub fn new(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// Returns the empty sequence.
    pub fn empty() -> Self {
        Self { bits: Vec::new() }
    }

    /// Returns the canonical zero, `"0"`.
    pub fn zero() -> Self {
        Self {
            bits: vec![Bit::Zero],
        }
    }

    pub fn one() -> Self {
        Self {
            bits: vec![Bit::One],
        }
    }

    /// Returns the digits, most-significant first.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of digits, leading zeros included.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if every digit is zero. The empty sequence counts as zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| !bit.is_one())
    }

    /// Digits with leading zeros removed. Empty if the value is zero.
    pub(crate) fn significant_bits(&self) -> &[Bit] {
        let start = self
            .bits
            .iter()
            .position(|bit| bit.is_one())
            .unwrap_or(self.bits.len());
        &self.bits[start..]
    }

    /// Strips leading zeros, collapsing a zero value to `"0"`.
    pub fn normalized(&self) -> Self {
        let significant = self.significant_bits();
        if significant.is_empty() {
            Self::zero()
        } else {
            Self::new(significant.to_vec())
        }
    }

    /// True if this is already in canonical form.
    pub fn is_normalized(&self) -> bool {
        match self.bits.as_slice() {
            [Bit::Zero] => true,
            [Bit::One, ..] => true,
            _ => false,
        }
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(index, found)| {
                Bit::from_char(found).ok_or(BitStringError::InvalidDigit { index, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl FromIterator<Bit> for BitString {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Bit> for BitString {
    fn from(bit: Bit) -> Self {
        Self::new(vec![bit])
    }
}

impl From<u64> for BitString {
    fn from(value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let width = u64::BITS - value.leading_zeros();
        (0..width)
            .rev()
            .map(|shift| Bit::from((value >> shift) & 1 == 1))
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_utils::bits;

    #[test]
    fn parse_keeps_leading_zeros() {
        let value = bits("00101");
        assert_eq!(value.len(), 5);
        assert_eq!(value.to_string(), "00101");
    }

    #[test]
    fn parse_rejects_non_binary_digits() {
        let result = "10201".parse::<BitString>();
        assert_eq!(
            result,
            Err(BitStringError::InvalidDigit {
                index: 2,
                found: '2'
            })
        );
    }

    #[test]
    fn parse_empty_gives_empty_sequence() {
        let value = bits("");
        assert!(value.bits().is_empty());
        assert!(value.is_zero());
        assert_eq!(value, BitString::empty());
    }

    #[test]
    fn normalized_strips_leading_zeros() {
        assert_eq!(bits("000110").normalized(), bits("110"));
        assert_eq!(bits("1").normalized(), bits("1"));
    }

    #[test]
    fn normalized_collapses_zero_to_single_digit() {
        assert_eq!(bits("0000").normalized(), BitString::zero());
        assert_eq!(BitString::empty().normalized(), BitString::zero());
    }

    #[test]
    fn is_normalized_matches_canonical_form() {
        assert!(bits("0").is_normalized());
        assert!(bits("1011").is_normalized());
        assert!(!bits("01").is_normalized());
        assert!(!bits("00").is_normalized());
        assert!(!BitString::empty().is_normalized());
    }

    #[test]
    fn from_u64_writes_minimal_digits() {
        assert_eq!(BitString::from(0u64), BitString::zero());
        assert_eq!(BitString::from(1u64), bits("1"));
        assert_eq!(BitString::from(228u64), bits("11100100"));
        assert_eq!(BitString::from(u64::MAX).len(), 64);
    }

    #[test]
    fn structural_equality_distinguishes_padding() {
        assert_ne!(bits("010"), bits("10"));
    }
}
