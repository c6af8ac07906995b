//! Structural access to a bit-string as a sequence of digits.
//!
//! None of these normalize: they see exactly the digits that are stored.

use super::bit::Bit;
use super::bitstring_impl::BitString;

impl BitString {
    /// True iff the sequence has no digits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// First digit, or `None` for the empty sequence.
    pub fn head(&self) -> Option<Bit> {
        self.bits.first().copied()
    }

    /// All digits after the first; empty for the empty sequence.
    pub fn tail(&self) -> Self {
        match self.bits.split_first() {
            Some((_, rest)) => Self::new(rest.to_vec()),
            None => Self::empty(),
        }
    }

    /// Ordered concatenation of `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut bits = Vec::with_capacity(self.len() + other.len());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&other.bits);
        Self::new(bits)
    }

    /// Returns a copy with `bit` appended as the new least-significant digit.
    pub fn with_bit(&self, bit: Bit) -> Self {
        self.concat(&Self::from(bit))
    }

    /// Last digit, or `None` for the empty sequence.
    pub fn last(&self) -> Option<Bit> {
        self.bits.last().copied()
    }
}
