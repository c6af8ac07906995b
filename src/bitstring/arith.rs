//! Arithmetic primitives over bit-strings.
//!
//! Everything here works digit by digit on `Bit` values; no native integer
//! arithmetic is used on the represented numbers. Results are fresh values and
//! the operands are never modified.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use crate::error::BitStringError;

use super::bit::Bit;
use super::bitstring_impl::BitString;

/// Word width used by [`BitString::wrapping_sub_word`].
pub const DEFAULT_WORD_BITS: usize = 32;

impl BitString {
    /// Unsigned sum.
    ///
    /// An empty operand acts as zero and the other operand is returned exactly
    /// as given, leading zeros included. Otherwise the sum has no leading zeros.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut lhs = self.bits.iter().rev().copied();
        let mut rhs = other.bits.iter().rev().copied();
        let mut carry = Bit::Zero;
        let mut sum = Vec::with_capacity(self.len().max(other.len()) + 1);
        loop {
            let (a, b) = match (lhs.next(), rhs.next()) {
                (None, None) => break,
                (a, b) => (a.unwrap_or(Bit::Zero), b.unwrap_or(Bit::Zero)),
            };
            let (digit, carry_out) = a.full_add(b, carry);
            sum.push(digit);
            carry = carry_out;
        }
        if carry.is_one() {
            sum.push(Bit::One);
        }
        sum.reverse();
        Self::new(sum).normalized()
    }

    /// Computes `self - other` through two's complement.
    ///
    /// The subtrahend is padded to the minuend's width, negated and added. A
    /// carry out of that width is dropped and the remaining digits are kept as
    /// they are, so the result may carry leading zeros. Without a carry the sum
    /// is returned with leading zeros stripped.
    ///
    /// Requires `self >= other` in value; the result is meaningless otherwise.
    /// Use [`BitString::checked_sub`] when that is not known.
    pub fn sub(&self, other: &Self) -> Self {
        debug_assert!(
            self.compare_ge(other),
            "sub called with minuend {self} less than subtrahend {other}"
        );
        self.sub_unchecked(other)
    }

    /// Like [`BitString::sub`] but reports `a < b` instead of misbehaving.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, BitStringError> {
        if !self.compare_ge(other) {
            return Err(BitStringError::SubtractionUnderflow);
        }
        Ok(self.sub_unchecked(other))
    }

    fn sub_unchecked(&self, other: &Self) -> Self {
        let subtrahend = Self::new(other.significant_bits().to_vec());
        if subtrahend.is_empty() {
            return self.clone();
        }

        let width = self.len().max(subtrahend.len());
        let negated = subtrahend.zero_pad(width).twos_complement();
        let sum = self.add(&negated);
        if sum.len() > self.len() {
            Self::new(sum.bits[1..].to_vec())
        } else {
            sum.normalized()
        }
    }

    /// Compares values, ignoring leading zeros.
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        let lhs = self.significant_bits();
        let rhs = other.significant_bits();
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// True iff `self >= other` in value.
    pub fn compare_ge(&self, other: &Self) -> bool {
        self.numeric_cmp(other) != Ordering::Less
    }

    /// Multiplies by two by appending a zero digit. `"0"` stays `"0"`.
    pub fn shift_left1(&self) -> Self {
        if self.bits == [Bit::Zero] {
            return Self::zero();
        }
        self.with_bit(Bit::Zero)
    }

    /// Halves by dropping the last digit. The empty sequence stays empty.
    pub fn shift_right1(&self) -> Self {
        match self.bits.split_last() {
            Some((_, rest)) => Self::new(rest.to_vec()),
            None => Self::empty(),
        }
    }

    /// True iff the last digit is zero. False for the empty sequence.
    pub fn ends_with_zero(&self) -> bool {
        self.last() == Some(Bit::Zero)
    }

    /// Left-pads with zeros to exactly `width` digits. A longer value keeps
    /// its low `width` digits.
    pub fn zero_pad(&self, width: usize) -> Self {
        let len = self.len();
        if len >= width {
            return Self::new(self.bits[len - width..].to_vec());
        }
        let mut bits = vec![Bit::Zero; width - len];
        bits.extend_from_slice(&self.bits);
        Self::new(bits)
    }

    /// Flips every digit and adds one.
    pub fn twos_complement(&self) -> Self {
        let flipped: Self = self.bits.iter().map(|bit| bit.flip()).collect();
        flipped.add(&Self::one())
    }

    /// Fixed-width subtraction modulo `2^width`.
    ///
    /// Both operands are reduced to `width` digits first; the result always has
    /// exactly `width` digits.
    pub fn wrapping_sub(&self, other: &Self, width: usize) -> Self {
        let negated = other.zero_pad(width).twos_complement();
        self.zero_pad(width).add(&negated).zero_pad(width)
    }

    /// [`BitString::wrapping_sub`] at [`DEFAULT_WORD_BITS`].
    pub fn wrapping_sub_word(&self, other: &Self) -> Self {
        self.wrapping_sub(other, DEFAULT_WORD_BITS)
    }

    /// Shift-and-add product. An empty multiplier gives `"0"`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut product = Self::zero();
        let mut multiplicand = self.clone();
        let mut multiplier = other.clone();
        while !multiplier.is_empty() {
            if !multiplier.ends_with_zero() {
                product = product.add(&multiplicand);
            }
            multiplicand = multiplicand.shift_left1();
            multiplier = multiplier.shift_right1();
        }
        product
    }
}

impl Add for &BitString {
    type Output = BitString;

    fn add(self, rhs: Self) -> Self::Output {
        BitString::add(self, rhs)
    }
}

impl Sub for &BitString {
    type Output = BitString;

    fn sub(self, rhs: Self) -> Self::Output {
        BitString::sub(self, rhs)
    }
}

impl Mul for &BitString {
    type Output = BitString;

    fn mul(self, rhs: Self) -> Self::Output {
        BitString::mul(self, rhs)
    }
}
