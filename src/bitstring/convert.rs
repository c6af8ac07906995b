//! Conversions between `BitString` and `num_bigint::BigUint`.
//!
//! These exist for callers that want to show or check values in decimal; the
//! arithmetic in this crate never goes through them.

use num_bigint::BigUint;
use num_traits::Zero;

use super::bit::Bit;
use super::bitstring_impl::BitString;

impl BitString {
    /// Value as a big unsigned integer. The empty sequence reads as zero.
    pub fn to_biguint(&self) -> BigUint {
        self.bits.iter().fold(BigUint::zero(), |acc, bit| {
            let doubled = acc << 1usize;
            if bit.is_one() {
                doubled + 1u32
            } else {
                doubled
            }
        })
    }
}

impl From<&BigUint> for BitString {
    fn from(value: &BigUint) -> Self {
        format!("{value:b}").chars().filter_map(Bit::from_char).collect()
    }
}

impl From<BigUint> for BitString {
    fn from(value: BigUint) -> Self {
        Self::from(&value)
    }
}
