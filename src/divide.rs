//! Unsigned long division over bit-strings.
//!
//! The numerator is consumed one digit at a time, most-significant first. Each
//! digit is appended to a running remainder; whenever that remainder reaches
//! the divisor, the divisor is subtracted and a `1` goes into the quotient,
//! otherwise a `0` does. Only the bit-string primitives are used: no native
//! division or modulo touches the represented values.

use tracing::{debug, debug_span, trace};

use crate::bitstring::{Bit, BitString};
use crate::error::DivModError;

/// Divides `numerator` by `divisor`, returning `(quotient, remainder)`.
///
/// Both results are normalized: no leading zeros, and zero is exactly `"0"`.
/// Operands may carry leading zeros. An empty or `"0"` numerator gives
/// `("0", "0")` without dividing.
///
/// # Errors
/// Returns [`DivModError::DivisionByZero`] if `divisor` has the value zero,
/// including the padded and empty spellings of zero.
pub fn div_mod(
    numerator: &BitString,
    divisor: &BitString,
) -> Result<(BitString, BitString), DivModError> {
    if divisor.is_zero() {
        return Err(DivModError::DivisionByZero);
    }
    if numerator.is_empty() || numerator.bits() == [Bit::Zero] {
        return Ok((BitString::zero(), BitString::zero()));
    }

    let _span = debug_span!(
        "div_mod",
        numerator_bits = numerator.len(),
        divisor_bits = divisor.len()
    )
    .entered();

    let (raw_quotient, remainder) =
        div_step(numerator, BitString::empty(), BitString::empty(), divisor);
    let quotient = raw_quotient.normalized();
    debug!(%quotient, %remainder, "division finished");
    Ok((quotient, remainder))
}

/// Parses both operands as bit-strings and divides them.
///
/// # Errors
/// Returns [`DivModError::InvalidOperand`] if either input contains a character
/// other than `'0'` or `'1'`, and [`DivModError::DivisionByZero`] as
/// [`div_mod`] does.
pub fn div_mod_str(numerator: &str, divisor: &str) -> Result<(String, String), DivModError> {
    let numerator_bits: BitString = numerator.parse()?;
    let divisor_bits: BitString = divisor.parse()?;
    let (quotient, remainder) = div_mod(&numerator_bits, &divisor_bits)?;
    Ok((quotient.to_string(), remainder.to_string()))
}

/// Runs the division over every digit of `remaining`, starting from the given
/// quotient and remainder accumulators.
///
/// One quotient digit is appended per numerator digit. The remainder stays
/// normalized after every step and below `divisor` in value. The divisor must
/// be nonzero.
pub(crate) fn div_step(
    remaining: &BitString,
    mut quotient: BitString,
    mut remainder: BitString,
    divisor: &BitString,
) -> (BitString, BitString) {
    for (step, &bit) in remaining.bits().iter().enumerate() {
        let candidate = remainder.with_bit(bit).normalized();
        let quotient_bit = if candidate.compare_ge(divisor) {
            remainder = candidate.sub(divisor).normalized();
            Bit::One
        } else {
            remainder = candidate;
            Bit::Zero
        };
        quotient = quotient.with_bit(quotient_bit);
        trace!(step, %bit, %quotient_bit, %remainder, "divide step");
    }
    (quotient, remainder)
}
