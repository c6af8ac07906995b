//! Error types for bit-string parsing, subtraction and division.
//!
//! - `BitStringError`: errors from building or combining bit-strings
//! - `DivModError`: errors from `div_mod` (includes operand errors)

use std::fmt;

/// Errors that can occur while parsing or combining bit-strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitStringError {
    /// A character other than `'0'` or `'1'` was found while parsing.
    InvalidDigit { index: usize, found: char },
    /// Checked subtraction was asked for `a - b` with `a < b`.
    SubtractionUnderflow,
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit { index, found } => {
                write!(f, "invalid binary digit {found:?} at position {index}")
            }
            Self::SubtractionUnderflow => {
                write!(f, "subtraction would underflow: minuend is less than subtrahend")
            }
        }
    }
}

impl std::error::Error for BitStringError {}

/// Errors that can occur during division.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DivModError {
    /// The divisor has the value zero.
    DivisionByZero,
    /// An operand could not be interpreted as a bit-string.
    InvalidOperand(BitStringError),
}

impl fmt::Display for DivModError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "cannot divide by zero"),
            Self::InvalidOperand(err) => write!(f, "invalid operand: {err}"),
        }
    }
}

impl std::error::Error for DivModError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DivisionByZero => None,
            Self::InvalidOperand(err) => Some(err),
        }
    }
}

impl From<BitStringError> for DivModError {
    fn from(error: BitStringError) -> Self {
        Self::InvalidOperand(error)
    }
}
