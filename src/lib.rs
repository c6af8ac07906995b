//! Unsigned binary long division over bit-strings.
//!
//! Numbers are sequences of binary digits, most-significant first, and every
//! operation is built from digit-level primitives: ripple-carry addition,
//! two's-complement subtraction, comparison and shifts. [`div_mod`] layers a
//! restoring long division on top of those.
//!
//! ```
//! use bitdiv::{div_mod, BitString};
//!
//! let numerator: BitString = "11100100".parse().unwrap();
//! let divisor: BitString = "1010".parse().unwrap();
//! let (quotient, remainder) = div_mod(&numerator, &divisor).unwrap();
//! assert_eq!(quotient.to_string(), "10110");
//! assert_eq!(remainder.to_string(), "1000");
//! ```

#![warn(
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

mod bitstring;
mod divide;
mod error;
#[cfg(test)]
mod test_utils;

pub use bitstring::{Bit, BitString, DEFAULT_WORD_BITS};
pub use divide::{div_mod, div_mod_str};
pub use error::{BitStringError, DivModError};
