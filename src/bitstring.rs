//! Bit-string values and the primitives that operate on them.
//!
//! - [`bit`]: the `Bit` digit type
//! - [`bitstring_impl`]: `BitString` itself, parsing and normalization
//! - [`decompose`]: structural access (`head`, `tail`, `concat`)
//! - [`arith`]: add, subtract, compare, shift and multiply
//! - [`convert`]: conversions to and from `BigUint`

mod arith;
mod bit;
mod bitstring_impl;
mod convert;
mod decompose;

pub use arith::DEFAULT_WORD_BITS;
pub use bit::Bit;
pub use bitstring_impl::BitString;
