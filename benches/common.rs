#![allow(dead_code)]

use bitdiv::{Bit, BitString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random bit-string with exactly `len` digits and a leading one.
pub fn random_operand(rng: &mut StdRng, len: usize) -> BitString {
    std::iter::once(Bit::One)
        .chain((1..len).map(|_| Bit::from(rng.gen_bool(0.5))))
        .collect()
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Prints extra diagnostics when `BITDIV_BENCH_VERBOSE` is set.
pub fn verbose() -> bool {
    std::env::var_os("BITDIV_BENCH_VERBOSE").is_some()
}
