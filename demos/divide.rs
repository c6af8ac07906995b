//! Divides two bit-strings and prints the result in binary and decimal.
//!
//! Run with: cargo run --example divide -- 11100100 1010
//! Pass `--trace` to log every divide step.

use std::process::ExitCode;

use bitdiv::{div_mod, BitString, DivModError};
use tracing::Level;

const DEFAULT_NUMERATOR: &str = "11100100";
const DEFAULT_DIVISOR: &str = "1010";

fn run(numerator: &str, divisor: &str) -> Result<(), DivModError> {
    let numerator_bits: BitString = numerator.parse()?;
    let divisor_bits: BitString = divisor.parse()?;

    println!("div_mod({numerator}, {divisor})");
    let (quotient, remainder) = div_mod(&numerator_bits, &divisor_bits)?;
    println!("  quotient:  {quotient} (decimal: {})", quotient.to_biguint());
    println!("  remainder: {remainder} (decimal: {})", remainder.to_biguint());

    let check = quotient.mul(&divisor_bits).add(&remainder);
    if check.numeric_cmp(&numerator_bits).is_eq() {
        println!("  check: {quotient} * {divisor} + {remainder} = {numerator}");
    } else {
        println!("  check failed: {quotient} * {divisor} + {remainder} = {check}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let trace = args.iter().any(|arg| arg == "--trace");
    args.retain(|arg| arg != "--trace");

    let level = if trace { Level::TRACE } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let numerator = args.first().map(String::as_str).unwrap_or(DEFAULT_NUMERATOR);
    let divisor = args.get(1).map(String::as_str).unwrap_or(DEFAULT_DIVISOR);

    match run(numerator, divisor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
