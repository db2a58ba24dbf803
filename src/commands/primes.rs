//! `chronon primes` — print the usable key-prime catalogue.
use colored::Colorize;

use crate::core::primes::SUPPORTED_PRIMES;

pub fn run() {
    println!("{}", "Primes usable as channel keys (p ≡ 1 mod 12):".bold());
    for chunk in SUPPORTED_PRIMES.chunks(8) {
        let row = chunk
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {row}");
    }
    println!("{} both parties must configure the same pair", "note".yellow());
}
