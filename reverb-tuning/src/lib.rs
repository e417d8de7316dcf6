//! Tuning-table generation for multi-tap delay and diffusion networks.
//!
//! The downstream effect engine embeds its tap gains and delay-line offsets
//! as compile-time constants. This crate builds those tables: coefficient
//! sets that sum to exactly unity gain while looking randomized, and
//! strictly increasing prime-derived offset sequences. The
//! `table_generators` bins print them as Rust source.

pub mod coeffs;
pub mod emit;
pub mod offsets;
pub mod primes;
pub mod sample;

pub use coeffs::{TuningError, unity_gain_coeffs};
pub use emit::{float_table_decl, index_table_decl};
pub use offsets::prime_offset_sequence;
pub use primes::{PRIME_PARTIAL_SUMS, PRIMES, sum_less_than};
pub use sample::soft_clipped;

#[cfg(test)]
mod test;
