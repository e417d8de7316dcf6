//! Monotonic delay offset sequences for the sparse diffuser channels.

use rand::RngExt;
use rand::seq::SliceRandom;

use crate::primes::PRIMES;

/// Strictly increasing delay-line offsets built from the first `max_idx`
/// primes.
///
/// The pool is shuffled, then summed cumulatively over the shuffled order.
/// The running totals only ever grow, and the final element is the pool's
/// total sum regardless of ordering, so independently generated channels
/// end at the same offset while disagreeing everywhere else.
pub fn prime_offset_sequence<R: RngExt>(rng: &mut R, max_idx: usize) -> Vec<usize> {
    assert!(max_idx <= PRIMES.len());

    let mut pool = PRIMES[..max_idx].to_vec();
    pool.shuffle(rng);

    pool.iter()
        .scan(0, |accum, &prime| {
            *accum += prime;
            Some(*accum)
        })
        .collect()
}
