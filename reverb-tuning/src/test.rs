use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    PRIME_PARTIAL_SUMS, PRIMES, prime_offset_sequence, soft_clipped, sum_less_than,
    unity_gain_coeffs,
};

fn seeded_rng(seed: u64) -> StdRng {
    let mut rng_seed = [0; 32];
    rng_seed[0..8].clone_from_slice(&seed.to_ne_bytes());
    StdRng::from_seed(rng_seed)
}

// Static table checks

#[test]
fn prime_table_is_strictly_increasing() {
    assert!(PRIMES.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(PRIME_PARTIAL_SUMS.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn partial_sums_match_a_running_sum_of_primes() {
    let mut accum = 0;
    for (prime, partial_sum) in PRIMES.iter().zip(PRIME_PARTIAL_SUMS.iter()) {
        accum += prime;
        assert_eq!(accum, *partial_sum);
    }
}

// Sequence length selector

#[test]
fn sum_less_than_zero_bound_counts_nothing() {
    assert_eq!(sum_less_than(0), Some(0));
}

#[test]
fn sum_less_than_counts_entries_up_to_and_including_the_bound() {
    // First partial sums are 2, 5, 10; a bound sitting exactly on an entry
    // includes it.
    assert_eq!(sum_less_than(1), Some(0));
    assert_eq!(sum_less_than(2), Some(1));
    assert_eq!(sum_less_than(4), Some(1));
    assert_eq!(sum_less_than(5), Some(2));
    assert_eq!(sum_less_than(10), Some(3));
}

#[test]
fn sum_less_than_is_none_once_the_table_is_exhausted() {
    let last = PRIME_PARTIAL_SUMS[PRIME_PARTIAL_SUMS.len() - 1];
    assert_eq!(sum_less_than(last), None);
    assert_eq!(sum_less_than(usize::MAX), None);
}

#[test]
fn sum_less_than_sizes_the_sparse_channels_at_83() {
    // The bound used by the table emitter.
    assert_eq!(sum_less_than(1 << 14), Some(83));
}

// Bounded random sampler

#[test]
fn soft_clipped_stays_in_the_open_unit_interval() {
    let mut rng = seeded_rng(1);
    for _ in 0..10_000 {
        let value = soft_clipped(&mut rng);
        assert!(value > -1.0 && value < 1.0, "out of range: {}", value);
    }
}

#[test]
fn soft_clipped_is_centered_on_zero() {
    let mut rng = seeded_rng(2);
    let draws = 10_000;
    let mean: f64 = (0..draws).map(|_| soft_clipped(&mut rng)).sum::<f64>() / draws as f64;
    assert!(mean.abs() < 0.05, "mean too far from zero: {}", mean);
}

// Unity-gain coefficient generator

#[test]
fn unity_gain_coeffs_rejects_an_empty_request() {
    let mut rng = seeded_rng(3);
    assert!(unity_gain_coeffs(&mut rng, 0).is_err());
}

#[test]
fn unity_gain_coeffs_degenerate_sizes_are_exact() {
    let mut rng = seeded_rng(4);
    assert_eq!(unity_gain_coeffs(&mut rng, 1).unwrap(), vec![1.0]);
    assert_eq!(unity_gain_coeffs(&mut rng, 2).unwrap(), vec![0.5, 0.5]);
}

#[test]
fn unity_gain_coeffs_sum_to_one_for_odd_and_even_sizes() {
    let mut rng = seeded_rng(5);
    for size in [3, 4, 7, 8, 83, 290, 1028] {
        let coeffs = unity_gain_coeffs(&mut rng, size).unwrap();
        assert_eq!(coeffs.len(), size);
        let sum: f64 = coeffs.iter().sum();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "size {}: sum {} not within tolerance of 1.0",
            size,
            sum
        );
    }
}

#[test]
fn unity_gain_coeffs_are_pairs_around_a_fixed_tail() {
    let mut rng = seeded_rng(6);

    // Odd: one 1.0, the rest exact plus/minus pairs.
    let mut odd = unity_gain_coeffs(&mut rng, 9).unwrap();
    let one = odd.iter().position(|&c| c == 1.0).expect("missing 1.0 tail");
    odd.remove(one);
    odd.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for i in 0..odd.len() / 2 {
        assert_eq!(odd[i], -odd[odd.len() - 1 - i]);
    }

    // Even: two 0.5 entries, the rest exact plus/minus pairs.
    let mut even = unity_gain_coeffs(&mut rng, 10).unwrap();
    for _ in 0..2 {
        let half = even.iter().position(|&c| c == 0.5).expect("missing 0.5 tail");
        even.remove(half);
    }
    even.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for i in 0..even.len() / 2 {
        assert_eq!(even[i], -even[even.len() - 1 - i]);
    }
}

#[test]
fn unity_gain_coeffs_are_reproducible_per_seed() {
    let first = unity_gain_coeffs(&mut seeded_rng(7), 83).unwrap();
    let again = unity_gain_coeffs(&mut seeded_rng(7), 83).unwrap();
    let other = unity_gain_coeffs(&mut seeded_rng(8), 83).unwrap();
    assert_eq!(first, again);
    assert_ne!(first, other);
}

// Monotonic offset builder

#[test]
fn prime_offset_sequence_is_strictly_increasing() {
    let mut rng = seeded_rng(9);
    let offsets = prime_offset_sequence(&mut rng, 83);
    assert_eq!(offsets.len(), 83);
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn prime_offset_sequence_ends_at_the_pool_total() {
    let mut rng = seeded_rng(10);
    for max_idx in [1, 2, 83, 256] {
        let offsets = prime_offset_sequence(&mut rng, max_idx);
        let pool_total: usize = PRIMES[..max_idx].iter().sum();
        assert_eq!(offsets[offsets.len() - 1], pool_total);
        // The first offset is a bare pool element, accumulated onto nothing.
        assert!(PRIMES[..max_idx].contains(&offsets[0]));
    }
}

#[test]
fn prime_offset_sequence_orderings_differ_between_draws() {
    let mut rng = seeded_rng(11);
    let first = prime_offset_sequence(&mut rng, 83);
    let second = prime_offset_sequence(&mut rng, 83);
    assert_ne!(first, second);
}

#[test]
fn prime_offset_sequence_of_an_empty_pool_is_empty() {
    let mut rng = seeded_rng(12);
    assert!(prime_offset_sequence(&mut rng, 0).is_empty());
}
