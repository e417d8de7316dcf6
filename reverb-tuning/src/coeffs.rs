//! Unity-gain coefficient set generation.

use rand::RngExt;
use rand::seq::SliceRandom;

use crate::sample::soft_clipped;

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("coefficient set size must be at least 1")]
    ZeroSize,
}

/// A coefficient set of `size` taps whose values sum to exactly 1.0.
///
/// Random taps are appended in plus/minus pairs so the random portion
/// cancels to zero no matter what was drawn; the whole sum comes from the
/// deterministic tail (`1.0` for odd sizes, `0.5, 0.5` for even ones). A
/// full uniform shuffle at the end hides the construction order, and as a
/// permutation it cannot disturb the sum.
pub fn unity_gain_coeffs<R: RngExt>(rng: &mut R, size: usize) -> Result<Vec<f64>, TuningError> {
    if size == 0 {
        return Err(TuningError::ZeroSize);
    }

    let mut coeffs = Vec::with_capacity(size);

    if size % 2 == 1 {
        for _ in 0..size / 2 {
            let tap = soft_clipped(rng);
            coeffs.push(tap);
            coeffs.push(-tap);
        }
        coeffs.push(1.0);
    } else {
        // size == 2 leaves the loop empty: the set is exactly [0.5, 0.5]
        for _ in 0..size / 2 - 1 {
            let tap = soft_clipped(rng);
            coeffs.push(tap);
            coeffs.push(-tap);
        }
        coeffs.push(0.5);
        coeffs.push(0.5);
    }

    coeffs.shuffle(rng);
    Ok(coeffs)
}
