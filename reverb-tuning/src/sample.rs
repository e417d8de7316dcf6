//! Bounded random sampling for tap values.

use rand::RngExt;

/// Width of the uniform draw before saturation.
const CLIP_RANGE: f64 = 3.0;

/// One random value in the open interval (-1.0, 1.0), clustered around 0.
///
/// A uniform draw in [-3.0, 3.0) is tanh-saturated, then normalized by
/// tanh(3.0) so the full (-1.0, 1.0) range stays reachable instead of
/// stopping at the saturation of the endpoints.
pub fn soft_clipped<R: RngExt>(rng: &mut R) -> f64 {
    rng.random_range(-CLIP_RANGE..CLIP_RANGE).tanh() / CLIP_RANGE.tanh()
}
