//! Shared fixtures for unit tests.

use crate::math::Point2;

/// Deterministic scatter of `n` points in `[0, 100)²` (splitmix64).
pub(crate) fn scatter(n: usize, seed: u64) -> Vec<Point2> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        #[allow(clippy::cast_precision_loss)]
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        unit * 100.0
    };
    (0..n).map(|_| Point2::new(next(), next())).collect()
}
