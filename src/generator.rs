//! Palette generation around a fixed hue by rejection sampling.

use rand::Rng;

use crate::color::Hsv;
use crate::constants::{GEN_ATTEMPTS_PER_COLOR, GEN_MAX_COUNT, GEN_SATURATION, GEN_VALUE};
use crate::distance::weighted_hsv_distance;

/// Generate up to `count` colors at `hue` that are pairwise at least
/// `min_distance` apart, using the thread-local RNG.
///
/// See [`generate_with_rng`].
pub fn generate(hue: f64, count: usize, min_distance: f64) -> Vec<Hsv> {
    generate_with_rng(&mut rand::rng(), hue, count, min_distance)
}

/// Sample `{h: hue, s: U(0.5, 1.0), v: U(0.7, 1.0)}` candidates and keep each
/// one whose weighted HSV distance to every kept color is `>= min_distance`.
///
/// Stops after `count` accepts or `20 * count` samples, whichever comes
/// first. A short result is a best effort, not an error. `count` is clamped
/// to [`GEN_MAX_COUNT`].
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    hue: f64,
    count: usize,
    min_distance: f64,
) -> Vec<Hsv> {
    let requested = count;
    let count = count.min(GEN_MAX_COUNT);
    let max_attempts = count.saturating_mul(GEN_ATTEMPTS_PER_COLOR);
    let mut accepted: Vec<Hsv> = Vec::with_capacity(count);
    let mut attempts = 0;

    while accepted.len() < count && attempts < max_attempts {
        attempts += 1;
        let candidate = Hsv::new(
            hue,
            rng.random_range(GEN_SATURATION),
            rng.random_range(GEN_VALUE),
        );
        if accepted
            .iter()
            .all(|kept| weighted_hsv_distance(candidate, *kept) >= min_distance)
        {
            accepted.push(candidate);
        }
    }

    if accepted.len() < requested {
        tracing::warn!(
            message = "🎲 Generated fewer colors than requested",
            hue,
            requested,
            generated = accepted.len(),
            attempts
        );
    } else {
        tracing::debug!(message = "🎲 Generated palette", hue, count, attempts);
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn accepted_colors_are_pairwise_distinct() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let colors = generate_with_rng(&mut rng, 200.0, 5, 0.2);
            assert!(!colors.is_empty());
            for (i, a) in colors.iter().enumerate() {
                for b in &colors[i + 1..] {
                    assert!(weighted_hsv_distance(*a, *b) >= 0.2, "seed {seed}: {a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn samples_stay_in_range_and_keep_hue() {
        let mut rng = StdRng::seed_from_u64(42);
        for color in generate_with_rng(&mut rng, 120.0, 5, 0.0) {
            assert_eq!(color.h, 120.0);
            assert!((0.5..1.0).contains(&color.s));
            assert!((0.7..1.0).contains(&color.v));
        }
    }

    #[test]
    fn zero_distance_fills_the_request() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_with_rng(&mut rng, 0.0, 5, 0.0).len(), 5);
    }

    #[test]
    fn unreachable_distance_returns_short_result() {
        // Maximum possible distance at a fixed hue is sqrt(0.25 + 1.5 * 0.09) < 1.
        let mut rng = StdRng::seed_from_u64(3);
        let colors = generate_with_rng(&mut rng, 60.0, 5, 2.0);
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(10.0, 0, 0.2).is_empty());
    }

    #[test]
    fn thread_rng_entry_point_bounds_length() {
        assert!(generate(300.0, 5, 0.2).len() <= 5);
    }

    #[test]
    fn huge_count_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_with_rng(&mut rng, 0.0, usize::MAX, 2.0).len(), 1);

        let mut rng = StdRng::seed_from_u64(1);
        let colors = generate_with_rng(&mut rng, 0.0, usize::MAX / 8, 0.0);
        assert_eq!(colors.len(), GEN_MAX_COUNT);
    }
}
