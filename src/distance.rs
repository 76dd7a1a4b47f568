//! Distance metrics: weighted HSV distance for generation and CIE76 delta-E
//! for perceptual sorting and pruning.

use crate::color::{Hsv, Lab};
use crate::constants::{WEIGHT_HUE, WEIGHT_SATURATION, WEIGHT_VALUE};

/// Shorter-arc hue difference normalized to 0.0–1.0 (180° → 1.0).
pub fn hue_term(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff) / 180.0
}

/// Weighted Euclidean distance in HSV: `sqrt(2·dh² + 1·ds² + 1.5·dv²)`.
pub fn weighted_hsv_distance(a: Hsv, b: Hsv) -> f64 {
    let dh = hue_term(a.h, b.h);
    let ds = a.s - b.s;
    let dv = a.v - b.v;
    (WEIGHT_HUE * dh * dh + WEIGHT_SATURATION * ds * ds + WEIGHT_VALUE * dv * dv).sqrt()
}

/// CIE76 delta-E: plain Euclidean distance in Lab.
pub fn delta_e(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use test_case::test_case;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test_case(350.0, 10.0 ; "across zero")]
    #[test_case(0.0, 20.0 ; "plain")]
    #[test_case(10.0, 350.0 ; "reversed")]
    #[test_case(-10.0, 10.0 ; "negative input")]
    #[test_case(710.0, 10.0 ; "beyond a full turn")]
    fn hue_term_is_circular(a: f64, b: f64) {
        assert!(close(hue_term(a, b), 20.0 / 180.0));
    }

    #[test]
    fn opposite_hues_are_maximally_apart() {
        assert!(close(hue_term(90.0, 270.0), 1.0));
    }

    #[test]
    fn wraparound_distance_matches_plain_distance() {
        let a = weighted_hsv_distance(Hsv::new(350.0, 0.6, 0.8), Hsv::new(10.0, 0.6, 0.8));
        let b = weighted_hsv_distance(Hsv::new(0.0, 0.6, 0.8), Hsv::new(20.0, 0.6, 0.8));
        assert!(close(a, b));
        assert!(close(a, (2.0 * (20.0_f64 / 180.0).powi(2)).sqrt()));
    }

    #[test]
    fn weights_apply_per_component() {
        let base = Hsv::new(0.0, 0.5, 0.5);
        let sat = weighted_hsv_distance(base, Hsv::new(0.0, 0.7, 0.5));
        let val = weighted_hsv_distance(base, Hsv::new(0.0, 0.5, 0.7));
        assert!(close(sat, 0.2));
        assert!(close(val, (1.5 * 0.04_f64).sqrt()));
        assert!(val > sat);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = Hsv::new(33.0, 0.9, 0.75);
        let b = Hsv::new(300.0, 0.55, 0.95);
        assert!(close(weighted_hsv_distance(a, b), weighted_hsv_distance(b, a)));
        assert_eq!(weighted_hsv_distance(a, a), 0.0);
    }

    #[test]
    fn delta_e_black_to_white_is_lightness() {
        let black = Rgb::new(0, 0, 0).to_lab();
        let white = Rgb::new(255, 255, 255).to_lab();
        assert!((delta_e(black, white) - 100.0).abs() < 0.05);
        assert_eq!(delta_e(white, white), 0.0);
    }

    #[test]
    fn delta_e_is_euclidean() {
        let a = Lab { l: 0.0, a: 3.0, b: 0.0 };
        let b = Lab { l: 0.0, a: 0.0, b: 4.0 };
        assert!(close(delta_e(a, b), 5.0));
    }
}
