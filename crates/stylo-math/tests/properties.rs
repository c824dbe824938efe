use proptest::prelude::*;
use stylo_math::{
    coefficient_of_variation, counts_to_f64, excess_pct, mean, population_variance, round_f64,
    safe_ratio, shortfall_pct,
};

proptest! {
    #[test]
    fn cv_is_scale_invariant(
        lengths in prop::collection::vec(1usize..60, 2..40),
        scale in 1usize..10,
    ) {
        let base = counts_to_f64(&lengths);
        let scaled: Vec<f64> = lengths.iter().map(|l| (l * scale) as f64).collect();
        let a = coefficient_of_variation(&base);
        let b = coefficient_of_variation(&scaled);
        prop_assert!((a - b).abs() < 1e-9, "cv changed under scaling: {} vs {}", a, b);
    }

    #[test]
    fn cv_is_non_negative(values in prop::collection::vec(0.0f64..1000.0, 0..50)) {
        prop_assert!(coefficient_of_variation(&values) >= 0.0);
    }

    #[test]
    fn variance_is_non_negative(values in prop::collection::vec(-1000.0f64..1000.0, 0..50)) {
        prop_assert!(population_variance(&values) >= -1e-9);
    }

    #[test]
    fn constant_series_has_zero_variance(value in -1000.0f64..1000.0, len in 1usize..50) {
        let values = vec![value; len];
        prop_assert!(population_variance(&values).abs() < 1e-6);
    }

    #[test]
    fn mean_is_within_bounds(values in prop::collection::vec(-1000.0f64..1000.0, 1..50)) {
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let m = mean(&values);
        prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
    }

    #[test]
    fn shortfall_is_bounded(value in 0.0f64..200.0, floor in 0.0f64..200.0) {
        let pct = shortfall_pct(value, floor);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn shortfall_is_monotonic_in_value(a in 0.0f64..100.0, b in 0.0f64..100.0, floor in 0.01f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(shortfall_pct(lo, floor) >= shortfall_pct(hi, floor));
    }

    #[test]
    fn excess_is_bounded(value in 0.0f64..10.0, ceiling in 0.0f64..1.0) {
        let pct = excess_pct(value, ceiling);
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn safe_ratio_zero_denominator_is_zero(numer in 0usize..10000) {
        prop_assert_eq!(safe_ratio(numer, 0), 0.0);
    }

    #[test]
    fn safe_ratio_identity_is_one(value in 1usize..10000) {
        prop_assert_eq!(safe_ratio(value, value), 1.0);
    }

    #[test]
    fn round_f64_is_idempotent(value in -1000.0f64..1000.0, decimals in 0u32..8) {
        let once = round_f64(value, decimals);
        let twice = round_f64(once, decimals);
        prop_assert!((once - twice).abs() < 1e-10);
    }
}
