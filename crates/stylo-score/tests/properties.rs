//! Property-based tests for `stylo-score`.

use proptest::prelude::*;

use stylo_score::*;
use stylo_types::{PenaltyInputs, ScoringVersion};

fn penalty() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

fn version() -> impl Strategy<Value = ScoringVersion> {
    prop_oneof![Just(ScoringVersion::V2), Just(ScoringVersion::V3)]
}

proptest! {
    #[test]
    fn composite_stays_within_bounds(
        pattern in penalty(),
        b in penalty(),
        v in penalty(),
        s in penalty(),
        d in penalty(),
        p in penalty(),
        version in version(),
    ) {
        let inputs = PenaltyInputs {
            burstiness_penalty: b,
            vocab_diversity_penalty: v,
            structural_penalty: s,
            discourse_penalty: d,
            psycholinguistic_penalty: p,
        };
        let result = compute_composite_score(pattern, &inputs, version);
        prop_assert!((0.0..=100.0).contains(&result.composite_score));
    }

    #[test]
    fn composite_is_monotone_in_pattern_score(
        low in 0.0f64..50.0,
        bump in 0.0f64..50.0,
        version in version(),
    ) {
        let inputs = PenaltyInputs::default();
        let a = compute_composite_score(low, &inputs, version);
        let b = compute_composite_score(low + bump, &inputs, version);
        prop_assert!(a.composite_score <= b.composite_score);
    }

    #[test]
    fn shortfall_penalty_is_bounded(value in 0.0f64..10.0, floor in 0.01f64..5.0) {
        let got = shortfall_penalty(value, floor);
        prop_assert!((0.0..=100.0).contains(&got));
    }

    #[test]
    fn excess_penalty_is_bounded(value in 0.0f64..10.0, ceiling in 0.01f64..5.0) {
        let got = excess_penalty(value, ceiling);
        prop_assert!((0.0..=100.0).contains(&got));
    }

    #[test]
    fn lookup_never_fails(name in "[a-zA-Z_ -]{0,20}") {
        let profile = discipline_profile(&name);
        prop_assert!(discipline_profiles().contains(profile));
    }
}
