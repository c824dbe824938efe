use stylo_score::*;
use stylo_types::{PenaltyInputs, RiskLevel, ScoringVersion};

// ── Composite scoring ───────────────────────────────────────────────

#[test]
fn given_no_pattern_hits_and_no_penalties_when_scored_then_risk_is_low() {
    let result = compute_composite_score(0.0, &PenaltyInputs::default(), ScoringVersion::V3);
    assert_eq!(result.composite_score, 0.0);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn given_only_discourse_penalties_when_scored_under_v2_then_they_are_ignored() {
    let penalties = PenaltyInputs {
        discourse_penalty: 80.0,
        psycholinguistic_penalty: 80.0,
        ..PenaltyInputs::default()
    };
    let v2 = compute_composite_score(0.0, &penalties, ScoringVersion::V2);
    assert_eq!(v2.composite_score, 0.0);

    let v3 = compute_composite_score(0.0, &penalties, ScoringVersion::V3);
    assert_eq!(v3.composite_score, 20.0);
    assert_eq!(v3.risk_level, RiskLevel::Moderate);
}

#[test]
fn given_heavy_pattern_hits_when_scored_then_risk_is_high() {
    let penalties = PenaltyInputs {
        burstiness_penalty: 100.0,
        ..PenaltyInputs::default()
    };
    let result = compute_composite_score(100.0, &penalties, ScoringVersion::V2);
    assert_eq!(result.composite_score, 80.0);
    assert_eq!(result.risk_level, RiskLevel::High);
}

// ── Penalties ───────────────────────────────────────────────────────

#[test]
fn given_value_below_threshold_when_calibrated_then_penalty_is_relative_shortfall() {
    // (0.45 - 0.36) / 0.45
    assert_eq!(calibrated_penalty(0.36, 0.45), 20.0);
}

#[test]
fn given_ratio_above_ceiling_when_excess_is_taken_then_penalty_is_relative_excess() {
    assert!((excess_penalty(0.36, 0.30) - 20.0).abs() < 1e-9);
    assert_eq!(excess_penalty(0.30, 0.30), 0.0);
}

// ── Disciplines ─────────────────────────────────────────────────────

#[test]
fn given_unknown_discipline_when_looked_up_then_default_thresholds_apply() {
    let profile = discipline_profile("nonexistent-xyz");
    assert_eq!(profile.name, DEFAULT_DISCIPLINE);
    assert_eq!(profile.burstiness_threshold, 0.45);
    assert_eq!(profile.mtld_threshold, 80.0);
}

#[test]
fn given_humanities_when_looked_up_then_thresholds_are_looser_on_contractions() {
    let humanities = discipline_profile("humanities");
    let stem = discipline_profile("stem");
    assert!(humanities.contraction_target > stem.contraction_target);
    assert!(humanities.mtld_threshold > stem.mtld_threshold);
}
