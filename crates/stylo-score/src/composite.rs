//! Weighted composite score and risk banding.

use stylo_math::round_f64;
use stylo_types::{CompositeComponents, CompositeResult, PenaltyInputs, RiskLevel, ScoringVersion};

/// Weighted 0-100 estimate of how machine-generated a text reads.
///
/// `pattern_score` comes from an external pattern matcher; the penalties
/// come from the metric layer. The risk band is taken from the unrounded
/// composite.
pub fn compute_composite_score(
    pattern_score: f64,
    penalties: &PenaltyInputs,
    version: ScoringVersion,
) -> CompositeResult {
    let w = version.weights();
    let composite = w.pattern * pattern_score
        + w.burstiness * penalties.burstiness_penalty
        + w.vocab_diversity * penalties.vocab_diversity_penalty
        + w.structural * penalties.structural_penalty
        + w.discourse * penalties.discourse_penalty
        + w.psycholinguistic * penalties.psycholinguistic_penalty;

    let discourse_terms = version.includes_discourse();
    let components = CompositeComponents {
        pattern_score: round_f64(pattern_score, 2),
        burstiness_penalty: round_f64(penalties.burstiness_penalty, 2),
        vocab_diversity_penalty: round_f64(penalties.vocab_diversity_penalty, 2),
        structural_penalty: round_f64(penalties.structural_penalty, 2),
        discourse_penalty: discourse_terms.then(|| round_f64(penalties.discourse_penalty, 2)),
        psycholinguistic_penalty: discourse_terms
            .then(|| round_f64(penalties.psycholinguistic_penalty, 2)),
    };

    let risk_level = risk_for_score(composite);
    CompositeResult {
        composite_score: round_f64(composite, 2),
        scoring_version: version,
        components,
        risk_level,
        label: format!("{risk_level} risk ({:.1}%)", round_f64(composite, 1)),
    }
}

pub fn risk_for_score(score: f64) -> RiskLevel {
    if score >= 60.0 {
        RiskLevel::High
    } else if score >= 40.0 {
        RiskLevel::Elevated
    } else if score >= 20.0 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(value: f64) -> PenaltyInputs {
        PenaltyInputs {
            burstiness_penalty: value,
            vocab_diversity_penalty: value,
            structural_penalty: value,
            discourse_penalty: value,
            psycholinguistic_penalty: value,
        }
    }

    #[test]
    fn zero_inputs_score_zero() {
        for version in [ScoringVersion::V2, ScoringVersion::V3] {
            let result = compute_composite_score(0.0, &all(0.0), version);
            assert_eq!(result.composite_score, 0.0);
            assert_eq!(result.risk_level, RiskLevel::Low);
            assert_eq!(result.label, "Low risk (0.0%)");
        }
    }

    #[test]
    fn maximal_inputs_score_hundred() {
        for version in [ScoringVersion::V2, ScoringVersion::V3] {
            let result = compute_composite_score(100.0, &all(100.0), version);
            assert_eq!(result.composite_score, 100.0);
            assert_eq!(result.risk_level, RiskLevel::High);
            assert_eq!(result.label, "High risk (100.0%)");
        }
    }

    #[test]
    fn v2_ignores_discourse_terms() {
        let penalties = PenaltyInputs {
            discourse_penalty: 100.0,
            psycholinguistic_penalty: 100.0,
            ..PenaltyInputs::default()
        };
        let v2 = compute_composite_score(0.0, &penalties, ScoringVersion::V2);
        assert_eq!(v2.composite_score, 0.0);
        assert_eq!(v2.components.discourse_penalty, None);
        assert_eq!(v2.components.term_count(), 4);

        let v3 = compute_composite_score(0.0, &penalties, ScoringVersion::V3);
        assert_eq!(v3.composite_score, 25.0);
        assert_eq!(v3.risk_level, RiskLevel::Moderate);
        assert_eq!(v3.components.psycholinguistic_penalty, Some(100.0));
    }

    #[test]
    fn weighted_sum_matches_hand_calculation() {
        let penalties = PenaltyInputs {
            burstiness_penalty: 55.56,
            vocab_diversity_penalty: 78.64,
            structural_penalty: 0.0,
            discourse_penalty: 100.0,
            psycholinguistic_penalty: 33.33,
        };
        // 0.15*55.56 + 0.10*78.64 + 0.15*100 + 0.10*33.33
        let result = compute_composite_score(0.0, &penalties, ScoringVersion::V3);
        assert_eq!(result.composite_score, 34.53);
        assert_eq!(result.label, "Moderate risk (34.5%)");
    }

    #[test]
    fn risk_bands_use_inclusive_lower_edges() {
        assert_eq!(risk_for_score(19.99), RiskLevel::Low);
        assert_eq!(risk_for_score(20.0), RiskLevel::Moderate);
        assert_eq!(risk_for_score(40.0), RiskLevel::Elevated);
        assert_eq!(risk_for_score(60.0), RiskLevel::High);
    }
}
