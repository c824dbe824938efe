//! Readiness check against discipline and composite targets.

use stylo_math::round_f64;
use stylo_metrics::burstiness::SENTENCE_RANGE_TARGET;
use stylo_metrics::paragraph::OPENER_DIVERSITY_TARGET;
use stylo_score::{discipline_profile, penalty};
use stylo_types::{MetricStatus, Readiness, StatusMetrics, StatusReport};

use crate::compute_all_metrics;
use crate::settings::MetricsSettings;

fn at_least(current: f64, target: f64, decimals: u32) -> MetricStatus {
    let passed = current >= target;
    MetricStatus {
        current,
        target,
        distance: if passed {
            0.0
        } else {
            round_f64(target - current, decimals)
        },
        passed,
    }
}

fn at_most(current: f64, target: f64) -> MetricStatus {
    let passed = current <= target;
    MetricStatus {
        current,
        target,
        distance: if passed {
            0.0
        } else {
            round_f64(current - target, 2)
        },
        passed,
    }
}

/// Distance of every tracked metric from its target, using `discipline`
/// thresholds where the profile sets one.
///
/// Penalties and the composite come from the uncalibrated bundle; the
/// profile only moves the targets.
#[tracing::instrument(skip_all, fields(bytes = text.len(), discipline = %discipline, target_composite = target_composite))]
pub fn status(text: &str, discipline: &str, target_composite: f64) -> StatusReport {
    let profile = discipline_profile(discipline);
    let bundle = compute_all_metrics(text, &MetricsSettings::default());

    let metrics = StatusMetrics {
        burstiness_cv: at_least(bundle.burstiness.cv, profile.burstiness_threshold, 4),
        mtld: at_least(bundle.mtld.mtld, profile.mtld_threshold, 2),
        sentence_length_range: at_least(
            bundle.sentence_length_range.range as f64,
            SENTENCE_RANGE_TARGET as f64,
            0,
        ),
        paragraph_opener_diversity: at_least(
            bundle.paragraph_opener_diversity.diversity,
            OPENER_DIVERSITY_TARGET,
            4,
        ),
        hapax_rate: at_least(bundle.hapax_rate.rate, profile.hapax_target, 4),
        contraction_density: at_least(
            bundle.contraction_density.density,
            profile.contraction_target,
            4,
        ),
        pronoun_density: at_least(bundle.pronoun_density.density, profile.pronoun_target, 4),
        connective_diversity: at_least(
            bundle.connective_diversity.diversity,
            penalty::CONNECTIVE_DIVERSITY_TARGET,
            4,
        ),
        question_ratio: at_least(
            bundle.question_ratio.ratio,
            penalty::QUESTION_RATIO_TARGET,
            4,
        ),
        discourse_penalty: at_most(bundle.discourse_penalty, target_composite),
        psycholinguistic_penalty: at_most(bundle.psycholinguistic_penalty, target_composite),
        composite_score: at_most(bundle.composite.composite_score, target_composite),
    };

    let readiness = if metrics.all_passed() {
        Readiness::Ready
    } else {
        Readiness::NeedsWork
    };

    StatusReport {
        readiness,
        discipline: discipline.to_string(),
        discipline_profile: profile.clone(),
        target_composite,
        metrics,
        full_metrics: bundle,
    }
}
