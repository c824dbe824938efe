//! Before/after comparison of two drafts.

use stylo_math::round_f64;
use stylo_types::{
    DiffDeltas, DiffReport, MetricDelta, MetricsBundle, Regression, RegressionMetric,
    SentenceLengthDistribution, Severity, VerifyReport,
};

use crate::compute_all_metrics;
use crate::settings::{MetricsSettings, VerifySettings};

/// Which way a metric should move between drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// A watched metric with its severity cut-offs on the absolute change.
struct Watch {
    metric: RegressionMetric,
    direction: Direction,
    high_above: f64,
    moderate_above: f64,
    read: fn(&MetricsBundle) -> f64,
}

const WATCHED: [Watch; 7] = [
    Watch {
        metric: RegressionMetric::BurstinessCv,
        direction: Direction::HigherIsBetter,
        high_above: 0.10,
        moderate_above: 0.05,
        read: |b| b.burstiness.cv,
    },
    Watch {
        metric: RegressionMetric::Mtld,
        direction: Direction::HigherIsBetter,
        high_above: 15.0,
        moderate_above: 5.0,
        read: |b| b.mtld.mtld,
    },
    Watch {
        metric: RegressionMetric::ParagraphOpenerDiversity,
        direction: Direction::HigherIsBetter,
        high_above: 0.20,
        moderate_above: 0.10,
        read: |b| b.paragraph_opener_diversity.diversity,
    },
    Watch {
        metric: RegressionMetric::HapaxRate,
        direction: Direction::HigherIsBetter,
        high_above: 0.10,
        moderate_above: 0.05,
        read: |b| b.hapax_rate.rate,
    },
    Watch {
        metric: RegressionMetric::ConnectiveDiversity,
        direction: Direction::HigherIsBetter,
        high_above: 0.20,
        moderate_above: 0.10,
        read: |b| b.connective_diversity.diversity,
    },
    Watch {
        metric: RegressionMetric::DiscoursePenalty,
        direction: Direction::LowerIsBetter,
        high_above: 15.0,
        moderate_above: 5.0,
        read: |b| b.discourse_penalty,
    },
    Watch {
        metric: RegressionMetric::PsycholinguisticPenalty,
        direction: Direction::LowerIsBetter,
        high_above: 15.0,
        moderate_above: 5.0,
        read: |b| b.psycholinguistic_penalty,
    },
];

impl Watch {
    fn check(&self, before: &MetricsBundle, after: &MetricsBundle) -> Option<Regression> {
        let (b, a) = ((self.read)(before), (self.read)(after));
        let worsened_by = match self.direction {
            Direction::HigherIsBetter => b - a,
            Direction::LowerIsBetter => a - b,
        };
        if worsened_by <= 0.0 {
            return None;
        }
        let severity = if worsened_by > self.high_above {
            Severity::High
        } else if worsened_by > self.moderate_above {
            Severity::Moderate
        } else {
            Severity::Low
        };
        Some(Regression {
            metric: self.metric,
            before: b,
            after: a,
            severity,
        })
    }
}

/// Scores both drafts and reports every watched metric that got worse.
#[tracing::instrument(skip_all, fields(original = original.len(), humanized = humanized.len()))]
pub fn verify(original: &str, humanized: &str, settings: &VerifySettings) -> VerifyReport {
    let before = compute_all_metrics(
        original,
        &MetricsSettings::with_pattern_score(settings.pattern_score_before),
    );
    let after = compute_all_metrics(
        humanized,
        &MetricsSettings::with_pattern_score(settings.pattern_score_after),
    );

    let regressions: Vec<Regression> = WATCHED
        .iter()
        .filter_map(|watch| watch.check(&before, &after))
        .collect();

    let opener_decreased =
        after.paragraph_opener_diversity.diversity < before.paragraph_opener_diversity.diversity;
    let composite_after = after.composite.composite_score;
    let over_target = composite_after > settings.pass_threshold;
    let needs_another_pass = over_target || !regressions.is_empty() || opener_decreased;

    let mut recommendations = Vec::new();
    if over_target {
        recommendations.push(format!(
            "Composite score is {composite_after:.1}% (target: <={}%). \
             Continue humanization to reduce AI probability.",
            settings.pass_threshold
        ));
    }
    for reg in &regressions {
        recommendations.push(format!(
            "{} regressed from {:?} to {:?} (severity: {}). Address in next pass.",
            reg.metric, reg.before, reg.after, reg.severity
        ));
    }
    if !needs_another_pass {
        recommendations.push("All metrics improved or held. Text is ready.".to_string());
    }

    tracing::debug!(
        regressions = regressions.len(),
        composite_after,
        needs_another_pass,
        "verified drafts"
    );

    VerifyReport {
        before,
        after,
        regressions,
        needs_another_pass,
        recommendations,
    }
}

fn delta(before: f64, after: f64) -> MetricDelta {
    let d = round_f64(after - before, 4);
    let improvement_pct = if before == 0.0 {
        0.0
    } else {
        round_f64(d / before * 100.0, 2)
    };
    MetricDelta {
        before,
        after,
        delta: d,
        improvement_pct,
    }
}

/// Per-metric change from `original` to `humanized`.
#[tracing::instrument(skip_all, fields(original = original.len(), humanized = humanized.len()))]
pub fn diff(original: &str, humanized: &str) -> DiffReport {
    let settings = MetricsSettings::default();
    let b = compute_all_metrics(original, &settings);
    let a = compute_all_metrics(humanized, &settings);

    let deltas = DiffDeltas {
        burstiness_cv: delta(b.burstiness.cv, a.burstiness.cv),
        burstiness_penalty: delta(b.burstiness.penalty, a.burstiness.penalty),
        mtld: delta(b.mtld.mtld, a.mtld.mtld),
        mtld_penalty: delta(b.mtld.penalty, a.mtld.penalty),
        fano_factor: delta(b.fano_factor, a.fano_factor),
        sentence_length_range: delta(
            b.sentence_length_range.range as f64,
            a.sentence_length_range.range as f64,
        ),
        paragraph_opener_diversity: delta(
            b.paragraph_opener_diversity.diversity,
            a.paragraph_opener_diversity.diversity,
        ),
        hedge_density: delta(b.hedge_density.density, a.hedge_density.density),
        hapax_rate: delta(b.hapax_rate.rate, a.hapax_rate.rate),
        contraction_density: delta(b.contraction_density.density, a.contraction_density.density),
        paragraph_length_cv: delta(
            b.paragraph_length_variance.cv,
            a.paragraph_length_variance.cv,
        ),
        surprisal_variance: delta(b.surprisal_proxy.variance, a.surprisal_proxy.variance),
        surprisal_autocorrelation: delta(
            b.surprisal_autocorrelation.autocorrelation,
            a.surprisal_autocorrelation.autocorrelation,
        ),
        connective_diversity: delta(
            b.connective_diversity.diversity,
            a.connective_diversity.diversity,
        ),
        pronoun_density: delta(b.pronoun_density.density, a.pronoun_density.density),
        question_ratio: delta(b.question_ratio.ratio, a.question_ratio.ratio),
        abstract_noun_ratio: delta(b.abstract_noun_ratio.ratio, a.abstract_noun_ratio.ratio),
        discourse_penalty: delta(b.discourse_penalty, a.discourse_penalty),
        psycholinguistic_penalty: delta(b.psycholinguistic_penalty, a.psycholinguistic_penalty),
        composite_score: delta(b.composite.composite_score, a.composite.composite_score),
    };

    DiffReport {
        deltas,
        sentence_length_distribution: SentenceLengthDistribution {
            before: b.burstiness.sentence_lengths,
            after: a.burstiness.sentence_lengths,
        },
    }
}
