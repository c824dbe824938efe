//! Report shapes for the before/after, readiness and discourse workflows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    AbstractNounRatio, ConnectiveDiversity, ContractionDensity, DisciplineProfile,
    DisciplineTargets, HapaxRate, MetricsBundle, ParagraphLengthVariance, PronounDensity,
    QuestionRatio, SurprisalAutocorrelation, SurprisalProxy,
};

// -----------------
// Verify
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// Metrics watched for regressions between two drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionMetric {
    BurstinessCv,
    Mtld,
    ParagraphOpenerDiversity,
    HapaxRate,
    ConnectiveDiversity,
    DiscoursePenalty,
    PsycholinguisticPenalty,
}

impl RegressionMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegressionMetric::BurstinessCv => "burstiness_cv",
            RegressionMetric::Mtld => "mtld",
            RegressionMetric::ParagraphOpenerDiversity => "paragraph_opener_diversity",
            RegressionMetric::HapaxRate => "hapax_rate",
            RegressionMetric::ConnectiveDiversity => "connective_diversity",
            RegressionMetric::DiscoursePenalty => "discourse_penalty",
            RegressionMetric::PsycholinguisticPenalty => "psycholinguistic_penalty",
        }
    }
}

impl fmt::Display for RegressionMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub metric: RegressionMetric,
    pub before: f64,
    pub after: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub before: MetricsBundle,
    pub after: MetricsBundle,
    pub regressions: Vec<Regression>,
    pub needs_another_pass: bool,
    pub recommendations: Vec<String>,
}

// -----------------
// Diff
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub before: f64,
    pub after: f64,
    pub delta: f64,
    pub improvement_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffDeltas {
    pub burstiness_cv: MetricDelta,
    pub burstiness_penalty: MetricDelta,
    pub mtld: MetricDelta,
    pub mtld_penalty: MetricDelta,
    pub fano_factor: MetricDelta,
    pub sentence_length_range: MetricDelta,
    pub paragraph_opener_diversity: MetricDelta,
    pub hedge_density: MetricDelta,
    pub hapax_rate: MetricDelta,
    pub contraction_density: MetricDelta,
    pub paragraph_length_cv: MetricDelta,
    pub surprisal_variance: MetricDelta,
    pub surprisal_autocorrelation: MetricDelta,
    pub connective_diversity: MetricDelta,
    pub pronoun_density: MetricDelta,
    pub question_ratio: MetricDelta,
    pub abstract_noun_ratio: MetricDelta,
    pub discourse_penalty: MetricDelta,
    pub psycholinguistic_penalty: MetricDelta,
    pub composite_score: MetricDelta,
}

impl DiffDeltas {
    /// Every delta paired with its report key, in declaration order.
    pub fn entries(&self) -> [(&'static str, &MetricDelta); 20] {
        [
            ("burstiness_cv", &self.burstiness_cv),
            ("burstiness_penalty", &self.burstiness_penalty),
            ("mtld", &self.mtld),
            ("mtld_penalty", &self.mtld_penalty),
            ("fano_factor", &self.fano_factor),
            ("sentence_length_range", &self.sentence_length_range),
            ("paragraph_opener_diversity", &self.paragraph_opener_diversity),
            ("hedge_density", &self.hedge_density),
            ("hapax_rate", &self.hapax_rate),
            ("contraction_density", &self.contraction_density),
            ("paragraph_length_cv", &self.paragraph_length_cv),
            ("surprisal_variance", &self.surprisal_variance),
            ("surprisal_autocorrelation", &self.surprisal_autocorrelation),
            ("connective_diversity", &self.connective_diversity),
            ("pronoun_density", &self.pronoun_density),
            ("question_ratio", &self.question_ratio),
            ("abstract_noun_ratio", &self.abstract_noun_ratio),
            ("discourse_penalty", &self.discourse_penalty),
            ("psycholinguistic_penalty", &self.psycholinguistic_penalty),
            ("composite_score", &self.composite_score),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceLengthDistribution {
    pub before: Vec<usize>,
    pub after: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    pub deltas: DiffDeltas,
    pub sentence_length_distribution: SentenceLengthDistribution,
}

// -----------------
// Status
// -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    NeedsWork,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Ready => write!(f, "ready"),
            Readiness::NeedsWork => write!(f, "needs_work"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStatus {
    pub current: f64,
    pub target: f64,
    pub distance: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMetrics {
    pub burstiness_cv: MetricStatus,
    pub mtld: MetricStatus,
    pub sentence_length_range: MetricStatus,
    pub paragraph_opener_diversity: MetricStatus,
    pub hapax_rate: MetricStatus,
    pub contraction_density: MetricStatus,
    pub pronoun_density: MetricStatus,
    pub connective_diversity: MetricStatus,
    pub question_ratio: MetricStatus,
    pub discourse_penalty: MetricStatus,
    pub psycholinguistic_penalty: MetricStatus,
    pub composite_score: MetricStatus,
}

impl StatusMetrics {
    pub fn entries(&self) -> [(&'static str, &MetricStatus); 12] {
        [
            ("burstiness_cv", &self.burstiness_cv),
            ("mtld", &self.mtld),
            ("sentence_length_range", &self.sentence_length_range),
            ("paragraph_opener_diversity", &self.paragraph_opener_diversity),
            ("hapax_rate", &self.hapax_rate),
            ("contraction_density", &self.contraction_density),
            ("pronoun_density", &self.pronoun_density),
            ("connective_diversity", &self.connective_diversity),
            ("question_ratio", &self.question_ratio),
            ("discourse_penalty", &self.discourse_penalty),
            ("psycholinguistic_penalty", &self.psycholinguistic_penalty),
            ("composite_score", &self.composite_score),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.entries().iter().all(|(_, status)| status.passed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub readiness: Readiness,
    pub discipline: String,
    pub discipline_profile: DisciplineProfile,
    pub target_composite: f64,
    pub metrics: StatusMetrics,
    pub full_metrics: MetricsBundle,
}

// -----------------
// Discourse
// -----------------

/// The nine discourse and psycholinguistic metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscourseMetrics {
    pub hapax_rate: HapaxRate,
    pub contraction_density: ContractionDensity,
    pub paragraph_length_variance: ParagraphLengthVariance,
    pub surprisal_proxy: SurprisalProxy,
    pub surprisal_autocorrelation: SurprisalAutocorrelation,
    pub connective_diversity: ConnectiveDiversity,
    pub pronoun_density: PronounDensity,
    pub question_ratio: QuestionRatio,
    pub abstract_noun_ratio: AbstractNounRatio,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedPenalties {
    pub discourse_penalty: f64,
    pub psycholinguistic_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscourseReport {
    pub discipline: String,
    pub metrics: DiscourseMetrics,
    pub penalties: DerivedPenalties,
    pub discipline_targets: DisciplineTargets,
    pub flags: Vec<String>,
}
