//! # stylo-types
//!
//! **Tier 0 (Stylometry Contract)**
//!
//! Pure data structures for stylometric reports. No I/O or business logic.
//!
//! ## What belongs here
//! * Per-metric report types and the aggregate metrics bundle
//! * Composite score and discipline calibration records
//! * Verify / diff / status / discourse report shapes
//! * Type enums for classification results
//!
//! ## What does NOT belong here
//! * Metric computation (use stylo-metrics)
//! * Penalty and composite logic (use stylo-score)
//! * Orchestration and JSON dispatch (use stylo-core)

pub mod workflow;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use workflow::*;

/// Schema version for metrics bundles.
pub const STYLO_SCHEMA_VERSION: u32 = 3;

// -----------------
// Sentence rhythm
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstinessReport {
    pub cv: f64,
    pub mean_length: f64,
    pub std_dev: f64,
    pub penalty: f64,
    pub sentence_count: usize,
    pub sentence_lengths: Vec<usize>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceLengthRange {
    pub range: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub penalty: f64,
    pub label: String,
}

// -----------------
// Lexical diversity
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MtldReport {
    pub mtld: f64,
    pub mtld_forward: f64,
    pub mtld_backward: f64,
    pub penalty: f64,
    pub token_count: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HapaxRate {
    pub rate: f64,
    pub hapax_count: usize,
    pub total_words: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractNounRatio {
    pub ratio: f64,
    pub abstract_count: usize,
    pub total_words: usize,
    /// First 50 matches, in text order.
    pub abstracts_found: Vec<String>,
    pub label: String,
}

// -----------------
// Paragraph shape
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenerDiversity {
    pub diversity: f64,
    pub unique_openers: usize,
    pub total_paragraphs: usize,
    pub penalty: f64,
    pub openers: Vec<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphLengthVariance {
    pub cv: f64,
    pub mean_length: f64,
    pub std_dev: f64,
    pub paragraph_count: usize,
    pub paragraph_lengths: Vec<usize>,
    pub label: String,
}

// -----------------
// Discourse markers
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeDensity {
    pub density: f64,
    pub hedge_count: usize,
    pub sentence_count: usize,
    pub hedges_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractionDensity {
    pub density: f64,
    pub contraction_count: usize,
    pub sentence_count: usize,
    pub contractions_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectiveDiversity {
    pub diversity: f64,
    pub unique_count: usize,
    pub total_count: usize,
    pub connectives_found: Vec<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronounDensity {
    pub density: f64,
    pub pronoun_count: usize,
    pub sentence_count: usize,
    pub pronouns_found: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRatio {
    pub ratio: f64,
    pub question_count: usize,
    pub sentence_count: usize,
}

// -----------------
// Surprisal
// -----------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurprisalProxy {
    pub variance: f64,
    pub mean_surprisal: f64,
    pub std_dev: f64,
    pub token_count: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurprisalAutocorrelation {
    pub autocorrelation: f64,
    pub label: String,
}

// -----------------
// Composite scoring
// -----------------

/// Which weighting formula the composite scorer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringVersion {
    /// Pattern, burstiness, vocabulary and structural terms.
    V2,
    /// V2 plus discourse and psycholinguistic terms.
    #[default]
    V3,
}

impl fmt::Display for ScoringVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringVersion::V2 => write!(f, "v2"),
            ScoringVersion::V3 => write!(f, "v3"),
        }
    }
}

/// Error returned when a scoring version string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScoringVersion(pub String);

impl fmt::Display for UnknownScoringVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scoring version '{}' (expected v2 or v3)", self.0)
    }
}

impl std::error::Error for UnknownScoringVersion {}

impl FromStr for ScoringVersion {
    type Err = UnknownScoringVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" => Ok(ScoringVersion::V2),
            "v3" => Ok(ScoringVersion::V3),
            _ => Err(UnknownScoringVersion(s.to_string())),
        }
    }
}

/// Per-term weights of the composite score. Terms a version ignores weigh zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub pattern: f64,
    pub burstiness: f64,
    pub vocab_diversity: f64,
    pub structural: f64,
    pub discourse: f64,
    pub psycholinguistic: f64,
}

impl CompositeWeights {
    pub fn total(&self) -> f64 {
        self.pattern
            + self.burstiness
            + self.vocab_diversity
            + self.structural
            + self.discourse
            + self.psycholinguistic
    }
}

impl ScoringVersion {
    pub const fn weights(self) -> CompositeWeights {
        match self {
            ScoringVersion::V2 => CompositeWeights {
                pattern: 0.60,
                burstiness: 0.20,
                vocab_diversity: 0.10,
                structural: 0.10,
                discourse: 0.0,
                psycholinguistic: 0.0,
            },
            ScoringVersion::V3 => CompositeWeights {
                pattern: 0.40,
                burstiness: 0.15,
                vocab_diversity: 0.10,
                structural: 0.10,
                discourse: 0.15,
                psycholinguistic: 0.10,
            },
        }
    }

    /// Whether the discourse and psycholinguistic terms take part.
    pub const fn includes_discourse(self) -> bool {
        matches!(self, ScoringVersion::V3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::Elevated => write!(f, "Elevated"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Named 0-100 penalties fed to the composite scorer. Missing terms are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyInputs {
    pub burstiness_penalty: f64,
    pub vocab_diversity_penalty: f64,
    pub structural_penalty: f64,
    pub discourse_penalty: f64,
    pub psycholinguistic_penalty: f64,
}

/// Composite terms actually used by the selected scoring version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeComponents {
    pub pattern_score: f64,
    pub burstiness_penalty: f64,
    pub vocab_diversity_penalty: f64,
    pub structural_penalty: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discourse_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psycholinguistic_penalty: Option<f64>,
}

impl CompositeComponents {
    /// Number of weighted terms present.
    pub fn term_count(&self) -> usize {
        4 + usize::from(self.discourse_penalty.is_some())
            + usize::from(self.psycholinguistic_penalty.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub composite_score: f64,
    pub scoring_version: ScoringVersion,
    pub components: CompositeComponents,
    pub risk_level: RiskLevel,
    pub label: String,
}

// -----------------
// Discipline calibration
// -----------------

/// Calibration thresholds tuned to a field's writing conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineProfile {
    pub name: Cow<'static, str>,
    pub burstiness_threshold: f64,
    pub mtld_threshold: f64,
    pub contraction_target: f64,
    pub pronoun_target: f64,
    pub hapax_target: f64,
}

/// Profile targets plus the fixed discourse targets used by the discourse report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineTargets {
    pub contraction_target: f64,
    pub pronoun_target: f64,
    pub hapax_target: f64,
    pub connective_diversity_target: f64,
    pub question_ratio_target: f64,
    pub abstract_noun_ceiling: f64,
    pub surprisal_variance_target: f64,
}

// -----------------
// Aggregate bundle
// -----------------

/// Every metric computed over one text, plus derived penalties and the composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsBundle {
    pub burstiness: BurstinessReport,
    pub mtld: MtldReport,
    pub fano_factor: f64,
    pub sentence_length_range: SentenceLengthRange,
    pub paragraph_opener_diversity: OpenerDiversity,
    pub hedge_density: HedgeDensity,
    pub hapax_rate: HapaxRate,
    pub contraction_density: ContractionDensity,
    pub paragraph_length_variance: ParagraphLengthVariance,
    pub surprisal_proxy: SurprisalProxy,
    pub surprisal_autocorrelation: SurprisalAutocorrelation,
    pub connective_diversity: ConnectiveDiversity,
    pub pronoun_density: PronounDensity,
    pub question_ratio: QuestionRatio,
    pub abstract_noun_ratio: AbstractNounRatio,
    pub discourse_penalty: f64,
    pub psycholinguistic_penalty: f64,
    pub composite: CompositeResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline_profile: Option<DisciplineProfile>,
}

impl MetricsBundle {
    /// The penalties this bundle feeds to the composite scorer.
    pub fn penalty_inputs(&self, structural_penalty: f64) -> PenaltyInputs {
        PenaltyInputs {
            burstiness_penalty: self.burstiness.penalty,
            vocab_diversity_penalty: self.mtld.penalty,
            structural_penalty,
            discourse_penalty: self.discourse_penalty,
            psycholinguistic_penalty: self.psycholinguistic_penalty,
        }
    }
}
