//! Pure settings types for the workflow API.
//!
//! Every field has a default, so callers only name what they change.

use serde::{Deserialize, Serialize};

pub use stylo_types::ScoringVersion;

/// Composite threshold below which a text counts as ready.
pub const DEFAULT_TARGET_COMPOSITE: f64 = 30.0;

/// Settings for a single-text metrics run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// Externally computed pattern-match score (0-100).
    pub pattern_score: f64,
    /// Externally computed structural penalty (0-100).
    pub structural_penalty: f64,
    /// Loosen the burstiness threshold for non-native writers.
    pub non_native: bool,
    pub scoring_version: ScoringVersion,
}

impl MetricsSettings {
    pub fn with_pattern_score(pattern_score: f64) -> Self {
        Self {
            pattern_score,
            ..Self::default()
        }
    }
}

/// Settings for a before/after verification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySettings {
    pub pattern_score_before: f64,
    pub pattern_score_after: f64,
    /// Composite score the humanized text must not exceed.
    pub pass_threshold: f64,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            pattern_score_before: 0.0,
            pattern_score_after: 0.0,
            pass_threshold: DEFAULT_TARGET_COMPOSITE,
        }
    }
}

/// Settings for a readiness check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSettings {
    pub discipline: String,
    pub target_composite: f64,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self {
            discipline: stylo_score::DEFAULT_DISCIPLINE.to_string(),
            target_composite: DEFAULT_TARGET_COMPOSITE,
        }
    }
}
