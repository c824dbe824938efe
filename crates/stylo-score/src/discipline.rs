//! Discipline calibration profiles.

use std::borrow::Cow;

use stylo_types::{DisciplineProfile, DisciplineTargets};

use crate::penalty::{
    ABSTRACT_NOUN_CEILING, CONNECTIVE_DIVERSITY_TARGET, QUESTION_RATIO_TARGET,
    SURPRISAL_VARIANCE_TARGET,
};

pub const DEFAULT_DISCIPLINE: &str = "default";

const fn profile(
    name: &'static str,
    burstiness_threshold: f64,
    mtld_threshold: f64,
    contraction_target: f64,
    pronoun_target: f64,
    hapax_target: f64,
) -> DisciplineProfile {
    DisciplineProfile {
        name: Cow::Borrowed(name),
        burstiness_threshold,
        mtld_threshold,
        contraction_target,
        pronoun_target,
        hapax_target,
    }
}

static PROFILES: [DisciplineProfile; 7] = [
    profile(DEFAULT_DISCIPLINE, 0.45, 80.0, 0.10, 0.05, 0.45),
    profile("psychology", 0.40, 75.0, 0.08, 0.04, 0.42),
    profile("management", 0.42, 78.0, 0.12, 0.06, 0.44),
    profile("education", 0.43, 76.0, 0.15, 0.08, 0.40),
    profile("stem", 0.38, 82.0, 0.02, 0.02, 0.48),
    profile("humanities", 0.48, 85.0, 0.18, 0.10, 0.50),
    profile("social_sciences", 0.44, 79.0, 0.10, 0.06, 0.44),
];

/// Every profile, `default` first.
pub fn discipline_profiles() -> &'static [DisciplineProfile] {
    &PROFILES
}

pub fn default_profile() -> &'static DisciplineProfile {
    &PROFILES[0]
}

/// Profile for `name`, or `default` when the name is unknown.
pub fn discipline_profile(name: &str) -> &'static DisciplineProfile {
    match PROFILES.iter().find(|p| p.name == name) {
        Some(profile) => profile,
        None => {
            tracing::debug!(discipline = name, "unknown discipline; using default profile");
            default_profile()
        }
    }
}

/// True when `profile` carries the default thresholds' name.
pub fn is_default(profile: &DisciplineProfile) -> bool {
    profile.name == DEFAULT_DISCIPLINE
}

/// Profile targets joined with the fixed discourse targets.
pub fn discipline_targets(profile: &DisciplineProfile) -> DisciplineTargets {
    DisciplineTargets {
        contraction_target: profile.contraction_target,
        pronoun_target: profile.pronoun_target,
        hapax_target: profile.hapax_target,
        connective_diversity_target: CONNECTIVE_DIVERSITY_TARGET,
        question_ratio_target: QUESTION_RATIO_TARGET,
        abstract_noun_ceiling: ABSTRACT_NOUN_CEILING,
        surprisal_variance_target: SURPRISAL_VARIANCE_TARGET,
    }
}
