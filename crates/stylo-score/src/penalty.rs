//! Derived 0-100 penalties built from the discourse and psycholinguistic metrics.

use stylo_math::{excess_pct, round_f64, shortfall_pct};
use stylo_types::{
    AbstractNounRatio, ConnectiveDiversity, ContractionDensity, HapaxRate, PronounDensity,
    QuestionRatio, SurprisalProxy,
};

pub const CONNECTIVE_DIVERSITY_TARGET: f64 = 0.70;
pub const QUESTION_RATIO_TARGET: f64 = 0.03;
pub const PRONOUN_DENSITY_TARGET: f64 = 0.05;
pub const HAPAX_RATE_TARGET: f64 = 0.45;
pub const CONTRACTION_DENSITY_TARGET: f64 = 0.10;
pub const ABSTRACT_NOUN_CEILING: f64 = 0.30;
pub const SURPRISAL_VARIANCE_TARGET: f64 = 15.0;

/// `0` at or above `floor`, rising linearly to `100` at zero.
pub fn shortfall_penalty(value: f64, floor: f64) -> f64 {
    shortfall_pct(value, floor)
}

/// `0` at or below `ceiling`, rising linearly and capped at `100`.
pub fn excess_penalty(value: f64, ceiling: f64) -> f64 {
    excess_pct(value, ceiling)
}

/// Shortfall rounded to report precision, used when a discipline moves a threshold.
pub fn calibrated_penalty(value: f64, threshold: f64) -> f64 {
    round_f64(shortfall_penalty(value, threshold), 2)
}

/// Mean shortfall of connective diversity, question ratio and pronoun density.
pub fn discourse_penalty(
    connectives: &ConnectiveDiversity,
    questions: &QuestionRatio,
    pronouns: &PronounDensity,
) -> f64 {
    let terms = [
        shortfall_penalty(connectives.diversity, CONNECTIVE_DIVERSITY_TARGET),
        shortfall_penalty(questions.ratio, QUESTION_RATIO_TARGET),
        shortfall_penalty(pronouns.density, PRONOUN_DENSITY_TARGET),
    ];
    round_f64(terms.iter().sum::<f64>() / terms.len() as f64, 2)
}

/// Mean of hapax, contraction and surprisal shortfalls plus abstract-noun excess.
pub fn psycholinguistic_penalty(
    hapax: &HapaxRate,
    contractions: &ContractionDensity,
    abstracts: &AbstractNounRatio,
    surprisal: &SurprisalProxy,
) -> f64 {
    let terms = [
        shortfall_penalty(hapax.rate, HAPAX_RATE_TARGET),
        shortfall_penalty(contractions.density, CONTRACTION_DENSITY_TARGET),
        excess_penalty(abstracts.ratio, ABSTRACT_NOUN_CEILING),
        shortfall_penalty(surprisal.variance, SURPRISAL_VARIANCE_TARGET),
    ];
    round_f64(terms.iter().sum::<f64>() / terms.len() as f64, 2)
}
