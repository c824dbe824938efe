//! # stylo-core
//!
//! **Tier 3 (Facade)**
//!
//! This crate is the **primary library interface** for `stylo`. It runs the
//! individual metrics over a text, derives the penalties, scores the result
//! and compares drafts.
//!
//! If you are embedding `stylo` into another Rust application, depend on this
//! crate and `stylo-types`. Language bindings should go through [`ffi::run_json`].
//!
//! ## Example
//!
//! ```rust
//! use stylo_core::{compute_all_metrics, settings::MetricsSettings};
//!
//! let text = "The results show a clear trend. The results show a strong effect.";
//! let bundle = compute_all_metrics(text, &MetricsSettings::default());
//! println!("{}", bundle.composite.label);
//! ```

#![forbid(unsafe_code)]

pub mod compare;
pub mod config;
pub mod error;
pub mod ffi;
pub mod settings;
pub mod status;

pub use stylo_types as types;

pub use compare::{diff, verify};
pub use status::status;

use stylo_metrics as m;
use stylo_score::{
    calibrated_penalty, compute_composite_score, discipline_profile, discipline_targets,
    is_default, penalty,
};
use stylo_types::{
    DerivedPenalties, DiscourseMetrics, DiscourseReport, DisciplineProfile, MetricsBundle,
    PenaltyInputs,
};

use crate::settings::MetricsSettings;

/// Runs every metric over `text`, derives both penalties and scores the composite.
#[tracing::instrument(skip_all, fields(bytes = text.len(), version = %settings.scoring_version))]
pub fn compute_all_metrics(text: &str, settings: &MetricsSettings) -> MetricsBundle {
    let burstiness = m::compute_burstiness(text, settings.non_native);
    let mtld = m::compute_mtld(text);
    let fano_factor = m::compute_fano_factor(&burstiness.sentence_lengths);
    let sentence_length_range = m::compute_sentence_length_range(&burstiness.sentence_lengths);
    let paragraph_opener_diversity = m::compute_paragraph_opener_diversity(text);
    let hedge_density = m::compute_hedge_density(text);

    let hapax_rate = m::compute_hapax_rate(text);
    let contraction_density = m::compute_contraction_density(text);
    let paragraph_length_variance = m::compute_paragraph_length_variance(text);
    let surprisal_proxy = m::compute_surprisal_proxy(text);
    let surprisal_autocorrelation = m::compute_surprisal_autocorrelation(text);

    let connective_diversity = m::compute_connective_diversity(text);
    let pronoun_density = m::compute_pronoun_density(text);
    let question_ratio = m::compute_question_ratio(text);
    let abstract_noun_ratio = m::compute_abstract_noun_ratio(text);

    let discourse_penalty =
        penalty::discourse_penalty(&connective_diversity, &question_ratio, &pronoun_density);
    let psycholinguistic_penalty = penalty::psycholinguistic_penalty(
        &hapax_rate,
        &contraction_density,
        &abstract_noun_ratio,
        &surprisal_proxy,
    );

    let inputs = PenaltyInputs {
        burstiness_penalty: burstiness.penalty,
        vocab_diversity_penalty: mtld.penalty,
        structural_penalty: settings.structural_penalty,
        discourse_penalty,
        psycholinguistic_penalty,
    };
    let composite =
        compute_composite_score(settings.pattern_score, &inputs, settings.scoring_version);

    MetricsBundle {
        burstiness,
        mtld,
        fano_factor,
        sentence_length_range,
        paragraph_opener_diversity,
        hedge_density,
        hapax_rate,
        contraction_density,
        paragraph_length_variance,
        surprisal_proxy,
        surprisal_autocorrelation,
        connective_diversity,
        pronoun_density,
        question_ratio,
        abstract_noun_ratio,
        discourse_penalty,
        psycholinguistic_penalty,
        composite,
        discipline: None,
        discipline_profile: None,
    }
}

/// Like [`compute_all_metrics`], with burstiness and MTLD penalties judged
/// against the thresholds of `discipline`.
///
/// Unknown disciplines use the `default` profile, which leaves the bundle
/// unchanged apart from the recorded discipline.
#[tracing::instrument(skip_all, fields(bytes = text.len(), discipline = %discipline))]
pub fn compute_metrics_with_discipline(
    text: &str,
    discipline: &str,
    settings: &MetricsSettings,
) -> MetricsBundle {
    let profile = discipline_profile(discipline);
    let mut bundle = compute_all_metrics(text, settings);
    if !is_default(profile) {
        recalibrate(&mut bundle, profile);
        rescore(&mut bundle, settings);
        tracing::debug!(
            profile = %profile.name,
            burstiness_penalty = bundle.burstiness.penalty,
            mtld_penalty = bundle.mtld.penalty,
            "recalibrated penalties"
        );
    }
    bundle.discipline = Some(discipline.to_string());
    bundle.discipline_profile = Some(profile.clone());
    bundle
}

fn recalibrate(bundle: &mut MetricsBundle, profile: &DisciplineProfile) {
    bundle.burstiness.penalty =
        calibrated_penalty(bundle.burstiness.cv, profile.burstiness_threshold);
    bundle.mtld.penalty = calibrated_penalty(bundle.mtld.mtld, profile.mtld_threshold);
}

fn rescore(bundle: &mut MetricsBundle, settings: &MetricsSettings) {
    let inputs = bundle.penalty_inputs(settings.structural_penalty);
    bundle.composite =
        compute_composite_score(settings.pattern_score, &inputs, settings.scoring_version);
}

/// The nine discourse metrics, their penalties and a flag for every missed target.
#[tracing::instrument(skip_all, fields(bytes = text.len(), discipline = %discipline))]
pub fn discourse_report(text: &str, discipline: &str) -> DiscourseReport {
    let profile = discipline_profile(discipline);
    let targets = discipline_targets(profile);

    let metrics = DiscourseMetrics {
        hapax_rate: m::compute_hapax_rate(text),
        contraction_density: m::compute_contraction_density(text),
        paragraph_length_variance: m::compute_paragraph_length_variance(text),
        surprisal_proxy: m::compute_surprisal_proxy(text),
        surprisal_autocorrelation: m::compute_surprisal_autocorrelation(text),
        connective_diversity: m::compute_connective_diversity(text),
        pronoun_density: m::compute_pronoun_density(text),
        question_ratio: m::compute_question_ratio(text),
        abstract_noun_ratio: m::compute_abstract_noun_ratio(text),
    };
    let penalties = DerivedPenalties {
        discourse_penalty: penalty::discourse_penalty(
            &metrics.connective_diversity,
            &metrics.question_ratio,
            &metrics.pronoun_density,
        ),
        psycholinguistic_penalty: penalty::psycholinguistic_penalty(
            &metrics.hapax_rate,
            &metrics.contraction_density,
            &metrics.abstract_noun_ratio,
            &metrics.surprisal_proxy,
        ),
    };

    let mut flags = Vec::new();
    let below = [
        (
            "Contraction density",
            metrics.contraction_density.density,
            targets.contraction_target,
        ),
        (
            "First-person pronoun density",
            metrics.pronoun_density.density,
            targets.pronoun_target,
        ),
        ("Hapax rate", metrics.hapax_rate.rate, targets.hapax_target),
        (
            "Connective diversity",
            metrics.connective_diversity.diversity,
            targets.connective_diversity_target,
        ),
        (
            "Question ratio",
            metrics.question_ratio.ratio,
            targets.question_ratio_target,
        ),
        (
            "Surprisal variance",
            metrics.surprisal_proxy.variance,
            targets.surprisal_variance_target,
        ),
    ];
    for (name, current, target) in below {
        if current < target {
            flags.push(format!("{name} {current} is below target {target}"));
        }
    }
    let abstract_ratio = metrics.abstract_noun_ratio.ratio;
    if abstract_ratio > targets.abstract_noun_ceiling {
        flags.push(format!(
            "Abstract noun ratio {abstract_ratio} is above ceiling {}",
            targets.abstract_noun_ceiling
        ));
    }

    DiscourseReport {
        discipline: discipline.to_string(),
        metrics,
        penalties,
        discipline_targets: targets,
        flags,
    }
}
