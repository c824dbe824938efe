//! Sentence-length rhythm: burstiness, Fano factor and length range.

use stylo_math::{
    coefficient_of_variation, counts_to_f64, mean, population_std_dev, population_variance,
    round_f64, shortfall_pct,
};
use stylo_text::sentence_lengths;
use stylo_types::{BurstinessReport, SentenceLengthRange};

/// CV floor for native-speaker prose.
pub const BURSTINESS_THRESHOLD: f64 = 0.45;
/// Relaxed CV floor for non-native writers.
pub const NON_NATIVE_BURSTINESS_THRESHOLD: f64 = 0.35;
/// Range (in words) at which the length-range penalty reaches zero.
pub const SENTENCE_RANGE_TARGET: usize = 25;

fn burstiness_label(cv: f64) -> &'static str {
    if cv > 0.55 {
        "High burstiness"
    } else if cv >= 0.45 {
        "Normal burstiness"
    } else if cv >= 0.35 {
        "Low burstiness"
    } else if cv >= 0.25 {
        "Very low burstiness"
    } else {
        "Minimal burstiness"
    }
}

/// Coefficient of variation of sentence word counts.
#[must_use]
pub fn compute_burstiness(text: &str, non_native: bool) -> BurstinessReport {
    let lengths = sentence_lengths(text);

    if lengths.len() < 2 {
        return BurstinessReport {
            cv: 0.0,
            mean_length: lengths.first().map_or(0.0, |l| *l as f64),
            std_dev: 0.0,
            penalty: 0.0,
            sentence_count: lengths.len(),
            sentence_lengths: lengths,
            label: burstiness_label(0.0).to_string(),
        };
    }

    let samples = counts_to_f64(&lengths);
    let cv = coefficient_of_variation(&samples);
    let threshold = if non_native {
        NON_NATIVE_BURSTINESS_THRESHOLD
    } else {
        BURSTINESS_THRESHOLD
    };

    BurstinessReport {
        cv: round_f64(cv, 4),
        mean_length: round_f64(mean(&samples), 2),
        std_dev: round_f64(population_std_dev(&samples), 2),
        penalty: round_f64(shortfall_pct(cv, threshold), 2),
        sentence_count: lengths.len(),
        sentence_lengths: lengths,
        label: burstiness_label(cv).to_string(),
    }
}

/// Population variance over mean of sentence lengths.
#[must_use]
pub fn compute_fano_factor(lengths: &[usize]) -> f64 {
    let samples = counts_to_f64(lengths);
    let m = mean(&samples);
    if m == 0.0 {
        return 0.0;
    }
    round_f64(population_variance(&samples) / m, 4)
}

fn range_label(range: usize) -> &'static str {
    match range {
        r if r > 35 => "Very wide",
        r if r >= 25 => "Normal",
        r if r >= 15 => "Narrow",
        r if r >= 5 => "Very narrow",
        _ => "Minimal",
    }
}

/// Spread between the shortest and longest sentence.
#[must_use]
pub fn compute_sentence_length_range(lengths: &[usize]) -> SentenceLengthRange {
    let (Some(&min_length), Some(&max_length)) = (lengths.iter().min(), lengths.iter().max())
    else {
        return SentenceLengthRange {
            range: 0,
            min_length: 0,
            max_length: 0,
            penalty: 100.0,
            label: range_label(0).to_string(),
        };
    };

    let range = max_length - min_length;
    SentenceLengthRange {
        range,
        min_length,
        max_length,
        penalty: round_f64(shortfall_pct(range as f64, SENTENCE_RANGE_TARGET as f64), 2),
        label: range_label(range).to_string(),
    }
}
