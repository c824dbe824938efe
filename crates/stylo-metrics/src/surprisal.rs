//! Word-frequency surprisal: spread and lag-2 rhythm.
//!
//! Surprisal for a known word with log10 frequency `lf > 0` is
//! `max(20 - lf * log2(10), 0)`; anything else scores the 20-bit maximum.

use stylo_lexicon::{WordFrequencyTable, frequency};
use stylo_math::{mean, population_std_dev, population_variance, round_f64};
use stylo_text::word_tokens;
use stylo_types::{SurprisalAutocorrelation, SurprisalProxy};

/// Surprisal assigned to words without a usable frequency.
pub const MAX_SURPRISAL: f64 = 20.0;
pub const SURPRISAL_MIN_TOKENS: usize = 10;
pub const AUTOCORRELATION_MIN_TOKENS: usize = 15;
const AUTOCORRELATION_MIN_DIFFS: usize = 4;
const AUTOCORRELATION_LAG: usize = 2;

/// Per-token surprisal against `table`.
#[must_use]
pub fn word_surprisals(tokens: &[String], table: &WordFrequencyTable) -> Vec<f64> {
    tokens
        .iter()
        .map(|token| match table.get(token) {
            Some(lf) if lf > 0.0 => (MAX_SURPRISAL - lf * std::f64::consts::LOG2_10).max(0.0),
            _ => MAX_SURPRISAL,
        })
        .collect()
}

fn proxy_label(variance: f64) -> &'static str {
    if variance >= 25.0 {
        "High surprisal variance (human-like)"
    } else if variance >= 15.0 {
        "Moderate surprisal variance"
    } else if variance >= 8.0 {
        "Low surprisal variance (AI-typical)"
    } else {
        "Very low surprisal variance"
    }
}

/// Surprisal statistics using the process-wide frequency table.
#[must_use]
pub fn compute_surprisal_proxy(text: &str) -> SurprisalProxy {
    compute_surprisal_proxy_with(text, frequency::global())
}

#[must_use]
pub fn compute_surprisal_proxy_with(text: &str, table: &WordFrequencyTable) -> SurprisalProxy {
    let tokens = word_tokens(text);
    let token_count = tokens.len();

    if token_count < SURPRISAL_MIN_TOKENS {
        return SurprisalProxy {
            variance: 0.0,
            mean_surprisal: 0.0,
            std_dev: 0.0,
            token_count,
            label: "Insufficient text".to_string(),
        };
    }

    let surprisals = word_surprisals(&tokens, table);
    let variance = population_variance(&surprisals);

    SurprisalProxy {
        variance: round_f64(variance, 4),
        mean_surprisal: round_f64(mean(&surprisals), 4),
        std_dev: round_f64(population_std_dev(&surprisals), 4),
        token_count,
        label: proxy_label(variance).to_string(),
    }
}

fn autocorrelation_label(ac: f64) -> &'static str {
    let magnitude = ac.abs();
    if magnitude >= 0.30 {
        "High autocorrelation (human-like)"
    } else if magnitude >= 0.15 {
        "Moderate autocorrelation"
    } else {
        "Low autocorrelation (AI-typical)"
    }
}

fn insufficient_autocorrelation() -> SurprisalAutocorrelation {
    SurprisalAutocorrelation {
        autocorrelation: 0.0,
        label: "Insufficient text".to_string(),
    }
}

/// Lag-2 autocorrelation of first surprisal differences, using the
/// process-wide frequency table.
#[must_use]
pub fn compute_surprisal_autocorrelation(text: &str) -> SurprisalAutocorrelation {
    compute_surprisal_autocorrelation_with(text, frequency::global())
}

#[must_use]
pub fn compute_surprisal_autocorrelation_with(
    text: &str,
    table: &WordFrequencyTable,
) -> SurprisalAutocorrelation {
    let tokens = word_tokens(text);
    if tokens.len() < AUTOCORRELATION_MIN_TOKENS {
        return insufficient_autocorrelation();
    }

    let surprisals = word_surprisals(&tokens, table);
    let diffs: Vec<f64> = surprisals.windows(2).map(|w| w[1] - w[0]).collect();
    if diffs.len() < AUTOCORRELATION_MIN_DIFFS {
        return insufficient_autocorrelation();
    }

    let variance = population_variance(&diffs);
    if variance == 0.0 {
        return SurprisalAutocorrelation {
            autocorrelation: 0.0,
            label: "No variation in surprisal".to_string(),
        };
    }

    let m = mean(&diffs);
    let pairs = diffs.len() - AUTOCORRELATION_LAG;
    let covariance = diffs
        .iter()
        .zip(&diffs[AUTOCORRELATION_LAG..])
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / pairs as f64;
    let ac = covariance / variance;

    SurprisalAutocorrelation {
        autocorrelation: round_f64(ac, 4),
        label: autocorrelation_label(ac).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, f64)]) -> WordFrequencyTable {
        pairs.iter().map(|(w, f)| (w.to_string(), *f)).collect()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn surprisal_formula_and_fallbacks() {
        let t = table(&[("common", 5.0), ("huge", 7.0), ("zero", 0.0), ("neg", -1.0)]);
        let s = word_surprisals(&tokens(&["common", "huge", "zero", "neg", "unknown"]), &t);
        assert!((s[0] - (20.0 - 5.0 * std::f64::consts::LOG2_10)).abs() < 1e-12);
        assert_eq!(s[1], 0.0);
        assert_eq!(&s[2..], &[20.0, 20.0, 20.0]);
    }

    #[test]
    fn proxy_needs_ten_tokens() {
        let t = WordFrequencyTable::default();
        let report = compute_surprisal_proxy_with("one two three", &t);
        assert_eq!(report.token_count, 3);
        assert_eq!(report.label, "Insufficient text");
    }

    #[test]
    fn empty_table_gives_zero_variance() {
        let t = WordFrequencyTable::default();
        let text = "a b c d e f g h i j k l";
        let report = compute_surprisal_proxy_with(text, &t);
        assert_eq!(report.mean_surprisal, 20.0);
        assert_eq!(report.variance, 0.0);
        assert_eq!(report.label, "Very low surprisal variance");

        let ac = compute_surprisal_autocorrelation_with("a b c d e f g h i j k l m n o", &t);
        assert_eq!(ac.label, "No variation in surprisal");
    }

    #[test]
    fn mixed_vocabulary_has_high_variance() {
        // Half the tokens score 0, half score 20: variance 100.
        let t = table(&[("the", 7.0)]);
        let text = "the zork the zork the zork the zork the zork";
        let report = compute_surprisal_proxy_with(text, &t);
        assert_eq!(report.mean_surprisal, 10.0);
        assert_eq!(report.variance, 100.0);
        assert_eq!(report.std_dev, 10.0);
        assert_eq!(report.label, "High surprisal variance (human-like)");
    }

    #[test]
    fn autocorrelation_needs_fifteen_tokens() {
        let t = table(&[("the", 7.0)]);
        let ac = compute_surprisal_autocorrelation_with("the zork the zork the zork", &t);
        assert_eq!(ac.label, "Insufficient text");
        assert_eq!(ac.autocorrelation, 0.0);
    }

    #[test]
    fn alternating_surprisal_is_strongly_autocorrelated() {
        // Surprisals 0,20,0,20,... make the diffs alternate in sign, so lag-2 pairs agree.
        let t = table(&[("the", 7.0)]);
        let text = "the zork ".repeat(8);
        let ac = compute_surprisal_autocorrelation_with(&text, &t);
        assert_eq!(ac.autocorrelation, 0.9986);
        assert_eq!(ac.label, "High autocorrelation (human-like)");
    }
}
