//! Vocabulary measures: MTLD, hapax legomena and abstract nominalizations.

use std::collections::{BTreeMap, BTreeSet};

use stylo_lexicon::{ABSTRACT_MIN_CHARS, ABSTRACT_SUFFIXES};
use stylo_math::{round_f64, safe_ratio, shortfall_pct};
use stylo_text::{content_tokens, word_tokens};
use stylo_types::{AbstractNounRatio, HapaxRate, MtldReport};

/// Running type-token ratio at which an MTLD factor closes.
pub const MTLD_TTR_THRESHOLD: f64 = 0.72;
/// MTLD score at which the vocabulary penalty reaches zero.
pub const MTLD_TARGET: f64 = 80.0;
/// Fewer tokens than this and MTLD is not computed.
pub const MTLD_MIN_TOKENS: usize = 10;

const ABSTRACTS_FOUND_CAP: usize = 50;

/// Factor count for one pass, including the trailing partial factor.
fn mtld_factors<'a>(tokens: impl Iterator<Item = &'a String>) -> f64 {
    let mut factors = 0.0;
    let mut types: BTreeSet<&str> = BTreeSet::new();
    let mut run = 0usize;

    for token in tokens {
        types.insert(token);
        run += 1;
        if types.len() as f64 / run as f64 <= MTLD_TTR_THRESHOLD {
            factors += 1.0;
            types.clear();
            run = 0;
        }
    }

    if run > 0 {
        let ttr = types.len() as f64 / run as f64;
        factors += (1.0 - ttr) / (1.0 - MTLD_TTR_THRESHOLD);
    }
    factors
}

fn mtld_direction(token_count: usize, factors: f64) -> f64 {
    if factors > 0.0 {
        token_count as f64 / factors
    } else {
        0.0
    }
}

fn mtld_label(mtld: f64) -> &'static str {
    if mtld > 100.0 {
        "Very high diversity"
    } else if mtld >= 80.0 {
        "Normal diversity"
    } else if mtld >= 60.0 {
        "Low diversity"
    } else if mtld >= 40.0 {
        "Very low diversity"
    } else {
        "Minimal diversity"
    }
}

/// Measure of Textual Lexical Diversity, averaged over both directions.
#[must_use]
pub fn compute_mtld(text: &str) -> MtldReport {
    let tokens = content_tokens(text);
    let token_count = tokens.len();

    if token_count < MTLD_MIN_TOKENS {
        return MtldReport {
            mtld: 0.0,
            mtld_forward: 0.0,
            mtld_backward: 0.0,
            penalty: 0.0,
            token_count,
            label: mtld_label(0.0).to_string(),
        };
    }

    let forward = mtld_direction(token_count, mtld_factors(tokens.iter()));
    let backward = mtld_direction(token_count, mtld_factors(tokens.iter().rev()));
    let mtld = (forward + backward) / 2.0;

    MtldReport {
        mtld: round_f64(mtld, 2),
        mtld_forward: round_f64(forward, 2),
        mtld_backward: round_f64(backward, 2),
        penalty: round_f64(shortfall_pct(mtld, MTLD_TARGET), 2),
        token_count,
        label: mtld_label(mtld).to_string(),
    }
}

fn hapax_label(rate: f64) -> &'static str {
    if rate >= 0.50 {
        "High hapax rate (human-like)"
    } else if rate >= 0.35 {
        "Moderate hapax rate"
    } else if rate >= 0.20 {
        "Low hapax rate (AI-typical)"
    } else {
        "Very low hapax rate"
    }
}

/// Share of word tokens whose type occurs exactly once.
#[must_use]
pub fn compute_hapax_rate(text: &str) -> HapaxRate {
    let tokens = word_tokens(text);
    let total_words = tokens.len();

    if total_words == 0 {
        return HapaxRate {
            rate: 0.0,
            hapax_count: 0,
            total_words: 0,
            label: "Insufficient text".to_string(),
        };
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for token in &tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let hapax_count = counts.values().filter(|c| **c == 1).count();
    let rate = hapax_count as f64 / total_words as f64;

    HapaxRate {
        rate: round_f64(rate, 4),
        hapax_count,
        total_words,
        label: hapax_label(rate).to_string(),
    }
}

/// True for tokens that look like nominalizations (`-tion`, `-ness`, ...).
#[must_use]
pub fn is_abstract_noun(token: &str) -> bool {
    token.chars().count() > ABSTRACT_MIN_CHARS
        && ABSTRACT_SUFFIXES.iter().any(|suffix| token.ends_with(suffix))
}

fn abstraction_label(ratio: f64) -> &'static str {
    if ratio <= 0.15 {
        "Low abstraction (concrete)"
    } else if ratio <= 0.30 {
        "Normal abstraction"
    } else if ratio <= 0.45 {
        "High abstraction (AI-leaning)"
    } else {
        "Very high abstraction (AI-typical)"
    }
}

/// Share of word tokens carrying an abstract-noun suffix.
#[must_use]
pub fn compute_abstract_noun_ratio(text: &str) -> AbstractNounRatio {
    let tokens = word_tokens(text);
    let total_words = tokens.len();

    if total_words == 0 {
        return AbstractNounRatio {
            ratio: 0.0,
            abstract_count: 0,
            total_words: 0,
            abstracts_found: Vec::new(),
            label: "Insufficient text".to_string(),
        };
    }

    let mut abstracts: Vec<String> = tokens.into_iter().filter(|t| is_abstract_noun(t)).collect();
    let abstract_count = abstracts.len();
    let ratio = abstract_count as f64 / total_words as f64;
    abstracts.truncate(ABSTRACTS_FOUND_CAP);

    AbstractNounRatio {
        ratio: safe_ratio(abstract_count, total_words),
        abstract_count,
        total_words,
        abstracts_found: abstracts,
        label: abstraction_label(ratio).to_string(),
    }
}
