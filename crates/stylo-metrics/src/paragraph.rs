//! Paragraph-level shape: opener diversity and length variance.

use std::collections::BTreeSet;

use stylo_math::{
    coefficient_of_variation, counts_to_f64, mean, population_std_dev, round_f64, shortfall_pct,
};
use stylo_text::{paragraph_opener, split_paragraphs, terminal_punctuation_count, word_count};
use stylo_types::{OpenerDiversity, ParagraphLengthVariance};

/// Opener diversity at which the structural penalty reaches zero.
pub const OPENER_DIVERSITY_TARGET: f64 = 0.70;

fn opener_label(diversity: f64) -> &'static str {
    if diversity > 0.80 {
        "High diversity"
    } else if diversity >= 0.70 {
        "Normal diversity"
    } else if diversity >= 0.50 {
        "Low diversity"
    } else if diversity >= 0.30 {
        "Very low diversity"
    } else {
        "Minimal diversity"
    }
}

/// Unique three-word openers over paragraphs holding two or more sentences.
#[must_use]
pub fn compute_paragraph_opener_diversity(text: &str) -> OpenerDiversity {
    let openers: Vec<String> = split_paragraphs(text)
        .into_iter()
        .filter(|p| terminal_punctuation_count(p) >= 2)
        .map(paragraph_opener)
        .collect();
    let total_paragraphs = openers.len();

    if total_paragraphs <= 1 {
        return OpenerDiversity {
            diversity: 1.0,
            unique_openers: total_paragraphs,
            total_paragraphs,
            penalty: 0.0,
            openers,
            label: opener_label(1.0).to_string(),
        };
    }

    let unique_openers = openers.iter().collect::<BTreeSet<_>>().len();
    let diversity = unique_openers as f64 / total_paragraphs as f64;

    OpenerDiversity {
        diversity: round_f64(diversity, 4),
        unique_openers,
        total_paragraphs,
        penalty: round_f64(shortfall_pct(diversity, OPENER_DIVERSITY_TARGET), 2),
        openers,
        label: opener_label(diversity).to_string(),
    }
}

fn variance_label(cv: f64) -> &'static str {
    if cv >= 0.50 {
        "High variance (human-like)"
    } else if cv >= 0.40 {
        "Normal variance"
    } else if cv >= 0.25 {
        "Low variance (AI-typical)"
    } else {
        "Very low variance"
    }
}

/// Coefficient of variation of paragraph word counts.
#[must_use]
pub fn compute_paragraph_length_variance(text: &str) -> ParagraphLengthVariance {
    let paragraphs = split_paragraphs(text);
    let lengths: Vec<usize> = paragraphs.iter().map(|p| word_count(p)).collect();
    let paragraph_count = paragraphs.len();

    let sentinel = |mean_length: f64, label: &str, lengths: Vec<usize>| ParagraphLengthVariance {
        cv: 0.0,
        mean_length,
        std_dev: 0.0,
        paragraph_count,
        paragraph_lengths: lengths,
        label: label.to_string(),
    };

    if paragraph_count < 2 {
        let first = lengths.first().map_or(0.0, |l| *l as f64);
        return sentinel(first, "Insufficient paragraphs", lengths);
    }

    let samples = counts_to_f64(&lengths);
    let mean_length = mean(&samples);
    if mean_length == 0.0 {
        return sentinel(0.0, "Insufficient text", lengths);
    }

    let cv = coefficient_of_variation(&samples);
    ParagraphLengthVariance {
        cv: round_f64(cv, 4),
        mean_length: round_f64(mean_length, 2),
        std_dev: round_f64(population_std_dev(&samples), 2),
        paragraph_count,
        paragraph_lengths: lengths,
        label: variance_label(cv).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_paragraph_is_fully_diverse() {
        let report = compute_paragraph_opener_diversity("One sentence here. Another one there.");
        assert_eq!(report.diversity, 1.0);
        assert_eq!(report.total_paragraphs, 1);
        assert_eq!(report.openers, vec!["one sentence here"]);
        assert_eq!(report.label, "High diversity");
    }

    #[test]
    fn single_sentence_paragraphs_are_ignored() {
        let text = "Just one sentence.\n\nAlso just one.\n\nAnd one more here.";
        let report = compute_paragraph_opener_diversity(text);
        assert_eq!(report.total_paragraphs, 0);
        assert!(report.openers.is_empty());
        assert_eq!(report.diversity, 1.0);
    }

    #[test]
    fn repeated_openers_are_penalized() {
        let para = "In this study we look. It is fine.";
        let text = [para, para, para, "A different start here. It works."].join("\n\n");
        let report = compute_paragraph_opener_diversity(&text);
        assert_eq!(report.total_paragraphs, 4);
        assert_eq!(report.unique_openers, 2);
        assert_eq!(report.diversity, 0.5);
        // (0.70 - 0.50) / 0.70 * 100
        assert_eq!(report.penalty, 28.57);
        assert_eq!(report.label, "Low diversity");
    }

    #[test]
    fn paragraph_variance_needs_two_paragraphs() {
        let report = compute_paragraph_length_variance("Only one paragraph with six words.");
        assert_eq!(report.label, "Insufficient paragraphs");
        assert_eq!(report.mean_length, 6.0);
        assert_eq!(report.paragraph_count, 1);

        let empty = compute_paragraph_length_variance("");
        assert_eq!(empty.mean_length, 0.0);
        assert!(empty.paragraph_lengths.is_empty());
    }

    #[test]
    fn paragraph_variance_measures_spread() {
        // lengths 2 and 6: mean 4, std 2, cv 0.5
        let text = "Two words\n\nSix words are in this one";
        let report = compute_paragraph_length_variance(text);
        assert_eq!(report.paragraph_lengths, vec![2, 6]);
        assert_eq!(report.cv, 0.5);
        assert_eq!(report.mean_length, 4.0);
        assert_eq!(report.std_dev, 2.0);
        assert_eq!(report.label, "High variance (human-like)");
    }

    #[test]
    fn equal_paragraphs_have_very_low_variance() {
        let text = "a b c\n\nd e f\n\ng h i";
        let report = compute_paragraph_length_variance(text);
        assert_eq!(report.cv, 0.0);
        assert_eq!(report.label, "Very low variance");
    }
}
