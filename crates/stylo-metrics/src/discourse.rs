//! Discourse markers: hedges, contractions, connectives, first-person
//! pronouns and questions.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use stylo_lexicon::{
    CONNECTIVE_PHRASES, CONNECTIVE_WORDS, CONTRACTION_SUFFIXES, FIRST_PERSON_PRONOUNS,
    HEDGE_PHRASES, HEDGE_WORDS,
};
use stylo_math::round_f64;
use stylo_text::split_sentences;
use stylo_types::{
    ConnectiveDiversity, ContractionDensity, HedgeDensity, PronounDensity, QuestionRatio,
};

static CONTRACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b\w+'(?:{})\b", CONTRACTION_SUFFIXES.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

static FIRST_PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b(?:{})\b", FIRST_PERSON_PRONOUNS.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

/// Sentence count used as a per-sentence denominator; never zero.
fn sentence_denominator(text: &str) -> usize {
    split_sentences(text).len().max(1)
}

fn per_sentence(count: usize, sentences: usize) -> f64 {
    round_f64(count as f64 / sentences as f64, 4)
}

/// Marker phrases matched by substring and marker words matched on word
/// boundaries.
#[derive(Debug)]
pub struct MarkerSet<'a> {
    phrases: &'a [&'a str],
    words: Vec<(&'a str, Regex)>,
}

impl<'a> MarkerSet<'a> {
    pub fn new(phrases: &'a [&'a str], words: &'a [&'a str]) -> Result<Self, regex::Error> {
        let words = words
            .iter()
            .map(|word| {
                Regex::new(&format!(r"\b{}\b", regex::escape(word))).map(|re| (*word, re))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { phrases, words })
    }

    /// Every marker occurrence in `text_lower`: phrases first, then words,
    /// each in list order.
    ///
    /// No overlap suppression is applied, so a listed word inside a matched
    /// phrase is reported twice.
    #[must_use]
    pub fn find(&self, text_lower: &str) -> Vec<String> {
        let phrase_hits = self
            .phrases
            .iter()
            .map(|phrase| (*phrase, text_lower.matches(phrase).count()));
        let word_hits = self
            .words
            .iter()
            .map(|(word, re)| (*word, re.find_iter(text_lower).count()));

        phrase_hits
            .chain(word_hits)
            .flat_map(|(marker, count)| std::iter::repeat_n(marker.to_string(), count))
            .collect()
    }
}

static HEDGE_MARKERS: LazyLock<MarkerSet<'static>> =
    LazyLock::new(|| MarkerSet::new(HEDGE_PHRASES, HEDGE_WORDS).expect("valid regex"));

static CONNECTIVE_MARKERS: LazyLock<MarkerSet<'static>> = LazyLock::new(|| {
    MarkerSet::new(CONNECTIVE_PHRASES, CONNECTIVE_WORDS).expect("valid regex")
});

/// One-off [`MarkerSet::find`] over ad hoc marker lists.
pub fn find_markers(
    text_lower: &str,
    phrases: &[&str],
    words: &[&str],
) -> Result<Vec<String>, regex::Error> {
    Ok(MarkerSet::new(phrases, words)?.find(text_lower))
}

/// Hedging phrases and words per sentence.
#[must_use]
pub fn compute_hedge_density(text: &str) -> HedgeDensity {
    let sentence_count = sentence_denominator(text);
    let hedges_found = HEDGE_MARKERS.find(&text.to_lowercase());
    let hedge_count = hedges_found.len();

    HedgeDensity {
        density: per_sentence(hedge_count, sentence_count),
        hedge_count,
        sentence_count,
        hedges_found,
    }
}

/// Contractions (`don't`, `we're`, ...) per sentence.
#[must_use]
pub fn compute_contraction_density(text: &str) -> ContractionDensity {
    let sentence_count = sentence_denominator(text);
    let contractions_found: Vec<String> = CONTRACTION_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let contraction_count = contractions_found.len();

    ContractionDensity {
        density: per_sentence(contraction_count, sentence_count),
        contraction_count,
        sentence_count,
        contractions_found,
    }
}

fn connective_label(diversity: f64) -> &'static str {
    if diversity >= 0.70 {
        "High connective diversity"
    } else if diversity >= 0.50 {
        "Moderate connective diversity"
    } else if diversity >= 0.30 {
        "Low connective diversity (AI-typical)"
    } else {
        "Very low connective diversity"
    }
}

/// Unique connectives over all connective occurrences.
#[must_use]
pub fn compute_connective_diversity(text: &str) -> ConnectiveDiversity {
    let found = CONNECTIVE_MARKERS.find(&text.to_lowercase());
    let total_count = found.len();

    if total_count == 0 {
        return ConnectiveDiversity {
            diversity: 0.0,
            unique_count: 0,
            total_count: 0,
            connectives_found: found,
            label: "No connectives found".to_string(),
        };
    }

    let unique_count = found.iter().collect::<BTreeSet<_>>().len();
    let diversity = unique_count as f64 / total_count as f64;

    ConnectiveDiversity {
        diversity: round_f64(diversity, 4),
        unique_count,
        total_count,
        connectives_found: found,
        label: connective_label(diversity).to_string(),
    }
}

/// First-person pronouns per sentence, keeping their original casing.
#[must_use]
pub fn compute_pronoun_density(text: &str) -> PronounDensity {
    let sentence_count = sentence_denominator(text);
    let pronouns_found: Vec<String> = FIRST_PERSON_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let pronoun_count = pronouns_found.len();

    PronounDensity {
        density: per_sentence(pronoun_count, sentence_count),
        pronoun_count,
        sentence_count,
        pronouns_found,
    }
}

/// Share of sentences ending in a question mark.
#[must_use]
pub fn compute_question_ratio(text: &str) -> QuestionRatio {
    let sentences = split_sentences(text);
    let sentence_count = sentences.len().max(1);
    let question_count = sentences
        .iter()
        .filter(|s| s.trim_end().ends_with('?'))
        .count();

    QuestionRatio {
        ratio: per_sentence(question_count, sentence_count),
        question_count,
        sentence_count,
    }
}
