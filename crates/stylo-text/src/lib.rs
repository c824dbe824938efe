//! # stylo-text
//!
//! **Tier 1 (Tokenization)**
//!
//! Splits raw text into the units every stylometric metric counts:
//! sentences, word tokens and paragraphs.
//!
//! ## What belongs here
//! * Sentence splitting with abbreviation/decimal/parenthesis protection
//! * Word tokenization and the two token filters
//! * Paragraph splitting and paragraph openers
//!
//! ## What does NOT belong here
//! * Word lists or frequency data (use stylo-lexicon)
//! * Metric formulas (use stylo-metrics)

#![forbid(unsafe_code)]

mod sentence;

use std::sync::LazyLock;

use regex::Regex;

pub use sentence::{MIN_SENTENCE_WORDS, sentence_lengths, split_sentences};

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Number of whitespace-delimited substrings.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip leading and trailing ASCII punctuation.
#[must_use]
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

fn tokens_where(text: &str, keep: impl Fn(char) -> bool) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(strip_punctuation)
        .filter(|t| t.chars().any(&keep))
        .map(str::to_string)
        .collect()
}

/// Lowercased, punctuation-stripped tokens holding at least one alphanumeric char.
#[must_use]
pub fn content_tokens(text: &str) -> Vec<String> {
    tokens_where(text, char::is_alphanumeric)
}

/// Lowercased, punctuation-stripped tokens holding at least one alphabetic char.
#[must_use]
pub fn word_tokens(text: &str) -> Vec<String> {
    tokens_where(text, char::is_alphabetic)
}

/// Paragraphs separated by blank lines, trimmed, empties dropped.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// First three words of a paragraph, lowercased and punctuation-stripped.
#[must_use]
pub fn paragraph_opener(paragraph: &str) -> String {
    paragraph
        .split_whitespace()
        .take(3)
        .map(|w| strip_punctuation(&w.to_lowercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Occurrences of `.`, `!` and `?`.
#[must_use]
pub fn terminal_punctuation_count(paragraph: &str) -> usize {
    paragraph
        .chars()
        .filter(|c| matches!(c, '.' | '!' | '?'))
        .count()
}
