//! # stylo-lexicon
//!
//! **Tier 1 (Lexical Data)**
//!
//! Fixed word lists that the discourse metrics match against, and the
//! word-frequency table behind the surprisal proxy.
//!
//! ## What belongs here
//! * Hedge, connective and first-person pronoun inventories
//! * Abstract-noun suffixes
//! * Word-frequency table loading and process-wide access
//!
//! ## What does NOT belong here
//! * Matching or counting logic (use stylo-metrics)
//! * Tokenization (use stylo-text)

#![forbid(unsafe_code)]

pub mod frequency;

pub use frequency::WordFrequencyTable;

/// Multi-word hedges, matched as plain substrings before [`HEDGE_WORDS`].
pub const HEDGE_PHRASES: &[&str] = &["it is possible", "to some extent", "in some cases"];

/// Single-word hedges, matched on word boundaries.
pub const HEDGE_WORDS: &[&str] = &[
    "may", "might", "could", "would", "suggests", "appears", "seems", "possibly", "perhaps",
    "likely",
];

/// Multi-word connectives, matched as plain substrings before [`CONNECTIVE_WORDS`].
pub const CONNECTIVE_PHRASES: &[&str] = &[
    "in contrast",
    "on the other hand",
    "as a result",
    "in addition",
    "for instance",
    "in particular",
    "for example",
    "in other words",
    "on the contrary",
    "by contrast",
    "in fact",
    "as such",
    "to this end",
    "in turn",
    "at the same time",
    "in this regard",
    "to that end",
    "in this context",
    "with respect to",
    "in light of",
];

/// Single-word connectives, matched on word boundaries.
pub const CONNECTIVE_WORDS: &[&str] = &[
    "furthermore", "moreover", "however", "nevertheless", "consequently",
    "therefore", "additionally", "similarly", "conversely", "meanwhile",
    "nonetheless", "alternatively", "specifically", "notably", "indeed",
    "accordingly", "likewise", "thus", "hence", "yet",
    "still", "instead", "otherwise", "subsequently", "formerly",
    "simultaneously", "ultimately", "initially", "previously", "apparently",
    "certainly", "evidently", "presumably", "undoubtedly", "arguably",
    "admittedly", "frankly", "importantly", "significantly", "interestingly",
    "surprisingly", "ironically", "paradoxically", "incidentally", "namely",
    "essentially", "fundamentally", "primarily", "secondarily", "thirdly",
    "firstly", "secondly", "finally", "lastly", "overall",
    "broadly", "generally", "particularly", "especially", "chiefly",
    "mainly", "largely", "mostly", "partly", "wholly",
    "altogether", "equally", "comparatively", "relatively", "increasingly",
    "correspondingly", "proportionally", "respectively", "collectively",
    "individually", "mutually", "jointly", "separately", "independently",
];

/// First-person forms, matched case-insensitively on word boundaries.
pub const FIRST_PERSON_PRONOUNS: &[&str] =
    &["i", "we", "my", "our", "me", "us", "myself", "ourselves"];

/// Nominalization endings treated as abstract nouns.
pub const ABSTRACT_SUFFIXES: &[&str] =
    &["tion", "sion", "ness", "ity", "ment", "ance", "ence", "ism", "ship"];

/// Tokens must be longer than this many chars to count as abstract nouns.
pub const ABSTRACT_MIN_CHARS: usize = 4;

/// Contraction endings recognized after an apostrophe.
pub const CONTRACTION_SUFFIXES: &[&str] = &["t", "s", "re", "ve", "ll", "d", "m"];
