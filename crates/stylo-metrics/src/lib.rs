//! # stylo-metrics
//!
//! **Tier 2 (Metric Functions)**
//!
//! The individual stylometric measurements. Every function is pure and
//! total: degenerate input returns zeros and a fixed label, never a panic.
//!
//! ## What belongs here
//! * Sentence rhythm (burstiness, Fano factor, length range)
//! * Vocabulary (MTLD, hapax rate, abstract nouns)
//! * Paragraph shape (opener diversity, length variance)
//! * Discourse markers (hedges, contractions, connectives, pronouns, questions)
//! * Surprisal proxy and autocorrelation
//!
//! ## What does NOT belong here
//! * Penalty aggregation or composite scoring (use stylo-score)
//! * Multi-metric orchestration (use stylo-core)

#![forbid(unsafe_code)]

pub mod burstiness;
pub mod discourse;
pub mod lexical;
pub mod paragraph;
pub mod surprisal;

pub use burstiness::{compute_burstiness, compute_fano_factor, compute_sentence_length_range};
pub use discourse::{
    compute_connective_diversity, compute_contraction_density, compute_hedge_density,
    compute_pronoun_density, compute_question_ratio, find_markers, MarkerSet,
};
pub use lexical::{compute_abstract_noun_ratio, compute_hapax_rate, compute_mtld, is_abstract_noun};
pub use paragraph::{compute_paragraph_length_variance, compute_paragraph_opener_diversity};
pub use surprisal::{
    compute_surprisal_autocorrelation, compute_surprisal_autocorrelation_with,
    compute_surprisal_proxy, compute_surprisal_proxy_with, word_surprisals,
};
