//! # stylo-score
//!
//! **Tier 2 (Scoring)**
//!
//! Turns metric results into 0-100 penalties and combines them into the
//! weighted composite. Also owns the discipline calibration table.
//!
//! ## What belongs here
//! * Derived discourse and psycholinguistic penalties
//! * Composite weighting and risk banding per scoring version
//! * Discipline profiles and their targets
//!
//! ## What does NOT belong here
//! * Text measurement (use stylo-metrics)
//! * Workflow orchestration or the JSON boundary (use stylo-core)

#![forbid(unsafe_code)]

pub mod composite;
pub mod discipline;
pub mod penalty;

pub use composite::{compute_composite_score, risk_for_score};
pub use discipline::{
    DEFAULT_DISCIPLINE, default_profile, discipline_profile, discipline_profiles,
    discipline_targets, is_default,
};
pub use penalty::{
    calibrated_penalty, discourse_penalty, excess_penalty, psycholinguistic_penalty,
    shortfall_penalty,
};
