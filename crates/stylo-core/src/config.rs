//! TOML configuration (`stylo.toml`).
//!
//! ```toml
//! scoring_version = "v3"
//! non_native = false
//! discipline = "stem"
//! target_composite = 25.0
//! pass_threshold = 30.0
//! word_frequencies = "data/frequencies.json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::{
    DEFAULT_TARGET_COMPOSITE, MetricsSettings, ScoringVersion, StatusSettings, VerifySettings,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': expected {expected}")]
    InvalidValue { field: String, expected: String },

    #[error("Failed to load word frequencies: {0:#}")]
    WordFrequencies(anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyloConfig {
    pub scoring_version: ScoringVersion,
    pub non_native: bool,
    pub discipline: String,
    /// Readiness target used by `status`.
    pub target_composite: f64,
    /// Composite ceiling used by `verify`.
    pub pass_threshold: f64,
    /// JSON word-frequency table replacing the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_frequencies: Option<PathBuf>,
}

impl Default for StyloConfig {
    fn default() -> Self {
        Self {
            scoring_version: ScoringVersion::default(),
            non_native: false,
            discipline: stylo_score::DEFAULT_DISCIPLINE.to_string(),
            target_composite: DEFAULT_TARGET_COMPOSITE,
            pass_threshold: DEFAULT_TARGET_COMPOSITE,
            word_frequencies: None,
        }
    }
}

impl StyloConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A relative `word_frequencies` path is resolved
    /// against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        if let (Some(freq), Some(dir)) = (config.word_frequencies.as_mut(), path.parent())
            && freq.is_relative()
        {
            *freq = dir.join(&*freq);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("target_composite", self.target_composite),
            ("pass_threshold", self.pass_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    expected: "a number between 0 and 100".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn metrics_settings(&self) -> MetricsSettings {
        MetricsSettings {
            non_native: self.non_native,
            scoring_version: self.scoring_version,
            ..MetricsSettings::default()
        }
    }

    pub fn verify_settings(&self) -> VerifySettings {
        VerifySettings {
            pass_threshold: self.pass_threshold,
            ..VerifySettings::default()
        }
    }

    pub fn status_settings(&self) -> StatusSettings {
        StatusSettings {
            discipline: self.discipline.clone(),
            target_composite: self.target_composite,
        }
    }

    /// Install the configured frequency table as the process-wide one.
    ///
    /// Returns `Ok(false)` when nothing is configured or a table is
    /// already in use.
    pub fn install_word_frequencies(&self) -> Result<bool, ConfigError> {
        match &self.word_frequencies {
            None => Ok(false),
            Some(path) => stylo_lexicon::frequency::init_from_path(path)
                .map_err(ConfigError::WordFrequencies),
        }
    }
}
