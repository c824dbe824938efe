//! JSON entrypoint for language bindings and RPC dispatchers.
//!
//! ## Response Envelope
//!
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Missing or null keys use the configured defaults
//! - Wrongly typed values return `invalid_settings` (no silent fallback)

use std::path::Path;

use serde_json::Value;

use crate::config::StyloConfig;
use crate::error::{ResponseEnvelope, StyloError};
use crate::settings::{MetricsSettings, ScoringVersion, VerifySettings};
use crate::{compute_metrics_with_discipline, diff, discourse_report, status, verify};

/// Modes accepted by [`run_json`].
pub const MODES: [&str; 7] = [
    "metrics",
    "discourse",
    "verify",
    "diff",
    "status",
    "profiles",
    "version",
];

/// Run a stylo operation with JSON arguments, returning a JSON envelope.
///
/// ```
/// let reply = stylo_core::ffi::run_json("metrics", r#"{"text": "Short text."}"#);
/// assert!(reply.starts_with(r#"{"ok":true"#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    run_json_with_config(mode, args_json, &StyloConfig::default())
}

/// [`run_json`] with defaults taken from `config` instead of the built-ins.
pub fn run_json_with_config(mode: &str, args_json: &str, config: &StyloConfig) -> String {
    match run_json_inner(mode, args_json, config) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => {
            tracing::debug!(mode, code = %err.code, "run_json failed");
            ResponseEnvelope::error(&err).to_json()
        }
    }
}

/// [`run_json_with_config`] with the config read from a TOML file.
///
/// A config file naming `word_frequencies` installs that table before the
/// mode runs. Errors loading the file come back as error envelopes.
pub fn run_json_with_config_file(mode: &str, args_json: &str, config_path: &Path) -> String {
    match load_config(config_path) {
        Ok(config) => run_json_with_config(mode, args_json, &config),
        Err(err) => {
            tracing::debug!(code = %err.code, path = %config_path.display(), "config load failed");
            ResponseEnvelope::error(&err).to_json()
        }
    }
}

fn load_config(path: &Path) -> Result<StyloConfig, StyloError> {
    let config = StyloConfig::from_file(path)?;
    config.install_word_frequencies()?;
    Ok(config)
}

fn run_json_inner(mode: &str, args_json: &str, config: &StyloConfig) -> Result<Value, StyloError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(StyloError::invalid_field("arguments", "a JSON object"));
    }

    match mode {
        "metrics" => {
            let text = parse_required_string(&args, "text")?;
            let settings = parse_metrics_settings(&args, config)?;
            let discipline = parse_string(&args, "discipline", &config.discipline)?;
            let bundle = compute_metrics_with_discipline(&text, &discipline, &settings);
            to_data(&bundle)
        }
        "discourse" => {
            let text = parse_required_string(&args, "text")?;
            let discipline = parse_string(&args, "discipline", &config.discipline)?;
            to_data(&discourse_report(&text, &discipline))
        }
        "verify" => {
            let original = parse_required_string(&args, "original_text")?;
            let humanized = parse_required_string(&args, "humanized_text")?;
            let settings = VerifySettings {
                pattern_score_before: parse_f64(&args, "pattern_score_before", 0.0)?,
                pattern_score_after: parse_f64(&args, "pattern_score_after", 0.0)?,
                ..config.verify_settings()
            };
            to_data(&verify(&original, &humanized, &settings))
        }
        "diff" => {
            let original = parse_required_string(&args, "original_text")?;
            let humanized = parse_required_string(&args, "humanized_text")?;
            to_data(&diff(&original, &humanized))
        }
        "status" => {
            let text = parse_required_string(&args, "text")?;
            let defaults = config.status_settings();
            let discipline = parse_string(&args, "discipline", &defaults.discipline)?;
            let target = parse_f64(&args, "target", defaults.target_composite)?;
            to_data(&status(&text, &discipline, target))
        }
        "profiles" => to_data(stylo_score::discipline_profiles()),
        "version" => Ok(serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "schema_version": stylo_types::STYLO_SCHEMA_VERSION,
        })),
        _ => Err(StyloError::unknown_mode(mode)),
    }
}

/// Serialization failures map to `internal_error`.
fn to_data<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value, StyloError> {
    serde_json::to_value(value).map_err(StyloError::internal)
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

/// Parse a boolean field strictly: missing/null -> default, non-bool -> error.
fn parse_bool(args: &Value, field: &str, default: bool) -> Result<bool, StyloError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_bool()
            .ok_or_else(|| StyloError::invalid_field(field, "a boolean (true or false)")),
    }
}

/// Parse a number field strictly: missing/null -> default, non-number -> error.
fn parse_f64(args: &Value, field: &str, default: f64) -> Result<f64, StyloError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| StyloError::invalid_field(field, "a number")),
    }
}

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, StyloError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| StyloError::invalid_field(field, "a string")),
    }
}

/// Parse a string field that has no default.
fn parse_required_string(args: &Value, field: &str) -> Result<String, StyloError> {
    match args.get(field) {
        None | Some(Value::Null) => Err(StyloError::missing_field(field)),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| StyloError::invalid_field(field, "a string")),
    }
}

fn parse_scoring_version(
    args: &Value,
    default: ScoringVersion,
) -> Result<ScoringVersion, StyloError> {
    match args.get("scoring_version") {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v
            .as_str()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| StyloError::invalid_field("scoring_version", "'v2' or 'v3'")),
    }
}

fn parse_metrics_settings(
    args: &Value,
    config: &StyloConfig,
) -> Result<MetricsSettings, StyloError> {
    let defaults = config.metrics_settings();
    Ok(MetricsSettings {
        pattern_score: parse_f64(args, "pattern_score", defaults.pattern_score)?,
        structural_penalty: parse_f64(args, "structural_penalty", defaults.structural_penalty)?,
        non_native: parse_bool(args, "non_native", defaults.non_native)?,
        scoring_version: parse_scoring_version(args, defaults.scoring_version)?,
    })
}
