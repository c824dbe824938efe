//! Config file loading and word-frequency installation.
//!
//! Lives in its own test binary so installing the process-wide table does
//! not leak into other tests.

use std::fs;

use stylo_core::config::{ConfigError, StyloConfig};
use stylo_lexicon::frequency;
use tempfile::TempDir;

#[test]
fn from_file_reads_and_resolves_relative_table() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stylo.toml");
    fs::write(
        &path,
        "discipline = \"psychology\"\nword_frequencies = \"freq.json\"\n",
    )
    .unwrap();

    let config = StyloConfig::from_file(&path).unwrap();
    assert_eq!(config.discipline, "psychology");
    assert_eq!(config.word_frequencies, Some(dir.path().join("freq.json")));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = StyloConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn invalid_scoring_version_in_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stylo.toml");
    fs::write(&path, "scoring_version = \"v7\"\n").unwrap();
    assert!(matches!(
        StyloConfig::from_file(&path),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn configured_table_replaces_bundled_one() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("freq.json");
    fs::write(&table, r#"{"zyzzyva": 7.0, "the": 7.7}"#).unwrap();

    let bad = StyloConfig {
        word_frequencies: Some(dir.path().join("missing.json")),
        ..StyloConfig::default()
    };
    assert!(matches!(
        bad.install_word_frequencies(),
        Err(ConfigError::WordFrequencies(_))
    ));

    let config = StyloConfig {
        word_frequencies: Some(table),
        ..StyloConfig::default()
    };
    assert!(config.install_word_frequencies().unwrap());
    assert_eq!(frequency::global().len(), 2);
    assert_eq!(frequency::global().get("zyzzyva"), Some(7.0));

    // already installed
    assert!(!config.install_word_frequencies().unwrap());
}
