//! Word-frequency table (word -> log10 frequency on the Zipf scale).
//!
//! The process-wide table is built at most once. It comes from the JSON
//! file installed with [`init_from_path`] if that ran first, otherwise from
//! the bundled data. Unreadable or corrupt data yields an empty table.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};

const BUNDLED_FREQUENCIES: &str = include_str!("../data/word_frequencies.json");

static GLOBAL_TABLE: OnceLock<WordFrequencyTable> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    entries: HashMap<String, f64>,
}

impl WordFrequencyTable {
    pub fn new(entries: HashMap<String, f64>) -> Self {
        Self { entries }
    }

    /// Parse a JSON object of `word -> log10 frequency`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: HashMap<String, f64> =
            serde_json::from_str(json).context("word frequency data is not a word -> number map")?;
        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for WordFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a frequency table from a JSON file.
pub fn load_from_path(path: &Path) -> Result<WordFrequencyTable> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word frequencies from {}", path.display()))?;
    WordFrequencyTable::from_json(&raw)
        .with_context(|| format!("Failed to parse word frequencies from {}", path.display()))
}

/// Install the table at `path` as the process-wide table.
///
/// Returns `Ok(false)` when a table was already in place; the existing
/// table is kept.
pub fn init_from_path(path: &Path) -> Result<bool> {
    if GLOBAL_TABLE.get().is_some() {
        return Ok(false);
    }
    let table = load_from_path(path)?;
    let entries = table.len();
    let installed = GLOBAL_TABLE.set(table).is_ok();
    if installed {
        tracing::debug!(entries, source = %path.display(), "word frequency table loaded");
    }
    Ok(installed)
}

/// The process-wide table, loading the bundled data on first use.
pub fn global() -> &'static WordFrequencyTable {
    GLOBAL_TABLE.get_or_init(bundled)
}

/// Parse the bundled data, falling back to an empty table.
pub fn bundled() -> WordFrequencyTable {
    parse_or_empty(BUNDLED_FREQUENCIES, "bundled")
}

fn parse_or_empty(json: &str, source: &str) -> WordFrequencyTable {
    match WordFrequencyTable::from_json(json) {
        Ok(table) => {
            tracing::debug!(entries = table.len(), source, "word frequency table loaded");
            table
        }
        Err(err) => {
            tracing::warn!(source, error = %err, "word frequency data unusable; using empty table");
            WordFrequencyTable::default()
        }
    }
}
