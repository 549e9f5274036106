//! Configuration for corpus analysis.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text normalization configuration.
    pub text: TextConfig,

    /// Linguistic pipeline configuration.
    pub pipeline: PipelineConfig,

    /// Word frequency configuration.
    pub frequency: FrequencyConfig,

    /// Table derivation configuration.
    pub table: TableConfig,

    /// Survey sheet configuration.
    pub sheet: SheetConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Sections missing from the file keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Text normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Apply Unicode composition (NFC) before lower-casing.
    /// Default: true.
    pub unicode_normalize: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            unicode_normalize: true,
        }
    }
}

/// Configuration of the default linguistic pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language code or name for the stemmer and stop-word list.
    /// Default: "en".
    pub language: String,

    /// Reduce words to their stem as the lemma.
    /// Default: true.
    pub stem: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            stem: true,
        }
    }
}

/// Word frequency configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Number of most frequent tokens to report.
    /// Default: 50.
    pub amount: usize,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            amount: crate::DEFAULT_AMOUNT,
        }
    }
}

/// Which columns of a record table are identifying metadata.
///
/// Metadata columns are excluded from the combined text of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRoles {
    /// The first `n` columns are metadata.
    Leading(usize),
    /// The named columns are metadata.
    Named(Vec<String>),
}

impl Default for ColumnRoles {
    fn default() -> Self {
        ColumnRoles::Leading(2)
    }
}

/// Table derivation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Metadata columns excluded from the combined text.
    /// Default: the first two columns.
    pub metadata: ColumnRoles,
}

/// Survey sheet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Column renames applied after loading, as (from, to) pairs.
    /// Default: `Timestamp` → `timestamp`, `do you want to help` → `help`.
    pub column_renames: Vec<(String, String)>,

    /// Column (after renaming) coerced to a date-time.
    /// Default: "timestamp".
    pub timestamp_column: String,

    /// `chrono` formats tried in order when parsing timestamps.
    pub timestamp_formats: Vec<String>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            column_renames: vec![
                ("Timestamp".to_string(), "timestamp".to_string()),
                ("do you want to help".to_string(), "help".to_string()),
            ],
            timestamp_column: "timestamp".to_string(),
            timestamp_formats: vec![
                "%m/%d/%Y %H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.frequency.amount, 50);
        assert_eq!(config.table.metadata, ColumnRoles::Leading(2));
        assert_eq!(config.pipeline.language, "en");
        assert_eq!(config.sheet.timestamp_column, "timestamp");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "frequency": { "amount": 10 }, "table": { "metadata": { "named": ["id", "student"] } } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.frequency.amount, 10);
        assert_eq!(
            config.table.metadata,
            ColumnRoles::Named(vec!["id".to_string(), "student".to_string()])
        );
        assert!(config.pipeline.stem);
        assert_eq!(config.sheet.column_renames.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "pipeline": { "language": "german" } }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.pipeline.language, "german");
        assert_eq!(config.frequency.amount, 50);
    }
}
