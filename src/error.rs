//! Error types for corpus analysis.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for corpustat operations.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The linguistic pipeline or a configuration value is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be read.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed input to a table operation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The vectorizer rejected its input.
    #[error("Vectorization error: {0}")]
    Vectorization(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A data frame operation failed.
    #[error("Table error: {0}")]
    Table(String),

    /// The spreadsheet service failed to deliver records.
    #[error("Sheet error: {0}")]
    Sheet(String),
}

/// Result type alias for corpustat operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

impl From<serde_json::Error> for CorpusError {
    fn from(err: serde_json::Error) -> Self {
        CorpusError::Serialization(err.to_string())
    }
}

impl From<polars::prelude::PolarsError> for CorpusError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        CorpusError::Table(err.to_string())
    }
}

impl From<linfa_preprocessing::PreprocessingError> for CorpusError {
    fn from(err: linfa_preprocessing::PreprocessingError) -> Self {
        CorpusError::Vectorization(err.to_string())
    }
}
