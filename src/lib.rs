//! # corpustat - descriptive statistics for text corpora
//!
//! corpustat cleans and tokenizes documents and reports what they contain:
//! word frequencies, sentences, part-of-speech tags, named entities, noun
//! phrases, and count or TF-IDF vectors. Record batches and survey responses
//! exported from a spreadsheet are loaded into `polars` data frames, combined
//! into per-row text and ranked per group.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use corpustat::{word_frequency, SnowballPipeline};
//!
//! // Build the linguistic pipeline once and pass it to every operation
//! let pipeline = SnowballPipeline::english()?;
//!
//! let table = word_frequency(&pipeline, "The 3 cats ran, fast!", 50)?;
//! for entry in &table {
//!     println!("{} {}", entry.token, entry.count);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - normalization, lemma tokenization, sentence splitting
//! - [`nlp`] - the [`LinguisticPipeline`] trait and its default implementation
//! - [`frequency`] - top-N token counts
//! - [`corpus`] - document and directory pipelines
//! - [`table`] - record batches as data frames, derived text columns, per-group frequencies
//! - [`vectorize`] - count and TF-IDF matrices
//! - [`sheet`] - survey loading from spreadsheet exports

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod nlp;
pub mod sheet;
pub mod table;
pub mod text;
pub mod vectorize;

// Re-export commonly used types
pub use config::{ColumnRoles, Config, FrequencyConfig, PipelineConfig, SheetConfig, TableConfig, TextConfig};
pub use corpus::{dir_frequency, dir_frequency_with, word_frequency, FileSource, FsSource};
pub use error::{CorpusError, Result};
pub use frequency::{compute_frequency, FrequencyEntry, FrequencyTable};
pub use nlp::{AnalyzedToken, Entity, LinguisticPipeline, PosTag, SnowballPipeline};
pub use sheet::{load_survey, CsvExportService, SheetService};
pub use table::{frequency_by_group, import_records, preprocess, GroupFrequencyRow, Record};
pub use text::{normalize, tokenize, Normalizer, Tokenizer};
pub use vectorize::{compute_tfidf, count_vectorize, CountMatrix, TfIdfMatrix};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of ranked words.
pub const DEFAULT_AMOUNT: usize = 50;
