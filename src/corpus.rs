//! Corpus pipeline: normalize, tokenize and count a document or a directory.

use crate::error::{CorpusError, Result};
use crate::frequency::{compute_frequency, FrequencyTable};
use crate::nlp::LinguisticPipeline;
use crate::text::{Normalizer, Tokenizer};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of documents for directory-level analysis.
pub trait FileSource {
    /// Lists the documents in `dir`, in the order they are concatenated.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads one document.
    fn read_file(&self, path: &Path) -> Result<String>;
}

/// Reads regular files from the local filesystem, sorted by path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FileSource for FsSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            } else {
                log::warn!("Skipping non-file entry {}", path.display());
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| CorpusError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Normalizes, tokenizes and counts raw text.
pub fn word_frequency(
    pipeline: &dyn LinguisticPipeline,
    text: &str,
    amount: usize,
) -> Result<FrequencyTable> {
    word_frequency_with(pipeline, &Normalizer::default_config(), text, amount)
}

/// [`word_frequency`] with an explicit normalizer.
pub fn word_frequency_with(
    pipeline: &dyn LinguisticPipeline,
    normalizer: &Normalizer,
    text: &str,
    amount: usize,
) -> Result<FrequencyTable> {
    let normalized = normalizer.normalize(text);
    let tokens = Tokenizer::new(pipeline).tokenize(&normalized)?;
    log::debug!("{} tokens from {} bytes of text", tokens.len(), text.len());
    Ok(compute_frequency(&tokens, amount))
}

/// Word frequency over every file in `dir`.
pub fn dir_frequency<P: AsRef<Path>>(
    pipeline: &dyn LinguisticPipeline,
    dir: P,
    amount: usize,
) -> Result<FrequencyTable> {
    dir_frequency_with(pipeline, &FsSource, dir.as_ref(), amount)
}

/// Word frequency over the documents `source` lists for `dir`.
///
/// Documents are joined with single spaces before analysis. The first
/// unreadable document aborts the run.
pub fn dir_frequency_with(
    pipeline: &dyn LinguisticPipeline,
    source: &dyn FileSource,
    dir: &Path,
    amount: usize,
) -> Result<FrequencyTable> {
    let files = source.list_files(dir)?;
    log::info!("Reading {} documents from {}", files.len(), dir.display());

    let documents = files
        .iter()
        .map(|path| source.read_file(path))
        .collect::<Result<Vec<_>>>()?;

    word_frequency(pipeline, &documents.join(" "), amount)
}
