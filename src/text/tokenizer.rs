//! Tokenization of normalized text into lemmas.

use crate::error::Result;
use crate::nlp::{AnalyzedToken, LinguisticPipeline, PRONOUN_LEMMA};

/// Adapter that turns normalized text into a filtered lemma sequence.
///
/// The tokenizer borrows the pipeline; the caller owns its lifecycle and may
/// share one pipeline between many tokenizers.
#[derive(Clone, Copy)]
pub struct Tokenizer<'p> {
    pipeline: &'p dyn LinguisticPipeline,
}

impl<'p> Tokenizer<'p> {
    /// Creates a tokenizer backed by `pipeline`.
    pub fn new(pipeline: &'p dyn LinguisticPipeline) -> Self {
        Self { pipeline }
    }

    /// Tokenizes normalized text into lemmas.
    ///
    /// Pronoun placeholders and stop-words are dropped, as are lemmas of at
    /// most one character. Order follows the source text.
    pub fn tokenize(&self, normalized: &str) -> Result<Vec<String>> {
        let analyzed = self.pipeline.analyze(normalized)?;
        Ok(filter_lemmas(analyzed))
    }
}

/// Tokenizes normalized text with `pipeline`.
pub fn tokenize(pipeline: &dyn LinguisticPipeline, normalized: &str) -> Result<Vec<String>> {
    Tokenizer::new(pipeline).tokenize(normalized)
}

fn filter_lemmas(tokens: Vec<AnalyzedToken>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| t.lemma != PRONOUN_LEMMA && !t.is_stop)
        .map(|t| t.lemma.trim().to_string())
        .filter(|lemma| lemma.chars().count() > 1)
        .collect()
}
