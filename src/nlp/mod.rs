//! Linguistic pipeline abstraction and the analyses built on it.
//!
//! A [`LinguisticPipeline`] segments text into words, lemmatizes them and
//! flags stop-words; richer pipelines also tag parts of speech and recognize
//! named entities. Pipelines are constructed by the caller and passed by
//! reference into every operation, so a test double can stand in for a
//! model-backed implementation.

mod chunker;
mod snowball;
mod stopwords;

pub use chunker::NounChunker;
pub use snowball::SnowballPipeline;
pub use stopwords::StopwordFilter;

use crate::error::{CorpusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lemma a pipeline assigns to pronouns instead of a dictionary form.
pub const PRONOUN_LEMMA: &str = "-PRON-";

/// Universal part-of-speech tags.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    CoordinatingConjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    SubordinatingConjunction,
    Symbol,
    Verb,
    Other,
    Space,
}

impl PosTag {
    /// Returns the universal tag label, e.g. `NOUN`.
    pub fn label(&self) -> &'static str {
        match self {
            PosTag::Adjective => "ADJ",
            PosTag::Adposition => "ADP",
            PosTag::Adverb => "ADV",
            PosTag::Auxiliary => "AUX",
            PosTag::CoordinatingConjunction => "CCONJ",
            PosTag::Determiner => "DET",
            PosTag::Interjection => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Pronoun => "PRON",
            PosTag::ProperNoun => "PROPN",
            PosTag::Punctuation => "PUNCT",
            PosTag::SubordinatingConjunction => "SCONJ",
            PosTag::Symbol => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Other => "X",
            PosTag::Space => "SPACE",
        }
    }

    /// Whether the tag heads a noun phrase.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PosTag {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match s.to_ascii_uppercase().as_str() {
            "ADJ" => PosTag::Adjective,
            "ADP" => PosTag::Adposition,
            "ADV" => PosTag::Adverb,
            "AUX" => PosTag::Auxiliary,
            "CCONJ" | "CONJ" => PosTag::CoordinatingConjunction,
            "DET" => PosTag::Determiner,
            "INTJ" => PosTag::Interjection,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PRON" => PosTag::Pronoun,
            "PROPN" => PosTag::ProperNoun,
            "PUNCT" => PosTag::Punctuation,
            "SCONJ" => PosTag::SubordinatingConjunction,
            "SYM" => PosTag::Symbol,
            "VERB" => PosTag::Verb,
            "X" => PosTag::Other,
            "SPACE" => PosTag::Space,
            other => {
                return Err(CorpusError::Validation(format!(
                    "unknown part-of-speech tag: {}",
                    other
                )))
            }
        };
        Ok(tag)
    }
}

/// One word as analyzed by a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    /// Surface text.
    pub text: String,
    /// Dictionary form, or [`PRONOUN_LEMMA`].
    pub lemma: String,
    /// Part-of-speech tag, if the pipeline tags.
    pub pos: Option<PosTag>,
    /// Whether the word is a stop-word.
    pub is_stop: bool,
    /// Index of the sentence containing the word.
    pub sentence: usize,
}

/// A named entity span and its label (e.g. `ORG`, `GPE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity span text.
    pub text: String,
    /// Entity type label.
    pub label: String,
}

/// An external linguistic pipeline.
///
/// Only [`analyze`](LinguisticPipeline::analyze) and
/// [`sentences`](LinguisticPipeline::sentences) are required. The remaining
/// capabilities fail with [`CorpusError::Config`] when the pipeline lacks the
/// component behind them.
pub trait LinguisticPipeline: Send + Sync {
    /// Short name used in log and error messages.
    fn name(&self) -> &str;

    /// Segments text into words with lemma, stop-word flag and (optionally) POS tag.
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>>;

    /// Splits text into sentences.
    fn sentences(&self, text: &str) -> Result<Vec<String>>;

    /// Tags every word with its part of speech.
    fn pos_tags(&self, text: &str) -> Result<Vec<(String, PosTag)>> {
        self.analyze(text)?
            .into_iter()
            .map(|t| match t.pos {
                Some(pos) => Ok((t.text, pos)),
                None => Err(missing_tagger(self.name())),
            })
            .collect()
    }

    /// Recognizes named entities.
    fn entities(&self, _text: &str) -> Result<Vec<Entity>> {
        Err(CorpusError::Config(format!(
            "pipeline `{}` has no entity recognizer",
            self.name()
        )))
    }

    /// Extracts noun phrases.
    fn noun_chunks(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.analyze(text)?;
        if tokens.iter().any(|t| t.pos.is_none()) {
            return Err(missing_tagger(self.name()));
        }
        Ok(NounChunker::new().extract(&tokens))
    }
}

fn missing_tagger(name: &str) -> CorpusError {
    CorpusError::Config(format!("pipeline `{}` has no part-of-speech tagger", name))
}

/// Splits a paragraph into sentences.
pub fn sentence_tokenize(pipeline: &dyn LinguisticPipeline, text: &str) -> Result<Vec<String>> {
    pipeline.sentences(text)
}

/// Part-of-speech tags of every word as `(text, tag)` pairs.
pub fn part_of_speech(pipeline: &dyn LinguisticPipeline, text: &str) -> Result<Vec<(String, PosTag)>> {
    pipeline.pos_tags(text)
}

/// Named entities of the text, such as places, people and organizations.
pub fn named_entities(pipeline: &dyn LinguisticPipeline, text: &str) -> Result<Vec<Entity>> {
    let entities = pipeline.entities(text)?;
    for entity in &entities {
        log::debug!("entity {} ({})", entity.text, entity.label);
    }
    Ok(entities)
}

/// Noun phrases of the text, in order of appearance.
pub fn noun_phrases(pipeline: &dyn LinguisticPipeline, text: &str) -> Result<Vec<String>> {
    pipeline.noun_chunks(text)
}
