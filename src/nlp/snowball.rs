//! Default pipeline: Unicode word segmentation, Snowball stemming and
//! stop-word lists.
//!
//! The pipeline lemmatizes by stemming and does not tag parts of speech or
//! recognize entities; those capabilities report a configuration error.

use super::{AnalyzedToken, LinguisticPipeline, StopwordFilter, PRONOUN_LEMMA};
use crate::config::PipelineConfig;
use crate::error::{CorpusError, Result};
use crate::text::split_sentences;
use rust_stemmers::{Algorithm, Stemmer};
use stop_words::LANGUAGE;
use unicode_segmentation::UnicodeSegmentation;

const ENGLISH_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves",
];

/// Stemming pipeline for the languages both `rust-stemmers` and `stop-words` cover.
pub struct SnowballPipeline {
    name: String,
    stemmer: Option<Stemmer>,
    stopwords: StopwordFilter,
    english: bool,
}

impl SnowballPipeline {
    /// Builds the pipeline for `config.language`.
    ///
    /// Fails with [`CorpusError::Config`] for an unsupported language.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let (algorithm, language, name) = resolve_language(&config.language).ok_or_else(|| {
            CorpusError::Config(format!(
                "no stemmer or stop-word list for language `{}`",
                config.language
            ))
        })?;

        log::info!("Loaded {} pipeline (stemming: {})", name, config.stem);

        Ok(Self {
            name: format!("snowball-{}", name),
            stemmer: config.stem.then(|| Stemmer::create(algorithm)),
            stopwords: StopwordFilter::for_language(language),
            english: name == "english",
        })
    }

    /// Builds the English pipeline with stemming.
    pub fn english() -> Result<Self> {
        Self::new(&PipelineConfig::default())
    }

    /// Adds words to the stop-word list.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.add_stopwords(words);
    }

    fn lemma(&self, lower: &str) -> String {
        if self.english && ENGLISH_PRONOUNS.contains(&lower) {
            return PRONOUN_LEMMA.to_string();
        }
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(lower).into_owned(),
            None => lower.to_string(),
        }
    }
}

impl LinguisticPipeline for SnowballPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>> {
        let mut tokens = Vec::new();

        for (sentence, sentence_text) in split_sentences(text).iter().enumerate() {
            for word in sentence_text.unicode_words() {
                let lower = word.to_lowercase();
                tokens.push(AnalyzedToken {
                    text: word.to_string(),
                    lemma: self.lemma(&lower),
                    pos: None,
                    is_stop: self.stopwords.is_stopword(&lower),
                    sentence,
                });
            }
        }

        Ok(tokens)
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>> {
        Ok(split_sentences(text))
    }
}

fn resolve_language(language: &str) -> Option<(Algorithm, LANGUAGE, &'static str)> {
    let resolved = match language.to_lowercase().as_str() {
        "en" | "english" => (Algorithm::English, LANGUAGE::English, "english"),
        "de" | "german" => (Algorithm::German, LANGUAGE::German, "german"),
        "fr" | "french" => (Algorithm::French, LANGUAGE::French, "french"),
        "es" | "spanish" => (Algorithm::Spanish, LANGUAGE::Spanish, "spanish"),
        "it" | "italian" => (Algorithm::Italian, LANGUAGE::Italian, "italian"),
        "pt" | "portuguese" => (Algorithm::Portuguese, LANGUAGE::Portuguese, "portuguese"),
        "nl" | "dutch" => (Algorithm::Dutch, LANGUAGE::Dutch, "dutch"),
        "ru" | "russian" => (Algorithm::Russian, LANGUAGE::Russian, "russian"),
        "sv" | "swedish" => (Algorithm::Swedish, LANGUAGE::Swedish, "swedish"),
        "no" | "norwegian" => (Algorithm::Norwegian, LANGUAGE::Norwegian, "norwegian"),
        "da" | "danish" => (Algorithm::Danish, LANGUAGE::Danish, "danish"),
        "fi" | "finnish" => (Algorithm::Finnish, LANGUAGE::Finnish, "finnish"),
        "hu" | "hungarian" => (Algorithm::Hungarian, LANGUAGE::Hungarian, "hungarian"),
        "tr" | "turkish" => (Algorithm::Turkish, LANGUAGE::Turkish, "turkish"),
        _ => return None,
    };
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language() {
        let config = PipelineConfig {
            language: "klingon".to_string(),
            stem: true,
        };
        let err = SnowballPipeline::new(&config).err().unwrap();
        assert!(matches!(err, CorpusError::Config(_)));
    }

    #[test]
    fn test_analyze_english() {
        let pipeline = SnowballPipeline::english().unwrap();
        let tokens = pipeline.analyze("She feeds the cats").unwrap();

        let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
        assert_eq!(lemmas, vec![PRONOUN_LEMMA, "feed", "the", "cat"]);
        assert!(tokens[2].is_stop);
        assert!(!tokens[3].is_stop);
        assert!(tokens.iter().all(|t| t.pos.is_none()));
    }

    #[test]
    fn test_sentence_indices() {
        let pipeline = SnowballPipeline::english().unwrap();
        let tokens = pipeline.analyze("Cats sleep. Dogs bark.").unwrap();
        let sentences: Vec<usize> = tokens.iter().map(|t| t.sentence).collect();
        assert_eq!(sentences, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_without_stemming() {
        let config = PipelineConfig {
            stem: false,
            ..Default::default()
        };
        let pipeline = SnowballPipeline::new(&config).unwrap();
        let tokens = pipeline.analyze("Cats").unwrap();
        assert_eq!(tokens[0].lemma, "cats");
    }

    #[test]
    fn test_untagged_capabilities_fail() {
        let pipeline = SnowballPipeline::english().unwrap();
        assert!(matches!(pipeline.pos_tags("cats"), Err(CorpusError::Config(_))));
        assert!(matches!(pipeline.noun_chunks("cats"), Err(CorpusError::Config(_))));
        assert!(matches!(pipeline.entities("Paris"), Err(CorpusError::Config(_))));
    }
}
