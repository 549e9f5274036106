//! Noun chunk detection
//!
//! Identifies noun phrases using pattern matching on POS tags.
//! Pattern: (DET)? (ADJ)* (NOUN|PROPN)+

use super::{AnalyzedToken, PosTag};

/// Noun chunk detector over tagged tokens.
#[derive(Debug, Clone)]
pub struct NounChunker {
    include_determiners: bool,
}

impl Default for NounChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl NounChunker {
    /// Create a chunker that keeps leading determiners ("the lazy dog").
    pub fn new() -> Self {
        Self {
            include_determiners: true,
        }
    }

    /// Set whether leading determiners belong to the chunk
    pub fn with_determiners(mut self, include: bool) -> Self {
        self.include_determiners = include;
        self
    }

    /// Extract noun chunk texts in order of appearance.
    ///
    /// Untagged tokens never match; chunks do not cross sentences.
    pub fn extract(&self, tokens: &[AnalyzedToken]) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            match self.match_at(tokens, i) {
                Some(end) => {
                    let text: Vec<&str> = tokens[i..end].iter().map(|t| t.text.as_str()).collect();
                    chunks.push(text.join(" "));
                    i = end;
                }
                None => i += 1,
            }
        }

        chunks
    }

    /// Returns the exclusive end of a noun phrase starting at `start`.
    fn match_at(&self, tokens: &[AnalyzedToken], start: usize) -> Option<usize> {
        let sentence = tokens[start].sentence;
        let has = |idx: usize, pred: &dyn Fn(PosTag) -> bool| {
            tokens
                .get(idx)
                .filter(|t| t.sentence == sentence)
                .and_then(|t| t.pos)
                .map_or(false, pred)
        };

        let mut end = start;
        if self.include_determiners && has(end, &|p| p == PosTag::Determiner) {
            end += 1;
        }
        while has(end, &|p| p == PosTag::Adjective) {
            end += 1;
        }

        let noun_start = end;
        while has(end, &|p| p.is_noun()) {
            end += 1;
        }

        (end > noun_start).then_some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(words: &[(&str, PosTag, usize)]) -> Vec<AnalyzedToken> {
        words
            .iter()
            .map(|(text, pos, sentence)| AnalyzedToken {
                text: text.to_string(),
                lemma: text.to_lowercase(),
                pos: Some(*pos),
                is_stop: false,
                sentence: *sentence,
            })
            .collect()
    }

    fn fox_sentence() -> Vec<AnalyzedToken> {
        tagged(&[
            ("The", PosTag::Determiner, 0),
            ("quick", PosTag::Adjective, 0),
            ("brown", PosTag::Adjective, 0),
            ("fox", PosTag::Noun, 0),
            ("jumps", PosTag::Verb, 0),
            ("over", PosTag::Adposition, 0),
            ("the", PosTag::Determiner, 0),
            ("lazy", PosTag::Adjective, 0),
            ("dog", PosTag::Noun, 0),
        ])
    }

    #[test]
    fn test_basic_chunks() {
        let chunks = NounChunker::new().extract(&fox_sentence());
        assert_eq!(chunks, vec!["The quick brown fox", "the lazy dog"]);
    }

    #[test]
    fn test_without_determiners() {
        let chunks = NounChunker::new().with_determiners(false).extract(&fox_sentence());
        assert_eq!(chunks, vec!["quick brown fox", "lazy dog"]);
    }

    #[test]
    fn test_proper_noun_run() {
        let tokens = tagged(&[
            ("New", PosTag::ProperNoun, 0),
            ("York", PosTag::ProperNoun, 0),
            ("City", PosTag::ProperNoun, 0),
        ]);
        assert_eq!(NounChunker::new().extract(&tokens), vec!["New York City"]);
    }

    #[test]
    fn test_cross_sentence_boundary() {
        let tokens = tagged(&[("machine", PosTag::Noun, 0), ("learning", PosTag::Noun, 1)]);
        assert_eq!(NounChunker::new().extract(&tokens), vec!["machine", "learning"]);
    }

    #[test]
    fn test_dangling_adjective() {
        let tokens = tagged(&[("very", PosTag::Adverb, 0), ("tall", PosTag::Adjective, 0)]);
        assert!(NounChunker::new().extract(&tokens).is_empty());
    }
}
