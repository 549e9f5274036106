//! Text normalization for preprocessing.

use crate::config::TextConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Whole words made of a single ASCII letter or only digits.
static NOISE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]\b|\b[0-9]+\b").unwrap());

/// Text normalizer that lower-cases text and strips noise words and punctuation.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes raw text.
    ///
    /// Removed words leave their surrounding whitespace in place, so the
    /// result may contain runs of spaces. Never fails; may return an empty
    /// string.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = if self.config.unicode_normalize {
            text.nfc().collect::<String>().to_lowercase()
        } else {
            text.to_lowercase()
        };

        result = NOISE_WORD.replace_all(&result, "").into_owned();
        result.retain(|c| !c.is_ascii_punctuation());

        // Stripping punctuation can expose new noise words ("_a" -> "a").
        NOISE_WORD.replace_all(&result, "").into_owned()
    }
}

/// Normalizes text with the default configuration.
pub fn normalize(text: &str) -> String {
    Normalizer::default_config().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_example_sentence() {
        assert_eq!(normalize("The 3 Cats ran, fast!"), "the  cats ran fast");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(normalize("HELLO World"), "hello world");
    }

    #[test]
    fn test_mixed_alphanumeric_kept() {
        assert_eq!(normalize("abc123 42 x"), "abc123  ");
    }

    #[test]
    fn test_contraction() {
        // The apostrophe bounds "t" as its own word.
        assert_eq!(normalize("don't"), "don");
    }

    #[test]
    fn test_exposed_single_letter() {
        assert_eq!(normalize("_a b_ word"), "  word");
    }

    #[test]
    fn test_unicode_composition() {
        let decomposed = "cafe\u{301}";
        assert_eq!(normalize(decomposed), "caf\u{e9}");

        let raw = Normalizer::new(TextConfig {
            unicode_normalize: false,
        });
        assert_eq!(raw.normalize(decomposed), decomposed);
    }

    proptest! {
        #[test]
        fn prop_no_punctuation(s in "[ -~]{0,64}") {
            let out = normalize(&s);
            prop_assert!(!out.chars().any(|c| c.is_ascii_punctuation()));
        }

        #[test]
        fn prop_no_noise_words(s in "[ -~]{0,64}") {
            let out = normalize(&s);
            for word in out.split_whitespace() {
                let single_letter = word.chars().count() == 1
                    && word.chars().all(|c| c.is_ascii_alphabetic());
                let digits = word.chars().all(|c| c.is_ascii_digit());
                prop_assert!(!single_letter, "single letter {:?} in {:?}", word, out);
                prop_assert!(!digits, "digit word {:?} in {:?}", word, out);
            }
        }

        #[test]
        fn prop_idempotent(s in "[ -~]{0,64}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }
}
