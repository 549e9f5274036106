//! Fast regex-based sentence segmentation.
//!
//! Boundary detection uses a protect-and-repair approach: periods that do not
//! end a sentence (abbreviations, initials, titles, decimals, suspension
//! points) are swapped for a placeholder, the text is split after runs of
//! `.`, `!` or `?` that are followed by whitespace, and the placeholders are
//! restored.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Stands in for a protected period. Private-use, so absent from real text.
const PROTECTED_DOT: char = '\u{E000}';

/// Characters that may trail a sentence ender and still belong to the sentence.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{2019}', '\u{201D}'];

static COMPOSITE_ABBREV: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bet al\.").unwrap());

static SUSPENSION_POINTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

static FLOAT_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.[0-9]+").unwrap());

static LEADING_DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)\.[0-9]").unwrap());

static ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[A-Za-z]\.){2,}").unwrap());

static INITIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z]\.").unwrap());

static TITLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof|Sr|Jr|St|Mt|vs)\.").unwrap());

/// Replaces every period inside matches of `pattern` with the placeholder.
fn protect(text: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            caps[0].replace('.', &PROTECTED_DOT.to_string())
        })
        .into_owned()
}

/// Splits text into sentences.
///
/// Sentences are trimmed and empty ones dropped; text without a final
/// ender forms the last sentence.
///
/// # Example
/// ```
/// use corpustat::text::split_sentences;
///
/// let sentences = split_sentences("Dr. Smith went to Washington. He arrived at 3.14 p.m.");
/// assert_eq!(sentences.len(), 2);
/// ```
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let mut protected = text.to_string();
    for pattern in [
        &*COMPOSITE_ABBREV,
        &*SUSPENSION_POINTS,
        &*FLOAT_POINT,
        &*LEADING_DECIMAL,
        &*ABBREVIATION,
        &*INITIALS,
        &*TITLES,
    ] {
        protected = protect(&protected, pattern);
    }

    split_on_enders(&protected)
        .into_iter()
        .map(|s| s.replace(PROTECTED_DOT, "."))
        .collect()
}

fn split_on_enders(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !matches!(chars[i].1, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && matches!(chars[end].1, '.' | '!' | '?') {
            end += 1;
        }
        while end < chars.len() && CLOSERS.contains(&chars[end].1) {
            end += 1;
        }

        if end == chars.len() || chars[end].1.is_whitespace() {
            let byte_end = chars.get(end).map_or(text.len(), |(b, _)| *b);
            push_trimmed(&mut sentences, &text[start..byte_end]);
            start = byte_end;
        }
        i = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, s: &str) {
    let s = s.trim();
    if !s.is_empty() {
        sentences.push(s.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test.");
        assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
    }

    #[test]
    fn test_titles() {
        let sentences = split_sentences("Dr. Smith went to Washington.");
        assert_eq!(sentences, vec!["Dr. Smith went to Washington."]);
    }

    #[test]
    fn test_multi_letter_abbreviations() {
        let sentences = split_sentences("People in the U.S.A. love freedom.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_initials() {
        let sentences = split_sentences("J. K. Rowling wrote Harry Potter. It was successful.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("J. K. Rowling"));
    }

    #[test]
    fn test_decimals() {
        let sentences = split_sentences("The value was 3.14159. Then it was .625 again.");
        assert_eq!(
            sentences,
            vec!["The value was 3.14159.", "Then it was .625 again."]
        );
    }

    #[test]
    fn test_suspension_points() {
        let sentences = split_sentences("And then... it happened. Something amazing.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("..."));
    }

    #[test]
    fn test_question_and_exclamation() {
        let sentences = split_sentences("Is this working? Yes it is! Great.");
        assert_eq!(sentences, vec!["Is this working?", "Yes it is!", "Great."]);
    }

    #[test]
    fn test_closing_quotes_and_parens() {
        let sentences = split_sentences(r#"He said "Hello." Then he left. (This too.) Done"#);
        assert_eq!(
            sentences,
            vec![r#"He said "Hello.""#, "Then he left.", "(This too.)", "Done"]
        );
    }

    #[test]
    fn test_et_al() {
        let text = "According to Smith et al. the results were clear. This was expected.";
        assert_eq!(split_sentences(text).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_no_enders() {
        assert_eq!(
            split_sentences("no ending punctuation here"),
            vec!["no ending punctuation here"]
        );
    }
}
