//! Text processing: normalization, lemma tokenization and sentence segmentation.

mod normalizer;
mod sentence;
mod tokenizer;

pub use normalizer::{normalize, Normalizer};
pub use sentence::split_sentences;
pub use tokenizer::{tokenize, Tokenizer};
