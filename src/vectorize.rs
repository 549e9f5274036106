//! Count and TF-IDF vectorization via `linfa-preprocessing`.

use crate::error::Result;
use linfa_preprocessing::tf_idf_vectorization::TfIdfVectorizer;
use linfa_preprocessing::CountVectorizer;
use ndarray::Array1;
use sprs::CsMat;

/// Sparse document-term counts with the vocabulary naming each column.
#[derive(Debug, Clone)]
pub struct CountMatrix {
    /// `documents x vocabulary` counts.
    pub matrix: CsMat<usize>,
    /// Feature name of each column.
    pub vocabulary: Vec<String>,
}

impl CountMatrix {
    /// Occurrences of `term` in document `row`; zero when either is unknown.
    pub fn count(&self, row: usize, term: &str) -> usize {
        column_of(&self.vocabulary, term)
            .and_then(|col| self.matrix.get(row, col).copied())
            .unwrap_or(0)
    }
}

/// Sparse document-term TF-IDF weights with the vocabulary naming each column.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// `documents x vocabulary` weights.
    pub matrix: CsMat<f64>,
    /// Feature name of each column.
    pub vocabulary: Vec<String>,
}

impl TfIdfMatrix {
    /// Weight of `term` in document `row`, if non-zero.
    pub fn weight(&self, row: usize, term: &str) -> Option<f64> {
        column_of(&self.vocabulary, term).and_then(|col| self.matrix.get(row, col).copied())
    }

    /// Non-zero `(feature, weight)` pairs of document `row`, in vocabulary order.
    pub fn row_weights(&self, row: usize) -> Vec<(&str, f64)> {
        let mut weights: Vec<(usize, f64)> = self
            .matrix
            .iter()
            .filter(|(_, (r, _))| *r == row)
            .map(|(&w, (_, col))| (col, w))
            .collect();
        weights.sort_by_key(|(col, _)| *col);
        weights
            .into_iter()
            .map(|(col, w)| (self.vocabulary[col].as_str(), w))
            .collect()
    }

    /// Non-zero weights of the first document.
    pub fn nonzero_weights(&self) -> Vec<(&str, f64)> {
        self.row_weights(0)
    }
}

fn column_of(vocabulary: &[String], term: &str) -> Option<usize> {
    vocabulary.iter().position(|v| v == term)
}

fn to_array<S: AsRef<str>>(documents: &[S]) -> Array1<String> {
    Array1::from(
        documents
            .iter()
            .map(|d| d.as_ref().to_string())
            .collect::<Vec<_>>(),
    )
}

/// Fits a count vectorizer on `documents` and returns their count matrix.
pub fn count_vectorize<S: AsRef<str>>(documents: &[S]) -> Result<CountMatrix> {
    let docs = to_array(documents);
    let vectorizer = CountVectorizer::params().fit(&docs)?;
    let matrix = vectorizer.transform(&docs);
    log::debug!(
        "Count matrix {}x{} over {} features",
        matrix.rows(),
        matrix.cols(),
        vectorizer.nentries()
    );
    Ok(CountMatrix {
        matrix,
        vocabulary: vectorizer.vocabulary().clone(),
    })
}

/// TF-IDF of a token sequence treated as one document.
///
/// Every non-zero feature weight is logged at debug level.
pub fn compute_tfidf<S: AsRef<str>>(tokens: &[S]) -> Result<TfIdfMatrix> {
    let document = tokens.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ");
    let tfidf = tfidf_documents(&[document])?;
    for (feature, weight) in tfidf.nonzero_weights() {
        log::debug!("{} - {}", feature, weight);
    }
    Ok(tfidf)
}

/// Fits a TF-IDF vectorizer on `documents` and returns their weight matrix.
pub fn tfidf_documents<S: AsRef<str>>(documents: &[S]) -> Result<TfIdfMatrix> {
    let docs = to_array(documents);
    let vectorizer = TfIdfVectorizer::default().fit(&docs)?;
    let matrix = vectorizer.transform(&docs);
    Ok(TfIdfMatrix {
        matrix,
        vocabulary: vectorizer.vocabulary().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_vectorize() {
        let counts = count_vectorize(&["kernel crab crab", "crab rust"]).unwrap();
        assert_eq!(counts.matrix.rows(), 2);
        assert_eq!(counts.vocabulary.len(), 3);
        assert_eq!(counts.count(0, "crab"), 2);
        assert_eq!(counts.count(1, "rust"), 1);
        assert_eq!(counts.count(1, "kernel"), 0);
        assert_eq!(counts.count(0, "unseen"), 0);
    }

    #[test]
    fn test_compute_tfidf_single_document() {
        let tfidf = compute_tfidf(&["crab", "kernel", "crab"]).unwrap();
        assert_eq!(tfidf.matrix.rows(), 1);

        let weights = tfidf.nonzero_weights();
        assert_eq!(weights.len(), 2);
        let crab = tfidf.weight(0, "crab").unwrap();
        let kernel = tfidf.weight(0, "kernel").unwrap();
        assert!(crab > kernel);
    }

    #[test]
    fn test_tfidf_rare_terms_weigh_more() {
        let tfidf = tfidf_documents(&["crab kernel", "crab rust", "crab shell"]).unwrap();
        let crab = tfidf.weight(0, "crab").unwrap();
        let kernel = tfidf.weight(0, "kernel").unwrap();
        assert!(kernel > crab);
    }
}
