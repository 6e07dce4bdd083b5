//! TF-IDF feature extraction against the frozen vocabulary

use crate::artifact::ScamModel;
use std::sync::Arc;

/// Sparse feature vector over the model vocabulary.
///
/// The dimension is always the vocabulary size regardless of input length;
/// only nonzero entries are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Create a vector from (column, value) entries sorted by column
    pub fn new(dim: usize, entries: Vec<(usize, f64)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        Self { dim, entries }
    }

    /// All-zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Vector dimension (vocabulary size)
    pub fn len(&self) -> usize {
        self.dim
    }

    /// Whether the vector has dimension zero
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Number of nonzero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over nonzero (column, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, v)| v * v)
            .sum::<f64>()
            .sqrt()
    }
}

/// Pure function from normalized text to a TF-IDF feature vector.
///
/// Weight for an in-vocabulary term = term frequency × the IDF frozen in the
/// artifact, L2-normalized over the message, matching the training-time
/// vectorizer. Out-of-vocabulary terms contribute nothing; that is
/// open-vocabulary degradation, not an error.
pub struct TfidfVectorizer {
    model: Arc<ScamModel>,
}

impl TfidfVectorizer {
    /// Create a vectorizer over a loaded model
    pub fn new(model: Arc<ScamModel>) -> Self {
        Self { model }
    }

    /// Map normalized text to its feature vector
    pub fn vectorize(&self, text: &str) -> SparseVector {
        let vocabulary = self.model.vocabulary();
        let mut counts: Vec<(usize, f64)> = Vec::new();

        for token in text.split_whitespace() {
            if let Some(index) = vocabulary.term_index(token) {
                match counts.binary_search_by_key(&index, |(i, _)| *i) {
                    Ok(pos) => counts[pos].1 += 1.0,
                    Err(pos) => counts.insert(pos, (index, 1.0)),
                }
            }
        }

        for (index, value) in counts.iter_mut() {
            *value *= self.model.idf(*index);
        }

        let norm = counts.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in counts.iter_mut() {
                *value /= norm;
            }
        }

        SparseVector::new(self.model.dimension(), counts)
    }
}
