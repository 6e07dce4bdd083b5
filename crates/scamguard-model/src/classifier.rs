//! Statistical classifier over TF-IDF features
//!
//! A pre-trained linear model with a logistic link. The classifier also
//! produces per-term attributions (coefficient × feature weight) so the
//! decision layer can explain which terms drove the score.

use crate::artifact::ScamModel;
use crate::vectorizer::{SparseVector, TfidfVectorizer};
use async_trait::async_trait;
use scamguard_core::{Error, FeatureAttribution, Label, Result};
use std::sync::Arc;

/// How many attributions a prediction carries
pub const TOP_ATTRIBUTIONS: usize = 5;

/// Trait for text classifiers
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify normalized text
    async fn classify(&self, text: &str) -> Result<Prediction>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Two-class probability distribution with attribution
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Probability the message is legitimate
    pub p_real: f64,

    /// Probability the message is a scam
    pub p_scam: f64,

    /// Argmax label
    pub label: Label,

    /// max(p_real, p_scam)
    pub confidence: f64,

    /// Top attributions by absolute importance, ties broken by vocabulary
    /// order (≤ [`TOP_ATTRIBUTIONS`])
    pub attributions: Vec<FeatureAttribution>,
}

/// Linear classifier bound to a loaded model bundle
pub struct LinearClassifier {
    name: String,
    model: Arc<ScamModel>,
    vectorizer: TfidfVectorizer,
}

impl LinearClassifier {
    /// Create a classifier over a loaded model
    pub fn new(model: Arc<ScamModel>) -> Self {
        Self {
            name: "linear-tfidf".to_string(),
            vectorizer: TfidfVectorizer::new(Arc::clone(&model)),
            model,
        }
    }

    /// The vectorizer paired with this classifier's vocabulary
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Score a feature vector directly
    pub fn classify_vector(&self, features: &SparseVector) -> Result<Prediction> {
        if features.len() != self.model.dimension() {
            return Err(Error::artifact(format!(
                "feature vector has dimension {}, model expects {}",
                features.len(),
                self.model.dimension()
            )));
        }

        let score: f64 = features
            .iter()
            .map(|(index, value)| self.model.weight(index) * value)
            .sum::<f64>()
            + self.model.bias();

        let p_scam = sigmoid(score);
        let p_real = 1.0 - p_scam;

        let label = if p_scam >= p_real {
            Label::Scam
        } else {
            Label::Real
        };
        let confidence = p_scam.max(p_real);

        Ok(Prediction {
            p_real,
            p_scam,
            label,
            confidence,
            attributions: self.attributions(features),
        })
    }

    /// Importance of every nonzero-weight feature present in the vector,
    /// sorted by descending magnitude and truncated
    fn attributions(&self, features: &SparseVector) -> Vec<FeatureAttribution> {
        let mut ranked: Vec<(usize, f64)> = features
            .iter()
            .filter(|(index, _)| self.model.weight(*index) != 0.0)
            .map(|(index, value)| (index, self.model.weight(index) * value))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.abs()
                .partial_cmp(&a.1.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(TOP_ATTRIBUTIONS);

        ranked
            .into_iter()
            .filter_map(|(index, importance)| {
                self.model
                    .vocabulary()
                    .term(index)
                    .map(|term| FeatureAttribution::new(term, importance))
            })
            .collect()
    }
}

#[async_trait]
impl TextClassifier for LinearClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.vectorize(text);
        self.classify_vector(&features)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
