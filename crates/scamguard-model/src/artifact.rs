//! Model artifact loading and validation
//!
//! The vocabulary/IDF table and the classifier weights are one versioned
//! bundle. They are loaded together or not at all: a vocabulary paired with
//! weights from a different training run produces undefined feature
//! attribution, so a length mismatch is fatal rather than recoverable.

use scamguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Maximum vocabulary size the engine accepts
pub const MAX_VOCABULARY: usize = 10_000;

/// Serialized model bundle, exactly as written by the training pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact version tag
    pub version: String,

    /// Ordered vocabulary terms; position is the feature column index
    pub vocabulary: Vec<String>,

    /// Inverse-document-frequency per term, frozen at training time
    pub idf: Vec<f64>,

    /// Linear coefficient per term
    pub weights: Vec<f64>,

    /// Intercept
    pub bias: f64,
}

impl ModelArtifact {
    /// Parse an artifact from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config(format!("model bundle malformed: {e}")))
    }

    /// Load an artifact from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("model bundle not readable at {path:?}: {e}")))?;
        Self::from_json(&content)
    }

    /// Check the bundle's internal invariants
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(Error::config("model bundle has an empty vocabulary"));
        }
        if self.vocabulary.len() > MAX_VOCABULARY {
            return Err(Error::config(format!(
                "vocabulary has {} terms, maximum is {MAX_VOCABULARY}",
                self.vocabulary.len()
            )));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(Error::artifact(format!(
                "IDF table has {} entries for {} vocabulary terms",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }
        if self.weights.len() != self.vocabulary.len() {
            return Err(Error::artifact(format!(
                "weight vector has {} entries for {} vocabulary terms",
                self.weights.len(),
                self.vocabulary.len()
            )));
        }
        if !self.bias.is_finite() {
            return Err(Error::artifact("bias is not finite"));
        }
        if let Some(i) = self.idf.iter().position(|v| !v.is_finite()) {
            return Err(Error::artifact(format!("IDF entry {i} is not finite")));
        }
        if let Some(i) = self.weights.iter().position(|v| !v.is_finite()) {
            return Err(Error::artifact(format!("weight entry {i} is not finite")));
        }
        Ok(())
    }
}

/// Ordered mapping from term to feature column index
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn new(terms: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(terms.len());
        for (i, term) in terms.iter().enumerate() {
            if index.insert(term.clone(), i).is_some() {
                return Err(Error::artifact(format!("duplicate vocabulary term: {term:?}")));
            }
        }
        Ok(Self { terms, index })
    }

    /// Column index for a term, if the model was trained on it
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term at a column index
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(|s| s.as_str())
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Validated, immutable model handle.
///
/// Loaded once at startup and shared read-only (`Arc`) across concurrent
/// requests; nothing here is mutated after construction.
#[derive(Debug)]
pub struct ScamModel {
    version: String,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    weights: Vec<f64>,
    bias: f64,
}

impl ScamModel {
    /// Build a model handle from a validated artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let vocabulary = Vocabulary::new(artifact.vocabulary)?;

        Ok(Self {
            version: artifact.version,
            vocabulary,
            idf: artifact.idf,
            weights: artifact.weights,
            bias: artifact.bias,
        })
    }

    /// Load and validate a model bundle from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::from_file(path)?;
        let model = Self::from_artifact(artifact)?;

        info!(
            version = %model.version,
            terms = model.vocabulary.len(),
            "loaded scam model bundle from {path:?}"
        );

        Ok(model)
    }

    /// Artifact version tag
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The vocabulary this model was trained on
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF value for a column
    pub fn idf(&self, index: usize) -> f64 {
        self.idf[index]
    }

    /// Coefficient for a column
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    /// Intercept
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Feature dimension (always the vocabulary size)
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            version: "test-1".to_string(),
            vocabulary: vec!["fee".to_string(), "lottery".to_string(), "portal".to_string()],
            idf: vec![1.0, 1.2, 1.5],
            weights: vec![2.0, 3.0, -2.5],
            bias: -0.4,
        }
    }

    #[test]
    fn test_valid_artifact_builds_model() {
        let model = ScamModel::from_artifact(artifact()).unwrap();
        assert_eq!(model.version(), "test-1");
        assert_eq!(model.dimension(), 3);
        assert_eq!(model.vocabulary().term_index("lottery"), Some(1));
        assert_eq!(model.vocabulary().term(2), Some("portal"));
        assert_eq!(model.vocabulary().term_index("unknown"), None);
    }

    #[test]
    fn test_weight_length_mismatch_is_fatal() {
        let mut bad = artifact();
        bad.weights.pop();
        let err = ScamModel::from_artifact(bad).unwrap_err();
        assert!(matches!(err, scamguard_core::Error::Artifact(_)), "got {err}");
    }

    #[test]
    fn test_idf_length_mismatch_is_fatal() {
        let mut bad = artifact();
        bad.idf.push(1.0);
        assert!(matches!(
            ScamModel::from_artifact(bad).unwrap_err(),
            scamguard_core::Error::Artifact(_)
        ));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let bad = ModelArtifact {
            version: "test-1".to_string(),
            vocabulary: Vec::new(),
            idf: Vec::new(),
            weights: Vec::new(),
            bias: 0.0,
        };
        assert!(matches!(
            ScamModel::from_artifact(bad).unwrap_err(),
            scamguard_core::Error::Config(_)
        ));
    }

    #[test]
    fn test_oversized_vocabulary_rejected() {
        let n = MAX_VOCABULARY + 1;
        let bad = ModelArtifact {
            version: "test-1".to_string(),
            vocabulary: (0..n).map(|i| format!("term{i}")).collect(),
            idf: vec![1.0; n],
            weights: vec![0.0; n],
            bias: 0.0,
        };
        assert!(ScamModel::from_artifact(bad).is_err());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let mut bad = artifact();
        bad.weights[1] = f64::NAN;
        assert!(matches!(
            ScamModel::from_artifact(bad).unwrap_err(),
            scamguard_core::Error::Artifact(_)
        ));
    }

    #[test]
    fn test_duplicate_terms_rejected() {
        let mut bad = artifact();
        bad.vocabulary[2] = "fee".to_string();
        assert!(matches!(
            ScamModel::from_artifact(bad).unwrap_err(),
            scamguard_core::Error::Artifact(_)
        ));
    }

    #[test]
    fn test_bundle_with_missing_half_is_config_error() {
        // Weights absent: vocabulary and weights must never load independently
        let json = r#"{"version":"v1","vocabulary":["fee"],"idf":[1.0],"bias":0.0}"#;
        assert!(matches!(
            ModelArtifact::from_json(json).unwrap_err(),
            scamguard_core::Error::Config(_)
        ));
    }

    #[test]
    fn test_load_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&artifact()).unwrap()).unwrap();

        let model = ScamModel::load(file.path()).unwrap();
        assert_eq!(model.dimension(), 3);
        assert!((model.bias() - -0.4).abs() < 1e-12);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        assert!(matches!(
            ScamModel::load("/no/such/model.json").unwrap_err(),
            scamguard_core::Error::Config(_)
        ));
    }
}
