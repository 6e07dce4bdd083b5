//! Core types for ScamGuard

use serde::{Deserialize, Serialize};

/// Classification label for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Legitimate message
    Real,
    /// Fraudulent message
    Scam,
}

impl Label {
    /// Get the lowercase string form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Scam => "scam",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deterministic, pattern-matched explanation of a known scam tactic,
/// produced independently of the statistical model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSignal {
    /// Identifier of the pattern that matched
    pub id: String,

    /// Human-readable explanation of the tactic
    pub explanation: String,
}

impl RiskSignal {
    /// Create a new risk signal
    pub fn new(id: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            explanation: explanation.into(),
        }
    }
}

/// Signed contribution of a single term to the classifier's decision.
///
/// Importance is coefficient × TF-IDF weight for the term as it appears in
/// the message. Positive values lean scam, negative lean real.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAttribution {
    /// Vocabulary term
    pub term: String,

    /// Signed importance
    pub importance: f64,
}

impl FeatureAttribution {
    /// Create a new attribution
    pub fn new(term: impl Into<String>, importance: f64) -> Self {
        Self {
            term: term.into(),
            importance,
        }
    }

    /// Which way this term pushed the decision
    pub fn indicator_type(&self) -> IndicatorType {
        if self.importance > 0.0 {
            IndicatorType::Scam
        } else {
            IndicatorType::Legitimate
        }
    }

    /// Magnitude of the contribution, as surfaced to callers
    pub fn weight(&self) -> f64 {
        self.importance.abs()
    }
}

/// Direction of a feature attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorType {
    /// Term pushed toward the scam class
    #[serde(rename = "Scam indicator")]
    Scam,
    /// Term pushed toward the real class
    #[serde(rename = "Legitimate indicator")]
    Legitimate,
}

impl IndicatorType {
    /// Wire string for this indicator type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scam => "Scam indicator",
            Self::Legitimate => "Legitimate indicator",
        }
    }
}

/// The engine's sole output: one complete, auditable decision per message.
///
/// Label and confidence are always jointly present; the engine never returns
/// a partial result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Final classification
    pub label: Label,

    /// Confidence in the final label (0.0-1.0)
    pub confidence: f64,

    /// Top attributions, sorted by descending absolute importance (≤ 5)
    pub attributions: Vec<FeatureAttribution>,

    /// Risk signals from the rule layer, in pattern-table order
    pub signals: Vec<RiskSignal>,

    /// Ordered explanation sentences
    pub explanations: Vec<String>,
}

impl Decision {
    /// Confidence formatted as a percentage string, e.g. "85.00%"
    pub fn confidence_percentage(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}
