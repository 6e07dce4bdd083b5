//! Wire-format response
//!
//! The serialized shape callers surface to end users: classification,
//! confidence in both raw and percentage form, risk-signal explanations (key
//! omitted when none fired), attribution records with indicator direction and
//! absolute weight, and the ordered explanation sentences.

use scamguard_core::{Decision, IndicatorType, Label};
use serde::Serialize;

/// Complete detection response for one message
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResponse {
    pub message: String,
    pub classification: Label,
    pub confidence: f64,
    pub confidence_percentage: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub high_risk_signals: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub important_features: Vec<FeatureRecord>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explanations: Vec<String>,
}

/// One attribution record as surfaced to callers
#[derive(Debug, Clone, Serialize)]
pub struct FeatureRecord {
    pub term: String,
    pub indicator_type: IndicatorType,
    pub weight: f64,
}

impl DetectionResponse {
    /// Build the response for a decision
    pub fn new(message: impl Into<String>, decision: &Decision) -> Self {
        Self {
            message: message.into(),
            classification: decision.label,
            confidence: decision.confidence,
            confidence_percentage: decision.confidence_percentage(),
            high_risk_signals: decision
                .signals
                .iter()
                .map(|s| s.explanation.clone())
                .collect(),
            important_features: decision
                .attributions
                .iter()
                .map(|a| FeatureRecord {
                    term: a.term.clone(),
                    indicator_type: a.indicator_type(),
                    weight: a.weight(),
                })
                .collect(),
            explanations: decision.explanations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scamguard_core::{FeatureAttribution, RiskSignal};

    fn decision() -> Decision {
        Decision {
            label: Label::Scam,
            confidence: 0.85,
            attributions: vec![
                FeatureAttribution::new("lottery", 0.8),
                FeatureAttribution::new("portal", -0.2),
            ],
            signals: vec![RiskSignal::new("registration-fee", "Fees are a red flag")],
            explanations: vec!["Because lottery.".to_string()],
        }
    }

    #[test]
    fn test_response_shape() {
        let response = DetectionResponse::new("win big", &decision());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["classification"], "scam");
        assert_eq!(json["confidence_percentage"], "85.00%");
        assert_eq!(json["high_risk_signals"][0], "Fees are a red flag");
        assert_eq!(json["important_features"][0]["term"], "lottery");
        assert_eq!(json["important_features"][0]["indicator_type"], "Scam indicator");
        assert_eq!(
            json["important_features"][1]["indicator_type"],
            "Legitimate indicator"
        );
        // Weights are absolute values
        assert!(json["important_features"][1]["weight"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let mut bare = decision();
        bare.signals.clear();
        bare.attributions.clear();
        bare.explanations.clear();

        let json = serde_json::to_value(DetectionResponse::new("hi", &bare)).unwrap();
        assert!(json.get("high_risk_signals").is_none());
        assert!(json.get("important_features").is_none());
        assert!(json.get("explanations").is_none());
        // Label and confidence are always jointly present
        assert!(json.get("classification").is_some());
        assert!(json.get("confidence").is_some());
    }
}
