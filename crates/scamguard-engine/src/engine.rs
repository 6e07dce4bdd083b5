//! Decision fusion
//!
//! The top-level orchestrator: normalizes the message, runs the statistical
//! classifier and the risk-rule scanner as independent signal sources, then
//! reconciles the two into one decision. The rule layer can upgrade an
//! uncertain "real" classification to "scam"; it never second-guesses a
//! confident model.

use crate::config::EngineConfig;
use crate::explain::Explainer;
use scamguard_core::{Decision, Label, Result, RiskSignal};
use scamguard_model::{LinearClassifier, Prediction, ScamModel, TextClassifier};
use scamguard_rules::RiskRuleEngine;
use scamguard_text::Normalizer;
use std::sync::Arc;
use tracing::debug;

/// The scam decision engine.
///
/// Stateless per call; the model handle is shared read-only, so one engine
/// serves concurrent requests without locking.
pub struct DecisionEngine {
    normalizer: Normalizer,
    classifier: Arc<dyn TextClassifier>,
    rules: RiskRuleEngine,
    explainer: Explainer,
    config: EngineConfig,
}

impl DecisionEngine {
    /// Build an engine over a loaded model with the built-in rule set
    pub fn new(model: Arc<ScamModel>, config: EngineConfig) -> Result<Self> {
        Self::with_parts(
            Arc::new(LinearClassifier::new(model)),
            RiskRuleEngine::new()?,
            config,
        )
    }

    /// Build an engine from explicit parts. The classifier seam makes the
    /// fusion policy testable against mock models.
    pub fn with_parts(
        classifier: Arc<dyn TextClassifier>,
        rules: RiskRuleEngine,
        config: EngineConfig,
    ) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            classifier,
            rules,
            explainer: Explainer::new()?,
            config,
        })
    }

    /// Classify a message and produce the complete decision
    pub async fn decide(&self, text: &str) -> Result<Decision> {
        let normalized = self.normalizer.normalize(text, &self.config.normalize);

        // The rule layer scans the raw message; it does not depend on the
        // normalized form above.
        let signals = self.rules.scan(text);

        let prediction = self.classifier.classify(&normalized).await?;
        let (label, confidence) = self.fuse(&signals, &prediction);

        let explanations = self
            .explainer
            .explain(label, text, &prediction.attributions);

        debug!(
            %label,
            confidence,
            signal_count = signals.len(),
            overridden = label != prediction.label,
            "decision made"
        );

        Ok(Decision {
            label,
            confidence,
            attributions: prediction.attributions,
            signals,
            explanations,
        })
    }

    /// Reconcile the rule signals with the model output.
    ///
    /// Risk signals flip an uncertain "real" (below the override threshold)
    /// to "scam" and raise the confidence to at least the floor. A confident
    /// "real" is trusted over the heuristics, and a "scam" result is never
    /// weakened.
    fn fuse(&self, signals: &[RiskSignal], prediction: &Prediction) -> (Label, f64) {
        let mut label = prediction.label;
        let mut confidence = prediction.confidence;

        if !signals.is_empty()
            && label == Label::Real
            && confidence < self.config.override_threshold
        {
            label = Label::Scam;
            confidence = confidence.max(self.config.override_floor);
        }

        (label, confidence)
    }
}
