//! Risk-signal rule engine
//!
//! Scans message text for known high-risk scam patterns, independently of the
//! statistical model. Legitimate-context phrases (university portals, careers
//! pages) suppress every pattern unconditionally: no rule is evaluated once a
//! suppressor matches.

use crate::ruleset::RuleSet;
use aho_corasick::AhoCorasick;
use regex::Regex;
use scamguard_core::{Error, Result, RiskSignal};
use tracing::debug;

/// A compiled risk rule
#[derive(Debug)]
struct RiskRule {
    id: String,
    pattern: Regex,
    explanation: String,
}

/// Pattern-based scanner for high-risk scam signals
#[derive(Debug)]
pub struct RiskRuleEngine {
    suppressors: AhoCorasick,
    rules: Vec<RiskRule>,
}

impl RiskRuleEngine {
    /// Create an engine with the built-in rule set
    pub fn new() -> Result<Self> {
        Self::from_ruleset(&RuleSet::builtin())
    }

    /// Compile an engine from a rule set
    pub fn from_ruleset(set: &RuleSet) -> Result<Self> {
        let suppressors = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&set.suppressors)
            .map_err(|e| Error::rule(format!("failed to build suppressor matcher: {e}")))?;

        let rules = set
            .rules
            .iter()
            .map(|spec| {
                Regex::new(&spec.pattern)
                    .map(|pattern| RiskRule {
                        id: spec.id.clone(),
                        pattern,
                        explanation: spec.explanation.clone(),
                    })
                    .map_err(|e| {
                        Error::rule(format!("failed to compile rule {:?}: {e}", spec.id))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { suppressors, rules })
    }

    /// Scan text for risk signals.
    ///
    /// Returns signals in pattern-table order; multiple patterns may fire.
    /// Never errors: no matches (or a suppressed context) yields an empty
    /// list.
    pub fn scan(&self, text: &str) -> Vec<RiskSignal> {
        let lowered = text.to_lowercase();

        if self.suppressors.is_match(&lowered) {
            debug!("legitimate context phrase found, suppressing all risk patterns");
            return Vec::new();
        }

        self.rules
            .iter()
            .filter(|rule| rule.pattern.is_match(&lowered))
            .map(|rule| RiskSignal::new(&rule.id, &rule.explanation))
            .collect()
    }

    /// Number of compiled rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RiskRuleEngine {
        RiskRuleEngine::new().unwrap()
    }

    #[test]
    fn test_clean_text_yields_no_signals() {
        assert!(engine().scan("See you at lunch tomorrow").is_empty());
        assert!(engine().scan("").is_empty());
    }

    #[test]
    fn test_job_payment_pattern() {
        let signals = engine().scan("Exciting job offer! Pay fee of 500 to apply");
        assert!(signals.iter().any(|s| s.id == "job-payment"));
    }

    #[test]
    fn test_sensitive_details_pattern() {
        let signals = engine().scan("Please send your bank details to process the loan");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].id, "sensitive-details");
        assert!(signals[0].explanation.contains("sensitive"));
    }

    #[test]
    fn test_registration_fee_pattern() {
        let signals = engine().scan("A small registration fee is required");
        assert!(signals.iter().any(|s| s.id == "registration-fee"));
    }

    #[test]
    fn test_payment_amount_pattern() {
        let signals = engine().scan("pay ₹2000 to unlock your reward");
        assert!(signals.iter().any(|s| s.id == "payment-amount"));
    }

    #[test]
    fn test_multiple_patterns_fire_cumulatively_in_table_order() {
        let signals =
            engine().scan("work from home, earn ₹5000 daily, no interview required");
        assert!(signals.len() >= 2);
        let ids: Vec<&str> = signals.iter().map(|s| s.id.as_str()).collect();
        assert!(ids.contains(&"work-from-home-earnings"));
        assert!(ids.contains(&"no-interview"));

        // Output order follows the table, not match position
        let wfh = ids.iter().position(|id| *id == "work-from-home-earnings").unwrap();
        let no_interview = ids.iter().position(|id| *id == "no-interview").unwrap();
        assert!(wfh < no_interview);
    }

    #[test]
    fn test_suppression_overrides_every_pattern() {
        let signals = engine().scan("official university portal, pay registration fee of 500");
        assert!(signals.is_empty());
    }

    #[test]
    fn test_suppression_phrases() {
        for text in [
            "The college asks you to pay ₹500 registration fee",
            "Apply through the careers portal, pay fee of 1000",
            "University admission: send your bank details",
        ] {
            assert!(engine().scan(text).is_empty(), "not suppressed: {text:?}");
        }
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let signals = engine().scan("SEND YOUR BANK DETAILS NOW");
        assert_eq!(signals.len(), 1);
    }

    #[test]
    fn test_custom_ruleset() {
        let set = RuleSet {
            name: "custom".to_string(),
            version: String::new(),
            suppressors: vec!["trusted partner".to_string()],
            rules: vec![crate::ruleset::RuleSpec {
                id: "crypto-doubling".to_string(),
                pattern: r"double your (?:crypto|bitcoin)".to_string(),
                explanation: "Doubling promises are a classic crypto scam".to_string(),
            }],
        };
        let engine = RiskRuleEngine::from_ruleset(&set).unwrap();
        assert_eq!(engine.rule_count(), 1);
        assert_eq!(engine.scan("We will double your bitcoin").len(), 1);
        assert!(engine
            .scan("trusted partner: double your bitcoin")
            .is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rule_error() {
        let set = RuleSet {
            name: "bad".to_string(),
            version: String::new(),
            suppressors: Vec::new(),
            rules: vec![crate::ruleset::RuleSpec {
                id: "broken".to_string(),
                pattern: "(unclosed".to_string(),
                explanation: "n/a".to_string(),
            }],
        };
        assert!(matches!(
            RiskRuleEngine::from_ruleset(&set).unwrap_err(),
            scamguard_core::Error::Rule(_)
        ));
    }
}
