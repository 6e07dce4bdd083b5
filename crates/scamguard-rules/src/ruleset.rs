//! Rule-set definitions
//!
//! The pattern list is data, not control flow: an ordered table of
//! (pattern, explanation) pairs plus the suppression phrases, serializable to
//! and from YAML so deployments can ship their own tables. Order affects only
//! the order of emitted signals; every pattern is evaluated independently.

use scamguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete rule set: suppression phrases plus ordered risk patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rule-set name
    pub name: String,

    /// Version of the rule set
    #[serde(default)]
    pub version: String,

    /// Legitimate-context phrases. Any match suppresses every rule below.
    pub suppressors: Vec<String>,

    /// Ordered risk patterns
    pub rules: Vec<RuleSpec>,
}

/// A single risk pattern and its canned explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Pattern identifier
    pub id: String,

    /// Regex evaluated against the lowercased message
    pub pattern: String,

    /// Explanation attached to the emitted signal
    pub explanation: String,
}

impl RuleSet {
    /// Load a rule set from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::rule(format!("invalid rule set: {e}")))
    }

    /// Load a rule set from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::rule(format!("rule set not readable at {path:?}: {e}")))?;
        Self::from_yaml(&content)
    }

    /// The built-in job/loan scam rule set
    pub fn builtin() -> Self {
        Self {
            name: "builtin".to_string(),
            version: "1".to_string(),
            suppressors: [
                "university portal",
                "official portal",
                "careers portal",
                "college",
                "university",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            rules: vec![
                RuleSpec {
                    id: "job-payment".to_string(),
                    pattern: r"(?:job|work|hiring|position|opening).{0,30}(?:pay|fee|rs|₹|payment).{0,30}[0-9]{3,}"
                        .to_string(),
                    explanation:
                        "Job offers requiring payment for registration, assessment, or application are almost always scams"
                            .to_string(),
                },
                RuleSpec {
                    id: "work-from-home-earnings".to_string(),
                    pattern: r"(?:work from home|earn from home).{0,30}(?:₹|rs).?\d{3,}".to_string(),
                    explanation:
                        "Promises of high earnings from work-at-home jobs without specific skills are typical scam tactics"
                            .to_string(),
                },
                RuleSpec {
                    id: "no-interview".to_string(),
                    pattern: r"(?:job|work|position).{0,30}(?:no interview|without interview)"
                        .to_string(),
                    explanation:
                        "Legitimate companies don't offer jobs without some form of assessment"
                            .to_string(),
                },
                RuleSpec {
                    id: "sensitive-details".to_string(),
                    pattern: r"(?:send|share|submit).{0,30}(?:aadhar|pan|account|bank details|password|otp)"
                        .to_string(),
                    explanation:
                        "Legitimate organizations don't request sensitive personal documents or financial details via messages"
                            .to_string(),
                },
                RuleSpec {
                    id: "registration-fee".to_string(),
                    pattern: r"(?:registration fee|apply fee|pay.{0,5}(?:for|to).{0,10}(?:register|registration))"
                        .to_string(),
                    explanation: "Requiring payment for registration is a common scam tactic"
                        .to_string(),
                },
                RuleSpec {
                    id: "payment-amount".to_string(),
                    pattern: r"pay.{0,5}(?:₹|rs).{0,5}[0-9]{3,}".to_string(),
                    explanation:
                        "Requesting specific payment amounts in job or loan messages is a red flag"
                            .to_string(),
                },
            ],
        }
    }
}
