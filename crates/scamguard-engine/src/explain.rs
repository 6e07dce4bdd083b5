//! Explanation derivation
//!
//! Builds the human-readable sentences attached to a decision: one templated
//! sentence naming the strongest terms for the final label, followed by canned
//! contextual sentences for fixed keyword groups found in the raw message.
//! Each group contributes at most one sentence; group definition order fixes
//! the output order.

use aho_corasick::AhoCorasick;
use scamguard_core::{Error, FeatureAttribution, Label, Result};

/// Keyword groups checked when the final label is scam
const SCAM_GROUPS: &[(&[&str], &str)] = &[
    (
        &["registration fee", "registration", "fee", "fees", "payment", "pay"],
        "Requesting upfront payment or registration fees is a common tactic in job and loan scams.",
    ),
    (
        &["free", "guarantee", "guaranteed", "immediate", "urgent", "today", "risk-free"],
        "Promises of guaranteed or instant approvals are often used in loan scams.",
    ),
    (
        &["lottery", "prize", "won", "winner", "selected", "lucky"],
        "Claims about winning prizes or being specially selected are classic scam techniques.",
    ),
    (
        &["aadhar", "pan", "kyc", "bank details", "card details", "otp", "password", "verify"],
        "Requesting identity documents or financial information via messages is risky.",
    ),
    (
        &["no interview", "without interview", "work from home", "earn from home"],
        "Job offers without proper interviews or promising easy work-from-home income are often scams.",
    ),
];

/// Keyword groups checked when the final label is real
const REAL_GROUPS: &[(&[&str], &str)] = &[
    (
        &["official", "portal", "verified", "customer service", "helpline"],
        "The message references official channels or verified services.",
    ),
    (
        &["sbi", "hdfc", "icici", "axis", "pnb", "kotak", "rbi"],
        "The message mentions established banking institutions.",
    ),
    (
        &["tcs", "infosys", "wipro", "cognizant", "tech mahindra"],
        "The message mentions reputable companies.",
    ),
];

struct KeywordGroup {
    matcher: AhoCorasick,
    sentence: &'static str,
}

fn build_groups(table: &[(&[&str], &'static str)]) -> Result<Vec<KeywordGroup>> {
    table
        .iter()
        .map(|(keywords, sentence)| {
            AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(*keywords)
                .map(|matcher| KeywordGroup { matcher, sentence })
                .map_err(|e| Error::internal(format!("failed to build keyword matcher: {e}")))
        })
        .collect()
}

/// Turns a final label, the raw text and the model attributions into
/// explanation sentences
pub struct Explainer {
    scam_groups: Vec<KeywordGroup>,
    real_groups: Vec<KeywordGroup>,
}

impl Explainer {
    /// Build the explainer with the fixed keyword groups
    pub fn new() -> Result<Self> {
        Ok(Self {
            scam_groups: build_groups(SCAM_GROUPS)?,
            real_groups: build_groups(REAL_GROUPS)?,
        })
    }

    /// Derive explanation sentences for a decision.
    ///
    /// Nothing is emitted unless the attribution list contains terms leaning
    /// the same way as the final label.
    pub fn explain(
        &self,
        label: Label,
        raw_text: &str,
        attributions: &[FeatureAttribution],
    ) -> Vec<String> {
        let lowered = raw_text.to_lowercase();
        let mut sentences = Vec::new();

        match label {
            Label::Scam => {
                let terms: Vec<&str> = attributions
                    .iter()
                    .filter(|a| a.importance > 0.0)
                    .map(|a| a.term.as_str())
                    .take(5)
                    .collect();
                if terms.is_empty() {
                    return sentences;
                }

                sentences.push(format!(
                    "This message was classified as a scam primarily because it contains suspicious terms like: {}",
                    terms.join(", ")
                ));
                self.push_group_sentences(&self.scam_groups, &lowered, &mut sentences);
            }
            Label::Real => {
                let terms: Vec<&str> = attributions
                    .iter()
                    .filter(|a| a.importance < 0.0)
                    .map(|a| a.term.as_str())
                    .take(5)
                    .collect();
                if terms.is_empty() {
                    return sentences;
                }

                sentences.push(format!(
                    "This message was classified as legitimate primarily because it contains trusted terms like: {}",
                    terms.join(", ")
                ));
                self.push_group_sentences(&self.real_groups, &lowered, &mut sentences);
            }
        }

        sentences
    }

    fn push_group_sentences(
        &self,
        groups: &[KeywordGroup],
        lowered: &str,
        sentences: &mut Vec<String>,
    ) {
        for group in groups {
            if group.matcher.is_match(lowered) {
                sentences.push(group.sentence.to_string());
            }
        }
    }
}
