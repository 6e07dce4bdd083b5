//! ScamGuard Rules
//!
//! The deterministic half of the decision engine: an ordered table of
//! high-risk scam patterns, each tied to a canned explanation, evaluated
//! independently and cumulatively against the raw message. A small set of
//! legitimate-context phrases suppresses the whole table to keep false
//! positives down for genuine recruitment and registration flows.

pub mod engine;
pub mod ruleset;

pub use engine::RiskRuleEngine;
pub use ruleset::{RuleSet, RuleSpec};
