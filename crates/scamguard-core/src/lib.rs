//! ScamGuard Core
//!
//! Core types and error handling shared across ScamGuard components.
//!
//! This crate provides:
//! - The `Decision` record and its constituent parts (labels, risk signals,
//!   feature attributions)
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Decision, FeatureAttribution, IndicatorType, Label, RiskSignal};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Decision, FeatureAttribution, IndicatorType, Label, RiskSignal};
}
