//! Error types for ScamGuard

/// Result type alias using ScamGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ScamGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors (model bundle missing, malformed, or unreadable).
    /// Fatal to engine readiness; surfaced by the caller as service-unavailable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Model execution errors
    #[error("model error: {0}")]
    Model(String),

    /// Corrupted or mismatched artifact pairing (vocabulary/weight dimension
    /// mismatch). Never recovered by truncating or padding.
    #[error("artifact invariant violated: {0}")]
    Artifact(String),

    /// Rule-set loading or compilation errors
    #[error("rule error: {0}")]
    Rule(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new artifact-invariant error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new rule error
    pub fn rule(msg: impl Into<String>) -> Self {
        Self::Rule(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
