//! Engine configuration
//!
//! The override threshold and floor are behavioral constants inherited from
//! the trained deployment (no documented derivation exists for them), so they
//! are carried as configuration with defaults preserving the original values
//! rather than baked into the fusion logic.

use scamguard_core::{Error, Result};
use scamguard_text::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable decision-fusion parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// A "real" classification below this confidence can be overridden by
    /// risk signals
    #[serde(default = "default_override_threshold")]
    pub override_threshold: f64,

    /// Minimum confidence assigned when the override fires
    #[serde(default = "default_override_floor")]
    pub override_floor: f64,

    /// Normalization options fed to the text pipeline
    #[serde(default)]
    pub normalize: NormalizeOptions,
}

fn default_override_threshold() -> f64 {
    0.75
}

fn default_override_floor() -> f64 {
    0.85
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            override_threshold: default_override_threshold(),
            override_floor: default_override_floor(),
            normalize: NormalizeOptions::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("invalid engine config: {e}")))
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("engine config not readable at {path:?}: {e}")))?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preserve_original_constants() {
        let config = EngineConfig::default();
        assert!((config.override_threshold - 0.75).abs() < 1e-12);
        assert!((config.override_floor - 0.85).abs() < 1e-12);
        assert!(config.normalize.remove_stopwords);
        assert!(config.normalize.lemmatize);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = EngineConfig::from_yaml("override_threshold: 0.6").unwrap();
        assert!((config.override_threshold - 0.6).abs() < 1e-12);
        assert!((config.override_floor - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        assert!(matches!(
            EngineConfig::from_yaml("override_floor: [nope]").unwrap_err(),
            scamguard_core::Error::Config(_)
        ));
    }
}
