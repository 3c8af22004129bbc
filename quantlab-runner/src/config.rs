//! Serializable analysis configuration.
//!
//! One struct gathers the parameters of all three engines so callers that
//! keep settings in files can load everything in one step. Engines never
//! read configuration from anywhere else — no globals, no environment.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantlab_core::indicators::IndicatorConfig;
use quantlab_core::risk::RiskConfig;
use quantlab_core::scoring::ScoringConfig;

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Caller-supplied parameters for a full analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub indicators: IndicatorConfig,
    pub scoring: ScoringConfig,
    pub risk: RiskConfig,
}

impl AnalysisConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_has_engine_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.indicators.rsi_window, 14);
        assert_eq!(config.risk.annualization_factor, 252.0);
        assert_eq!(config.scoring.components.len(), 5);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = AnalysisConfig::from_toml_str(
            r#"
            [indicators]
            rsi_window = 21
            sma_windows = [10, 30]

            [risk]
            risk_free_rate = 0.04
            min_beta_observations = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.indicators.rsi_window, 21);
        assert_eq!(config.indicators.sma_windows, vec![10, 30]);
        // Untouched fields keep their defaults.
        assert_eq!(config.indicators.macd_slow, 26);
        assert_eq!(config.risk.risk_free_rate, 0.04);
        assert_eq!(config.risk.min_beta_observations, 60);
        assert_eq!(config.risk.annualization_factor, 252.0);
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = AnalysisConfig::from_toml_str("indicators = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_toml_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [risk]
            annualization_factor = 260.0
            "#
        )
        .unwrap();
        let config = AnalysisConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.risk.annualization_factor, 260.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AnalysisConfig::from_toml_file("/nonexistent/quantlab.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = AnalysisConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let deser = AnalysisConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, deser);
    }
}
