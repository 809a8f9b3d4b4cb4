//! Arcade configuration: per-game rule sets, optionally overridden by
//! `~/.arcade/config.json`. Every field is optional; missing fields keep
//! their defaults.

use crate::games::{Match3Rules, RunnerRules, StackerRules};
use crate::utils::persistence::read_optional;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub match3: Match3Rules,
    pub stacker: StackerRules,
    pub runner: RunnerRules,
}

impl ArcadeConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ArcadeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path`, falling back to defaults when the file is missing,
    /// unreadable or invalid. Problems other than a missing file are logged.
    pub fn load_or_default(path: &Path) -> Self {
        let loaded = read_optional(path)
            .map_err(ConfigError::from)
            .and_then(|text| text.map(|json| Self::from_json(&json)).transpose());
        match loaded {
            Ok(Some(config)) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Ok(None) => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check every rule set, prefixing errors with the game they belong to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.match3
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("match3: {}", e)))?;
        self.stacker
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("stacker: {}", e)))?;
        self.runner
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("runner: {}", e)))?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ArcadeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = ArcadeConfig::from_json("{}").expect("empty config should parse");
        assert_eq!(config, ArcadeConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ArcadeConfig::from_json(
            r#"{"match3": {"moves": 5}, "runner": {"win_score": 50}}"#,
        )
        .expect("partial config should parse");
        assert_eq!(config.match3.moves, 5);
        assert_eq!(config.match3.grid_size, Match3Rules::default().grid_size);
        assert_eq!(config.runner.win_score, 50);
        assert_eq!(config.stacker, StackerRules::default());
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let err = ArcadeConfig::from_json(r#"{"match3": {"grid_size": 2}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.starts_with("match3:")));
    }

    fn invalid_message(json: &str) -> String {
        match ArcadeConfig::from_json(json) {
            Err(ConfigError::Invalid(msg)) => msg,
            other => panic!("expected invalid config for {}, got {:?}", json, other),
        }
    }

    #[test]
    fn test_zero_match_points_rejected() {
        let msg = invalid_message(r#"{"match3": {"points_per_cell": 0}}"#);
        assert!(msg.starts_with("match3: points_per_cell"));
    }

    #[test]
    fn test_huge_scoring_rates_rejected() {
        let msg = invalid_message(r#"{"match3": {"points_per_cell": 4294967295}}"#);
        assert!(msg.starts_with("match3:"));
        let msg = invalid_message(r#"{"stacker": {"points_per_px": 1e12}}"#);
        assert!(msg.starts_with("stacker: points_per_px"));
        let msg = invalid_message(r#"{"stacker": {"points_per_px": 0.0}}"#);
        assert!(msg.starts_with("stacker:"));
    }

    #[test]
    fn test_scoring_rates_at_bounds_accepted() {
        let config = ArcadeConfig::from_json(
            r#"{"match3": {"points_per_cell": 1000}, "stacker": {"points_per_px": 100.0}}"#,
        )
        .expect("bounds are inclusive");
        assert_eq!(config.match3.points_per_cell, 1000);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ArcadeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("arcade_missing_config_12345.json");
        assert!(matches!(ArcadeConfig::load_from(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let missing = std::env::temp_dir().join("arcade_missing_config_67890.json");
        assert_eq!(ArcadeConfig::load_or_default(&missing), ArcadeConfig::default());

        let bad = std::env::temp_dir().join("arcade_bad_config_test.json");
        std::fs::write(&bad, r#"{"stacker": {"initial_width": 1.0}}"#)
            .expect("write should succeed");
        assert_eq!(ArcadeConfig::load_or_default(&bad), ArcadeConfig::default());
        let _ = std::fs::remove_file(&bad);
    }

    #[test]
    fn test_pretty_json_reloads() {
        let json = ArcadeConfig::default().to_json_pretty().expect("serialize");
        assert!(json.contains("\"match3\""));
        assert_eq!(ArcadeConfig::from_json(&json).expect("reparse"), ArcadeConfig::default());
    }
}
