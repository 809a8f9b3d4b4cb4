//! Integration test: loading configuration files from disk

use arcade::core::config::{ArcadeConfig, ConfigError};
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arcade_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn test_partial_file_overrides_only_named_fields() {
    let path = temp_file(
        "partial.json",
        r#"{ "match3": { "moves": 5 }, "runner": { "win_score": 200 } }"#,
    );
    let config = ArcadeConfig::load_from(&path).expect("valid config");
    let defaults = ArcadeConfig::default();

    assert_eq!(config.match3.moves, 5);
    assert_eq!(config.match3.grid_size, defaults.match3.grid_size);
    assert_eq!(config.runner.win_score, 200);
    assert_eq!(config.runner.max_speed, defaults.runner.max_speed);
    assert_eq!(config.stacker, defaults.stacker);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_printed_config_loads_back() {
    let mut config = ArcadeConfig::default();
    config.stacker.target_layers = 7;
    let json = config.to_json_pretty().expect("serialize");

    let path = temp_file("printed.json", &json);
    assert_eq!(ArcadeConfig::load_from(&path).expect("load"), config);
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_invalid_rules_rejected_on_explicit_load() {
    let path = temp_file("invalid.json", r#"{ "stacker": { "min_overlap": 0.0 } }"#);
    match ArcadeConfig::load_from(&path) {
        Err(ConfigError::Invalid(msg)) => assert!(msg.starts_with("stacker:")),
        other => panic!("expected invalid config, got {:?}", other),
    }
    // The lenient loader falls back instead
    assert_eq!(ArcadeConfig::load_or_default(&path), ArcadeConfig::default());
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_file_handling() {
    let path = std::env::temp_dir().join("arcade_config_test_does_not_exist.json");
    assert!(matches!(
        ArcadeConfig::load_from(&path),
        Err(ConfigError::Io(_))
    ));
    assert_eq!(ArcadeConfig::load_or_default(&path), ArcadeConfig::default());
}
