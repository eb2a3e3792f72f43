//! Tests for TOML config loading and first-run seeding.

use super::template::default_config_toml;
use super::*;
use crate::schema::{GrowthbotConfig, LogLevel};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_growthbot_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, growthbot_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[conversation]
summarization_threshold = 8

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.conversation.summarization_threshold, 8);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.conversation.max_tool_rounds, 10);
    assert_eq!(config.model.model, "gemini-2.0-flash-001");
    assert!(config.conversation.system_prompt.is_none());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, growthbot_common::ConfigError::ParseError(_)));
}

#[test]
fn load_out_of_range_values_keeps_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
temperature = 9.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 9.0);
}

#[test]
fn template_parses_to_defaults() {
    let config: GrowthbotConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config.conversation.summarization_threshold, 6);
    assert_eq!(config.catalog.path, Path::new("data/info.json"));
}

#[test]
fn write_template_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    write_template(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[conversation]"));
    assert!(load_from_path(&path).is_ok());
}

#[test]
fn write_template_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");

    let err = write_template(&path).unwrap_err();
    match err {
        growthbot_common::ConfigError::Write { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn default_path_ends_with_growthbot_config() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("growthbot/config.toml"));
    }
}

#[test]
fn template_states_schema_version() {
    let header = format!("# Schema version {}", crate::CONFIG_SCHEMA_VERSION);
    assert!(default_config_toml().lines().any(|line| line == header));
}
