//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    assert!(validate(&GrowthbotConfig::default()).is_ok());
}

#[test]
fn catches_zero_threshold() {
    let mut config = GrowthbotConfig::default();
    config.conversation.summarization_threshold = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.summarization_threshold"));
}

#[test]
fn catches_tool_rounds_too_large() {
    let mut config = GrowthbotConfig::default();
    config.conversation.max_tool_rounds = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.max_tool_rounds"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = GrowthbotConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = GrowthbotConfig::default();
    config.model.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_blank_system_prompt() {
    let mut config = GrowthbotConfig::default();
    config.conversation.system_prompt = Some("   ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("conversation.system_prompt"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GrowthbotConfig::default();
    config.model.model = String::new();
    config.model.timeout_secs = 1;
    config.catalog.path = PathBuf::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.model"));
    assert!(err.contains("model.timeout_secs"));
    assert!(err.contains("catalog.path"));
}

#[test]
fn range_error_names_field_value_and_bounds() {
    let mut config = GrowthbotConfig::default();
    config.model.timeout_secs = 1;
    config.model.temperature = -0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.timeout_secs = 1 is out of range [5, 600]"));
    assert!(err.contains("model.temperature = -0.5 is out of range [0, 2]"));
}
