//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every
//! problem into a single `ConfigError`.

#[cfg(test)]
mod tests;

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::schema::GrowthbotConfig;
use growthbot_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GrowthbotConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_model(&mut errors, config);
    validate_conversation(&mut errors, config);

    if config.catalog.path.as_os_str().is_empty() {
        errors.push("catalog.path must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_model(errors: &mut Vec<String>, config: &GrowthbotConfig) {
    let m = &config.model;
    if m.model.trim().is_empty() {
        errors.push("model.model must not be empty".to_string());
    }
    in_range(errors, "model.max_tokens", m.max_tokens, 1..=65536);
    in_range(errors, "model.temperature", m.temperature, 0.0..=2.0);
    in_range(errors, "model.timeout_secs", m.timeout_secs, 5..=600);
}

fn validate_conversation(errors: &mut Vec<String>, config: &GrowthbotConfig) {
    let c = &config.conversation;
    in_range(
        errors,
        "conversation.summarization_threshold",
        c.summarization_threshold,
        1..=100,
    );
    in_range(errors, "conversation.max_tool_rounds", c.max_tool_rounds, 1..=50);
    if let Some(prompt) = &c.system_prompt {
        if prompt.trim().is_empty() {
            errors.push("conversation.system_prompt must not be blank when set".to_string());
        }
    }
}

/// NaN is never in range.
fn in_range<T>(errors: &mut Vec<String>, field: &str, value: T, allowed: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !allowed.contains(&value) {
        errors.push(format!(
            "{field} = {value} is out of range [{}, {}]",
            allowed.start(),
            allowed.end()
        ));
    }
}
