//! One-time initialization: config, catalog, model client and tools.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use growthbot_ai::prompts::default_system_prompt;
use growthbot_ai::{
    catalog_registry, ConversationSettings, GeminiClient, GeminiConfig, Orchestrator,
};
use growthbot_common::{ConfigError, GrowthbotError};
use growthbot_config::{load_catalog, toml_loader, validation, GrowthbotConfig};
use tracing::info;

use crate::cli::Args;

/// Everything the console needs, built once per process.
pub struct App {
    pub orchestrator: Orchestrator,
    pub model: String,
}

/// An explicit `--config` must exist and validate; the default location is
/// created on first run.
pub fn load_config(path: Option<&Path>) -> Result<GrowthbotConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => growthbot_config::load_config(),
    }
}

/// Missing or malformed catalog data is fatal here, before any turn is served.
pub fn build(args: &Args, config: &GrowthbotConfig) -> growthbot_common::Result<App> {
    let catalog_path = args.catalog.as_deref().unwrap_or(config.catalog.path.as_path());
    let catalog = Arc::new(load_catalog(catalog_path)?);

    let gemini = GeminiConfig::from_env()
        .map_err(|e| GrowthbotError::Ai(e.to_string()))?
        .with_model(&config.model.model)
        .with_max_tokens(config.model.max_tokens)
        .with_temperature(config.model.temperature)
        .with_timeout(Duration::from_secs(u64::from(config.model.timeout_secs)));
    let client = GeminiClient::new(gemini).map_err(|e| GrowthbotError::Ai(e.to_string()))?;
    let model = client.model().to_string();

    let registry = catalog_registry(Arc::clone(&catalog));
    info!(tools = registry.list_schemas().len(), model = %model, "assistant ready");

    let preamble = config
        .conversation
        .system_prompt
        .clone()
        .unwrap_or_else(|| default_system_prompt(&catalog));
    let settings = ConversationSettings::new(preamble)
        .with_summarization_threshold(config.conversation.summarization_threshold as usize)
        .with_max_tool_rounds(config.conversation.max_tool_rounds);

    Ok(App {
        orchestrator: Orchestrator::new(Arc::new(client), Arc::new(registry), settings),
        model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_config_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/growthbot_no_such_config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn explicit_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[conversation]\nsummarization_threshold = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let args = Args {
            config: None,
            catalog: Some("/tmp/growthbot_no_such_catalog.json".into()),
            log_level: None,
        };
        let err = build(&args, &GrowthbotConfig::default()).err().unwrap();
        assert!(matches!(err, GrowthbotError::Catalog(_)));
    }
}
