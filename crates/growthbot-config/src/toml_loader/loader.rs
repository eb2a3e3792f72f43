//! Reading `config.toml`, and seeding it from the template on first run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::schema::GrowthbotConfig;
use crate::validation;
use growthbot_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;

const APP_DIR: &str = "growthbot";
const CONFIG_FILE: &str = "config.toml";

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. If validation fails, a warning
/// is logged and the parsed config is returned as-is; callers that need a
/// hard failure run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<GrowthbotConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: GrowthbotConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// `<config_dir>/growthbot/config.toml`, or `None` on platforms without a
/// per-user config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the per-user config, seeding it from the template when absent.
/// Without a config directory the built-in defaults are used.
pub fn load_default() -> Result<GrowthbotConfig, ConfigError> {
    let Some(path) = default_config_path() else {
        warn!("no per-user config directory, using built-in defaults");
        return Ok(GrowthbotConfig::default());
    };

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            write_template(&path)?;
            Ok(GrowthbotConfig::default())
        }
        loaded => loaded,
    }
}

/// Write the commented template to `path`, creating parent directories.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    let write_failed = |e: io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(&write_failed)?;
    }
    fs::write(path, default_config_toml()).map_err(write_failed)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
