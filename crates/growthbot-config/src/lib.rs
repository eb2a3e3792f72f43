//! GrowthBot configuration and catalog loading.
//!
//! Provides TOML-based configuration with defaults for every section, so
//! partial configs work out of the box, plus the JSON service catalog that
//! backs the assistant's tools.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use growthbot_config::{load_catalog, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let catalog = load_catalog(&config.catalog.path).expect("catalog is required");
//! println!("{} services", catalog.services().len());
//! ```

pub mod catalog;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use catalog::{load_catalog, Catalog, CompanyInfo, ContactInfo, ServiceEntry};
pub use schema::{GrowthbotConfig, CONFIG_SCHEMA_VERSION};

use growthbot_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<GrowthbotConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_serializes_all_sections() {
        let toml = toml::to_string(&GrowthbotConfig::default()).unwrap();
        assert!(toml.contains("[model]"));
        assert!(toml.contains("[conversation]"));
        assert!(toml.contains("[catalog]"));
        assert!(toml.contains("[logging]"));
    }
}
