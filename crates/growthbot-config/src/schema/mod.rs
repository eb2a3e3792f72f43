//! Configuration schema types for GrowthBot.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod conversation;
mod model;
mod system;

pub use conversation::*;
pub use model::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for GrowthBot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthbotConfig {
    pub model: ModelConfig,
    pub conversation: ConversationConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}
