pub mod errors;
pub mod id;

pub use errors::{CatalogLoadError, ConfigError, GrowthbotError};
pub use id::SessionId;

pub type Result<T> = std::result::Result<T, GrowthbotError>;
