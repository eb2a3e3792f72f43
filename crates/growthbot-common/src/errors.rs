use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("failed to write config {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Failure to load the service catalog. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read catalog {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("malformed catalog {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GrowthbotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}
