use std::path::Path;

use growthbot_common::CatalogLoadError;
use tracing::info;

use super::types::Catalog;

/// Read and decode the catalog document at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogLoadError::NotFound(path.to_path_buf()),
        _ => CatalogLoadError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    let catalog = parse_catalog(&content).map_err(|e| match e {
        CatalogLoadError::Malformed { message, .. } => CatalogLoadError::Malformed {
            path: path.to_path_buf(),
            message,
        },
        other => other,
    })?;

    info!(
        path = %path.display(),
        services = catalog.services().len(),
        "loaded service catalog"
    );
    Ok(catalog)
}

/// Decode a catalog from its JSON text.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogLoadError> {
    serde_json::from_str(content).map_err(|e| CatalogLoadError::Malformed {
        path: Default::default(),
        message: e.to_string(),
    })
}
