//! Catalog file loading and saving.
//!
//! Deployments ship the achievement catalog as a versioned TOML file; a
//! missing file falls back to the built-in definitions.

use std::path::{Path, PathBuf};

use super::{definitions, AchievementCatalog, CatalogError, CATALOG_FORMAT_VERSION};

/// Get the platform data directory for catalog files.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "halloffame", "HallOfFame")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default catalog file path.
pub fn default_catalog_path() -> PathBuf {
    get_data_dir().join("achievements.toml")
}

/// Load a catalog from a TOML file.
///
/// A missing file yields the built-in definitions; a present file must carry
/// the current format version and pass validation.
pub fn load_catalog(path: &Path) -> Result<AchievementCatalog, CatalogError> {
    if !path.exists() {
        return Ok(definitions::default_catalog());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;

    let catalog: AchievementCatalog =
        toml::from_str(&content).map_err(|e| CatalogError::ParseError(e.to_string()))?;

    if catalog.version != CATALOG_FORMAT_VERSION {
        return Err(CatalogError::UnsupportedVersion(catalog.version));
    }

    catalog.validate()?;

    Ok(catalog)
}

/// Save a catalog to a TOML file.
pub fn save_catalog(path: &Path, catalog: &AchievementCatalog) -> Result<(), CatalogError> {
    catalog.validate()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(catalog).map_err(|e| CatalogError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| CatalogError::IoError(e.to_string()))?;

    Ok(())
}
