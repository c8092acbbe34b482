//! Runtime settings assembled from the command line and environment.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::catalog::CityCatalog;
use crate::error::CatalogError;

/// Everything a session needs to locate city data.
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: CityCatalog,
    /// Relative catalog file names resolve against this directory.
    pub data_dir: PathBuf,
}

impl Settings {
    /// Uses the catalog file at `catalog_path` if given, else the built-in catalog.
    pub fn resolve(data_dir: PathBuf, catalog_path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match catalog_path {
            Some(path) => {
                let catalog = CityCatalog::load(path)?;
                info!(path = %path.display(), cities = catalog.len(), "Loaded city catalog");
                catalog
            }
            None => CityCatalog::default(),
        };

        Ok(Self { catalog, data_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_defaults_to_builtin_catalog() {
        let settings = Settings::resolve(PathBuf::from("."), None).unwrap();
        assert_eq!(settings.catalog.len(), 3);
        assert_eq!(settings.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_catalog_file_overrides() {
        let path = env::temp_dir().join("bikeshare_explorer_test_settings.json");
        fs::write(&path, r#"[{"name": "dc", "file": "dc.csv"}]"#).unwrap();

        let settings = Settings::resolve(PathBuf::from("/data"), Some(&path)).unwrap();
        assert_eq!(settings.catalog.names(), vec!["dc"]);

        fs::remove_file(&path).unwrap();
    }
}
