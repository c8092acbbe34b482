//! City catalog: which cities can be explored and where their trip data lives.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;

/// One supported city and the CSV file holding its trips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub file: PathBuf,
}

/// Read-only city → CSV mapping, kept in prompt order.
///
/// The built-in catalog covers the three bundled cities. A different set can be
/// loaded from a JSON array on disk:
/// ```json
/// [
///   { "name": "chicago", "file": "chicago.csv" },
///   { "name": "dc", "file": "dc.csv" }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct CityCatalog {
    entries: Vec<CityEntry>,
}

impl Default for CityCatalog {
    fn default() -> Self {
        let entries = [
            ("chicago", "chicago.csv"),
            ("new york city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ]
        .into_iter()
        .map(|(name, file)| CityEntry {
            name: name.to_string(),
            file: PathBuf::from(file),
        })
        .collect();

        Self { entries }
    }
}

impl CityCatalog {
    /// Builds a catalog, lower-casing names and rejecting an empty list, blank names
    /// or duplicates.
    pub fn new(entries: Vec<CityEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.name.trim().to_lowercase();
            if name.is_empty() {
                return Err(CatalogError::BlankName(entry.file));
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::Duplicate(name));
            }
            normalized.push(CityEntry {
                name,
                file: entry.file,
            });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Loads the catalog from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: Vec<CityEntry> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(entries)
    }

    /// City names in prompt order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Resolves `city` to its CSV path, joining relative file names onto `data_dir`.
    pub fn resolve(&self, city: &str, data_dir: &Path) -> Result<PathBuf, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.name == city)
            .map(|e| data_dir.join(&e.file))
            .ok_or_else(|| CatalogError::UnknownCity(city.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
