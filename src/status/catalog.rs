//! Status catalog loading.

use crate::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

/// On-disk layout of the status file.
#[derive(Debug, Deserialize)]
struct StatusFile {
    statuses: Vec<String>,
}

/// Ordered, non-empty list of status phrases.
///
/// Construction fails on an empty list, so every holder of a catalog can
/// index into it without checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    statuses: Vec<String>,
}

impl StatusCatalog {
    /// Wraps a list of phrases. Returns `None` if the list is empty.
    pub fn new(statuses: Vec<String>) -> Option<Self> {
        if statuses.is_empty() {
            None
        } else {
            Some(Self { statuses })
        }
    }

    /// Loads the catalog from a YAML file with a top-level `statuses` list.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: StatusFile =
            serde_yaml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog =
            Self::new(file.statuses).ok_or_else(|| CatalogError::Empty(path.to_path_buf()))?;

        tracing::debug!(path = %path.display(), count = catalog.len(), "Status catalog loaded");
        Ok(catalog)
    }

    /// Number of phrases. Always at least 1.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Phrase at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.statuses.get(index).map(String::as_str)
    }

    /// Phrases in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statuses.iter().map(String::as_str)
    }
}
