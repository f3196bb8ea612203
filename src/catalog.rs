// src/catalog.rs

use crate::config::MANIFEST_NAME;
use crate::models::{Catalog, ImageEntry};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("catalog has no images")]
    Empty,
    #[error("invalid filename {0:?}")]
    InvalidFilename(String),
    #[error("duplicate filename {0:?}")]
    DuplicateFilename(String),
    #[error("missing url for {0:?}")]
    MissingUrl(String),
}

/// On-disk form: a list of `[[image]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    image: Vec<ImageEntry>,
}

/// Load a catalog from a TOML file, keeping the file's order.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&content)
}

pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(content)?;
    Catalog::new(file.image)
}

/// Checks every entry can be stored as a single file in the target dir and
/// written as a single manifest line.
pub(crate) fn validate(entries: &[ImageEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    let mut seen = HashSet::new();
    for entry in entries {
        let name = entry.filename.as_str();
        // Names are joined onto the target dir, so they must stay a single component.
        if name.is_empty()
            || name == "."
            || name == ".."
            || name == MANIFEST_NAME
            || name.contains('/')
            || name.contains('\\')
            || name.chars().any(char::is_control)
            || name.trim() != name
        {
            return Err(CatalogError::InvalidFilename(name.to_string()));
        }
        if entry.url.trim().is_empty() {
            return Err(CatalogError::MissingUrl(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateFilename(name.to_string()));
        }
    }
    Ok(())
}
