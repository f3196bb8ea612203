// src/models.rs

use crate::catalog::{self, CatalogError};
use serde::{Deserialize, Serialize};

/// A single test asset: the name it is stored under locally and where it comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageEntry {
    /// Logical filename. Used both as the local filename and as the manifest line.
    pub filename: String,
    pub url: String,
    /// Camera model and compression mode, only shown by `--list`.
    #[serde(default)]
    pub description: Option<String>,
}

impl ImageEntry {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered, immutable list of images to fetch.
/// Order only matters for the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, duplicate names and names
    /// that are not a single plain path component.
    pub fn new(entries: Vec<ImageEntry>) -> Result<Self, CatalogError> {
        catalog::validate(&entries)?;
        Ok(Self { entries })
    }

    /// The RAW samples hosted on raw.pixls.us.
    pub fn builtin() -> Self {
        let entries = vec![
            ImageEntry::new(
                "fuji_xs10_uncompressed.raf",
                "https://raw.pixls.us/getfile.php/4188/nice/Fujifilm%20-%20X-S10%20-%2014bit%20uncompressed%20(3:2).RAF",
            )
            .with_description("Fujifilm X-S10, uncompressed"),
            ImageEntry::new(
                "fuji_xs10_lossless.raf",
                "https://raw.pixls.us/getfile.php/4189/nice/Fujifilm%20-%20X-S10%20-%2014bit%20compressed%20(3:2).RAF",
            )
            .with_description("Fujifilm X-S10, lossless compressed"),
            ImageEntry::new(
                "canon_eos600d.cr2",
                "https://raw.pixls.us/getfile.php/1586/nice/Canon%20-%20EOS%20600D%20-%20RAW%20(3:2).CR2",
            )
            .with_description("Canon EOS 600D"),
            ImageEntry::new(
                "canon_5dmkiii.cr2",
                "https://raw.pixls.us/getfile.php/771/nice/Canon%20-%20EOS%205D%20Mark%20III.CR2",
            )
            .with_description("Canon EOS 5D Mark III"),
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical filenames in catalog order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.filename.as_str())
    }
}
