// src/config.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_DIR: &str = "tests";
/// Folder under the base dir that holds the images and the manifest.
pub const TARGET_DIR_NAME: &str = "testimages";
pub const MANIFEST_NAME: &str = "index.txt";

/// Where fetched images and the manifest live.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_dir: PathBuf,
    /// Per-request timeout. `None` leaves it to the HTTP client.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            timeout: None,
        }
    }
}

impl FetchConfig {
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// e.g. `tests/testimages`
    pub fn target_dir(&self) -> PathBuf {
        self.base_dir.join(TARGET_DIR_NAME)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.target_dir().join(MANIFEST_NAME)
    }
}
