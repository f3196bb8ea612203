// src/fetcher.rs

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{FetchConfig, MANIFEST_NAME};
use crate::downloader::{DownloadError, Downloader};
use crate::manifest;
use crate::models::Catalog;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to inspect {}: {}", .path.display(), .source)]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch {filename} from {url}: {source}")]
    Download {
        filename: String,
        url: String,
        #[source]
        source: DownloadError,
    },
    #[error("failed to write manifest {}: {}", .path.display(), .source)]
    Manifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Progress events emitted while a catalog is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Found(String),
    Fetching(String),
    WroteManifest(String),
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Found(name) => write!(f, "FOUND    {name}"),
            FetchStatus::Fetching(name) => write!(f, "FETCHING {name}"),
            FetchStatus::WroteManifest(name) => write!(f, "WROTE    {name}"),
        }
    }
}

/// Receives status events as they happen.
pub trait Reporter: Send + Sync {
    fn report(&self, status: &FetchStatus);
}

/// Prints one line per status to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, status: &FetchStatus) {
        println!("{status}");
    }
}

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Found,
    Fetched { bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct FetchReport {
    /// One outcome per catalog entry, in catalog order.
    pub entries: Vec<(String, EntryOutcome)>,
    pub manifest_path: PathBuf,
}

impl FetchReport {
    pub fn fetched_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, EntryOutcome::Fetched { .. }))
            .count()
    }

    pub fn found_count(&self) -> usize {
        self.entries.len() - self.fetched_count()
    }
}

/// Makes sure every catalog entry exists in the target directory, then writes the manifest.
pub struct Fetcher<R: Reporter = ConsoleReporter> {
    downloader: Downloader,
    config: FetchConfig,
    reporter: R,
}

impl Fetcher<ConsoleReporter> {
    pub fn new(downloader: Downloader, config: FetchConfig) -> Self {
        Self::with_reporter(downloader, config, ConsoleReporter)
    }
}

impl<R: Reporter> Fetcher<R> {
    pub fn with_reporter(downloader: Downloader, config: FetchConfig, reporter: R) -> Self {
        Self {
            downloader,
            config,
            reporter,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Process the catalog sequentially. The first error aborts the run and
    /// leaves the manifest untouched.
    pub async fn run(&self, catalog: &Catalog) -> Result<FetchReport, FetchError> {
        let target_dir = self.config.target_dir();
        tokio::fs::create_dir_all(&target_dir)
            .await
            .map_err(|source| FetchError::CreateDir {
                path: target_dir.clone(),
                source,
            })?;
        tracing::debug!(dir = %target_dir.display(), entries = catalog.len(), "target directory ready");

        let mut entries = Vec::with_capacity(catalog.len());
        for entry in catalog.entries() {
            let path = target_dir.join(&entry.filename);
            let outcome = if is_regular_file(&path).await? {
                self.emit(FetchStatus::Found(entry.filename.clone()));
                EntryOutcome::Found
            } else {
                self.emit(FetchStatus::Fetching(entry.filename.clone()));
                let bytes = self
                    .downloader
                    .fetch(&entry.url, &path)
                    .await
                    .map_err(|source| FetchError::Download {
                        filename: entry.filename.clone(),
                        url: entry.url.clone(),
                        source,
                    })?;
                EntryOutcome::Fetched { bytes }
            };
            entries.push((entry.filename.clone(), outcome));
        }

        let manifest_path = self.config.manifest_path();
        manifest::write_manifest(&manifest_path, catalog.filenames())
            .await
            .map_err(|source| FetchError::Manifest {
                path: manifest_path.clone(),
                source,
            })?;
        self.emit(FetchStatus::WroteManifest(MANIFEST_NAME.to_string()));

        Ok(FetchReport {
            entries,
            manifest_path,
        })
    }

    fn emit(&self, status: FetchStatus) {
        match &status {
            FetchStatus::Found(name) => tracing::info!(file = %name, "already present"),
            FetchStatus::Fetching(name) => tracing::info!(file = %name, "fetching"),
            FetchStatus::WroteManifest(name) => tracing::info!(file = %name, "manifest written"),
        }
        self.reporter.report(&status);
    }
}

/// Only a regular file counts as present; a directory or a missing path does not.
async fn is_regular_file(path: &Path) -> Result<bool, FetchError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(FetchError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}
