pub mod catalog;
pub mod config;
pub mod downloader;
pub mod fetcher;
pub mod logging;
pub mod manifest;
pub mod models;

/// Convenient type alias exposing common structs.
pub mod prelude {
    pub use crate::catalog::{load_catalog, CatalogError};
    pub use crate::config::FetchConfig;
    pub use crate::downloader::{DownloadError, DownloadOptions, Downloader};
    pub use crate::fetcher::{
        ConsoleReporter, EntryOutcome, FetchError, FetchReport, FetchStatus, Fetcher, Reporter,
    };
    pub use crate::manifest::{read_manifest, write_manifest};
    pub use crate::models::{Catalog, ImageEntry};
}
