// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use rawfetch::logging;
use rawfetch::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Download the RAW test images and write their index.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Directory that holds the `testimages` folder
    #[arg(long, default_value = rawfetch::config::DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// TOML file with `[[image]]` entries replacing the built-in list
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the catalog and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("rawfetch: {err:#}");
    }

    if let Err(err) = run(Opts::parse()).await {
        eprintln!("rawfetch error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(opts: Opts) -> Result<()> {
    let catalog = match &opts.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    if opts.list {
        for entry in catalog.entries() {
            match &entry.description {
                Some(desc) => println!("{:<30} {}  ({})", entry.filename, entry.url, desc),
                None => println!("{:<30} {}", entry.filename, entry.url),
            }
        }
        return Ok(());
    }

    let config = FetchConfig {
        timeout: opts.timeout.map(Duration::from_secs),
        ..FetchConfig::with_base_dir(&opts.base_dir)
    };
    let downloader = Downloader::new(DownloadOptions {
        timeout: config.timeout,
        ..DownloadOptions::default()
    })
    .context("building HTTP client")?;

    let fetcher = Fetcher::new(downloader, config);
    let report = fetcher.run(&catalog).await?;
    tracing::info!(
        fetched = report.fetched_count(),
        found = report.found_count(),
        manifest = %report.manifest_path.display(),
        "done"
    );
    Ok(())
}
