use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use reqwest::Client;
use thiserror::Error;
use futures_util::StreamExt;

/// Errors raised while retrieving a single file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// DNS, connection, or non-2xx status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for the HTTP client.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

/// Single-attempt HTTP retrieval of a URL into a local file.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: Client,
    options: DownloadOptions,
}

impl Downloader {
    /// Create a new downloader with provided options.
    pub fn new(options: DownloadOptions) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .build()?;
        Ok(Self { client, options })
    }

    /// Download `url` and write the body verbatim to `destination`.
    ///
    /// The file is created (or truncated) before the body arrives. If the
    /// transfer fails midway, the partial file is left where it is.
    /// Returns the number of bytes written.
    pub async fn fetch(&self, url: &str, destination: &Path) -> Result<u64, DownloadError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.options.timeout {
            request = request.timeout(timeout);
        }
        let resp = request.send().await?.error_for_status()?;
        tracing::debug!(url, status = %resp.status(), "response received");

        let mut file = File::create(destination).await?;
        let mut written = 0u64;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let bytes = chunk?;
            file.write_all(&bytes).await?;
            written += bytes.len() as u64;
        }
        file.flush().await?;

        tracing::debug!(url, path = %destination.display(), bytes = written, "download finished");
        Ok(written)
    }
}
