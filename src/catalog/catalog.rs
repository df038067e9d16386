//! Zone discovery and bulk/single downloads.
//!
//! [`ZoneCatalog`] asks the engine for the authorized links every time it
//! needs them; nothing is cached between calls, so each listing reflects the
//! account's current approvals.
//!
//! # Example
//!
//! ```rust,no_run
//! use czds::CzdsClient;
//!
//! # async fn example() -> czds::Result<()> {
//! let client = CzdsClient::new("user@example.com", "secret")?;
//! for tld in client.downloader().list_approved_identifiers().await? {
//!     println!("{tld}");
//! }
//! let path = client.downloader().download_one("com").await?;
//! # Ok(())
//! # }
//! ```

use super::zone::ZoneLink;
use crate::engine::Engine;
use crate::{Error, Result};

use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// API path listing the zone files the account may download.
pub const LINKS_PATH: &str = "/czds/downloads/links";
/// Directory zone files are written to unless configured otherwise.
pub const DEFAULT_DOWNLOAD_DIR: &str = "./Downloads/";

/// Lists and downloads the zone files of an account.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    engine: Engine,
    download_dir: PathBuf,
    concurrent_downloads: usize,
}

impl ZoneCatalog {
    /// Creates a catalog that downloads one file at a time.
    pub fn new(engine: Engine, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            download_dir: download_dir.into(),
            concurrent_downloads: 1,
        }
    }

    /// Sets how many files [`ZoneCatalog::download_all`] transfers at once.
    ///
    /// Values below 1 are treated as 1.
    pub fn with_concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.concurrent_downloads = concurrent_downloads.max(1);
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn set_download_dir(&mut self, download_dir: impl Into<PathBuf>) {
        self.download_dir = download_dir.into();
        debug!(path = %self.download_dir.display(), "Download directory updated");
    }

    pub fn concurrent_downloads(&self) -> usize {
        self.concurrent_downloads
    }

    /// Fetches the authorized zone links, in server order.
    pub async fn list_download_links(&self) -> Result<Vec<ZoneLink>> {
        let links: Vec<ZoneLink> = self.engine.get(LINKS_PATH).await?;
        debug!(count = links.len(), "Fetched zone links");
        Ok(links)
    }

    /// Identifiers of the authorized zones, in link order, duplicates kept.
    pub async fn list_approved_identifiers(&self) -> Result<Vec<String>> {
        Ok(self
            .list_download_links()
            .await?
            .iter()
            .map(|link| link.identifier().to_string())
            .collect())
    }

    /// Downloads every authorized zone file.
    ///
    /// Fails with [`Error::Unauthorized`] before any transfer when the account
    /// has no approved zone. The first failed download aborts the batch. The
    /// returned paths follow link order.
    pub async fn download_all(&self) -> Result<Vec<PathBuf>> {
        let links = self.list_download_links().await?;
        if links.is_empty() {
            return Err(Error::Unauthorized);
        }
        info!(
            count = links.len(),
            directory = %self.download_dir.display(),
            "Downloading all approved zones"
        );

        let progress = self.engine.progress();
        let batch = progress.batch(links.len());
        let done = &batch;

        let result = stream::iter(links.iter())
            .map(|link| async move {
                let path = self
                    .engine
                    .download_file(link.as_str(), &self.download_dir)
                    .await?;
                done.inc(1);
                Ok::<_, Error>(path)
            })
            .buffered(self.concurrent_downloads)
            .try_collect::<Vec<_>>()
            .await;

        progress.finish_batch(batch);
        result
    }

    /// Downloads the zone file of `identifier` (`com` or `.com`).
    ///
    /// The first link, in server order, whose final segment is
    /// `<identifier>.zone` is downloaded. Fails with [`Error::NotAuthorized`]
    /// when there is none.
    pub async fn download_one(&self, identifier: &str) -> Result<PathBuf> {
        let wanted = identifier.trim().trim_start_matches('.');
        let links = self.list_download_links().await?;

        let link = links
            .iter()
            .find(|link| link.matches(wanted))
            .ok_or_else(|| Error::NotAuthorized {
                identifier: wanted.to_string(),
            })?;

        self.engine
            .download_file(link.as_str(), &self.download_dir)
            .await
    }
}
