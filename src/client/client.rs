//! The composed CZDS client.

use super::{builder::ClientBuilder, config::ClientConfig};
use crate::catalog::ZoneCatalog;
use crate::engine::{Endpoints, Engine};
use crate::progress::ProgressDisplay;
use crate::Result;

/// Entry point: an [`Engine`] plus the [`ZoneCatalog`] built on it.
///
/// ```rust
/// # fn main() -> czds::Result<()> {
/// use czds::CzdsClient;
///
/// let client = CzdsClient::new("user@example.com", "secret")?;
/// assert_eq!(client.engine().endpoints().api_base(), "https://czds-api.icann.org");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CzdsClient {
    engine: Engine,
    downloader: ZoneCatalog,
}

impl CzdsClient {
    /// A client against the public ICANN endpoints with default settings.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(username, password).build()
    }

    /// A builder starting from the default settings.
    pub fn builder(username: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(username, password)
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let endpoints = Endpoints::new(&config.auth_endpoint, &config.api_endpoint)?;
        let progress = ProgressDisplay::new(config.style_options);
        let engine = Engine::new(config.credentials, endpoints, config.http, progress)?;
        let downloader = ZoneCatalog::new(engine.clone(), config.download_dir)
            .with_concurrent_downloads(config.concurrent_downloads);

        Ok(Self { engine, downloader })
    }

    /// The zone catalog and downloader.
    pub fn downloader(&self) -> &ZoneCatalog {
        &self.downloader
    }

    pub fn downloader_mut(&mut self) -> &mut ZoneCatalog {
        &mut self.downloader
    }

    /// The underlying request engine, for calls the catalog does not cover.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
