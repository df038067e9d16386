//! Builder pattern implementation for creating [`CzdsClient`] instances.
//!
//! # Example
//!
//! ```rust
//! use czds::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> czds::Result<()> {
//! let client = ClientBuilder::new("user@example.com", "secret")
//!     .download_dir("zones".into())
//!     .concurrent_downloads(2)
//!     .read_timeout(Duration::from_secs(30))
//!     .build()?;
//! assert_eq!(client.downloader().concurrent_downloads(), 2);
//! # Ok(())
//! # }
//! ```

use super::{client::CzdsClient, config::ClientConfig};
use crate::engine::Credentials;
use crate::{ProgressBarOpts, Result, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create a [`CzdsClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Creates a builder with the default options.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(Credentials::new(username, password)),
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden(mut self) -> Self {
        self.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        self
    }

    /// Sets the base URL of the authentication API.
    pub fn auth_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.auth_endpoint = endpoint.into();
        self
    }

    /// Sets the base URL of the CZDS API.
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.api_endpoint = endpoint.into();
        self
    }

    /// Sets the directory where to store the zone files.
    pub fn download_dir(mut self, directory: PathBuf) -> Self {
        self.config.download_dir = directory;
        self
    }

    /// Set the number of concurrent downloads of a bulk download.
    pub fn concurrent_downloads(mut self, concurrent_downloads: usize) -> Self {
        self.config.concurrent_downloads = concurrent_downloads;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.connect_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.read_timeout = timeout;
        self
    }

    /// Retry transport failures (connection resets, 5xx) this many times.
    ///
    /// Independent from the re-authentication retry on `401`.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.http.retries = retries;
        self
    }

    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.http.proxy = Some(proxy);
        self
    }

    /// Add default http headers; repeated calls are merged.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add a single default http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .http
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Set the progress style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create the [`CzdsClient`], validating both endpoints.
    pub fn build(self) -> Result<CzdsClient> {
        CzdsClient::from_config(self.config)
    }
}
