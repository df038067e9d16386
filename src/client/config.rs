//! Configuration of a [`CzdsClient`](crate::CzdsClient).

use crate::catalog::DEFAULT_DOWNLOAD_DIR;
use crate::engine::{Credentials, DEFAULT_API_ENDPOINT, DEFAULT_AUTH_ENDPOINT};
use crate::http::HttpClientConfig;
use crate::StyleOptions;

use std::path::PathBuf;

/// Everything needed to build a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account credentials.
    pub credentials: Credentials,
    /// Base URL of the authentication API.
    pub auth_endpoint: String,
    /// Base URL of the CZDS API.
    pub api_endpoint: String,
    /// Timeouts, proxy, default headers and transient retries.
    pub http: HttpClientConfig,
    /// Directory where zone files are written.
    pub download_dir: PathBuf,
    /// Number of zone files a bulk download transfers at once.
    pub concurrent_downloads: usize,
    /// Progress bar style options.
    pub style_options: StyleOptions,
}

impl ClientConfig {
    /// Default settings for the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            http: HttpClientConfig::default(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            concurrent_downloads: 1,
            style_options: StyleOptions::default(),
        }
    }
}
