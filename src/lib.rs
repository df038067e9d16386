//! A client for ICANN's Centralized Zone Data Service (CZDS).
//!
//! It logs in with an account's username and password, lists the zone files
//! the account is approved for and downloads them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use czds::{CzdsClient, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = CzdsClient::builder("user@example.com", "secret")
//!     .download_dir("zones".into())
//!     .build()?;
//!
//! let tlds = client.downloader().list_approved_identifiers().await?;
//! println!("approved: {}", tlds.join(", "));
//!
//! let files = client.downloader().download_all().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`engine`] - Authentication, the bearer token and authenticated requests
//! - [`catalog`] - Zone link listing and bulk/single downloads
//! - [`client`] - [`CzdsClient`] and its builder
//! - [`error`] - The [`Error`] enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display

pub mod catalog;
pub mod client;
pub mod engine;
pub mod error;
pub mod http;
pub mod progress;

pub use catalog::{ZoneCatalog, ZoneLink};
pub use client::{ClientBuilder, ClientConfig, CzdsClient};
pub use engine::{Credentials, Endpoints, Engine};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig};
pub use progress::{ProgressBarOpts, ProgressDisplay, StyleOptions};
