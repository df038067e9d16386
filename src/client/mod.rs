//! Client construction.
//!
//! - `client` - [`CzdsClient`], composing the engine and the zone catalog
//! - `builder` - [`ClientBuilder`] for configuring endpoints, timeouts and downloads
//! - `config` - [`ClientConfig`] with the defaults

pub mod builder;
pub mod client;
pub mod config;

pub use builder::ClientBuilder;
pub use client::CzdsClient;
pub use config::ClientConfig;
