//! Authenticated requests against the CZDS APIs.
//!
//! - `credentials` - the username/password pair and the two base endpoints
//! - `session` - the single bearer token slot with single-flight login
//! - `engine` - [`Engine`], the generic verbs, the `401` retry and downloads
//! - `transfer` - streaming a response body to a file

pub mod credentials;
pub mod engine;
pub(crate) mod session;
pub mod transfer;

pub use credentials::{Credentials, Endpoints, DEFAULT_API_ENDPOINT, DEFAULT_AUTH_ENDPOINT};
pub use engine::Engine;
pub use transfer::{output_file_name, ARCHIVE_SUFFIX};
