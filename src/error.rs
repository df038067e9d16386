//! Error handling for the CZDS client.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side
//! is the [`Error`] enum below. The variants split into three groups:
//!
//! - authentication failures raised while obtaining a token
//!   ([`Error::InvalidCredentials`], [`Error::AuthenticationFailed`]),
//! - request failures raised by the engine ([`Error::HttpError`],
//!   [`Error::DownloadFailed`] and the transport variants),
//! - catalog failures that only make sense for zone files
//!   ([`Error::Unauthorized`], [`Error::NotAuthorized`]).

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of bytes of an error body kept in [`Error::AuthenticationFailed`].
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Errors that can happen when talking to CZDS.
#[derive(Error, Debug)]
pub enum Error {
    /// The authentication endpoint rejected the username/password pair.
    ///
    /// This is never retried.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The authentication endpoint answered with an unexpected status.
    #[error("Authentication failed with HTTP status {status}: {body}")]
    AuthenticationFailed {
        /// Status returned by the authentication endpoint.
        status: StatusCode,
        /// Response body, truncated.
        body: String,
    },

    /// An authenticated request answered with a non-success status.
    ///
    /// A `401` is retried once by the engine after re-authenticating; any
    /// other status is final.
    #[error("HTTP error {status}")]
    HttpError {
        /// Status returned by the server.
        status: StatusCode,
    },

    /// The account is not authorized to download any zone.
    #[error("You are not authorized to download any TLDs")]
    Unauthorized,

    /// The account is not authorized to download the requested zone.
    #[error("You are not authorized to download the '.{identifier}' TLD")]
    NotAuthorized {
        /// The identifier that was requested.
        identifier: String,
    },

    /// Writing a downloaded file to disk failed.
    ///
    /// The partially written file is left in place.
    #[error("Download of {} failed", path.display())]
    DownloadFailed {
        /// Destination of the failed download.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A base endpoint or a zone link is not a usable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request body could not be encoded or a response body decoded.
    #[error("JSON error")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Build an [`Error::AuthenticationFailed`], truncating oversized bodies.
    pub(crate) fn authentication_failed(status: StatusCode, body: &str) -> Self {
        Error::AuthenticationFailed {
            status,
            body: truncate_body(body),
        }
    }

    /// Returns `true` if this error means the bearer token was rejected.
    pub fn is_token_rejected(&self) -> bool {
        matches!(self, Error::HttpError { status } if *status == StatusCode::UNAUTHORIZED)
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

/// Result type alias for operations that can fail with a CZDS [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
