//! Account credentials and service endpoints.

use crate::{Error, Result};
use reqwest::Url;
use serde::Serialize;
use std::fmt;

/// Default base URL of the ICANN account (authentication) API.
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://account-api.icann.org";
/// Default base URL of the CZDS API.
pub const DEFAULT_API_ENDPOINT: &str = "https://czds-api.icann.org";

/// Path of the authentication call, relative to the auth base.
const AUTHENTICATE_PATH: &str = "/api/authenticate/";

/// Immutable username/password pair.
///
/// The password never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Body of the authentication request.
    pub(crate) fn auth_request(&self) -> AuthRequest<'_> {
        AuthRequest {
            username: &self.username,
            password: &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Base URLs of the authentication and CZDS APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    auth_base: String,
    api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_base: DEFAULT_AUTH_ENDPOINT.to_string(),
            api_base: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}

impl Endpoints {
    /// Validates both base URLs and strips trailing slashes.
    pub fn new(auth_base: &str, api_base: &str) -> Result<Self> {
        Ok(Self {
            auth_base: normalize_base(auth_base)?,
            api_base: normalize_base(api_base)?,
        })
    }

    pub fn auth_base(&self) -> &str {
        &self.auth_base
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL of the authentication call.
    pub fn authenticate_url(&self) -> String {
        format!("{}{}", self.auth_base, AUTHENTICATE_PATH)
    }

    /// Full URL of an API path such as `/czds/downloads/links`.
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

fn normalize_base(base: &str) -> Result<String> {
    let trimmed = base.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(Error::InvalidUrl(format!(
            "{base}: unsupported scheme '{scheme}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_auth_request_field_names() {
        let credentials = Credentials::new("alice", "hunter2");
        let body = serde_json::to_value(credentials.auth_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"username": "alice", "password": "hunter2"})
        );
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.authenticate_url(),
            "https://account-api.icann.org/api/authenticate/"
        );
        assert_eq!(
            endpoints.api_url("/czds/downloads/links"),
            "https://czds-api.icann.org/czds/downloads/links"
        );
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        let endpoints = Endpoints::new("http://127.0.0.1:8080/", "http://127.0.0.1:9090//").unwrap();
        assert_eq!(endpoints.auth_base(), "http://127.0.0.1:8080");
        assert_eq!(endpoints.api_url("czds/x"), "http://127.0.0.1:9090/czds/x");
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        assert!(matches!(
            Endpoints::new("not a url", DEFAULT_API_ENDPOINT),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            Endpoints::new(DEFAULT_AUTH_ENDPOINT, "ftp://example.com"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
