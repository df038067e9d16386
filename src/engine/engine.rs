//! The authenticated request engine.
//!
//! [`Engine`] owns the credentials and the single bearer token, and is the
//! only component that talks to the network. It is cheap to clone: clones
//! share the HTTP client, the token slot and the progress display, so calls
//! can be spawned as independent tasks.
//!
//! # Example
//!
//! ```rust,no_run
//! use czds::engine::{Credentials, Endpoints, Engine};
//! use czds::http::HttpClientConfig;
//! use czds::progress::{ProgressDisplay, StyleOptions};
//!
//! # async fn example() -> czds::Result<()> {
//! let engine = Engine::new(
//!     Credentials::new("user@example.com", "secret"),
//!     Endpoints::default(),
//!     HttpClientConfig::default(),
//!     ProgressDisplay::new(StyleOptions::default()),
//! )?;
//!
//! let links: Vec<String> = engine.get("/czds/downloads/links").await?;
//! # Ok(())
//! # }
//! ```

use super::credentials::{Credentials, Endpoints};
use super::session::Session;
use super::transfer::{output_file_name, stream_to_file};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::ProgressDisplay;
use crate::{Error, Result};

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, Response, StatusCode, Url,
};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(default)]
    message: Option<String>,
}

struct Inner {
    client: ClientWithMiddleware,
    credentials: Credentials,
    endpoints: Endpoints,
    session: Session,
    progress: ProgressDisplay,
}

/// Authenticated access to the CZDS APIs.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<Inner>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("credentials", &self.inner.credentials)
            .field("endpoints", &self.inner.endpoints)
            .finish()
    }
}

impl Engine {
    /// Creates an engine. No network traffic happens until the first call.
    pub fn new(
        credentials: Credentials,
        endpoints: Endpoints,
        http: HttpClientConfig,
        progress: ProgressDisplay,
    ) -> Result<Self> {
        let client = create_http_client(http)?;
        Ok(Self {
            inner: Arc::new(Inner {
                client,
                credentials,
                endpoints,
                session: Session::new(),
                progress,
            }),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    pub fn progress(&self) -> &ProgressDisplay {
        &self.inner.progress
    }

    /// The bearer token currently held, if any.
    pub async fn token(&self) -> Option<String> {
        self.inner.session.current().await
    }

    /// Drops the held token; the next call authenticates again.
    pub async fn forget_token(&self) {
        self.inner.session.clear().await;
    }

    /// Obtains a bearer token unless one is already held.
    ///
    /// Fails with [`Error::InvalidCredentials`] on a `401` and with
    /// [`Error::AuthenticationFailed`] on any other non-success status.
    pub async fn authenticate(&self) -> Result<()> {
        self.bearer().await.map(|_| ())
    }

    async fn bearer(&self) -> Result<String> {
        self.inner.session.token_or_login(|| self.login()).await
    }

    async fn login(&self) -> Result<String> {
        let url = self.inner.endpoints.authenticate_url();
        let body = serde_json::to_vec(&self.inner.credentials.auth_request())?;
        debug!(url = %url, username = %self.inner.credentials.username(), "Authenticating");

        let response = self
            .inner
            .client
            .post(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Authentication response");

        if status.is_success() {
            let auth: AuthResponse = serde_json::from_slice(&response.bytes().await?)?;
            if let Some(message) = auth.message.as_deref() {
                debug!(message, "Authentication message");
            }
            info!("Authenticated as {}", self.inner.credentials.username());
            Ok(auth.access_token)
        } else if status == StatusCode::UNAUTHORIZED {
            Err(Error::InvalidCredentials)
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Authentication failed");
            Err(Error::authentication_failed(status, &body))
        }
    }

    fn request(&self, method: Method, url: &str, token: &str) -> RequestBuilder {
        self.inner
            .client
            .request(method, url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Sends one authenticated request; any non-success status is an [`Error::HttpError`].
    async fn send(
        &self,
        token: &str,
        method: Method,
        url: &str,
        payload: Option<&[u8]>,
    ) -> Result<Response> {
        debug!(method = %method, url, "Sending request");
        let mut req = self.request(method, url, token);
        if let Some(payload) = payload {
            req = req.body(payload.to_vec());
        }

        let response = req.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            debug!(status = %status, url, "Request rejected");
            Err(Error::HttpError { status })
        }
    }

    /// [`Engine::send`] with the single re-authentication retry on a `401`.
    async fn send_with_retry(
        &self,
        method: Method,
        url: &str,
        payload: Option<&[u8]>,
    ) -> Result<Response> {
        let token = self.bearer().await?;
        match self.send(&token, method.clone(), url, payload).await {
            Err(e) if e.is_token_rejected() => {
                info!("Bearer token rejected, authenticating again");
                self.inner.session.invalidate(&token).await;
                let token = self.bearer().await?;
                self.send(&token, method, url, payload).await
            }
            other => other,
        }
    }

    /// One authenticated call against `path` on the API base, without retry.
    ///
    /// `body` is only sent for `POST`, `PUT` and `PATCH`.
    pub async fn execute<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = encode_body(&method, body)?;
        let url = self.inner.endpoints.api_url(path);
        let token = self.bearer().await?;
        let response = self.send(&token, method, &url, payload.as_deref()).await?;
        decode(response).await
    }

    /// Like [`Engine::execute`], but a `401` clears the token, authenticates
    /// again and retries exactly once. Other errors are returned unchanged.
    pub async fn execute_with_retry<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = encode_body(&method, body)?;
        let url = self.inner.endpoints.api_url(path);
        let response = self
            .send_with_retry(method, &url, payload.as_deref())
            .await?;
        decode(response).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute_with_retry::<T, ()>(Method::GET, path, None)
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_retry(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_retry(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_with_retry(Method::PATCH, path, Some(body)).await
    }

    /// Sends a `DELETE` and reports whether the server answered with success.
    ///
    /// The body is never decoded. Goes through the same `401` retry as the
    /// other verbs.
    pub async fn delete(&self, path: &str) -> Result<bool> {
        let url = self.inner.endpoints.api_url(path);
        match self.send_with_retry(Method::DELETE, &url, None).await {
            Ok(_) => Ok(true),
            Err(Error::HttpError { status }) => {
                debug!(status = %status, path, "Delete was not successful");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Downloads the absolute `url` into `directory`, creating it if needed.
    ///
    /// The file is named after the last path segment of `url` plus `.gz` and
    /// an existing file with that name is overwritten. Progress is drawn as a
    /// percentage when the body length is announced, as a byte count
    /// otherwise.
    pub async fn download_file(&self, url: &str, directory: &Path) -> Result<PathBuf> {
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        let file_name = output_file_name(&parsed)?;
        info!(url, "Downloading");

        let response = self.send_with_retry(Method::GET, parsed.as_str(), None).await?;
        let content_length = response.content_length();
        if content_length.is_none() {
            warn!("File size is unknown, progress will show bytes received");
        }

        fs::create_dir_all(directory)
            .await
            .map_err(|source| Error::DownloadFailed {
                path: directory.to_path_buf(),
                source,
            })?;
        let path = directory.join(&file_name);

        let progress = &self.inner.progress;
        let pb = progress.transfer(&file_name, content_length);
        let written = stream_to_file(response, &path, &pb).await;
        progress.finish_transfer(pb);
        let written = written?;

        info!(path = %path.display(), bytes = written, "Download completed");
        Ok(path)
    }
}

fn encode_body<B>(method: &Method, body: Option<&B>) -> Result<Option<Vec<u8>>>
where
    B: Serialize + ?Sized,
{
    let carries_body = matches!(*method, Method::POST | Method::PUT | Method::PATCH);
    match body {
        Some(body) if carries_body => Ok(Some(serde_json::to_vec(body)?)),
        _ => Ok(None),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_only_for_write_verbs() {
        let body = json!({"a": 1});
        for method in [Method::POST, Method::PUT, Method::PATCH] {
            assert_eq!(
                encode_body(&method, Some(&body)).unwrap(),
                Some(br#"{"a":1}"#.to_vec())
            );
        }
        for method in [Method::GET, Method::DELETE] {
            assert_eq!(encode_body(&method, Some(&body)).unwrap(), None);
        }
        assert_eq!(encode_body::<()>(&Method::POST, None).unwrap(), None);
    }

    #[test]
    fn test_auth_response_parsing() {
        let auth: AuthResponse =
            serde_json::from_str(r#"{"accessToken": "abc", "message": "ok"}"#).unwrap();
        assert_eq!(auth.access_token, "abc");
        assert_eq!(auth.message.as_deref(), Some("ok"));

        let auth: AuthResponse = serde_json::from_str(r#"{"accessToken": "abc"}"#).unwrap();
        assert!(auth.message.is_none());
    }
}
