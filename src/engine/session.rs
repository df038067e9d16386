//! The bearer token slot.
//!
//! A [`Session`] holds at most one token. The slot is locked for the whole
//! duration of a login, so concurrent callers that find it empty wait for the
//! single in-flight authentication instead of each starting their own.

use crate::Result;
use std::future::Future;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
pub(crate) struct Session {
    slot: Mutex<Option<String>>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the held token, running `login` first if there is none.
    ///
    /// A failed login leaves the slot empty.
    pub(crate) async fn token_or_login<F, Fut>(&self, login: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        let token = login().await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Drops `rejected` from the slot.
    ///
    /// Does nothing if another caller already replaced it, so a burst of
    /// `401`s for the same token leads to a single re-authentication.
    pub(crate) async fn invalidate(&self, rejected: &str) -> bool {
        let mut slot = self.slot.lock().await;
        if slot.as_deref() == Some(rejected) {
            debug!("Clearing rejected bearer token");
            *slot = None;
            true
        } else {
            false
        }
    }

    pub(crate) async fn current(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }

    pub(crate) async fn clear(&self) {
        *self.slot.lock().await = None;
    }
}
