//! Scoped API session: one HTTP client bound to a base URL, released on
//! every exit path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Client;

use crate::error::FetchError;

pub(crate) struct SessionInner {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) released: AtomicBool,
}

/// Guard owning the session for one pipeline run.
///
/// Dropping the guard releases the session, so release happens on normal
/// completion, error propagation, and cancellation alike. [`ApiSession::release`]
/// is the explicit form of the same thing.
pub struct ApiSession {
    inner: Arc<SessionInner>,
}

/// Cheap cloneable handle for issuing requests against the session.
///
/// Handles are read-only views: concurrent fetches share the client and base
/// URL without locking. A handle that outlives its session reports
/// [`FetchError::UseAfterRelease`] instead of issuing requests.
#[derive(Clone)]
pub struct SessionHandle {
    pub(crate) inner: Arc<SessionInner>,
}

impl ApiSession {
    /// Open a session for `base_url`. Builds the client; performs no I/O.
    pub fn open(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let base_url = base_url.into();
        let client = Client::builder().build().map_err(FetchError::ClientBuild)?;
        tracing::info!(base_url = %base_url, "opening session");

        Ok(Self {
            inner: Arc::new(SessionInner {
                client,
                base_url,
                released: AtomicBool::new(false),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Handle for issuing fetches; clone freely across concurrent tasks.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Release the session explicitly. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Drop for ApiSession {
    fn drop(&mut self) {
        // swap keeps release idempotent: exactly one close per session
        if !self.inner.released.swap(true, Ordering::SeqCst) {
            tracing::info!(base_url = %self.inner.base_url, "closing session");
        }
    }
}

impl SessionHandle {
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn is_released(&self) -> bool {
        self.inner.released.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_builds_without_io() {
        let session = ApiSession::open("http://localhost:1").unwrap();
        assert_eq!(session.base_url(), "http://localhost:1");
        assert!(!session.handle().is_released());
    }

    #[test]
    fn release_marks_surviving_handles() {
        let session = ApiSession::open("http://x").unwrap();
        let handle = session.handle();
        session.release();
        assert!(handle.is_released());
    }

    #[test]
    fn drop_releases_like_explicit_release() {
        let handle = {
            let session = ApiSession::open("http://x").unwrap();
            session.handle()
        };
        assert!(handle.is_released());
    }

    #[tokio::test]
    async fn fetch_after_release_fails() {
        let session = ApiSession::open("http://x").unwrap();
        let handle = session.handle();
        session.release();

        let err = handle.fetch_json("/a").await.unwrap_err();
        assert!(matches!(err, FetchError::UseAfterRelease));
    }
}
