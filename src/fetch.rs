//! Single-endpoint fetch: one GET, one JSON decode, no retries.

use std::sync::atomic::Ordering;

use serde_json::Value;

use crate::error::FetchError;
use crate::session::SessionHandle;

impl SessionHandle {
    /// Fetch `base_url + endpoint` and decode the body as JSON.
    ///
    /// A single attempt per call; retries and timeouts are the transport's
    /// concern, not this layer's. The decoded value is returned unchanged,
    /// with no schema validation.
    pub async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        if self.inner.released.load(Ordering::SeqCst) {
            return Err(FetchError::UseAfterRelease);
        }

        let url = format!("{}{}", self.inner.base_url, endpoint);
        tracing::debug!(%url, "fetching");

        let response = self
            .inner
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                endpoint: endpoint.to_string(),
            });
        }

        // Read the body as text first so a malformed payload surfaces as a
        // decode error rather than a transport error.
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
