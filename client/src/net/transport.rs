//! HTTP transport seam.
//!
//! Handlers only need the status code of a POST, so the trait reports that
//! and nothing else. The `hydrate` build sends through `gloo-net`; tests
//! record requests and replay a canned status.

#![allow(async_fn_in_trait)]

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

/// `true` for any 2xx status.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Issues POST requests and reports the response status.
pub trait Transport {
    /// `POST url` with no body.
    async fn post_empty(&self, url: &str) -> Result<u16, TransportError>;

    /// `POST url` with `body` encoded as JSON and `Content-type: application/json`.
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn post_empty(&self, url: &str) -> Result<u16, TransportError> {
        (**self).post_empty(url).await
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError> {
        (**self).post_json(url, body).await
    }
}

/// Browser transport backed by `fetch` through `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn post_empty(&self, url: &str) -> Result<u16, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(resp.status())
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError> {
        let payload = serde_json::to_string(body).map_err(|e| TransportError::Encode(e.to_string()))?;
        let resp = gloo_net::http::Request::post(url)
            .header("Content-type", "application/json")
            .body(payload)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(resp.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_success_covers_2xx_only() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(404));
        assert!(!is_success(500));
    }

    #[test]
    fn transport_error_messages() {
        assert_eq!(TransportError::Network("offline".into()).to_string(), "request failed: offline");
        assert_eq!(
            TransportError::Encode("bad".into()).to_string(),
            "request body could not be encoded: bad"
        );
    }
}
