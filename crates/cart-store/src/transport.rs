//! # Cart Transport
//!
//! The opaque request capability the store talks through, plus the real
//! HTTP implementation.
//!
//! ## Server Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Endpoints                                    │
//! │                                                                         │
//! │  GET    /cart                → { cart: { items, subTotal },             │
//! │                                  status: string|null }                  │
//! │  POST   /cart { itemId }     → { error: string|null, ...cart-shape }   │
//! │  DELETE /cart?itemId=<id>    → { error: string|null }                  │
//! │  PUT    /cart?itemId=<id>    → { error: string|null }                  │
//! │                                                                         │
//! │  NOTE: the `error` field on mutation responses is server-contract      │
//! │  naming for an informational note. It does NOT indicate failure;        │
//! │  failures surface as transport-level errors.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retry, backoff, and timeout policy beyond the single request timeout all
//! live outside this layer.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{TransportError, TransportResult};
use cart_core::CartSnapshot;

/// HTTP method for transport requests (re-exported from reqwest).
pub use reqwest::Method;

// =============================================================================
// Transport Capability
// =============================================================================

/// Opaque request capability consumed by the store.
///
/// One method, JSON in and out. The store never sees connection handling,
/// TLS, or serialization details; tests substitute scripted implementations.
#[async_trait]
pub trait CartTransport: Send + Sync {
    /// Issues one request and returns the decoded JSON response body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> TransportResult<Value>;
}

// =============================================================================
// Wire Payloads
// =============================================================================

/// Response body of `GET /cart`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    /// The full authoritative cart.
    pub cart: CartSnapshot,

    /// Server's informational status string, if any.
    #[serde(default)]
    pub status: Option<String>,
}

/// Response body of the three mutation endpoints.
///
/// Mutations may echo cart-shaped fields alongside `error`; those are
/// ignored here since a fulfilled mutation never updates the snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationResponse {
    /// Server note (informational despite the name).
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// Transport Configuration
// =============================================================================

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL of the cart service, e.g. `http://localhost:4000/api`.
    pub base_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            base_url: String::new(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

// =============================================================================
// HTTP Transport
// =============================================================================

/// Real HTTP implementation of [`CartTransport`] backed by reqwest.
///
/// ## Usage
/// ```rust,ignore
/// let transport = HttpTransport::new(TransportConfig {
///     base_url: "http://localhost:4000/api".into(),
///     ..Default::default()
/// })?;
///
/// let store = CartStore::new(Arc::new(transport));
/// ```
pub struct HttpTransport {
    client: reqwest::Client,
    /// Normalized base URL without a trailing slash.
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport, validating the base URL eagerly.
    pub fn new(config: TransportConfig) -> TransportResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        // Fail at construction, not on the first dispatch.
        Url::parse(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(TransportError::from)?;

        Ok(HttpTransport { client, base_url })
    }

    fn endpoint(&self, path: &str) -> TransportResult<Url> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(TransportError::from)
    }
}

#[async_trait]
impl CartTransport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> TransportResult<Value> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "issuing cart request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?.error_for_status()?;
        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transport_config_default() {
        let config = TransportConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.base_url.is_empty());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpTransport::new(TransportConfig {
            base_url: "not a url".into(),
            ..Default::default()
        });
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_joins_path_and_query() {
        let transport = HttpTransport::new(TransportConfig {
            base_url: "http://localhost:4000/api/".into(),
            ..Default::default()
        })
        .unwrap();

        let url = transport.endpoint("/cart?itemId=sku-1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/cart?itemId=sku-1");
    }

    #[test]
    fn test_fetch_response_decoding() {
        let payload = json!({
            "cart": { "items": [{ "itemId": "a", "qty": 1 }], "subTotal": 10 },
            "status": "ok"
        });

        let decoded: FetchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(decoded.cart.items.len(), 1);
        assert_eq!(decoded.cart.sub_total, 10.0);
        assert_eq!(decoded.status.as_deref(), Some("ok"));
    }

    #[test]
    fn test_mutation_response_tolerates_cart_shape() {
        // Mutation endpoints may echo the cart alongside the note.
        let payload = json!({
            "error": "Item added to cart",
            "items": [],
            "subTotal": 0
        });

        let decoded: MutationResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(decoded.error.as_deref(), Some("Item added to cart"));

        let bare: MutationResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare.error, None);
    }
}
