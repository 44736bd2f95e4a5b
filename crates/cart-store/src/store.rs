//! # Cart Store
//!
//! The observable store owning the live [`CartState`].
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operation Flow                            │
//! │                                                                         │
//! │  UI Action              Store Operation           State Change          │
//! │  ─────────              ───────────────           ────────────          │
//! │                                                                         │
//! │  Open cart page ──────► fetch_cart() ──┐                                │
//! │  Click "Add" ─────────► add_to_cart() ─┼──► apply(Pending)   Loading    │
//! │  Click "Remove" ──────► remove_item() ─┤         │                      │
//! │  Click "−" ───────────► decrease() ────┘         ▼                      │
//! │                                            transport call               │
//! │                                           ┌──────┴──────┐              │
//! │                                      success         failure            │
//! │                                           │               │             │
//! │                                           ▼               ▼             │
//! │                                    apply(Fulfilled) apply(Rejected)     │
//! │                                         Idle            Error           │
//! │                                                                         │
//! │  Every apply() is one atomic watch notification: observers see the      │
//! │  pre- or post-event state, never a partial write.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Nothing serializes dispatch: several operations may be in flight at once,
//! and they all share one status field. Whichever settles last determines
//! the final status and message. Once dispatched, an operation always runs
//! to completion and applies its result; there is no cancellation.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::watch;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::TransportResult;
use crate::transport::{CartTransport, FetchResponse, Method, MutationResponse};
use cart_core::{reduce, CartEvent, CartState, CartView, MutationKind};

/// Builds the item-addressed query path, percent-encoding the id so
/// reserved characters (`&`, `#`, ...) cannot corrupt the query string.
fn item_query(item_id: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("itemId", item_id)
        .finish();
    format!("/cart?{query}")
}

/// Observable cart store.
///
/// Cheap to clone; clones share the same state and transport. Construct one
/// per session with [`CartStore::new`] and hand clones to whoever dispatches.
#[derive(Clone)]
pub struct CartStore {
    transport: Arc<dyn CartTransport>,
    state: watch::Sender<CartState>,
}

impl CartStore {
    /// Creates a store in the initial state (empty snapshot, Idle, no
    /// message). State lives for the lifetime of the store; nothing is
    /// persisted.
    pub fn new(transport: Arc<dyn CartTransport>) -> Self {
        let (state, _) = watch::channel(CartState::initial());
        CartStore { transport, state }
    }

    // =========================================================================
    // Read Surface
    // =========================================================================

    /// Subscribes to state changes. Each reducer application produces one
    /// notification carrying the whole state.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn read(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Returns the flattened UI view of the current state.
    pub fn view(&self) -> CartView {
        CartView::from(&*self.state.borrow())
    }

    /// Applies one event atomically and notifies subscribers.
    fn apply(&self, event: CartEvent) {
        self.state.send_modify(|state| reduce(state, event));
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Fetches the full cart and replaces the snapshot on success.
    ///
    /// This is the only operation that updates the snapshot. Failures are
    /// caught here and settle into `{ status: Error, status_message }` like
    /// every other operation; nothing propagates to the caller.
    pub async fn fetch_cart(&self) {
        debug!("fetch_cart dispatched");
        self.apply(CartEvent::FetchPending);

        let result: TransportResult<FetchResponse> = async {
            let payload = self.transport.request(Method::GET, "/cart", None).await?;
            Ok(serde_json::from_value(payload)?)
        }
        .await;

        match result {
            Ok(response) => {
                debug!(
                    items = response.cart.line_count(),
                    sub_total = response.cart.sub_total,
                    "fetch_cart fulfilled"
                );
                self.apply(CartEvent::FetchFulfilled {
                    cart: response.cart,
                    status: response.status,
                });
            }
            Err(err) => {
                warn!(retryable = err.is_retryable(), %err, "fetch_cart rejected");
                self.apply(CartEvent::FetchRejected {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Adds one unit of `item_id` to the cart.
    ///
    /// Item validity is enforced server-side; an unknown id comes back as a
    /// server note or an HTTP error, not a local check.
    pub async fn add_to_cart(&self, item_id: &str) {
        self.mutate(
            MutationKind::Add,
            Method::POST,
            "/cart".to_string(),
            Some(json!({ "itemId": item_id })),
            item_id,
        )
        .await;
    }

    /// Removes `item_id` from the cart entirely.
    pub async fn remove_from_cart(&self, item_id: &str) {
        self.mutate(
            MutationKind::Remove,
            Method::DELETE,
            item_query(item_id),
            None,
            item_id,
        )
        .await;
    }

    /// Decrements `item_id`'s quantity by one. Floor behavior (removal at
    /// zero) is the server's decision.
    pub async fn decrease_item_quantity(&self, item_id: &str) {
        self.mutate(
            MutationKind::Decrease,
            Method::PUT,
            item_query(item_id),
            None,
            item_id,
        )
        .await;
    }

    /// Shared settlement path for add/remove/decrease.
    ///
    /// A fulfilled mutation stores only the server's note; the snapshot is
    /// left untouched and callers re-fetch to observe the change.
    async fn mutate(
        &self,
        op: MutationKind,
        method: Method,
        path: String,
        body: Option<Value>,
        item_id: &str,
    ) {
        debug!(%op, item_id, "mutation dispatched");
        self.apply(CartEvent::MutationPending { op });

        let result: TransportResult<MutationResponse> = async {
            let payload = self.transport.request(method, &path, body).await?;
            Ok(serde_json::from_value(payload)?)
        }
        .await;

        match result {
            Ok(response) => {
                debug!(%op, item_id, note = ?response.error, "mutation fulfilled");
                self.apply(CartEvent::MutationFulfilled {
                    op,
                    server_note: response.error,
                });
            }
            Err(err) => {
                warn!(%op, item_id, retryable = err.is_retryable(), %err, "mutation rejected");
                self.apply(CartEvent::MutationRejected {
                    op,
                    message: err.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_query_plain_id() {
        assert_eq!(item_query("sku-1"), "/cart?itemId=sku-1");
    }

    #[test]
    fn test_item_query_encodes_reserved_characters() {
        assert_eq!(item_query("a&b#c"), "/cart?itemId=a%26b%23c");
    }
}
