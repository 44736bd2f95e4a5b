//! # Cart State Types
//!
//! The data model for the synchronized cart.
//!
//! ## Who Owns What
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Data Ownership                                  │
//! │                                                                         │
//! │  SERVER OWNS                        CLIENT OWNS                         │
//! │  ─────────────────────────────      ─────────────────────────────       │
//! │  • Item order in the cart           • SyncStatus (Idle/Loading/Error)   │
//! │  • Line item contents               • status_message (last outcome)     │
//! │  • subTotal (never recomputed       • WHEN the snapshot is replaced     │
//! │    locally)                                                             │
//! │                                                                         │
//! │  The snapshot is authoritative server state as last confirmed.          │
//! │  A failed operation NEVER touches the snapshot.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Line Items & Snapshot
// =============================================================================

/// One entry in the cart.
///
/// ## Design Notes
/// - `item_id` is the only field this crate interprets; it addresses
///   add/remove/decrease operations.
/// - Everything else the server sends (name, price, quantity, image URL, ...)
///   is carried in `extra` and passed through to the UI unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Stable item identifier (catalog key).
    pub item_id: String,

    /// All other server-provided fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartLineItem {
    /// Creates a line item with no pass-through fields (mostly for tests).
    pub fn new(item_id: impl Into<String>) -> Self {
        CartLineItem {
            item_id: item_id.into(),
            extra: Map::new(),
        }
    }
}

/// The authoritative cart state as last confirmed by the server.
///
/// ## Invariants
/// - Item order is server-authoritative and preserved as received.
/// - `sub_total` is supplied by the server on every successful fetch;
///   it is never recomputed locally.
/// - Replaced wholesale, never patched item-by-item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Line items, in server order.
    pub items: Vec<CartLineItem>,

    /// Server-computed subtotal.
    pub sub_total: f64,
}

impl CartSnapshot {
    /// Returns the number of line items.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Sync Status
// =============================================================================

/// The store's current synchronization phase.
///
/// One shared field for all operations: whichever operation settles last
/// determines the final value (see the reducer for the transition rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// No operation in flight; the last one (if any) succeeded.
    #[default]
    Idle,
    /// At least one operation is in flight.
    Loading,
    /// The last settled operation failed. Re-enterable: a new dispatch
    /// moves back to Loading.
    Error,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Idle => write!(f, "idle"),
            SyncStatus::Loading => write!(f, "loading"),
            SyncStatus::Error => write!(f, "error"),
        }
    }
}

// =============================================================================
// Cart State (the owned root)
// =============================================================================

/// The single mutable root owned by the store.
///
/// ## Invariants
/// - `status` is Loading for the entire span between an operation's dispatch
///   and its settlement.
/// - `snapshot` is only replaced wholesale by a successful fetch; a failed
///   operation never mutates it.
/// - `status_message` is overwritten by every settled operation, never
///   accumulated; only the most recent outcome is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Server-confirmed cart contents.
    pub snapshot: CartSnapshot,

    /// Current synchronization phase.
    pub status: SyncStatus,

    /// Last human-readable outcome string (server note or error message).
    pub status_message: Option<String>,
}

impl CartState {
    /// Creates the initial state: empty snapshot, Idle, no message.
    pub fn initial() -> Self {
        CartState::default()
    }
}

// =============================================================================
// UI Read Surface
// =============================================================================

/// Flattened read view for UI consumption.
///
/// The UI reads `{ cartItems, subTotal, status, statusMessage }` and nothing
/// else; this keeps the snapshot/status nesting an internal detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub cart_items: Vec<CartLineItem>,
    pub sub_total: f64,
    pub status: SyncStatus,
    pub status_message: Option<String>,
}

impl From<&CartState> for CartView {
    fn from(state: &CartState) -> Self {
        CartView {
            cart_items: state.snapshot.items.clone(),
            sub_total: state.snapshot.sub_total,
            status: state.status,
            status_message: state.status_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state() {
        let state = CartState::initial();
        assert!(state.snapshot.items.is_empty());
        assert_eq!(state.snapshot.sub_total, 0.0);
        assert_eq!(state.status, SyncStatus::Idle);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_line_item_passes_unknown_fields_through() {
        let raw = json!({
            "itemId": "sku-42",
            "name": "Espresso Beans",
            "qty": 3,
            "price": 12.5
        });

        let item: CartLineItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(item.item_id, "sku-42");
        assert_eq!(item.extra["qty"], json!(3));

        // Round-trips with the pass-through fields intact.
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_snapshot_wire_names() {
        let snapshot: CartSnapshot = serde_json::from_value(json!({
            "items": [{ "itemId": "a", "qty": 1 }],
            "subTotal": 10
        }))
        .unwrap();

        assert_eq!(snapshot.line_count(), 1);
        assert_eq!(snapshot.sub_total, 10.0);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SyncStatus::Idle.to_string(), "idle");
        assert_eq!(SyncStatus::Loading.to_string(), "loading");
        assert_eq!(SyncStatus::Error.to_string(), "error");
    }

    #[test]
    fn test_view_flattens_state() {
        let state = CartState {
            snapshot: CartSnapshot {
                items: vec![CartLineItem::new("a")],
                sub_total: 10.0,
            },
            status: SyncStatus::Idle,
            status_message: Some("ok".into()),
        };

        let view = CartView::from(&state);
        assert_eq!(view.cart_items.len(), 1);
        assert_eq!(view.sub_total, 10.0);
        assert_eq!(view.status_message.as_deref(), Some("ok"));
    }
}
