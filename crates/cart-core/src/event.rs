//! # Cart Events & Reducer
//!
//! Every remote operation settles into the shared state through exactly one
//! path: an explicit event applied by the pure reducer.
//!
//! ## Status Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Sync Status Machine                             │
//! │                                                                         │
//! │                 any *Pending event                                      │
//! │   ┌────────┐ ───────────────────────► ┌─────────┐                      │
//! │   │  Idle  │                          │ Loading │                      │
//! │   └────────┘ ◄─────────────────────── └────┬────┘                      │
//! │        ▲        *Fulfilled event           │                            │
//! │        │                                   │  *Rejected event           │
//! │        │                                   ▼                            │
//! │        │        any *Pending event    ┌─────────┐                      │
//! │        └───────────────────────────── │  Error  │                      │
//! │              (Error is re-enterable)  └─────────┘                      │
//! │                                                                         │
//! │  ONE SHARED STATUS FIELD                                                │
//! │  ───────────────────────                                                │
//! │  The store does not track which operation is in flight. If two          │
//! │  operations overlap, whichever settles last determines the final        │
//! │  status and message (last writer wins).                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fetch vs. Mutations
//! A fulfilled fetch replaces the snapshot wholesale. A fulfilled mutation
//! stores only the server's note and leaves the snapshot untouched; callers
//! are expected to re-fetch to observe the change. This asymmetry is
//! inherited from the server contract (see DESIGN.md for the discussion).

use crate::types::{CartSnapshot, CartState, SyncStatus};

// =============================================================================
// Events
// =============================================================================

/// Which cart mutation an event belongs to.
///
/// Add, remove, and decrease share identical settlement handling; the kind
/// is carried for logging and diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Add one unit of an item.
    Add,
    /// Remove an item entirely.
    Remove,
    /// Decrement an item's quantity by one.
    Decrease,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Add => write!(f, "add"),
            MutationKind::Remove => write!(f, "remove"),
            MutationKind::Decrease => write!(f, "decrease"),
        }
    }
}

/// A settled or in-flight phase of one cart operation.
///
/// ## Design Principles
/// - Each operation has an explicit Pending/Fulfilled/Rejected triple;
///   there is no stringly-typed dispatch.
/// - Rejected events carry only the failure's message text. Stack traces
///   and error chains are stripped at the operation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    /// A cart fetch was dispatched.
    FetchPending,

    /// A cart fetch succeeded. Carries the full server snapshot plus the
    /// server's informational status string.
    FetchFulfilled {
        cart: CartSnapshot,
        status: Option<String>,
    },

    /// A cart fetch failed at the transport level.
    FetchRejected { message: String },

    /// A mutation (add/remove/decrease) was dispatched.
    MutationPending { op: MutationKind },

    /// A mutation succeeded. `server_note` is the server's `error` field,
    /// which is informational despite the name; the snapshot is NOT updated.
    MutationFulfilled {
        op: MutationKind,
        server_note: Option<String>,
    },

    /// A mutation failed at the transport level.
    MutationRejected { op: MutationKind, message: String },
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies one event to the state.
///
/// Pure and total: no I/O, no failure path, every event maps to exactly one
/// transition. Hosts must apply events atomically with respect to readers
/// (a reader sees pre- or post-state, never a partial write).
pub fn reduce(state: &mut CartState, event: CartEvent) {
    match event {
        CartEvent::FetchPending | CartEvent::MutationPending { .. } => {
            state.status = SyncStatus::Loading;
        }

        CartEvent::FetchFulfilled { cart, status } => {
            state.status = SyncStatus::Idle;
            state.snapshot = cart;
            state.status_message = status;
        }

        // Snapshot intentionally untouched: the server reports the outcome
        // as a note and the caller re-fetches for contents.
        CartEvent::MutationFulfilled { server_note, .. } => {
            state.status = SyncStatus::Idle;
            state.status_message = server_note;
        }

        CartEvent::FetchRejected { message }
        | CartEvent::MutationRejected { message, .. } => {
            state.status = SyncStatus::Error;
            state.status_message = Some(message);
        }
    }
}
