//! # cart-core: Pure Cart State Machine
//!
//! This crate is the heart of the cart sync engine. It defines the cart
//! state, the explicit event union for the four remote operations, and the
//! pure reducer that applies events — with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Sync Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        UI Layer                                 │   │
//! │  │     reads { cartItems, subTotal, status, statusMessage }        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ subscribe / read                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  cart-store (async store)                       │   │
//! │  │     dispatches operations, talks HTTP, applies events           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reduce(state, event)                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ cart-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐        ┌───────────────────────────────┐   │   │
//! │  │   │    types      │        │           event               │   │   │
//! │  │   │  CartState    │        │  CartEvent (Pending/          │   │   │
//! │  │   │  CartSnapshot │        │   Fulfilled/Rejected)         │   │   │
//! │  │   │  SyncStatus   │        │  reduce()                     │   │   │
//! │  │   └───────────────┘        └───────────────────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: `reduce` is deterministic and total — same state and
//!    event always yield the same transition, and no event can fail.
//! 2. **No I/O**: network and clock access are FORBIDDEN here; the store
//!    crate owns all of that.
//! 3. **Server-Authoritative Data**: item order and subtotal come from the
//!    server and are never recomputed locally.
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{reduce, CartEvent, CartState, SyncStatus};
//!
//! let mut state = CartState::initial();
//! assert_eq!(state.status, SyncStatus::Idle);
//!
//! reduce(&mut state, CartEvent::FetchPending);
//! assert_eq!(state.status, SyncStatus::Loading);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod event;
pub mod types;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use event::{reduce, CartEvent, MutationKind};
pub use types::{CartLineItem, CartSnapshot, CartState, CartView, SyncStatus};
