//! # cart-store: Observable Cart Store
//!
//! Session-local cart state synchronized with a remote cart service.
//!
//! The store owns one [`CartState`](cart_core::CartState) behind a watch
//! channel and mutates it exclusively through four async operations:
//! fetch, add, remove, and decrease. Each operation settles into the shared
//! state through the pure reducer in `cart-core`; failures are reduced to
//! their message text at the operation boundary and never propagate past
//! the store.
//!
//! ## Modules
//!
//! - [`store`] - [`CartStore`]: dispatch, subscribe, read
//! - [`transport`] - [`CartTransport`] capability and the reqwest-backed
//!   [`HttpTransport`]
//! - [`error`] - [`TransportError`] taxonomy
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cart_store::{CartStore, HttpTransport, TransportConfig};
//!
//! let transport = HttpTransport::new(TransportConfig {
//!     base_url: "http://localhost:4000/api".into(),
//!     ..Default::default()
//! })?;
//! let store = CartStore::new(Arc::new(transport));
//!
//! let mut changes = store.subscribe();
//! store.fetch_cart().await;
//! assert_eq!(store.read().status, cart_core::SyncStatus::Idle);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod transport;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use error::{TransportError, TransportResult};
pub use store::CartStore;
pub use transport::{
    CartTransport, FetchResponse, HttpTransport, Method, MutationResponse, TransportConfig,
};

// Re-export the pure core so hosts need a single dependency.
pub use cart_core::{CartLineItem, CartSnapshot, CartState, CartView, MutationKind, SyncStatus};
