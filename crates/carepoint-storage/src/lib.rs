//! # carepoint-storage: Persistence Layer for the CarePoint Storefront
//!
//! This crate provides persistence for the storefront engine. It models the
//! original deployment target - browser localStorage - as a schema-less
//! key/value blob store with pluggable backends.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CarePoint Data Flow                                  │
//! │                                                                         │
//! │  Storefront command (add_to_cart)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 carepoint-storage (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Typed stores │    │   Backends   │  │   │
//! │  │   │  (store.rs)   │    │ (stores/*.rs) │    │ (backend.rs) │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ cart()        │◄───│ CartStore     │───►│ Memory       │  │   │
//! │  │   │ wishlist()    │    │ WishlistStore │    │ File (1 blob │  │   │
//! │  │   │ orders()      │    │ OrderStore    │    │  per key)    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  JSON blobs under well-known keys: "cart", "wishlist",                 │
//! │  "compareList", "orders" - no version tag, no migrations              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The `StorageBackend` trait, `MemoryBackend`, `FileBackend`
//! - [`store`] - The `Store` handle giving access to typed stores
//! - [`stores`] - Typed stores (cart, wishlist, compare, orders)
//! - [`error`] - Storage error types
//!
//! ## Known Limitation
//! Two `Store` handles over the same FileBackend directory can overwrite
//! each other's blobs - the same race two browser tabs have over
//! localStorage. Single-session deployments are the design target.
//!
//! ## Usage
//!
//! ```rust
//! use carepoint_storage::{MemoryBackend, Store};
//! use carepoint_core::Cart;
//!
//! let store = Store::new(MemoryBackend::new());
//!
//! let mut cart = Cart::new();
//! store.cart().save(&cart)?;
//! let loaded = store.cart().load()?;
//! assert!(loaded.is_empty());
//! # Ok::<(), carepoint_storage::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod error;
pub mod store;
pub mod stores;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::{StoreError, StoreResult};
pub use store::Store;

// Typed store re-exports for convenience
pub use stores::cart::CartStore;
pub use stores::compare::CompareStore;
pub use stores::orders::OrderStore;
pub use stores::wishlist::WishlistStore;

// =============================================================================
// Well-Known Storage Keys
// =============================================================================
// Key names are inherited verbatim from the storefront's localStorage
// layout so a future WASM build can read existing browser state.

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Key holding the serialized wishlist.
pub const WISHLIST_KEY: &str = "wishlist";

/// Key holding the serialized compare list.
pub const COMPARE_KEY: &str = "compareList";

/// Key holding the serialized order history array.
pub const ORDERS_KEY: &str = "orders";
