//! # Store Handle
//!
//! The main persistence handle providing typed store access.
//!
//! ## Design: One Handle, Typed Stores
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront facade                                                      │
//! │                                                                         │
//! │  Store::new(backend)                                                    │
//! │       │                                                                 │
//! │       ├── store.cart()      ──► CartStore      (key "cart")            │
//! │       ├── store.wishlist()  ──► WishlistStore  (key "wishlist")        │
//! │       ├── store.compare()   ──► CompareStore   (key "compareList")     │
//! │       └── store.orders()    ──► OrderStore     (key "orders")          │
//! │                                                                         │
//! │  Typed stores are cheap handles over the shared Arc'd backend, so      │
//! │  accessor calls clone pointers, not data.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::stores::cart::CartStore;
use crate::stores::compare::CompareStore;
use crate::stores::orders::OrderStore;
use crate::stores::wishlist::WishlistStore;

/// Persistence handle for the storefront.
///
/// Wraps an injected [`StorageBackend`] and hands out typed stores.
/// Cloning is cheap (Arc).
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Creates a store over any backend.
    ///
    /// ## Example
    /// ```rust
    /// use carepoint_storage::{MemoryBackend, Store};
    ///
    /// let store = Store::new(MemoryBackend::new());
    /// assert!(store.cart().load().unwrap().is_empty());
    /// ```
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Store {
            backend: Arc::new(backend),
        }
    }

    /// Creates a store over an already-shared backend.
    pub fn from_arc(backend: Arc<dyn StorageBackend>) -> Self {
        Store { backend }
    }

    /// Returns the cart store.
    pub fn cart(&self) -> CartStore {
        CartStore::new(self.backend.clone())
    }

    /// Returns the wishlist store.
    pub fn wishlist(&self) -> WishlistStore {
        WishlistStore::new(self.backend.clone())
    }

    /// Returns the compare-list store.
    pub fn compare(&self) -> CompareStore {
        CompareStore::new(self.backend.clone())
    }

    /// Returns the order-history store.
    pub fn orders(&self) -> OrderStore {
        OrderStore::new(self.backend.clone())
    }

    /// Wipes every blob (the "clear site data" path).
    pub fn wipe(&self) -> StoreResult<()> {
        info!("Wiping all storefront blobs");
        self.backend.clear()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
