//! # Cart Store
//!
//! Persists the cart under the `cart` key as one JSON blob.
//!
//! ## Access Pattern
//! ```text
//! load() ──► full Cart deserialized (empty cart when the key is absent)
//! save() ──► full Cart serialized and written back
//! clear() ──► key removed
//! ```
//! Whole-blob writes on every mutation are O(n) in cart size, which is
//! fine at storefront scale (tens of lines).

use std::sync::Arc;

use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::stores::{load_blob, save_blob};
use crate::CART_KEY;
use carepoint_core::Cart;

/// Store for the shopping cart blob.
#[derive(Clone)]
pub struct CartStore {
    backend: Arc<dyn StorageBackend>,
}

impl CartStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        CartStore { backend }
    }

    /// Loads the persisted cart; an absent blob yields an empty cart.
    pub fn load(&self) -> StoreResult<Cart> {
        load_blob(&self.backend, CART_KEY)
    }

    /// Persists the full cart.
    pub fn save(&self, cart: &Cart) -> StoreResult<()> {
        debug!(lines = cart.item_count(), "Persisting cart");
        save_blob(&self.backend, CART_KEY, cart)
    }

    /// Removes the cart blob entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.remove(CART_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use carepoint_core::Product;

    fn cart_store() -> CartStore {
        CartStore::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_load_absent_is_empty_cart() {
        assert!(cart_store().load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = cart_store();

        let mut cart = Cart::new();
        cart.add_item(&Product::sample("asp-500", 2735), 2);
        store.save(&cart).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.item_count(), 1);
        assert_eq!(loaded.total_amount_cents(), 5470);
        assert_eq!(loaded.items[0].product_id, "asp-500");
    }

    #[test]
    fn test_clear_removes_blob() {
        let store = cart_store();

        let mut cart = Cart::new();
        cart.add_item(&Product::sample("1", 999), 1);
        store.save(&cart).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
