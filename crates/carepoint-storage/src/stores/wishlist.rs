//! # Wishlist Store
//!
//! Persists the wishlist under the `wishlist` key. Same whole-blob
//! pattern as the cart store.
//!
//! This is also the local fallback target when the (mocked) user API is
//! offline: the facade writes here regardless, and pushes to the API on
//! a best-effort basis.

use std::sync::Arc;

use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::stores::{load_blob, save_blob};
use crate::WISHLIST_KEY;
use carepoint_core::Wishlist;

/// Store for the wishlist blob.
#[derive(Clone)]
pub struct WishlistStore {
    backend: Arc<dyn StorageBackend>,
}

impl WishlistStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        WishlistStore { backend }
    }

    /// Loads the persisted wishlist; absent blob yields an empty list.
    pub fn load(&self) -> StoreResult<Wishlist> {
        load_blob(&self.backend, WISHLIST_KEY)
    }

    /// Persists the full wishlist.
    pub fn save(&self, wishlist: &Wishlist) -> StoreResult<()> {
        debug!(entries = wishlist.len(), "Persisting wishlist");
        save_blob(&self.backend, WISHLIST_KEY, wishlist)
    }

    /// Removes the wishlist blob entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.remove(WISHLIST_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use carepoint_core::Product;

    #[test]
    fn test_round_trip() {
        let store = WishlistStore::new(Arc::new(MemoryBackend::new()));
        assert!(store.load().unwrap().is_empty());

        let mut wishlist = Wishlist::new();
        wishlist.add(&Product::sample("vitamin-c", 1299));
        store.save(&wishlist).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.contains("vitamin-c"));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
