//! # Compare Store
//!
//! Persists the comparison list under the `compareList` key.
//!
//! The store persists whatever list it is handed; the category and size
//! invariants are enforced by `CompareList::add` in core before anything
//! reaches this layer.

use std::sync::Arc;

use tracing::debug;

use crate::backend::StorageBackend;
use crate::error::StoreResult;
use crate::stores::{load_blob, save_blob};
use crate::COMPARE_KEY;
use carepoint_core::CompareList;

/// Store for the compare-list blob.
#[derive(Clone)]
pub struct CompareStore {
    backend: Arc<dyn StorageBackend>,
}

impl CompareStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        CompareStore { backend }
    }

    /// Loads the persisted compare list; absent blob yields an empty list.
    pub fn load(&self) -> StoreResult<CompareList> {
        load_blob(&self.backend, COMPARE_KEY)
    }

    /// Persists the full compare list.
    pub fn save(&self, list: &CompareList) -> StoreResult<()> {
        debug!(entries = list.len(), "Persisting compare list");
        save_blob(&self.backend, COMPARE_KEY, list)
    }

    /// Removes the compare-list blob entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.remove(COMPARE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use carepoint_core::Product;

    #[test]
    fn test_round_trip_preserves_category_lock() {
        let store = CompareStore::new(Arc::new(MemoryBackend::new()));

        let mut list = CompareList::new();
        list.add(&Product::sample("thermo-1", 3999)).unwrap();
        store.save(&list).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.category(), list.category());
    }
}
