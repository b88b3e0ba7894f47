//! # Typed Stores
//!
//! One store per persisted collection, all following the same shape:
//! load the full JSON blob, operate, write the full blob back. That is
//! the localStorage access pattern this layer preserves.
//!
//! - [`cart`] - the shopping cart (key `cart`)
//! - [`wishlist`] - saved products (key `wishlist`)
//! - [`compare`] - the comparison list (key `compareList`)
//! - [`orders`] - append-only order history (key `orders`)

pub mod cart;
pub mod compare;
pub mod orders;
pub mod wishlist;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};

/// Loads and deserializes the blob under `key`, or `T::default()` when the
/// key is absent.
///
/// An absent blob is the normal first-run state, not an error.
pub(crate) fn load_blob<T>(backend: &Arc<dyn StorageBackend>, key: &str) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
{
    match backend.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::serialization(key, e)),
        None => Ok(T::default()),
    }
}

/// Serializes `value` and writes it as the full blob under `key`.
pub(crate) fn save_blob<T>(backend: &Arc<dyn StorageBackend>, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|e| StoreError::serialization(key, e))?;
    backend.set(key, &raw)
}
