//! # User Account Client
//!
//! Pushes and pulls the signed-in user's wishlist so it follows them
//! across devices. The mock keeps the "remote" copy in memory and can
//! be flipped offline to exercise the local-fallback path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use carepoint_core::Wishlist;

/// Remote user-account operations.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetches the server-side wishlist, if the user has one.
    async fn get_wishlist(&self) -> ApiResult<Option<Wishlist>>;

    /// Replaces the server-side wishlist with the local copy.
    async fn save_wishlist(&self, wishlist: &Wishlist) -> ApiResult<()>;
}

/// Mock user client with an in-memory remote wishlist.
pub struct MockUserApi {
    config: ApiConfig,
    remote: Mutex<Option<Wishlist>>,
    offline: Arc<AtomicBool>,
}

impl MockUserApi {
    pub fn new(config: ApiConfig) -> Self {
        MockUserApi {
            config,
            remote: Mutex::new(None),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flips the mock between online and offline. While offline every
    /// call fails with `ApiError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> ApiResult<()> {
        if self.is_offline() {
            return Err(ApiError::unavailable("user service"));
        }
        Ok(())
    }

    fn lock_remote(&self) -> ApiResult<std::sync::MutexGuard<'_, Option<Wishlist>>> {
        self.remote
            .lock()
            .map_err(|_| ApiError::unavailable("user service state poisoned"))
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn get_wishlist(&self) -> ApiResult<Option<Wishlist>> {
        debug!(url = %self.config.endpoint("user/wishlist"), "GET (mocked)");
        tokio::time::sleep(self.config.catalog_delay()).await;
        self.check_online()?;
        Ok(self.lock_remote()?.clone())
    }

    async fn save_wishlist(&self, wishlist: &Wishlist) -> ApiResult<()> {
        debug!(
            url = %self.config.endpoint("user/wishlist"),
            items = wishlist.len(),
            "PUT (mocked)"
        );
        tokio::time::sleep(self.config.catalog_delay()).await;
        self.check_online()?;
        *self.lock_remote()? = Some(wishlist.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepoint_core::Product;

    fn wishlist_with_one_item() -> Wishlist {
        let mut wishlist = Wishlist::default();
        wishlist.add(&Product::sample("asp-500", 2735));
        wishlist
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let api = MockUserApi::new(ApiConfig::instant());
        assert!(api.get_wishlist().await.unwrap().is_none());

        api.save_wishlist(&wishlist_with_one_item()).await.unwrap();

        let remote = api.get_wishlist().await.unwrap().unwrap();
        assert_eq!(remote.len(), 1);
        assert!(remote.contains("asp-500"));
    }

    #[tokio::test]
    async fn test_offline_fails_with_unavailable() {
        let api = MockUserApi::new(ApiConfig::instant());
        api.set_offline(true);

        let err = api.save_wishlist(&wishlist_with_one_item()).await.unwrap_err();
        assert!(err.is_retryable());

        api.set_offline(false);
        assert!(api.get_wishlist().await.is_ok());
    }
}
