//! # Wishlist Commands
//!
//! Commands for the saved-for-later list. The local copy is the source
//! of truth; the account service gets a best-effort push after every
//! change so a signed-in shopper keeps their list across devices.
//!
//! ## Offline Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  toggle_wishlist('asp-500')                                             │
//! │        │                                                                │
//! │        ├── 1. mutate in-memory wishlist        (always)                 │
//! │        ├── 2. save to local store              (warn on failure)        │
//! │        └── 3. push to account service          (warn on failure)        │
//! │                                                                         │
//! │  The command succeeds as long as step 1 does. Steps 2 and 3 are        │
//! │  durability and convenience, not correctness.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::{CoreError, WishlistItem};

impl Storefront {
    /// Gets the wishlist items.
    pub fn get_wishlist(&self) -> Vec<WishlistItem> {
        debug!("get_wishlist command");
        self.wishlist.with_wishlist(|w| w.items.clone())
    }

    /// Adds a product to the wishlist.
    ///
    /// Adding an already-wishlisted product is a no-op, not an error.
    /// Returns true if the product was newly added.
    pub async fn add_to_wishlist(&self, product_id: &str) -> StorefrontResult<bool> {
        debug!(product_id = %product_id, "add_to_wishlist command");

        let product = self.products.get_product(product_id).await?;
        let added = self.wishlist.with_wishlist_mut(|w| w.add(&product));

        if added {
            self.persist_wishlist();
            self.push_wishlist().await;
        }
        Ok(added)
    }

    /// Toggles a product's wishlist membership.
    ///
    /// Returns true if the product is on the list afterwards.
    pub async fn toggle_wishlist(&self, product_id: &str) -> StorefrontResult<bool> {
        debug!(product_id = %product_id, "toggle_wishlist command");

        // Removal needs no catalog round trip
        if self.wishlist.with_wishlist(|w| w.contains(product_id)) {
            self.wishlist.with_wishlist_mut(|w| w.remove(product_id))?;
            self.persist_wishlist();
            self.push_wishlist().await;
            return Ok(false);
        }

        self.add_to_wishlist(product_id).await?;
        Ok(true)
    }

    /// Removes a product from the wishlist.
    pub async fn remove_from_wishlist(&self, product_id: &str) -> StorefrontResult<()> {
        debug!(product_id = %product_id, "remove_from_wishlist command");

        self.wishlist.with_wishlist_mut(|w| w.remove(product_id))?;
        self.persist_wishlist();
        self.push_wishlist().await;
        Ok(())
    }

    /// Moves a wishlist item into the cart.
    ///
    /// The item leaves the wishlist only if the cart accepts it, so an
    /// out-of-stock product stays saved for later.
    pub async fn move_to_cart(&self, product_id: &str) -> StorefrontResult<()> {
        debug!(product_id = %product_id, "move_to_cart command");

        if !self.wishlist.with_wishlist(|w| w.contains(product_id)) {
            return Err(CoreError::ProductNotFound(product_id.to_string()).into());
        }

        self.add_to_cart(product_id, Some(1)).await?;

        self.wishlist.with_wishlist_mut(|w| {
            w.take(product_id);
        });
        self.persist_wishlist();
        self.push_wishlist().await;
        Ok(())
    }

    /// Empties the wishlist.
    pub async fn clear_wishlist(&self) {
        debug!("clear_wishlist command");

        self.wishlist.with_wishlist_mut(|w| w.clear());
        self.persist_wishlist();
        self.push_wishlist().await;
    }

    /// Replaces the local wishlist with the account service's copy.
    ///
    /// Used at sign-in. If the service has no wishlist the local one is
    /// kept as-is.
    pub async fn pull_wishlist(&self) -> StorefrontResult<usize> {
        debug!("pull_wishlist command");

        if let Some(remote) = self.users.get_wishlist().await? {
            let len = remote.len();
            self.wishlist.with_wishlist_mut(|w| *w = remote);
            self.persist_wishlist();
            return Ok(len);
        }
        Ok(self.wishlist.with_wishlist(|w| w.len()))
    }

    /// Writes the in-memory wishlist through to the store.
    pub(crate) fn persist_wishlist(&self) {
        let result = self
            .wishlist
            .with_wishlist(|w| self.store.wishlist().save(w));
        if let Err(e) = result {
            warn!(error = %e, "Wishlist persist failed; continuing with in-memory wishlist");
        }
    }

    /// Best-effort push of the wishlist to the account service.
    async fn push_wishlist(&self) {
        let snapshot = self.wishlist.with_wishlist(|w| w.clone());
        if let Err(e) = self.users.save_wishlist(&snapshot).await {
            warn!(error = %e, "Wishlist push failed; local copy remains authoritative");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{instant_storefront, offline_storefront};
    use crate::ErrorCode;

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let front = instant_storefront();

        assert!(front.add_to_wishlist("asp-500").await.unwrap());
        assert!(!front.add_to_wishlist("asp-500").await.unwrap());
        assert_eq!(front.get_wishlist().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_round_trip() {
        let front = instant_storefront();

        assert!(front.toggle_wishlist("asp-500").await.unwrap());
        assert!(!front.toggle_wishlist("asp-500").await.unwrap());
        assert!(front.get_wishlist().is_empty());
    }

    #[tokio::test]
    async fn test_clear_wishlist() {
        let front = instant_storefront();
        front.add_to_wishlist("asp-500").await.unwrap();
        front.add_to_wishlist("ibf-400").await.unwrap();

        front.clear_wishlist().await;
        assert!(front.get_wishlist().is_empty());
    }

    #[tokio::test]
    async fn test_move_to_cart_transfers_item() {
        let front = instant_storefront();
        front.add_to_wishlist("asp-500").await.unwrap();

        front.move_to_cart("asp-500").await.unwrap();

        assert!(front.get_wishlist().is_empty());
        assert_eq!(front.get_cart().items[0].product_id, "asp-500");
    }

    #[tokio::test]
    async fn test_move_to_cart_keeps_item_on_failure() {
        let front = instant_storefront();
        front.add_to_wishlist("multi-gummy").await.unwrap();

        // Out of stock: the cart refuses, the wishlist keeps the item
        let err = front.move_to_cart("multi-gummy").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(front.get_wishlist().len(), 1);
    }

    #[tokio::test]
    async fn test_offline_push_does_not_fail_command() {
        let (front, _users) = offline_storefront();

        assert!(front.add_to_wishlist("asp-500").await.unwrap());
        assert_eq!(front.get_wishlist().len(), 1);
    }

    #[tokio::test]
    async fn test_pull_replaces_local_copy() {
        let front = instant_storefront();
        front.add_to_wishlist("asp-500").await.unwrap(); // also pushed remotely
        front.remove_from_wishlist("asp-500").await.unwrap();
        front.add_to_wishlist("ibf-400").await.unwrap();

        // Remote now holds only ibf-400 (last push); pull mirrors it
        let len = front.pull_wishlist().await.unwrap();
        assert_eq!(len, 1);
        assert_eq!(front.get_wishlist()[0].product_id, "ibf-400");
    }
}
