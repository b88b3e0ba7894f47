//! # Wishlist State

use std::sync::{Arc, Mutex};

use carepoint_core::Wishlist;

/// Shared wishlist state for the session.
#[derive(Debug, Clone)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    pub fn new() -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(Wishlist::default())),
        }
    }

    /// Creates wishlist state hydrated from a persisted wishlist.
    pub fn from_wishlist(wishlist: Wishlist) -> Self {
        WishlistState {
            wishlist: Arc::new(Mutex::new(wishlist)),
        }
    }

    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&wishlist)
    }

    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.wishlist.lock().expect("Wishlist mutex poisoned");
        f(&mut wishlist)
    }
}

impl Default for WishlistState {
    fn default() -> Self {
        Self::new()
    }
}
