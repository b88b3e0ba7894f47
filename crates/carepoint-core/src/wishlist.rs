//! # Wishlist
//!
//! Saved-for-later product snapshots. A slimmer sibling of the cart:
//! no quantities, no totals, uniqueness by product id.
//!
//! Move-to-cart lives in the storefront facade because it needs the
//! catalog (to re-check stock) and the cart in one motion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Product};

/// A wishlist entry: a frozen product snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub image: String,
    pub discounted_price_cents: i64,
    pub mrp_cents: i64,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn from_product(product: &Product) -> Self {
        WishlistItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category,
            image: product.image.clone(),
            discounted_price_cents: product.discounted_price_cents,
            mrp_cents: product.mrp_cents,
            added_at: Utc::now(),
        }
    }
}

/// The wishlist.
///
/// ## Invariants
/// - Entries are unique by `product_id`
/// - Adding an already-present product is a no-op, not an error
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist { items: Vec::new() }
    }

    /// Adds a product snapshot.
    ///
    /// Returns `true` when the product was newly added, `false` when it was
    /// already present (idempotent).
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(WishlistItem::from_product(product));
        true
    }

    /// Removes an entry by product id.
    pub fn remove(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotFound(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Removes and returns an entry, for the move-to-cart flow.
    pub fn take(&mut self, product_id: &str) -> Option<WishlistItem> {
        let pos = self.items.iter().position(|i| i.product_id == product_id)?;
        Some(self.items.remove(pos))
    }

    /// Adds the product if absent, removes it if present (heart toggle).
    ///
    /// Returns `true` when the product is on the list afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.items.retain(|i| i.product_id != product.id);
            false
        } else {
            self.items.push(WishlistItem::from_product(product));
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        let product = Product::sample("1", 999);

        assert!(wishlist.add(&product));
        assert!(!wishlist.add(&product));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&Product::sample("1", 999));

        wishlist.remove("1").unwrap();
        assert!(wishlist.is_empty());

        assert!(wishlist.remove("1").is_err());
    }

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new();
        let product = Product::sample("1", 999);

        assert!(wishlist.toggle(&product));
        assert!(wishlist.contains("1"));
        assert!(!wishlist.toggle(&product));
        assert!(!wishlist.contains("1"));
    }

    #[test]
    fn test_take_for_move_to_cart() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&Product::sample("1", 999));

        let taken = wishlist.take("1").unwrap();
        assert_eq!(taken.product_id, "1");
        assert!(wishlist.is_empty());
        assert!(wishlist.take("1").is_none());
    }
}
