//! # Cart
//!
//! The shopping cart: an ordered list of product snapshots with
//! quantities, and the derived totals the storefront displays.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action         Facade Command          Cart Change          │
//! │  ─────────────────         ──────────────          ───────────          │
//! │                                                                         │
//! │  Click "Add to cart" ─────► add_to_cart() ───────► merge or push        │
//! │                                                                         │
//! │  Change quantity ─────────► update_cart_item() ──► qty = n (0 removes)  │
//! │                                                                         │
//! │  Click remove ────────────► remove_from_cart() ──► retain(!= id)        │
//! │                                                                         │
//! │  Click clear ─────────────► clear_cart() ────────► items.clear()        │
//! │                                                                         │
//! │  Totals are recomputed by a linear scan on every read. O(n) per         │
//! │  operation is fine at storefront scale (tens of items).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: reference back to the catalog
/// - Everything else is a frozen snapshot taken when the line was created,
///   so the cart displays consistent data even if the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Brand at time of adding (frozen).
    pub brand: String,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Regular shelf price in cents (frozen).
    pub price_cents: i64,

    /// Price the shopper pays, in cents (frozen).
    /// All cart totals run on this field.
    pub discounted_price_cents: i64,

    /// Printed list price in cents (frozen), for the savings line.
    pub mrp_cents: i64,

    /// Quantity in cart. Always ≥ 1; a line at 0 is removed instead.
    pub quantity: i64,

    /// Product's own per-order limit at time of adding (frozen).
    /// Blobs written before this field existed load as `None`.
    #[serde(default)]
    pub max_quantity: Option<i64>,

    /// When this line was created.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// All three prices are captured at this moment. If the catalog price
    /// changes afterwards, this line keeps the originals.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            price_cents: product.price_cents,
            discounted_price_cents: product.discounted_price_cents,
            mrp_cents: product.mrp_cents,
            quantity,
            max_quantity: product.max_quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total at the paid price (discounted price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.discounted_price_cents * self.quantity
    }

    /// Line total at the printed list price.
    pub fn line_mrp_cents(&self) -> i64 {
        self.mrp_cents * self.quantity
    }

    /// What the shopper saves on this line relative to MRP.
    pub fn line_savings(&self) -> Money {
        Money::from_cents(self.line_mrp_cents() - self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product merges)
/// - Quantity is always ≥ 1 (an update to 0 or below removes the line)
/// - No upper bound on quantity or line count at this layer; the
///   storefront facade applies an optional configured per-item maximum
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub items: Vec<CartItem>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by `quantity`
    /// - Product not in cart: appended as a new line
    ///
    /// Quantities of 0 or below are treated as 1; callers validate input
    /// before reaching this layer.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        let quantity = quantity.max(1);

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            item.quantity += quantity;
            return;
        }

        self.items.push(CartItem::from_product(product, quantity));
    }

    /// Updates the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - Quantity < 1: removes the line (decrement-to-zero semantics)
    /// - Product not found: returns [`CoreError::ProductNotInCart`]
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity < 1 {
            return self.remove_item(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        }
    }

    /// Removes a line from the cart by product ID.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Returns the quantity currently in the cart for a product, if any.
    pub fn quantity_of(&self, product_id: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
    }

    /// Returns the frozen per-order limit for a product's line, if the
    /// line exists and carried one.
    pub fn max_quantity_of(&self, product_id: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .and_then(|i| i.max_quantity)
    }

    /// Number of unique lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Amount payable: Σ discounted price × quantity.
    pub fn total_amount_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Total at printed list prices.
    pub fn mrp_total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_mrp_cents()).sum()
    }

    /// "You save" line: MRP total minus amount payable.
    pub fn savings_cents(&self) -> i64 {
        self.mrp_total_cents() - self.total_amount_cents()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for DTO responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_amount_cents: i64,
    pub mrp_total_cents: i64,
    pub savings_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_amount_cents: cart.total_amount_cents(),
            mrp_total_cents: cart.mrp_total_cents(),
            savings_cents: cart.savings_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
