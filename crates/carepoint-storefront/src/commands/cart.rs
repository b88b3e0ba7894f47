//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │  Wizard  │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::{Cart, CartItem, CartTotals, CoreError};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

impl Storefront {
    /// Gets the current cart contents with derived totals.
    pub fn get_cart(&self) -> CartView {
        debug!("get_cart command");
        self.cart.with_cart(|c| CartView::from(c))
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: the line's quantity increases
    /// - Product not in cart: added as a new line
    /// - Prices are frozen at time of adding
    ///
    /// ## Arguments
    /// * `product_id` - Catalog id to add
    /// * `quantity` - Quantity to add (default: 1)
    pub async fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<i64>,
    ) -> StorefrontResult<CartView> {
        let quantity = quantity.unwrap_or(1).max(1);
        debug!(product_id = %product_id, quantity, "add_to_cart command");

        let product = self.products.get_product(product_id).await?;
        if !product.in_stock {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            }
            .into());
        }

        let in_cart = self
            .cart
            .with_cart(|c| c.quantity_of(product_id))
            .unwrap_or(0);
        let new_quantity = in_cart + quantity;
        if let Some(max) = self.line_quantity_cap(product.max_quantity) {
            if new_quantity > max {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_quantity,
                    max,
                }
                .into());
            }
        }

        let view = self.cart.with_cart_mut(|c| {
            c.add_item(&product, quantity);
            CartView::from(&*c)
        });

        self.persist_cart();
        Ok(view)
    }

    /// Updates the quantity of a cart line.
    ///
    /// ## Behavior
    /// - Quantity below 1: removes the line
    /// - Product not in cart: returns an error
    pub fn update_cart_item(
        &self,
        product_id: &str,
        quantity: i64,
    ) -> StorefrontResult<CartView> {
        debug!(product_id = %product_id, quantity, "update_cart_item command");

        if quantity >= 1 {
            // The product limit was frozen onto the line when it was added,
            // so the cap applies without another catalog round trip.
            let product_max = self.cart.with_cart(|c| c.max_quantity_of(product_id));
            if let Some(max) = self.line_quantity_cap(product_max) {
                if quantity > max {
                    return Err(CoreError::QuantityTooLarge {
                        requested: quantity,
                        max,
                    }
                    .into());
                }
            }
        }

        let view = self.cart.with_cart_mut(|c| {
            c.update_quantity(product_id, quantity)?;
            Ok::<CartView, CoreError>(CartView::from(&*c))
        })?;

        self.persist_cart();
        Ok(view)
    }

    /// Removes a line from the cart.
    pub fn remove_from_cart(&self, product_id: &str) -> StorefrontResult<CartView> {
        debug!(product_id = %product_id, "remove_from_cart command");

        let view = self.cart.with_cart_mut(|c| {
            c.remove_item(product_id)?;
            Ok::<CartView, CoreError>(CartView::from(&*c))
        })?;

        self.persist_cart();
        Ok(view)
    }

    /// Clears all lines from the cart.
    pub fn clear_cart(&self) -> CartView {
        debug!("clear_cart command");

        let view = self.cart.with_cart_mut(|c| {
            c.clear();
            CartView::from(&*c)
        });

        self.persist_cart();
        view
    }

    /// Effective per-line quantity cap: the tighter of the configured cap
    /// and the product's own limit, if either exists.
    fn line_quantity_cap(&self, product_max: Option<i64>) -> Option<i64> {
        match (self.config.max_quantity_per_item, product_max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Writes the in-memory cart through to the store.
    ///
    /// A failed write is logged and the session keeps going; the
    /// in-memory cart stays authoritative until the next save attempt.
    pub(crate) fn persist_cart(&self) {
        let result = self.cart.with_cart(|c| self.store.cart().save(c));
        if let Err(e) = result {
            warn!(error = %e, "Cart persist failed; continuing with in-memory cart");
        }
    }
}
