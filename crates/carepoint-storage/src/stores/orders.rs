//! # Order Store
//!
//! Append-only order history under the `orders` key.
//!
//! ## Order Lifecycle (storage view)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order History                                     │
//! │                                                                         │
//! │  1. APPEND (checkout completion, exactly once per order)               │
//! │     └── append(order) → history.push + full blob rewrite               │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     └── all() / get_by_id() / count()                                  │
//! │                                                                         │
//! │  There is NO update or delete path: orders are immutable after         │
//! │  creation. History only shrinks when the whole store is wiped.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use crate::backend::StorageBackend;
use crate::error::{StoreError, StoreResult};
use crate::stores::{load_blob, save_blob};
use crate::ORDERS_KEY;
use carepoint_core::Order;

/// Store for the append-only order history.
#[derive(Clone)]
pub struct OrderStore {
    backend: Arc<dyn StorageBackend>,
}

impl OrderStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        OrderStore { backend }
    }

    /// Appends a placed order to history.
    ///
    /// Unlike cart/wishlist writes, a failure here PROPAGATES: losing a
    /// placed order is not an acceptable divergence, so the facade
    /// surfaces it instead of logging and moving on.
    pub fn append(&self, order: &Order) -> StoreResult<()> {
        let mut history: Vec<Order> = load_blob(&self.backend, ORDERS_KEY)?;
        history.push(order.clone());
        save_blob(&self.backend, ORDERS_KEY, &history)?;

        info!(order_id = %order.id, total_cents = order.total_cents, "Order appended to history");
        Ok(())
    }

    /// Returns the full order history, oldest first.
    pub fn all(&self) -> StoreResult<Vec<Order>> {
        load_blob(&self.backend, ORDERS_KEY)
    }

    /// Looks up one order by id.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Order> {
        self.all()?
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))
    }

    /// Number of orders in history.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use carepoint_core::{
        Order, OrderItem, OrderStatus, PaymentMethod, ShippingAddress, ShippingMethod,
    };
    use chrono::Utc;

    fn sample_order(id: &str) -> Order {
        let created = Utc::now();
        Order {
            id: id.to_string(),
            items: vec![OrderItem {
                product_id: "asp-500".to_string(),
                name: "Aspirin 500mg".to_string(),
                unit_price_cents: 2735,
                quantity: 2,
                line_total_cents: 5470,
            }],
            shipping_address: ShippingAddress {
                full_name: "Asha Verma".to_string(),
                email: "asha@example.com".to_string(),
                phone: "5551234567".to_string(),
                line1: "12 Elm Street".to_string(),
                line2: None,
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62704".to_string(),
                country: "US".to_string(),
            },
            shipping_method: ShippingMethod::Standard,
            payment_method: PaymentMethod::Card,
            subtotal_cents: 5470,
            shipping_cost_cents: 499,
            payment_fee_cents: 0,
            total_cents: 5969,
            currency: "USD".to_string(),
            status: OrderStatus::Confirmed,
            created_at: created,
            estimated_delivery: Order::estimate_delivery(created),
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let store = OrderStore::new(Arc::new(MemoryBackend::new()));
        assert_eq!(store.count().unwrap(), 0);

        store.append(&sample_order("order-1")).unwrap();
        store.append(&sample_order("order-2")).unwrap();

        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        // Oldest first
        assert_eq!(all[0].id, "order-1");
        assert_eq!(all[1].id, "order-2");
    }

    #[test]
    fn test_get_by_id() {
        let store = OrderStore::new(Arc::new(MemoryBackend::new()));
        store.append(&sample_order("order-1")).unwrap();

        let order = store.get_by_id("order-1").unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);

        let err = store.get_by_id("ghost").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
