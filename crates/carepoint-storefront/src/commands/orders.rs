//! # Order History Commands
//!
//! Read-only views over the append-only order history.

use tracing::debug;

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::Order;

impl Storefront {
    /// Gets the full order history, oldest first.
    pub fn get_order_history(&self) -> StorefrontResult<Vec<Order>> {
        debug!("get_order_history command");
        Ok(self.store.orders().all()?)
    }

    /// Gets one order by id.
    pub fn get_order(&self, order_id: &str) -> StorefrontResult<Order> {
        debug!(order_id = %order_id, "get_order command");
        Ok(self.store.orders().get_by_id(order_id)?)
    }

    /// Number of orders placed.
    pub fn order_count(&self) -> StorefrontResult<usize> {
        Ok(self.store.orders().count()?)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{instant_storefront, place_sample_order};
    use crate::ErrorCode;

    #[tokio::test]
    async fn test_get_order_by_id() {
        let front = instant_storefront();
        let placed = place_sample_order(&front).await;

        let loaded = front.get_order(&placed.id).unwrap();
        assert_eq!(loaded.total_cents, placed.total_cents);

        let err = front.get_order("ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_history_is_oldest_first() {
        let front = instant_storefront();
        let first = place_sample_order(&front).await;
        let second = place_sample_order(&front).await;

        let orders = front.get_order_history().unwrap();
        assert_eq!(orders[0].id, first.id);
        assert_eq!(orders[1].id, second.id);
        assert_eq!(front.order_count().unwrap(), 2);
    }
}
