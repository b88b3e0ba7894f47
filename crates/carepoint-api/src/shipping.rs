//! # Shipping Rates Client
//!
//! Quotes shipping rates for a destination. The mock answers with a
//! fixed rate card regardless of address, matching what the backend
//! returns for domestic deliveries.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiResult;
use carepoint_core::{ShippingAddress, ShippingMethod, ShippingRate};

/// Remote shipping operations.
#[async_trait]
pub trait ShippingApi: Send + Sync {
    /// Fetches available shipping rates for an address.
    async fn fetch_rates(&self, address: &ShippingAddress) -> ApiResult<Vec<ShippingRate>>;
}

/// Mock shipping client with a static domestic rate card.
#[derive(Debug, Clone)]
pub struct MockShippingApi {
    config: ApiConfig,
}

impl MockShippingApi {
    pub fn new(config: ApiConfig) -> Self {
        MockShippingApi { config }
    }
}

#[async_trait]
impl ShippingApi for MockShippingApi {
    async fn fetch_rates(&self, address: &ShippingAddress) -> ApiResult<Vec<ShippingRate>> {
        debug!(
            url = %self.config.endpoint("shipping/rates"),
            postal_code = %address.postal_code,
            "POST (mocked)"
        );
        tokio::time::sleep(self.config.shipping_delay()).await;

        Ok(vec![
            ShippingRate {
                method: ShippingMethod::Standard,
                label: "Standard Delivery".to_string(),
                cost_cents: 499,
                eta_days: 5,
            },
            ShippingRate {
                method: ShippingMethod::Express,
                label: "Express Delivery".to_string(),
                cost_cents: 999,
                eta_days: 3,
            },
            ShippingRate {
                method: ShippingMethod::Overnight,
                label: "Overnight Delivery".to_string(),
                cost_cents: 1999,
                eta_days: 1,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "5551234567".to_string(),
            line1: "12 Elm Street".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
            country: "US".to_string(),
        }
    }

    #[tokio::test]
    async fn test_three_rates_sorted_by_cost() {
        let api = MockShippingApi::new(ApiConfig::instant());
        let rates = api.fetch_rates(&address()).await.unwrap();

        assert_eq!(rates.len(), 3);
        assert!(rates.windows(2).all(|w| w[0].cost_cents <= w[1].cost_cents));
        assert_eq!(rates[0].method, ShippingMethod::Standard);
        assert_eq!(rates[2].cost_cents, 1999);
        assert_eq!(rates[2].eta_days, 1);
    }
}
