//! # API Configuration
//!
//! Base URL and latency settings for the API clients.
//!
//! ## Latency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Mock Latency Defaults                             │
//! │                                                                         │
//! │  Catalog lookups      500 ms   (product list, search)                   │
//! │  Shipping quotes      500 ms   (rate fetch)                             │
//! │  Payment intents      800 ms   (tokenization)                           │
//! │  Order processing    1000 ms   (place order round trip)                 │
//! │                                                                         │
//! │  Tests use ApiConfig::instant() which zeroes every delay.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default backend base URL. The mocks never dial it, but it is carried
/// so request logs have a realistic target.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Shared configuration for the mock API clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:5000/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Latency for catalog operations (milliseconds).
    #[serde(default = "default_catalog_delay")]
    pub catalog_delay_ms: u64,

    /// Latency for shipping rate quotes (milliseconds).
    #[serde(default = "default_shipping_delay")]
    pub shipping_delay_ms: u64,

    /// Latency for payment intent creation (milliseconds).
    #[serde(default = "default_payment_delay")]
    pub payment_delay_ms: u64,

    /// Latency for order processing (milliseconds).
    #[serde(default = "default_order_delay")]
    pub order_delay_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_catalog_delay() -> u64 {
    500
}
fn default_shipping_delay() -> u64 {
    500
}
fn default_payment_delay() -> u64 {
    800
}
fn default_order_delay() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            catalog_delay_ms: default_catalog_delay(),
            shipping_delay_ms: default_shipping_delay(),
            payment_delay_ms: default_payment_delay(),
            order_delay_ms: default_order_delay(),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with every delay zeroed. Used by tests so async suites
    /// don't spend wall-clock time sleeping.
    pub fn instant() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            catalog_delay_ms: 0,
            shipping_delay_ms: 0,
            payment_delay_ms: 0,
            order_delay_ms: 0,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn catalog_delay(&self) -> Duration {
        Duration::from_millis(self.catalog_delay_ms)
    }

    pub fn shipping_delay(&self) -> Duration {
        Duration::from_millis(self.shipping_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn order_delay(&self) -> Duration {
        Duration::from_millis(self.order_delay_ms)
    }

    /// Joins a path onto the base URL for request logging.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.catalog_delay_ms, 500);
        assert_eq!(config.payment_delay_ms, 800);
        assert_eq!(config.order_delay_ms, 1000);
    }

    #[test]
    fn test_instant_zeroes_all_delays() {
        let config = ApiConfig::instant();
        assert_eq!(config.catalog_delay(), Duration::ZERO);
        assert_eq!(config.shipping_delay(), Duration::ZERO);
        assert_eq!(config.payment_delay(), Duration::ZERO);
        assert_eq!(config.order_delay(), Duration::ZERO);
    }

    #[test]
    fn test_endpoint_join() {
        let config = ApiConfig::default().with_base_url("http://localhost:5000/api/");
        assert_eq!(
            config.endpoint("/products"),
            "http://localhost:5000/api/products"
        );
    }
}
