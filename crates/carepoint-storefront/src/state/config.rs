//! # Storefront Configuration
//!
//! Runtime settings for a storefront session.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAREPOINT_API_BASE_URL=http://localhost:5000/api                   │
//! │     CAREPOINT_DATA_DIR=/var/lib/carepoint                              │
//! │     CAREPOINT_CURRENCY=USD                                             │
//! │     CAREPOINT_MAX_QUANTITY=10                                          │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     in-memory storage, USD, max 10 per line                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use carepoint_api::ApiConfig;
use carepoint_core::{Money, DEFAULT_CURRENCY};

/// Complete storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Settings for the remote API clients.
    #[serde(default)]
    pub api: ApiConfig,

    /// Directory for the file-backed store. `None` keeps everything in
    /// memory (a fresh session every boot).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// ISO 4217 currency code for display.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Hard cap per cart line. `None` defers entirely to each product's
    /// own `max_quantity`.
    #[serde(default = "default_max_quantity")]
    pub max_quantity_per_item: Option<i64>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_max_quantity() -> Option<i64> {
    Some(10)
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            api: ApiConfig::default(),
            data_dir: None,
            currency: default_currency(),
            max_quantity_per_item: default_max_quantity(),
        }
    }
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CAREPOINT_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Ok(dir) = std::env::var("CAREPOINT_DATA_DIR") {
            debug!(dir = %dir, "Overriding data directory from environment");
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(currency) = std::env::var("CAREPOINT_CURRENCY") {
            self.currency = currency;
        }

        if let Ok(max) = std::env::var("CAREPOINT_MAX_QUANTITY") {
            match max.parse::<i64>() {
                Ok(n) if n > 0 => self.max_quantity_per_item = Some(n),
                _ => warn!(value = %max, "Ignoring invalid CAREPOINT_MAX_QUANTITY"),
            }
        }
    }

    /// Formats a cent amount for display in the configured currency.
    pub fn format_currency(&self, cents: i64) -> String {
        let money = Money::from_cents(cents);
        if self.currency == DEFAULT_CURRENCY {
            money.to_string()
        } else {
            format!("{}.{:02} {}", money.dollars(), money.cents_part(), self.currency)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.currency, "USD");
        assert_eq!(config.max_quantity_per_item, Some(10));
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(2735), "$27.35");

        let eur = StorefrontConfig {
            currency: "EUR".to_string(),
            ..StorefrontConfig::default()
        };
        assert_eq!(eur.format_currency(2735), "27.35 EUR");
    }
}
