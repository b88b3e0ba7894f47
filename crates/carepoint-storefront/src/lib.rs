//! # carepoint-storefront: Session State and Command Facade
//!
//! The headless storefront. Owns one shopper session's state (cart,
//! wishlist, compare list, checkout wizard), persists it through
//! `carepoint-storage`, and talks to the backend through the
//! `carepoint-api` client traits.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Facade                                │
//! │                                                                         │
//! │   Frontend calls                                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   ┌──────────────────────────────────────────────────────────────┐     │
//! │   │  Storefront (commands/*)                                     │     │
//! │   │                                                              │     │
//! │   │   cart · wishlist · compare · checkout · orders · catalog    │     │
//! │   └───────┬──────────────────────┬──────────────────┬────────────┘     │
//! │           │                      │                  │                  │
//! │           ▼                      ▼                  ▼                  │
//! │   session state           carepoint-storage    carepoint-api          │
//! │   (state/*)               (blob store)         (mocked clients)       │
//! │                                                                         │
//! │   Boot: hydrate cart/wishlist/compare from the store.                  │
//! │   Mutations: change memory first, then write through.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use carepoint_storefront::{Storefront, StorefrontConfig};
//!
//! # async fn run() -> Result<(), carepoint_storefront::StorefrontError> {
//! let front = Storefront::from_config(StorefrontConfig::from_env())?;
//! front.add_to_cart("asp-500", Some(2)).await?;
//! println!("{} lines in cart", front.get_cart().items.len());
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod state;

pub use commands::{CartView, CompareOutcome};
pub use error::{ErrorCode, StorefrontError, StorefrontResult};
pub use state::{CartState, CheckoutState, CompareState, StorefrontConfig, WishlistState};

use std::sync::Arc;

use tracing::{info, warn};

use carepoint_api::{
    ApiConfig, MockPaymentApi, MockProductApi, MockShippingApi, MockUserApi, PaymentApi,
    ProductApi, ShippingApi, UserApi,
};
use carepoint_storage::{FileBackend, MemoryBackend, Store};

/// One shopper session over the CarePoint storefront.
///
/// All commands hang off this type; see the `commands` modules for the
/// full surface.
pub struct Storefront {
    pub(crate) store: Store,
    pub(crate) config: StorefrontConfig,

    pub(crate) cart: CartState,
    pub(crate) wishlist: WishlistState,
    pub(crate) compare: CompareState,
    pub(crate) checkout: CheckoutState,

    pub(crate) products: Arc<dyn ProductApi>,
    pub(crate) shipping: Arc<dyn ShippingApi>,
    pub(crate) payments: Arc<dyn PaymentApi>,
    pub(crate) users: Arc<dyn UserApi>,
}

impl Storefront {
    /// Boots a storefront over a prepared store, with the mock API
    /// clients generated from `config.api`.
    pub fn new(store: Store, config: StorefrontConfig) -> Self {
        let api: ApiConfig = config.api.clone();
        Self::with_apis(
            store,
            Arc::new(MockProductApi::new(api.clone())),
            Arc::new(MockShippingApi::new(api.clone())),
            Arc::new(MockPaymentApi::new(api.clone())),
            Arc::new(MockUserApi::new(api)),
            config,
        )
    }

    /// Boots a storefront from configuration alone: the file-backed
    /// store when `data_dir` is set, in-memory otherwise.
    pub fn from_config(config: StorefrontConfig) -> StorefrontResult<Self> {
        let store = match &config.data_dir {
            Some(dir) => Store::new(FileBackend::new(dir.clone())?),
            None => Store::new(MemoryBackend::new()),
        };
        Ok(Self::new(store, config))
    }

    /// Boots a storefront over explicit API clients.
    ///
    /// This is the seam for swapping mocks for real clients.
    pub fn with_apis(
        store: Store,
        products: Arc<dyn ProductApi>,
        shipping: Arc<dyn ShippingApi>,
        payments: Arc<dyn PaymentApi>,
        users: Arc<dyn UserApi>,
        config: StorefrontConfig,
    ) -> Self {
        let cart = match store.cart().load() {
            Ok(cart) => CartState::from_cart(cart),
            Err(e) => {
                warn!(error = %e, "Cart blob unreadable; starting with an empty cart");
                CartState::new()
            }
        };
        let wishlist = match store.wishlist().load() {
            Ok(wishlist) => WishlistState::from_wishlist(wishlist),
            Err(e) => {
                warn!(error = %e, "Wishlist blob unreadable; starting empty");
                WishlistState::new()
            }
        };
        let compare = match store.compare().load() {
            Ok(list) => CompareState::from_list(list),
            Err(e) => {
                warn!(error = %e, "Compare blob unreadable; starting empty");
                CompareState::new()
            }
        };

        info!(
            cart_lines = cart.with_cart(|c| c.item_count()),
            wishlist_items = wishlist.with_wishlist(|w| w.len()),
            "Storefront session hydrated"
        );

        Storefront {
            store,
            config,
            cart,
            wishlist,
            compare,
            checkout: CheckoutState::new(),
            products,
            shipping,
            payments,
            users,
        }
    }

    /// The persistence handle, for host applications that need direct
    /// store access (backups, data wipes).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

/// Installs the default tracing subscriber.
///
/// Filter via `RUST_LOG`, e.g. `RUST_LOG=carepoint_storefront=debug`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// Shared Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use carepoint_core::{Order, PaymentMethod, ShippingAddress};

    /// Storefront over a fresh in-memory store with zero-latency mocks.
    pub fn instant_storefront() -> Storefront {
        storefront_over(Store::new(MemoryBackend::new()))
    }

    /// Like [`instant_storefront`] but with the account service offline.
    /// Returns the mock user client so tests can flip it back online.
    pub fn offline_storefront() -> (Storefront, Arc<MockUserApi>) {
        let api = ApiConfig::instant();
        let users = Arc::new(MockUserApi::new(api.clone()));
        users.set_offline(true);

        let front = Storefront::with_apis(
            Store::new(MemoryBackend::new()),
            Arc::new(MockProductApi::new(api.clone())),
            Arc::new(MockShippingApi::new(api.clone())),
            Arc::new(MockPaymentApi::new(api)),
            users.clone(),
            instant_config(),
        );
        (front, users)
    }

    /// Storefront with zero-latency mocks over a given store.
    pub fn storefront_over(store: Store) -> Storefront {
        let api = ApiConfig::instant();
        Storefront::with_apis(
            store,
            Arc::new(MockProductApi::new(api.clone())),
            Arc::new(MockShippingApi::new(api.clone())),
            Arc::new(MockPaymentApi::new(api.clone())),
            Arc::new(MockUserApi::new(api)),
            instant_config(),
        )
    }

    /// Like [`instant_storefront`] but with no configured per-item cap,
    /// leaving each product's own `max_quantity` as the only limit.
    pub fn uncapped_storefront() -> Storefront {
        let api = ApiConfig::instant();
        Storefront::with_apis(
            Store::new(MemoryBackend::new()),
            Arc::new(MockProductApi::new(api.clone())),
            Arc::new(MockShippingApi::new(api.clone())),
            Arc::new(MockPaymentApi::new(api.clone())),
            Arc::new(MockUserApi::new(api)),
            StorefrontConfig {
                max_quantity_per_item: None,
                ..instant_config()
            },
        )
    }

    fn instant_config() -> StorefrontConfig {
        StorefrontConfig {
            api: ApiConfig::instant(),
            ..StorefrontConfig::default()
        }
    }

    pub fn sample_address() -> ShippingAddress {
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

    /// Runs the whole wizard once: one aspirin, standard shipping, card.
    pub async fn place_sample_order(front: &Storefront) -> Order {
        front.add_to_cart("asp-500", None).await.unwrap();
        front.submit_address(sample_address()).unwrap();
        let rates = front.fetch_shipping_rates().await.unwrap();
        front.select_shipping_method(rates[0].clone());
        front.select_payment_method(PaymentMethod::Card);
        front.place_order().await.unwrap()
    }

    // =========================================================================
    // Session Lifecycle Tests
    // =========================================================================

    #[tokio::test]
    async fn test_restart_rehydrates_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(FileBackend::new(dir.path()).unwrap());

        {
            let front = storefront_over(store.clone());
            front.add_to_cart("asp-500", Some(2)).await.unwrap();
            front.add_to_wishlist("ibf-400").await.unwrap();
            front.add_to_compare("asp-500").await.unwrap();
        }

        // A second boot over the same directory sees everything
        let store = Store::new(FileBackend::new(dir.path()).unwrap());
        let front = storefront_over(store);
        assert_eq!(front.get_cart().items[0].quantity, 2);
        assert_eq!(front.get_wishlist()[0].product_id, "ibf-400");
        assert_eq!(front.get_compare().len(), 1);
    }

    #[tokio::test]
    async fn test_orders_survive_restart() {
        let dir = tempfile::tempdir().unwrap();

        let placed = {
            let store = Store::new(FileBackend::new(dir.path()).unwrap());
            place_sample_order(&storefront_over(store)).await
        };

        let store = Store::new(FileBackend::new(dir.path()).unwrap());
        let front = storefront_over(store);
        let loaded = front.get_order(&placed.id).unwrap();
        assert_eq!(loaded.total_cents, placed.total_cents);
    }

    #[tokio::test]
    async fn test_corrupt_blob_falls_back_to_empty() {
        use carepoint_storage::StorageBackend;

        let backend = MemoryBackend::new();
        backend.set("cart", "{ not json").unwrap();

        let front = storefront_over(Store::new(backend));
        assert!(front.get_cart().items.is_empty());
    }
}
