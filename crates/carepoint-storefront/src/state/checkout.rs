//! # Checkout State
//!
//! Session handle over the five-step checkout wizard, plus the shipping
//! rates fetched for the current address. Unlike the cart and wishlist
//! this is never persisted: a page reload restarts the wizard at step 1
//! with the cart intact.

use std::sync::{Arc, Mutex};

use carepoint_core::{CheckoutFlow, ShippingRate};

/// Shared checkout wizard state for the session.
#[derive(Debug, Clone)]
pub struct CheckoutState {
    flow: Arc<Mutex<CheckoutFlow>>,
    rates: Arc<Mutex<Vec<ShippingRate>>>,
}

impl CheckoutState {
    pub fn new() -> Self {
        CheckoutState {
            flow: Arc::new(Mutex::new(CheckoutFlow::new())),
            rates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_flow<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckoutFlow) -> R,
    {
        let flow = self.flow.lock().expect("Checkout mutex poisoned");
        f(&flow)
    }

    pub fn with_flow_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutFlow) -> R,
    {
        let mut flow = self.flow.lock().expect("Checkout mutex poisoned");
        f(&mut flow)
    }

    /// The rates fetched for the current address, for re-rendering the
    /// shipping step without another quote round trip.
    pub fn cached_rates(&self) -> Vec<ShippingRate> {
        self.rates.lock().expect("Rates mutex poisoned").clone()
    }

    pub fn cache_rates(&self, rates: Vec<ShippingRate>) {
        *self.rates.lock().expect("Rates mutex poisoned") = rates;
    }

    pub fn clear_rates(&self) {
        self.rates.lock().expect("Rates mutex poisoned").clear();
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}
