//! # Checkout Step Machine
//!
//! A five-state linear wizard holding per-step form data in memory.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Wizard                                      │
//! │                                                                         │
//! │  1 Address ──► 2 ShippingMethod ──► 3 Payment ──► 4 Review ──► 5 Conf.  │
//! │                      │                   │             │                │
//! │                      │                   │             └── place_order  │
//! │                      │                   │                 (facade)     │
//! │                      │                   └── payment intent fetch       │
//! │                      └── shipping rate fetch                            │
//! │                                                                         │
//! │  Transitions are EXPLICIT (set_step) and not gated here: each step's    │
//! │  form validates before advancing. Jumping backwards (or forwards) by    │
//! │  direct step mutation is allowed by design.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two async side effects (rate fetch, payment intent) live in
//! carepoint-api; this machine only records their results.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentIntent, PaymentMethod, ShippingAddress, ShippingRate};

// =============================================================================
// Checkout Step
// =============================================================================

/// One of the five wizard states, numbered 1-5 for the frontend stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Address,
    ShippingMethod,
    Payment,
    Review,
    Confirmation,
}

impl CheckoutStep {
    /// 1-based step number shown in the stepper UI.
    pub const fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::ShippingMethod => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Review => 4,
            CheckoutStep::Confirmation => 5,
        }
    }

    /// Maps a stepper number back to a step. Out-of-range input is `None`.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(CheckoutStep::Address),
            2 => Some(CheckoutStep::ShippingMethod),
            3 => Some(CheckoutStep::Payment),
            4 => Some(CheckoutStep::Review),
            5 => Some(CheckoutStep::Confirmation),
            _ => None,
        }
    }

    /// The following step, saturating at Confirmation.
    pub const fn next(&self) -> Self {
        match self {
            CheckoutStep::Address => CheckoutStep::ShippingMethod,
            CheckoutStep::ShippingMethod => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Review,
            CheckoutStep::Review | CheckoutStep::Confirmation => CheckoutStep::Confirmation,
        }
    }

    /// The preceding step, saturating at Address.
    pub const fn previous(&self) -> Self {
        match self {
            CheckoutStep::Address | CheckoutStep::ShippingMethod => CheckoutStep::Address,
            CheckoutStep::Payment => CheckoutStep::ShippingMethod,
            CheckoutStep::Review => CheckoutStep::Payment,
            CheckoutStep::Confirmation => CheckoutStep::Review,
        }
    }
}

impl Default for CheckoutStep {
    fn default() -> Self {
        CheckoutStep::Address
    }
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// In-memory state of one checkout pass.
///
/// Holds whatever each step has produced so far. Nothing here touches
/// storage; the order is only persisted when the facade places it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFlow {
    pub current_step: CheckoutStep,

    /// Step 1 result.
    pub shipping_address: Option<ShippingAddress>,

    /// Step 2 result: the rate the shopper picked.
    pub shipping_rate: Option<ShippingRate>,

    /// Step 3 results.
    pub payment_method: Option<PaymentMethod>,
    pub payment_intent: Option<PaymentIntent>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        CheckoutFlow::default()
    }

    /// Jumps to an arbitrary step.
    ///
    /// Deliberately ungated: the wizard's forms validate before calling
    /// this, and backwards navigation must always work.
    pub fn set_step(&mut self, step: CheckoutStep) {
        self.current_step = step;
    }

    /// Advances one step (saturating).
    pub fn advance(&mut self) {
        self.current_step = self.current_step.next();
    }

    /// Steps back (saturating).
    pub fn back(&mut self) {
        self.current_step = self.current_step.previous();
    }

    pub fn set_address(&mut self, address: ShippingAddress) {
        self.shipping_address = Some(address);
    }

    pub fn set_shipping_rate(&mut self, rate: ShippingRate) {
        self.shipping_rate = Some(rate);
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn set_payment_intent(&mut self, intent: PaymentIntent) {
        self.payment_intent = Some(intent);
    }

    /// Drops all step data and returns to step 1 (after order placement or
    /// cancel).
    pub fn reset(&mut self) {
        *self = CheckoutFlow::default();
    }

    /// Order totals for the review screen and the final order record.
    ///
    /// Missing selections contribute zero so the review screen can render
    /// a running total mid-wizard.
    pub fn order_totals(&self, cart_subtotal: Money) -> OrderTotals {
        let shipping = self
            .shipping_rate
            .as_ref()
            .map(ShippingRate::cost)
            .unwrap_or_else(Money::zero);
        let fee = self
            .payment_method
            .map(|m| m.handling_fee())
            .unwrap_or_else(Money::zero);

        OrderTotals {
            subtotal_cents: cart_subtotal.cents(),
            shipping_cost_cents: shipping.cents(),
            payment_fee_cents: fee.cents(),
            total_cents: (cart_subtotal + shipping + fee).cents(),
        }
    }

    /// Checks that everything an order needs is on file.
    ///
    /// ## Errors
    /// [`CoreError::CheckoutIncomplete`] naming the first missing piece.
    pub fn require_complete(&self) -> CoreResult<(&ShippingAddress, &ShippingRate, PaymentMethod)> {
        let address = self
            .shipping_address
            .as_ref()
            .ok_or_else(|| CoreError::CheckoutIncomplete {
                missing: "a shipping address".to_string(),
            })?;
        let rate = self
            .shipping_rate
            .as_ref()
            .ok_or_else(|| CoreError::CheckoutIncomplete {
                missing: "a shipping method".to_string(),
            })?;
        let method = self
            .payment_method
            .ok_or_else(|| CoreError::CheckoutIncomplete {
                missing: "a payment method".to_string(),
            })?;
        Ok((address, rate, method))
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Totals breakdown shown at review and frozen into the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal_cents: i64,
    pub shipping_cost_cents: i64,
    pub payment_fee_cents: i64,
    pub total_cents: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShippingMethod;

    fn sample_address() -> ShippingAddress {
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

    fn express_rate() -> ShippingRate {
        ShippingRate {
            method: ShippingMethod::Express,
            label: "Express (2-3 business days)".to_string(),
            cost_cents: 999,
            eta_days: 3,
        }
    }

    #[test]
    fn test_step_numbering_round_trips() {
        for n in 1..=5 {
            let step = CheckoutStep::from_number(n).unwrap();
            assert_eq!(step.number(), n);
        }
        assert_eq!(CheckoutStep::from_number(0), None);
        assert_eq!(CheckoutStep::from_number(6), None);
    }

    #[test]
    fn test_advance_and_back_saturate() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.current_step, CheckoutStep::Address);

        flow.back();
        assert_eq!(flow.current_step, CheckoutStep::Address);

        for _ in 0..10 {
            flow.advance();
        }
        assert_eq!(flow.current_step, CheckoutStep::Confirmation);
    }

    #[test]
    fn test_set_step_is_ungated() {
        let mut flow = CheckoutFlow::new();
        // Straight to review with nothing filled in: allowed by design
        flow.set_step(CheckoutStep::Review);
        assert_eq!(flow.current_step, CheckoutStep::Review);
        // Placing the order is what gets refused
        assert!(flow.require_complete().is_err());
    }

    #[test]
    fn test_order_totals() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping_rate(express_rate());
        flow.set_payment_method(PaymentMethod::CashOnDelivery);

        let totals = flow.order_totals(Money::from_cents(5470));
        assert_eq!(totals.subtotal_cents, 5470);
        assert_eq!(totals.shipping_cost_cents, 999);
        assert_eq!(totals.payment_fee_cents, 499);
        assert_eq!(totals.total_cents, 5470 + 999 + 499);
    }

    #[test]
    fn test_order_totals_mid_wizard() {
        let flow = CheckoutFlow::new();
        let totals = flow.order_totals(Money::from_cents(1000));
        assert_eq!(totals.total_cents, 1000);
    }

    #[test]
    fn test_require_complete_reports_first_gap() {
        let mut flow = CheckoutFlow::new();

        let err = flow.require_complete().unwrap_err();
        assert!(err.to_string().contains("shipping address"));

        flow.set_address(sample_address());
        let err = flow.require_complete().unwrap_err();
        assert!(err.to_string().contains("shipping method"));

        flow.set_shipping_rate(express_rate());
        let err = flow.require_complete().unwrap_err();
        assert!(err.to_string().contains("payment method"));

        flow.set_payment_method(PaymentMethod::Card);
        assert!(flow.require_complete().is_ok());
    }

    #[test]
    fn test_reset() {
        let mut flow = CheckoutFlow::new();
        flow.set_address(sample_address());
        flow.set_step(CheckoutStep::Review);

        flow.reset();
        assert_eq!(flow.current_step, CheckoutStep::Address);
        assert!(flow.shipping_address.is_none());
    }
}
