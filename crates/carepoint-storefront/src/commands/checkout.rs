//! # Checkout Commands
//!
//! Commands driving the five-step checkout wizard.
//!
//! ## Wizard Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Wizard                                      │
//! │                                                                         │
//! │  1 Address ──► 2 Shipping ──► 3 Payment ──► 4 Review ──► 5 Confirm     │
//! │      │              │              │             │                      │
//! │  submit_        fetch_ship-   select_pay-   place_order                │
//! │  address        ping_rates    ment_method   (appends order,            │
//! │                 select_ship-  create_pay-    clears cart,              │
//! │                 ping_method   ment_intent    resets wizard)            │
//! │                                                                         │
//! │  Step navigation is ungated: each step's form validates its own        │
//! │  inputs before calling in, and place_order re-checks everything        │
//! │  before any money moves.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::{
    validation, CheckoutFlow, CheckoutStep, CoreError, Money, Order, OrderItem, OrderStatus,
    OrderTotals, PaymentIntent, PaymentMethod, ShippingAddress, ShippingRate,
};

impl Storefront {
    /// Begins a checkout pass: resets the wizard to step 1.
    ///
    /// ## Errors
    /// [`ErrorCode::CartError`](crate::ErrorCode) when the cart is empty;
    /// there is nothing to check out.
    pub fn start_checkout(&self) -> StorefrontResult<CheckoutFlow> {
        debug!("start_checkout command");

        if self.cart.with_cart(|c| c.is_empty()) {
            return Err(CoreError::EmptyCart.into());
        }

        self.checkout.clear_rates();
        Ok(self.checkout.with_flow_mut(|f| {
            f.reset();
            f.clone()
        }))
    }

    /// Gets a snapshot of the wizard state.
    pub fn get_checkout(&self) -> CheckoutFlow {
        debug!("get_checkout command");
        self.checkout.with_flow(|f| f.clone())
    }

    /// Jumps the wizard to a 1-based step number.
    pub fn set_checkout_step(&self, step: u8) -> StorefrontResult<CheckoutStep> {
        debug!(step, "set_checkout_step command");

        let step = CheckoutStep::from_number(step).ok_or_else(|| {
            crate::StorefrontError::validation(format!("No checkout step {}", step))
        })?;
        self.checkout.with_flow_mut(|f| f.set_step(step));
        Ok(step)
    }

    /// Advances the wizard one step (saturating at confirmation).
    pub fn next_checkout_step(&self) -> CheckoutStep {
        self.checkout.with_flow_mut(|f| {
            f.advance();
            f.current_step
        })
    }

    /// Steps the wizard back (saturating at the address step).
    pub fn previous_checkout_step(&self) -> CheckoutStep {
        self.checkout.with_flow_mut(|f| {
            f.back();
            f.current_step
        })
    }

    /// Records the shipping address (step 1).
    ///
    /// ## Errors
    /// Validation failure on any address field.
    pub fn submit_address(&self, address: ShippingAddress) -> StorefrontResult<()> {
        debug!(postal_code = %address.postal_code, "submit_address command");

        validation::validate_shipping_address(&address).map_err(CoreError::from)?;
        // A new address invalidates previously quoted rates
        self.checkout.clear_rates();
        self.checkout.with_flow_mut(|f| f.set_address(address));
        Ok(())
    }

    /// Quotes shipping rates for the recorded address (step 2).
    ///
    /// The quotes are cached on the session so the shipping step can
    /// re-render without another round trip; see [`Self::shipping_rates`].
    pub async fn fetch_shipping_rates(&self) -> StorefrontResult<Vec<ShippingRate>> {
        debug!("fetch_shipping_rates command");

        let address = self
            .checkout
            .with_flow(|f| f.shipping_address.clone())
            .ok_or(CoreError::CheckoutIncomplete {
                missing: "a shipping address".to_string(),
            })?;

        let rates = self.shipping.fetch_rates(&address).await?;
        self.checkout.cache_rates(rates.clone());
        Ok(rates)
    }

    /// The rates from the last quote, without refetching.
    pub fn shipping_rates(&self) -> Vec<ShippingRate> {
        self.checkout.cached_rates()
    }

    /// Records the chosen shipping rate (step 2).
    pub fn select_shipping_method(&self, rate: ShippingRate) {
        debug!(method = ?rate.method, cost_cents = rate.cost_cents, "select_shipping_method command");
        self.checkout.with_flow_mut(|f| f.set_shipping_rate(rate));
    }

    /// Records the chosen payment method (step 3).
    pub fn select_payment_method(&self, method: PaymentMethod) {
        debug!(?method, "select_payment_method command");
        self.checkout.with_flow_mut(|f| f.set_payment_method(method));
    }

    /// Tokenizes the payment for the current total (step 3).
    ///
    /// The intent is kept on the wizard for the review screen.
    pub async fn create_payment_intent(&self) -> StorefrontResult<PaymentIntent> {
        debug!("create_payment_intent command");

        let method = self
            .checkout
            .with_flow(|f| f.payment_method)
            .ok_or(CoreError::CheckoutIncomplete {
                missing: "a payment method".to_string(),
            })?;

        let totals = self.order_summary();
        let intent = self.payments.create_intent(method, totals.total_cents).await?;
        self.checkout
            .with_flow_mut(|f| f.set_payment_intent(intent.clone()));
        Ok(intent)
    }

    /// Totals for the review screen: cart subtotal plus whatever the
    /// wizard has selected so far.
    pub fn order_summary(&self) -> OrderTotals {
        let subtotal = self.cart.with_cart(|c| c.total_amount_cents());
        self.checkout
            .with_flow(|f| f.order_totals(Money::from_cents(subtotal)))
    }

    /// Places the order (step 4 → 5).
    ///
    /// ## Behavior
    /// 1. Rejects an empty cart or an incomplete wizard
    /// 2. Freezes cart lines and totals into an order record
    /// 3. Appends the order to history (failure here PROPAGATES)
    /// 4. Clears the cart and resets the wizard to the confirmation step
    ///
    /// Each successful call appends exactly one order.
    pub async fn place_order(&self) -> StorefrontResult<Order> {
        debug!("place_order command");

        let (items, subtotal_cents) = self.cart.with_cart(|c| {
            let items: Vec<OrderItem> = c
                .items
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    unit_price_cents: line.discounted_price_cents,
                    quantity: line.quantity,
                    line_total_cents: line.line_total_cents(),
                })
                .collect();
            (items, c.total_amount_cents())
        });
        if items.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let (address, rate, method, totals) = self.checkout.with_flow(|f| {
            let complete = f.require_complete()?;
            let totals = f.order_totals(Money::from_cents(subtotal_cents));
            Ok::<_, CoreError>((
                complete.0.clone(),
                complete.1.clone(),
                complete.2,
                totals,
            ))
        })?;

        // Backend order processing round trip
        tokio::time::sleep(self.config.api.order_delay()).await;

        let created_at = Utc::now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            items,
            shipping_address: address,
            shipping_method: rate.method,
            payment_method: method,
            subtotal_cents: totals.subtotal_cents,
            shipping_cost_cents: totals.shipping_cost_cents,
            payment_fee_cents: totals.payment_fee_cents,
            total_cents: totals.total_cents,
            currency: self.config.currency.clone(),
            status: OrderStatus::Confirmed,
            created_at,
            estimated_delivery: Order::estimate_delivery(created_at),
        };

        self.store.orders().append(&order)?;

        self.cart.with_cart_mut(|c| c.clear());
        self.persist_cart();
        self.checkout.clear_rates();
        self.checkout.with_flow_mut(|f| {
            f.reset();
            f.set_step(CheckoutStep::Confirmation);
        });

        info!(order_id = %order.id, total_cents = order.total_cents, "Order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{instant_storefront, sample_address};
    use crate::ErrorCode;
    use carepoint_core::{
        CheckoutStep, OrderStatus, PaymentMethod, ShippingMethod, ESTIMATED_DELIVERY_DAYS,
    };
    use chrono::Duration;

    #[tokio::test]
    async fn test_full_checkout_flow() {
        let front = instant_storefront();
        front.add_to_cart("asp-500", Some(2)).await.unwrap();

        front.start_checkout().unwrap();
        front.submit_address(sample_address()).unwrap();
        let rates = front.fetch_shipping_rates().await.unwrap();
        front.select_shipping_method(rates[1].clone()); // Express, 999
        front.select_payment_method(PaymentMethod::Card);

        let order = front.place_order().await.unwrap();

        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.shipping_method, ShippingMethod::Express);
        assert_eq!(order.subtotal_cents, 2 * 2735);
        assert_eq!(order.total_cents, 2 * 2735 + 999);
        assert_eq!(
            order.estimated_delivery - order.created_at,
            Duration::days(ESTIMATED_DELIVERY_DAYS)
        );

        // Cart cleared, wizard on confirmation, history holds the order
        assert!(front.get_cart().items.is_empty());
        assert_eq!(front.get_checkout().current_step, CheckoutStep::Confirmation);
        assert_eq!(front.get_order_history().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_each_placement_appends_one_order() {
        let front = instant_storefront();

        for _ in 0..2 {
            front.add_to_cart("asp-500", None).await.unwrap();
            front.start_checkout().unwrap();
            front.submit_address(sample_address()).unwrap();
            let rates = front.fetch_shipping_rates().await.unwrap();
            front.select_shipping_method(rates[0].clone());
            front.select_payment_method(PaymentMethod::Card);
            front.place_order().await.unwrap();
        }

        let orders = front.get_order_history().unwrap();
        assert_eq!(orders.len(), 2);
        assert_ne!(orders[0].id, orders[1].id);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let front = instant_storefront();

        let err = front.start_checkout().unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let err = front.place_order().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[tokio::test]
    async fn test_incomplete_wizard_rejected() {
        let front = instant_storefront();
        front.add_to_cart("asp-500", None).await.unwrap();

        let err = front.place_order().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutIncomplete);
        // Nothing was appended
        assert!(front.get_order_history().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cod_handling_fee_in_totals() {
        let front = instant_storefront();
        front.add_to_cart("asp-500", None).await.unwrap(); // 2735

        front.submit_address(sample_address()).unwrap();
        let rates = front.fetch_shipping_rates().await.unwrap();
        front.select_shipping_method(rates[0].clone()); // 499
        front.select_payment_method(PaymentMethod::CashOnDelivery); // 499 fee

        let totals = front.order_summary();
        assert_eq!(totals.payment_fee_cents, 499);
        assert_eq!(totals.total_cents, 2735 + 499 + 499);
    }

    #[tokio::test]
    async fn test_step_navigation_is_ungated() {
        let front = instant_storefront();

        // Jumping forward with nothing filled in is allowed
        assert_eq!(front.set_checkout_step(4).unwrap(), CheckoutStep::Review);
        assert_eq!(front.previous_checkout_step(), CheckoutStep::Payment);
        assert_eq!(front.next_checkout_step(), CheckoutStep::Review);

        assert!(front.set_checkout_step(6).is_err());
    }

    #[tokio::test]
    async fn test_rates_cached_until_address_changes() {
        let front = instant_storefront();
        front.add_to_cart("asp-500", None).await.unwrap();
        front.submit_address(sample_address()).unwrap();

        assert!(front.shipping_rates().is_empty());
        front.fetch_shipping_rates().await.unwrap();
        assert_eq!(front.shipping_rates().len(), 3);

        // Changing the address drops the stale quotes
        front.submit_address(sample_address()).unwrap();
        assert!(front.shipping_rates().is_empty());
    }

    #[tokio::test]
    async fn test_payment_intent_matches_total() {
        let front = instant_storefront();
        front.add_to_cart("asp-500", None).await.unwrap();
        front.submit_address(sample_address()).unwrap();
        let rates = front.fetch_shipping_rates().await.unwrap();
        front.select_shipping_method(rates[0].clone());
        front.select_payment_method(PaymentMethod::Card);

        let intent = front.create_payment_intent().await.unwrap();
        assert_eq!(intent.amount_cents, 2735 + 499);
        assert_eq!(
            front.get_checkout().payment_intent.unwrap().token,
            intent.token
        );
    }

    #[tokio::test]
    async fn test_invalid_address_rejected() {
        let front = instant_storefront();
        let mut address = sample_address();
        address.email = "not-an-email".to_string();

        let err = front.submit_address(address).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
