//! # Domain Types
//!
//! Core domain types used throughout the CarePoint storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │ ShippingAddress │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (UUID)      │   │  full_name      │       │
//! │  │  category       │   │  status         │   │  email, phone   │       │
//! │  │  mrp_cents      │   │  total_cents    │   │  line1..country │       │
//! │  │  discounted_... │   │  est. delivery  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  ShippingRate   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Medicines      │   │  method         │   │  Card           │       │
//! │  │  Devices        │   │  cost_cents     │   │  CashOnDelivery │       │
//! │  │  ...            │   │  eta_days       │   │  Upi            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Triple
//! Every product carries three prices, mirroring the storefront display:
//! - `mrp_cents`: the printed list price (struck through in the UI)
//! - `price_cents`: the regular shelf price
//! - `discounted_price_cents`: the price the shopper actually pays
//!
//! All cart and order math runs on `discounted_price_cents`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_CURRENCY, ESTIMATED_DELIVERY_DAYS};

// =============================================================================
// Category
// =============================================================================

/// Product category on the storefront.
///
/// ## Why an Enum?
/// The compare list's category invariant needs exact equality, not string
/// comparison against whatever casing the catalog happened to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Medicines,
    Supplements,
    Devices,
    PersonalCare,
    BabyCare,
    FirstAid,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Medicines => "Medicines",
            Category::Supplements => "Supplements",
            Category::Devices => "Devices",
            Category::PersonalCare => "Personal Care",
            Category::BabyCare => "Baby Care",
            Category::FirstAid => "First Aid",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available on the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (catalog slug or UUID).
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Brand name (e.g., "HealthPlus").
    pub brand: String,

    /// Storefront category.
    pub category: Category,

    /// Optional long description for the detail page.
    pub description: Option<String>,

    /// Image URL or asset path.
    pub image: String,

    /// Printed list price (MRP) in cents.
    pub mrp_cents: i64,

    /// Regular shelf price in cents.
    pub price_cents: i64,

    /// Price the shopper pays, in cents.
    pub discounted_price_cents: i64,

    /// Whether the product requires an uploaded prescription.
    pub prescription_required: bool,

    /// Whether the product can currently be added to the cart.
    pub in_stock: bool,

    /// Optional per-product purchase cap enforced by the storefront layer.
    pub max_quantity: Option<i64>,
}

impl Product {
    /// Returns the effective selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.discounted_price_cents)
    }

    /// Returns the list price (MRP) as Money.
    #[inline]
    pub fn mrp(&self) -> Money {
        Money::from_cents(self.mrp_cents)
    }

    /// Discount against MRP in basis points, for "X% off" badges.
    pub fn discount_bps(&self) -> u32 {
        self.mrp().discount_bps(self.selling_price())
    }

    /// Minimal in-stock fixture used by doctests and unit tests.
    ///
    /// MRP is fixed at 120% of the discounted price so discount math has
    /// something to chew on.
    pub fn sample(id: &str, discounted_price_cents: i64) -> Self {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            brand: "HealthPlus".to_string(),
            category: Category::Medicines,
            description: None,
            image: format!("/images/{id}.webp"),
            mrp_cents: discounted_price_cents * 12 / 10,
            price_cents: discounted_price_cents * 11 / 10,
            discounted_price_cents,
            prescription_required: false,
            in_stock: true,
            max_quantity: None,
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Delivery address collected in checkout step 1.
///
/// Validated by field-level rules only; there are no cross-field
/// consistency checks (city/state/postal are not verified against each
/// other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingAddress {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Shipping method chosen in checkout step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    Standard,
    Express,
    Overnight,
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Express => "Express",
            ShippingMethod::Overnight => "Overnight",
        };
        f.write_str(label)
    }
}

/// A priced shipping option returned by the rate fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingRate {
    pub method: ShippingMethod,
    /// Human label, e.g. "Express (2-3 business days)".
    pub label: String,
    pub cost_cents: i64,
    /// Carrier estimate in whole days.
    pub eta_days: i64,
}

impl ShippingRate {
    /// Returns the shipping cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// Payment method chosen in checkout step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment through the (mocked) payment intent flow.
    Card,
    /// Pay the courier on delivery; carries a flat handling fee.
    CashOnDelivery,
    /// UPI / wallet transfer.
    Upi,
}

impl PaymentMethod {
    /// Flat handling fee charged for this method.
    ///
    /// Cash on delivery costs the courier a collection round; the $4.99
    /// fee passes that through. Electronic methods are free.
    pub fn handling_fee(&self) -> Money {
        match self {
            PaymentMethod::CashOnDelivery => Money::from_cents(499),
            PaymentMethod::Card | PaymentMethod::Upi => Money::zero(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Upi => "UPI",
        };
        f.write_str(label)
    }
}

/// A created (mock) payment intent.
///
/// The token is what a real gateway would hand back for client-side
/// confirmation; the mock produces a deterministic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentIntent {
    pub token: String,
    pub amount_cents: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Order
// =============================================================================

/// The status of a placed order.
///
/// Orders are immutable after creation, so in practice every order in
/// history is `Confirmed`. The remaining variants exist for forward
/// compatibility with a real fulfilment backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// A line item frozen into an order at checkout completion.
///
/// Uses the snapshot pattern: product data is copied so order history
/// stays stable even if the catalog changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub product_id: String,
    /// Product name at time of purchase (frozen).
    pub name: String,
    /// Unit price paid, in cents (frozen).
    pub unit_price_cents: i64,
    pub quantity: i64,
    /// unit_price × quantity.
    pub line_total_cents: i64,
}

/// A placed order.
///
/// ## Immutability
/// Created once at checkout completion and appended to order history.
/// There is no update path: no setters, no status transitions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub subtotal_cents: i64,
    pub shipping_cost_cents: i64,
    pub payment_fee_cents: i64,
    /// subtotal + shipping + payment fee.
    pub total_cents: i64,
    /// ISO 4217 code, e.g. "USD".
    pub currency: String,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub estimated_delivery: DateTime<Utc>,
}

impl Order {
    /// Computes the delivery estimate for an order created at `created_at`.
    ///
    /// Flat `created_at + 5 days`; per-rate ETAs are display hints only and
    /// do not move this date.
    pub fn estimate_delivery(created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + Duration::days(ESTIMATED_DELIVERY_DAYS)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Default currency for new orders.
pub fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
