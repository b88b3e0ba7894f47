//! # carepoint-core: Pure Business Logic for the CarePoint Storefront
//!
//! This crate is the **heart** of the CarePoint storefront engine. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CarePoint Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (web storefront)                    │   │
//! │  │    Catalog UI ──► Cart UI ──► Checkout Wizard ──► Orders UI    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              carepoint-storefront (commands facade)             │   │
//! │  │    add_to_cart, place_order, fetch_shipping_rates, etc.        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ carepoint-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌──────────────┐  │   │
//! │  │   │   types   │ │   money   │ │   cart    │ │   checkout   │  │   │
//! │  │   │  Product  │ │   Money   │ │   Cart    │ │ CheckoutFlow │  │   │
//! │  │   │   Order   │ │  savings  │ │ CartItem  │ │  step wizard │  │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └──────────────┘  │   │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐                   │   │
//! │  │   │ wishlist  │ │  compare  │ │ validation│                   │   │
//! │  │   └───────────┘ └───────────┘ └───────────┘                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            carepoint-storage (key/value blob store)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, ShippingAddress, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart line items and derived totals
//! - [`wishlist`] - Saved-for-later product snapshots
//! - [`compare`] - Side-by-side comparison list with its two invariants
//! - [`checkout`] - The five-step checkout wizard state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use carepoint_core::cart::Cart;
//! use carepoint_core::types::Product;
//!
//! let mut cart = Cart::new();
//! let product = Product::sample("aspirin-500", 2735);
//!
//! // Adding the same product twice merges into one line
//! cart.add_item(&product, 1);
//! cart.add_item(&product, 1);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_amount_cents(), 5470);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod compare;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use carepoint_core::Money` instead of
// `use carepoint_core::money::Money`

pub use cart::{Cart, CartItem, CartTotals};
pub use checkout::{CheckoutFlow, CheckoutStep, OrderTotals};
pub use compare::{CompareItem, CompareList};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::{Wishlist, WishlistItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of products on the compare list.
///
/// ## Business Reason
/// The comparison table renders side by side; more than four columns is
/// unreadable on the storefront and meaningless to shoppers.
pub const MAX_COMPARE_ITEMS: usize = 4;

/// Number of days added to the order date for the delivery estimate.
///
/// ## Business Reason
/// The fulfilment partner commits to a flat five-day window for standard
/// pharmacy orders. Rate-specific ETAs refine this per shipping method.
pub const ESTIMATED_DELIVERY_DAYS: i64 = 5;

/// ISO 4217 currency code used for all order totals.
pub const DEFAULT_CURRENCY: &str = "USD";
