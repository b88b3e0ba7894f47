//! # CarePoint API Clients
//!
//! REST-shaped remote API clients for the storefront. Every client is a
//! trait so the facade layer can swap the mock implementations for real
//! HTTP clients without touching its own code.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        API Client Layer                                 │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌───────────────┐  │
//! │  │  ProductApi  │ │ ShippingApi  │ │  PaymentApi  │ │    UserApi    │  │
//! │  │              │ │              │ │              │ │               │  │
//! │  │ catalog      │ │ rate quotes  │ │ intents      │ │ wishlist push │  │
//! │  │ lookups      │ │              │ │              │ │   + pull      │  │
//! │  └──────┬───────┘ └──────┬───────┘ └──────┬───────┘ └───────┬───────┘  │
//! │         │                │                │                 │          │
//! │         └────────────────┴───────┬────────┴─────────────────┘          │
//! │                                  │                                     │
//! │                     Mock implementations with                          │
//! │                     realistic latency (ApiConfig)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The mocks never open a socket. They keep the base URL in their config
//! so request logging looks like real traffic, sleep for the configured
//! latency, then answer from fixture data.

pub mod catalog;
pub mod config;
pub mod error;
pub mod payment;
pub mod shipping;
pub mod user;

pub use catalog::{MockProductApi, ProductApi};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use payment::{MockPaymentApi, PaymentApi};
pub use shipping::{MockShippingApi, ShippingApi};
pub use user::{MockUserApi, UserApi};
