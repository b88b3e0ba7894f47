//! # Session State
//!
//! In-memory state for one storefront session. Each piece of state wraps
//! its core type in `Arc<Mutex<T>>` so concurrent commands serialize
//! their writes, and exposes closure-based accessors instead of leaking
//! guards.

pub mod cart;
pub mod checkout;
pub mod compare;
pub mod config;
pub mod wishlist;

pub use cart::CartState;
pub use checkout::CheckoutState;
pub use compare::CompareState;
pub use config::StorefrontConfig;
pub use wishlist::WishlistState;
