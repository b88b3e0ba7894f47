//! # Storefront Commands
//!
//! The command surface of the facade, split by feature area. Every file
//! holds one `impl Storefront` block so the API surface reads like the
//! storefront's feature list.
//!
//! ## Persistence Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mutate, Then Persist                                 │
//! │                                                                         │
//! │  command ──► in-memory state change ──► store.save(...)                │
//! │                                              │                          │
//! │                                        save failed?                     │
//! │                                              │                          │
//! │                     cart / wishlist / compare: warn + keep going        │
//! │                     (session state stays authoritative)                 │
//! │                                              │                          │
//! │                     order append: PROPAGATE (an order must not          │
//! │                     silently vanish)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod compare;
pub mod orders;
pub mod wishlist;

pub use cart::CartView;
pub use compare::CompareOutcome;
