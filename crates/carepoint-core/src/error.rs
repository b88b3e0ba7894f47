//! # Error Types
//!
//! Domain-specific error types for carepoint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carepoint-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  carepoint-storage errors (separate crate)                             │
//! │  └── StoreError       - Persistence failures                           │
//! │                                                                         │
//! │  carepoint-storefront errors (facade)                                  │
//! │  └── StorefrontError  - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StorefrontError → Frontend        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, category, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! ## Soft Results vs Typed Errors
//! The compare-list invariants were historically reported as soft
//! `{success, message}` objects. Here they are typed variants
//! ([`CoreError::CompareCategoryMismatch`], [`CoreError::CompareListFull`]);
//! the storefront facade converts them back to a soft-shaped DTO at the
//! command boundary.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is not in the cart.
    ///
    /// ## When This Occurs
    /// - Updating or removing a line for a product id that was never added
    /// - A second tab removed the line before this one did
    #[error("Product {0} not in cart")]
    ProductNotInCart(String),

    /// Product is marked out of stock and cannot be added to the cart.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Item quantity exceeds the configured per-item maximum.
    ///
    /// ## Note
    /// The cart itself enforces no cap; this is raised by the storefront
    /// facade when a per-item `max_quantity` is configured.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout was attempted with an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Compare list already holds an entry for this product.
    #[error("Product {0} is already on the compare list")]
    AlreadyInCompare(String),

    /// Compare list entries must all share one category.
    ///
    /// ## When This Occurs
    /// The first item added fixes the list's category. Adding a product
    /// from any other category is rejected until the list is cleared.
    #[error("Only {expected} products can be compared together (got {found})")]
    CompareCategoryMismatch { expected: String, found: String },

    /// Compare list is at capacity.
    #[error("Compare list cannot hold more than {max} products")]
    CompareListFull { max: usize },

    /// A checkout step was submitted before its prerequisites exist.
    ///
    /// ## When This Occurs
    /// - Placing an order with no shipping address on file
    /// - Selecting a payment method before a shipping rate was chosen
    #[error("Checkout is missing {missing}")]
    CheckoutIncomplete { missing: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email or postal code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CompareCategoryMismatch {
            expected: "Medicines".to_string(),
            found: "Devices".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Only Medicines products can be compared together (got Devices)"
        );

        let err = CoreError::CompareListFull { max: 4 };
        assert_eq!(
            err.to_string(),
            "Compare list cannot hold more than 4 products"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "postal_code".to_string(),
        };
        assert_eq!(err.to_string(), "postal_code is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
