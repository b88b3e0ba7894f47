//! # Storefront Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in CarePoint                              │
//! │                                                                         │
//! │  Frontend                    Command Facade                             │
//! │  ────────                    ──────────────                             │
//! │                                                                         │
//! │  add_to_cart('asp-500')                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Method                                                  │  │
//! │  │  Result<T, StorefrontError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog miss? ──── ApiError::NotFound ─────────────┐            │  │
//! │  │         │                                           ▼            │  │
//! │  │  Domain rule? ───── CoreError::OutOfStock ──── StorefrontError ─►│  │
//! │  │         │                                           ▲            │  │
//! │  │  Persistence? ───── StoreError::Io ─────────────────┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "OUT_OF_STOCK", "message": "... is out of stock" }          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use carepoint_api::ApiError;
use carepoint_core::CoreError;
use carepoint_storage::StoreError;

/// Result type alias for storefront commands.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Error returned from storefront commands.
///
/// Serializes with a machine-readable `code` and a human-readable
/// `message` so the frontend can branch without string matching.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
#[serde(rename_all = "camelCase")]
pub struct StorefrontError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Product cannot be purchased right now
    OutOfStock,

    /// Cart operation failed
    CartError,

    /// Compare-list rule violated
    CompareError,

    /// Checkout is missing a required selection
    CheckoutIncomplete,

    /// Persistence failed
    StorageError,

    /// Remote service unreachable
    ServiceUnavailable,

    /// Payment gateway refused the request
    PaymentError,

    /// Anything unexpected
    Internal,
}

impl StorefrontError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StorefrontError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        StorefrontError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        StorefrontError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for StorefrontError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductNotFound(_) => ErrorCode::NotFound,
            CoreError::OutOfStock { .. } => ErrorCode::OutOfStock,
            CoreError::QuantityTooLarge { .. } | CoreError::Validation(_) => {
                ErrorCode::ValidationError
            }
            CoreError::ProductNotInCart(_) | CoreError::EmptyCart => ErrorCode::CartError,
            CoreError::AlreadyInCompare(_)
            | CoreError::CompareCategoryMismatch { .. }
            | CoreError::CompareListFull { .. } => ErrorCode::CompareError,
            CoreError::CheckoutIncomplete { .. } => ErrorCode::CheckoutIncomplete,
        };
        StorefrontError::new(code, err.to_string())
    }
}

impl From<StoreError> for StorefrontError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => StorefrontError::not_found(&entity, &id),
            other => StorefrontError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}

impl From<ApiError> for StorefrontError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { entity, id } => StorefrontError::not_found(&entity, &id),
            ApiError::Unavailable(service) => StorefrontError::new(
                ErrorCode::ServiceUnavailable,
                format!("Service unavailable: {}", service),
            ),
            ApiError::Rejected { message } => {
                StorefrontError::new(ErrorCode::PaymentError, message)
            }
            other => StorefrontError::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: StorefrontError = CoreError::OutOfStock {
            name: "Aspirin 500mg Tablets".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert!(err.message.contains("Aspirin"));
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let json =
            serde_json::to_value(StorefrontError::not_found("Product", "asp-500")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json["message"].as_str().unwrap().contains("asp-500"));
    }

    #[test]
    fn test_api_unavailable_maps_to_service_unavailable() {
        let err: StorefrontError = ApiError::unavailable("user service").into();
        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
    }
}
