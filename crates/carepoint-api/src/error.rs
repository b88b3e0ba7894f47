//! # API Error Types
//!
//! Error types for remote API calls.

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the API client layer.
///
/// The mock clients only ever produce `Unavailable`, `Rejected`, and
/// `NotFound`; the remaining variants exist so a real HTTP client can
/// slot in behind the same traits.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote service could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The remote service understood the request but refused it.
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// The requested resource does not exist on the remote side.
    #[error("Not found: {entity} '{id}'")]
    NotFound { entity: String, id: String },

    /// Request or response body could not be (de)serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The client was misconfigured (bad base URL etc.).
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    pub fn unavailable(service: impl Into<String>) -> Self {
        ApiError::Unavailable(service.into())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Returns true if the caller may sensibly retry or fall back to a
    /// local copy of the data.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::not_found("Product", "asp-500");
        assert!(err.to_string().contains("Product"));
        assert!(err.to_string().contains("asp-500"));
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::unavailable("user service").is_retryable());
        assert!(!ApiError::rejected("card declined").is_retryable());
    }
}
