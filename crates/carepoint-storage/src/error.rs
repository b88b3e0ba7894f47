//! # Storage Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and operation context         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorefrontError (facade) ← Serialized for the frontend                │
//! │                                                                         │
//! │  NOTE: cart/wishlist/compare writes are deliberately fire-and-forget   │
//! │  at the facade - a failed write is logged, not rolled back. Order      │
//! │  appends are the exception and propagate.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Blob not found under the given key.
    ///
    /// Typed stores usually treat an absent blob as "empty collection";
    /// this surfaces only for lookups that require presence (order by id).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Filesystem operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory missing or unwritable
    /// - Disk full
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Blob could not be (de)serialized.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated blob file
    /// - A blob written by an incompatible build (there is no version tag)
    #[error("Bad blob under key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend-specific internal failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Wraps an I/O error with its key context.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    /// Wraps a serde error with its key context.
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            key: key.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Order", "abc-123");
        assert_eq!(err.to_string(), "Order not found: abc-123");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::io("cart", io);
        assert!(err.to_string().contains("key 'cart'"));
    }
}
