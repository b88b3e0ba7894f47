//! # Validation Module
//!
//! Field-level validation rules for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend forms                                               │
//! │  ├── required / pattern attributes                                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands (Rust)                                   │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules before business logic runs               │
//! │                                                                         │
//! │  There is no Layer 3: the blob store enforces nothing. These checks    │
//! │  are the last line before data is persisted.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Address validation is field-level only (required/pattern); there are no
//! cross-field consistency checks, matching the checkout forms.

use crate::error::ValidationError;
use crate::types::ShippingAddress;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no upper bound here: the storefront facade applies the
/// optional configured per-item maximum.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, promotional samples)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

fn require_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// Pattern-level only (one `@` with characters either side, a dot in the
/// domain part). Full RFC 5322 parsing is not the storefront's job.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    require_field("email", email)?;

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - 7 to 15 digits after stripping spaces, dashes, parens and a leading `+`
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    require_field("phone", phone)?;

    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.len() < 7 || digits.len() > 15 {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain 7 to 15 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a postal code.
///
/// ## Rules
/// - 3 to 10 characters, alphanumeric plus space/hyphen
///   (covers US ZIP, ZIP+4, UK, CA formats without country-specific rules)
pub fn validate_postal_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();
    require_field("postal_code", code)?;

    if code.len() < 3 || code.len() > 10 {
        return Err(ValidationError::OutOfRange {
            field: "postal_code".to_string(),
            min: 3,
            max: 10,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "postal_code".to_string(),
            reason: "must contain only letters, numbers, spaces, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a full shipping address (checkout step 1).
///
/// Runs every field rule and returns the first failure. No cross-field
/// checks: city/state/postal are not verified against each other.
pub fn validate_shipping_address(address: &ShippingAddress) -> ValidationResult<()> {
    require_field("full_name", &address.full_name)?;
    validate_email(&address.email)?;
    validate_phone(&address.phone)?;
    require_field("line1", &address.line1)?;
    require_field("city", &address.city)?;
    require_field("state", &address.state)?;
    validate_postal_code(&address.postal_code)?;
    require_field("country", &address.country)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> ShippingAddress {
        ShippingAddress {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            line1: "12 Elm Street".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
            country: "US".to_string(),
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok()); // no upper bound here

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(2735).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Aspirin 500mg").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("asha@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("asha@nodot").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("62704").is_ok());
        assert!(validate_postal_code("SW1A 1AA").is_ok());
        assert!(validate_postal_code("62704-1234").is_ok());
        assert!(validate_postal_code("12").is_err());
        assert!(validate_postal_code("62704!").is_err());
    }

    #[test]
    fn test_validate_shipping_address() {
        assert!(validate_shipping_address(&valid_address()).is_ok());

        let mut missing_city = valid_address();
        missing_city.city = "  ".to_string();
        let err = validate_shipping_address(&missing_city).unwrap_err();
        assert_eq!(err.to_string(), "city is required");

        let mut bad_email = valid_address();
        bad_email.email = "not-an-email".to_string();
        assert!(validate_shipping_address(&bad_email).is_err());
    }
}
