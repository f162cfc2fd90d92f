//! # Validation Module
//!
//! Configuration validation utilities for QuickCart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Construction time (THIS MODULE)                              │
//! │  ├── Catalog: unique ids, non-empty names, non-negative prices         │
//! │  └── Promotion: zero-priced gift, positive threshold                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Runtime (cart operations)                                    │
//! │  ├── Mutations never return validation errors; they are total          │
//! │  └── Negative quantities clamp to 0, unknown ids are no-ops            │
//! │                                                                         │
//! │  Validating the static configuration once up front is what lets the    │
//! │  mutation path stay infallible.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quickcart_core::validation::{validate_product_name, validate_price_cents};
//!
//! validate_product_name("Laptop").unwrap();
//! validate_price_cents(50_000).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
///
/// ## Example
/// ```rust
/// use quickcart_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Wireless Mouse").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
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

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (the free gift)
///
/// ## Example
/// ```rust
/// use quickcart_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(50_000).is_ok()); // $500.00
/// assert!(validate_price_cents(0).is_ok());      // Free gift
/// assert!(validate_price_cents(-100).is_err());  // Invalid
/// ```
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

/// Validates the gift promotion threshold in cents.
///
/// ## Rules
/// - Must be positive (> 0); a zero threshold would put the gift in
///   every cart, including an empty one
pub fn validate_threshold_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "threshold".to_string(),
        });
    }

    Ok(())
}

/// Validates the free gift's price in cents.
///
/// ## Rules
/// - Must be exactly zero
///
/// ## Why Zero?
/// The gift contributes nothing to the subtotal, so adding or removing it
/// can never re-cross the threshold. A priced gift could oscillate:
/// adding it would push the subtotal up, removing it would drop the cart
/// back below the threshold, forever.
pub fn validate_gift_price_cents(cents: i64) -> ValidationResult<()> {
    if cents != 0 {
        return Err(ValidationError::MustBeZero {
            field: "gift price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop").is_ok());
        assert!(validate_product_name("Wireless Mouse").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(50_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_threshold_cents() {
        assert!(validate_threshold_cents(100_000).is_ok());
        assert!(validate_threshold_cents(1).is_ok());

        assert!(validate_threshold_cents(0).is_err());
        assert!(validate_threshold_cents(-1).is_err());
    }

    #[test]
    fn test_validate_gift_price_cents() {
        assert!(validate_gift_price_cents(0).is_ok());
        assert!(validate_gift_price_cents(1).is_err());
        assert!(validate_gift_price_cents(-1).is_err());
    }
}
