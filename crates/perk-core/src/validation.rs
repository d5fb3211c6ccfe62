//! # Validation Module
//!
//! Input validation for Perk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (CLI / web form - out of scope)                 │
//! │  ├── Input parsing, retry prompts                                      │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Rejects bad input before ANY state change                         │
//! │  └── Typed errors the host layer maps to messages                      │
//! │                                                                         │
//! │  Every mutating customer operation calls one of these first, so a      │
//! │  failed call never leaves the record partially mutated.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_CUSTOMER_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use perk_core::validation::validate_customer_name;
///
/// assert!(validate_customer_name("Andi").is_ok());
/// assert!(validate_customer_name("").is_err());
/// assert!(validate_customer_name(&"A".repeat(200)).is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Monetary Validators
// =============================================================================

/// Validates a transaction amount.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Zero-value purchases earn nothing and are rejected rather than recorded
pub fn validate_transaction_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates the initial spend passed at customer creation.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a brand-new customer with no purchases yet)
///
/// ## Example
/// ```rust
/// use perk_core::money::Money;
/// use perk_core::validation::validate_initial_spend;
///
/// assert!(validate_initial_spend(Money::from_cents(250_000)).is_ok());
/// assert!(validate_initial_spend(Money::zero()).is_ok());
/// assert!(validate_initial_spend(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_initial_spend(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "initial spend".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Point Validators
// =============================================================================

/// Validates a point balance assignment.
///
/// ## Rules
/// - Must be non-negative (>= 0); the balance invariant is never violated
pub fn validate_points_balance(points: i64) -> ValidationResult<()> {
    if points < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "points".to_string(),
        });
    }

    Ok(())
}

/// Validates a point amount to spend on redemption.
///
/// ## Rules
/// - Must be positive (> 0); spending nothing is a caller bug, not a no-op
pub fn validate_redeem_points(points: i64) -> ValidationResult<()> {
    if points <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "points to spend".to_string(),
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
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Andi").is_ok());
        assert!(validate_customer_name("Siti Rahma").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_transaction_amount() {
        assert!(validate_transaction_amount(Money::from_cents(1)).is_ok());
        assert!(validate_transaction_amount(Money::from_cents(250_000)).is_ok());

        assert!(validate_transaction_amount(Money::zero()).is_err());
        assert!(validate_transaction_amount(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_initial_spend() {
        assert!(validate_initial_spend(Money::zero()).is_ok());
        assert!(validate_initial_spend(Money::from_cents(250_000)).is_ok());
        assert!(validate_initial_spend(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_points_balance() {
        assert!(validate_points_balance(0).is_ok());
        assert!(validate_points_balance(12_500).is_ok());
        assert!(validate_points_balance(-1).is_err());
    }

    #[test]
    fn test_validate_redeem_points() {
        assert!(validate_redeem_points(100).is_ok());
        assert!(validate_redeem_points(0).is_err());
        assert!(validate_redeem_points(-100).is_err());
    }
}
