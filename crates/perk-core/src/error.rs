//! # Error Types
//!
//! Domain-specific error types for perk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  perk-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Host layer errors (CLI, API - out of scope)                           │
//! │  └── Whatever the presentation layer maps these to                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → host layer → user-facing message  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (selector, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Running out of points is NOT an error - see `RedeemOutcome`

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent rule violations or domain logic failures. They are
/// returned synchronously to the immediate caller; no operation leaves the
/// customer record partially mutated when one is raised.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Voucher selector is not present in the catalog.
    ///
    /// ## When This Occurs
    /// - Caller passes a selector outside the fixed catalog (e.g. 0 or 99)
    /// - A presentation layer forwards a "cancel" choice instead of
    ///   handling it itself
    #[error("No voucher with selector {selector}")]
    VoucherNotFound { selector: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
