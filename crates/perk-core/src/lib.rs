//! # perk-core: Pure Business Logic for the Perk Loyalty Program
//!
//! This crate is the **heart** of Perk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Perk Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Presentation Layer (CLI / web / API)                  │   │
//! │  │   record purchase ──► show reward ──► redeem voucher           │   │
//! │  │                    (OUT OF SCOPE HERE)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed calls / serialized types         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ perk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ customer  │  │  rewards  │  │   │
//! │  │   │   Tier    │  │   Money   │  │ Customer  │  │ tier_of   │  │   │
//! │  │   │  Voucher  │  │           │  │  history  │  │  redeem   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Tier, Voucher, Transaction, outcomes)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`customer`] - The mutable customer record with its invariants
//! - [`rewards`] - Stateless reward engine (tier, points, redemption)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same record
//!    state, same result
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64), all rate
//!    math is basis points - floats never touch the ledger
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Exclusive Access**: No internal locking; a host serializes access to
//!    each record externally
//!
//! ## Example Usage
//!
//! ```rust
//! use perk_core::{rewards, Customer, Money};
//!
//! // A new customer whose first purchase is recorded at creation.
//! let mut customer = Customer::create("Andi", Money::from_cents(250_000)).unwrap();
//!
//! // The caller invokes the reward engine after every recorded purchase.
//! let grant = rewards::apply_reward(&mut customer).unwrap();
//! assert_eq!(grant.earned, 12_500); // 5% of spend, no bonus at Bronze
//!
//! // Points buy vouchers from the fixed catalog.
//! let outcome = rewards::redeem(&mut customer, 3).unwrap();
//! assert!(outcome.is_redeemed());
//! assert_eq!(customer.points(), 12_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod customer;
pub mod error;
pub mod money;
pub mod rewards;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use perk_core::Money` instead of
// `use perk_core::money::Money`

pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Base earn rate in basis points: 5% of spend becomes base points.
///
/// ## Why a constant?
/// The rate is fixed program-wide policy. Keeping it here (rather than a
/// literal inside the computation) keeps the engine pure and lets tests and
/// host layers reference the same number.
pub const BASE_EARN_RATE_BPS: u32 = 500;

/// Maximum length of a customer name.
///
/// ## Business Reason
/// Keeps display layers and downstream storage honest about field sizes.
/// Can be made configurable in future versions.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
