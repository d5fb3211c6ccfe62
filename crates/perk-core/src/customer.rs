//! # Customer Record
//!
//! The mutable per-customer record: identity, cumulative spend, point
//! balance, and an append-only transaction log.
//!
//! ## Record Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Customer Record Operations                            │
//! │                                                                         │
//! │  Caller Action             Record Operation        State Change         │
//! │  ─────────────             ────────────────        ────────────         │
//! │                                                                         │
//! │  New purchase ───────────► record_transaction() ─► history.push(tx)    │
//! │                                                    total_spent += amt   │
//! │                                                                         │
//! │  Reward recompute ───────► set_points() ─────────► points = new total  │
//! │  (rewards::apply_reward)                                                │
//! │                                                                         │
//! │  Voucher redemption ─────► try_redeem() ─────────► points -= required  │
//! │  (rewards::redeem)                                  (only if covered)   │
//! │                                                                         │
//! │  Display / reporting ────► accessors ────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: recording a transaction never changes points. The caller         │
//! │        invokes the reward engine separately after each purchase.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None inside this type. The record assumes exclusive access during each
//! operation; a host exposing one record to concurrent callers must wrap it
//! externally (one `Mutex` or actor per customer).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Transaction;
use crate::validation::{
    validate_customer_name, validate_initial_spend, validate_points_balance,
    validate_redeem_points, validate_transaction_amount,
};

// =============================================================================
// Customer
// =============================================================================

/// A customer in the loyalty program.
///
/// ## Invariants
/// - `total_spent_cents` equals the sum of all recorded transaction amounts
/// - `points` never goes negative
/// - `history` is append-only; insertion order = chronological order
///
/// Fields are private so every mutation goes through an operation that
/// upholds the invariants. A rejected operation changes nothing.
///
/// ## Dual-Key Identity
/// - `id`: UUID v4 - immutable, machine identity
/// - `name`: human-readable identity, also immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4).
    id: String,

    /// Customer name, immutable after creation.
    name: String,

    /// Cumulative spend in minor currency units.
    total_spent_cents: i64,

    /// Current reward point balance.
    points: i64,

    /// Append-only transaction log.
    history: Vec<Transaction>,
}

impl Customer {
    /// Creates a new customer record.
    ///
    /// A positive `initial_spent` is immediately recorded as the first
    /// transaction, so the spend total and the history start consistent.
    /// Zero is allowed and leaves the history empty.
    ///
    /// ## Errors
    /// - `ValidationError::Required` / `TooLong` for a bad name
    /// - `ValidationError::MustBeNonNegative` for a negative initial spend
    ///
    /// ## Example
    /// ```rust
    /// use perk_core::{Customer, Money};
    ///
    /// let customer = Customer::create("Andi", Money::from_cents(250_000)).unwrap();
    /// assert_eq!(customer.total_spent().cents(), 250_000);
    /// assert_eq!(customer.points(), 0);
    /// assert_eq!(customer.history().len(), 1);
    /// ```
    pub fn create(name: &str, initial_spent: Money) -> CoreResult<Self> {
        validate_customer_name(name)?;
        validate_initial_spend(initial_spent)?;

        let mut customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            total_spent_cents: 0,
            points: 0,
            history: Vec::new(),
        };

        if initial_spent.is_positive() {
            customer.record_transaction(initial_spent)?;
        }

        Ok(customer)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Unique record identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Customer name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current point balance.
    #[inline]
    pub fn points(&self) -> i64 {
        self.points
    }

    /// Cumulative spend across all recorded transactions.
    #[inline]
    pub fn total_spent(&self) -> Money {
        Money::from_cents(self.total_spent_cents)
    }

    /// Read-only view of the transaction log, oldest first.
    #[inline]
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Records a purchase: appends to the history and grows the spend total.
    ///
    /// Does NOT touch the point balance - point computation is the reward
    /// engine's job, invoked separately by the caller after each purchase.
    ///
    /// ## Errors
    /// `ValidationError::MustBePositive` when `amount <= 0`; the record is
    /// untouched in that case.
    ///
    /// ## Example
    /// ```rust
    /// use perk_core::{Customer, Money};
    ///
    /// let mut customer = Customer::create("Andi", Money::zero()).unwrap();
    /// customer.record_transaction(Money::from_cents(75_000)).unwrap();
    /// customer.record_transaction(Money::from_cents(25_000)).unwrap();
    ///
    /// assert_eq!(customer.total_spent().cents(), 100_000);
    /// assert_eq!(customer.history().len(), 2);
    /// ```
    pub fn record_transaction(&mut self, amount: Money) -> CoreResult<()> {
        validate_transaction_amount(amount)?;

        self.history.push(Transaction {
            amount_cents: amount.cents(),
            recorded_at: Utc::now(),
        });
        self.total_spent_cents += amount.cents();

        Ok(())
    }

    /// Sets the point balance directly.
    ///
    /// Intended to be called by the reward engine when it writes back a
    /// recomputed total; host layers should not call this themselves.
    ///
    /// ## Errors
    /// `ValidationError::MustBeNonNegative` when `points < 0`.
    pub fn set_points(&mut self, points: i64) -> CoreResult<()> {
        validate_points_balance(points)?;
        self.points = points;
        Ok(())
    }

    /// Attempts to spend points, e.g. for a voucher.
    ///
    /// Returns `Ok(true)` and decrements when the balance covers the spend,
    /// `Ok(false)` leaving the balance unchanged otherwise. An insufficient
    /// balance is an expected outcome, not an error.
    ///
    /// ## Errors
    /// `ValidationError::MustBePositive` when `points_to_spend <= 0`.
    pub fn try_redeem(&mut self, points_to_spend: i64) -> CoreResult<bool> {
        validate_redeem_points(points_to_spend)?;

        if self.points >= points_to_spend {
            self.points -= points_to_spend;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
