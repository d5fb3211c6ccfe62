//! # Domain Types
//!
//! Core domain types used throughout Perk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Transaction    │   │     Voucher     │   │  RedeemOutcome  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  amount_cents   │   │  selector       │   │  Redeemed       │       │
//! │  │  recorded_at    │   │  points_required│   │  Insufficient   │       │
//! │  └─────────────────┘   │  value_cents    │   │    Points       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Tier       │   │   BonusRate     │   │   RewardGrant   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Bronze         │   │  bps (u32)      │   │  earned         │       │
//! │  │  Silver         │   │  200 = +2%      │   │  tier           │       │
//! │  │  Gold           │   └─────────────────┘   └─────────────────┘       │
//! │  │  Platinum       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived, Not Stored
//! A customer's tier is never persisted - it is always recomputed from the
//! current point balance so it can never go stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Bonus Rate
// =============================================================================

/// Tier bonus rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 200 bps = +2% (the Silver tier bonus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BonusRate(u32);

impl BonusRate {
    /// Creates a bonus rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        BonusRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero bonus rate.
    #[inline]
    pub const fn zero() -> Self {
        BonusRate(0)
    }

    /// Checks if the bonus rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for BonusRate {
    fn default() -> Self {
        BonusRate::zero()
    }
}

// =============================================================================
// Tier
// =============================================================================

/// A loyalty tier, determined solely by the current point balance.
///
/// ## Tier Policy
/// ```text
/// ┌──────────┬────────────┬────────────┐
/// │   Tier   │ Min points │ Bonus rate │
/// ├──────────┼────────────┼────────────┤
/// │ Bronze   │      0     │     0%     │
/// │ Silver   │    500     │    +2%     │
/// │ Gold     │   2000     │    +5%     │
/// │ Platinum │   5000     │   +10%     │
/// └──────────┴────────────┴────────────┘
/// ```
///
/// Thresholds are inclusive lower bounds. Derive order gives
/// `Bronze < Silver < Gold < Platinum`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Entry tier, no bonus.
    Bronze,
    /// 500+ points, +2% bonus on base points.
    Silver,
    /// 2000+ points, +5% bonus on base points.
    Gold,
    /// 5000+ points, +10% bonus on base points.
    Platinum,
}

impl Tier {
    /// All tiers in ascending threshold order.
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Inclusive minimum point balance required for this tier.
    #[inline]
    pub const fn min_points(&self) -> i64 {
        match self {
            Tier::Bronze => 0,
            Tier::Silver => 500,
            Tier::Gold => 2000,
            Tier::Platinum => 5000,
        }
    }

    /// Bonus rate applied on top of base points for members of this tier.
    #[inline]
    pub const fn bonus_rate(&self) -> BonusRate {
        match self {
            Tier::Bronze => BonusRate::from_bps(0),
            Tier::Silver => BonusRate::from_bps(200),
            Tier::Gold => BonusRate::from_bps(500),
            Tier::Platinum => BonusRate::from_bps(1000),
        }
    }

    /// The next tier up, or `None` from Platinum.
    #[inline]
    pub const fn next(&self) -> Option<Tier> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Platinum),
            Tier::Platinum => None,
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Bronze
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A recorded purchase.
/// The amount is frozen at recording time, snapshot-style.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    /// Amount spent, in minor currency units.
    pub amount_cents: i64,

    /// When the transaction was recorded. Insertion order in the customer
    /// history equals chronological order.
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Voucher
// =============================================================================

/// A fixed catalog offer: points in, monetary value out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Voucher {
    /// Small integer selector a caller uses to pick this voucher.
    pub selector: u32,

    /// Points deducted on successful redemption.
    pub points_required: i64,

    /// Monetary value in minor currency units.
    pub value_cents: i64,
}

impl Voucher {
    /// Returns the voucher value as Money.
    #[inline]
    pub fn value(&self) -> Money {
        Money::from_cents(self.value_cents)
    }
}

// =============================================================================
// Reward Grant
// =============================================================================

/// The result of a reward computation, for display/reporting by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RewardGrant {
    /// Newly earned points: new total balance minus the old balance.
    ///
    /// Deliberately unclamped. The record's invariants make a negative value
    /// impossible through normal use, so one surfacing here means a caller
    /// tampered with the balance between computations - that must be visible,
    /// not silently zeroed.
    pub earned: i64,

    /// The tier the customer holds after the balance update.
    pub tier: Tier,
}

// =============================================================================
// Redeem Outcome
// =============================================================================

/// Outcome of a voucher redemption attempt.
///
/// Running out of points is an expected business condition, so both variants
/// are normal results - neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RedeemOutcome {
    /// Points were deducted and the voucher granted.
    Redeemed {
        /// Monetary value of the granted voucher, in minor units.
        value_cents: i64,
        /// Points deducted from the balance.
        points_spent: i64,
    },

    /// Balance did not cover the voucher; nothing changed.
    InsufficientPoints {
        /// Points the voucher requires.
        points_required: i64,
        /// The customer's current (unchanged) balance.
        balance: i64,
    },
}

impl RedeemOutcome {
    /// True when the redemption went through.
    #[inline]
    pub const fn is_redeemed(&self) -> bool {
        matches!(self, RedeemOutcome::Redeemed { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
