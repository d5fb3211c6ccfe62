//! # Reward Engine
//!
//! The stateless rules component: tier derivation, point computation, and
//! voucher redemption. Everything here is a pure function over a customer
//! record plus two fixed policy tables.
//!
//! ## Reward Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Reward Computation                               │
//! │                                                                         │
//! │  customer.record_transaction(amount)    (customer record, separate op)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rewards::apply_reward(&mut customer) ← caller invokes after EVERY     │
//! │       │                                 recorded transaction           │
//! │       ├── base  = total_spent × 5%                                     │
//! │       ├── tier  = tier_of(points BEFORE update)                        │
//! │       ├── bonus = base × tier bonus rate                               │
//! │       ├── new total = floor(base + bonus)   ← absolute target,         │
//! │       │                                       not a delta              │
//! │       └── earned = new total - old balance  (unclamped)                │
//! │                                                                         │
//! │  rewards::redeem(&mut customer, selector)   (separate operation)       │
//! │       └── catalog lookup → customer.try_redeem(points required)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tier Evaluation Order
//! The bonus is evaluated against the customer's current (pre-update) point
//! balance, not the balance this computation produces. Tier is a function of
//! existing standing, not of the transaction being rewarded.

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::types::{BonusRate, RedeemOutcome, RewardGrant, Tier, Voucher};
use crate::BASE_EARN_RATE_BPS;

/// One basis-point scale: 10000 bps = 100%.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Voucher Catalog
// =============================================================================

/// The fixed voucher catalog, in selector order.
///
/// A single static table (not scattered literals) so the engine stays pure
/// and a host layer can render the offer list straight from here.
pub const VOUCHER_CATALOG: [Voucher; 4] = [
    Voucher {
        selector: 1,
        points_required: 100,
        value_cents: 50_000,
    },
    Voucher {
        selector: 2,
        points_required: 200,
        value_cents: 100_000,
    },
    Voucher {
        selector: 3,
        points_required: 500,
        value_cents: 250_000,
    },
    Voucher {
        selector: 4,
        points_required: 1000,
        value_cents: 500_000,
    },
];

/// Returns the full voucher catalog.
#[inline]
pub fn voucher_catalog() -> &'static [Voucher] {
    &VOUCHER_CATALOG
}

/// Looks a voucher up by its selector.
#[inline]
pub fn voucher(selector: u32) -> Option<&'static Voucher> {
    VOUCHER_CATALOG.iter().find(|v| v.selector == selector)
}

// =============================================================================
// Tier Rules
// =============================================================================

/// Returns the highest tier whose inclusive threshold the balance meets.
///
/// Total over every input: anything below the Silver threshold is Bronze.
/// Monotonic non-decreasing in `points`.
///
/// ## Example
/// ```rust
/// use perk_core::rewards::tier_of;
/// use perk_core::Tier;
///
/// assert_eq!(tier_of(499), Tier::Bronze);
/// assert_eq!(tier_of(500), Tier::Silver);
/// assert_eq!(tier_of(5000), Tier::Platinum);
/// ```
pub fn tier_of(points: i64) -> Tier {
    Tier::ALL
        .iter()
        .rev()
        .find(|tier| points >= tier.min_points())
        .copied()
        .unwrap_or(Tier::Bronze)
}

/// Bonus rate for a tier - direct lookup from the policy table.
#[inline]
pub fn bonus_rate_of(tier: Tier) -> BonusRate {
    tier.bonus_rate()
}

/// The next tier up from the given balance, with the point shortfall.
///
/// `None` once the balance is Platinum. Backs "collect N more points to
/// reach Silver!" style messaging in a host layer.
///
/// ## Example
/// ```rust
/// use perk_core::rewards::points_to_next_tier;
/// use perk_core::Tier;
///
/// assert_eq!(points_to_next_tier(0), Some((Tier::Silver, 500)));
/// assert_eq!(points_to_next_tier(600), Some((Tier::Gold, 1400)));
/// assert_eq!(points_to_next_tier(5000), None);
/// ```
pub fn points_to_next_tier(points: i64) -> Option<(Tier, i64)> {
    let next = tier_of(points).next()?;
    Some((next, next.min_points() - points))
}

// =============================================================================
// Point Computation
// =============================================================================

/// Computes the customer's *target* total point balance.
///
/// `floor(base + base × bonus)` where `base = total_spent × 5%` and the
/// bonus rate comes from the tier of the current (pre-update) balance.
/// This is an absolute total derived from cumulative spend, not a delta.
///
/// All arithmetic is exact integer math: the two basis-point factors are
/// multiplied through in i128 and divided once at the end, so the floor is
/// taken over the exact rational value.
pub fn total_points_for(customer: &Customer) -> i64 {
    let spent = customer.total_spent().cents() as i128;
    let bonus_bps = bonus_rate_of(tier_of(customer.points())).bps() as i128;

    // spent × (base rate) × (1 + bonus), floored. spent is never negative,
    // so integer division is the floor.
    let scaled = spent * BASE_EARN_RATE_BPS as i128 * (BPS_SCALE + bonus_bps);
    (scaled / (BPS_SCALE * BPS_SCALE)) as i64
}

/// Recomputes the balance from cumulative spend and writes it back.
///
/// Returns the points earned (new total minus old balance) and the
/// post-update tier for display by the caller. `earned` is deliberately
/// unclamped: the record's invariants make a negative value impossible
/// through normal use, so one appearing here means the balance was changed
/// out-of-band between computations, and that must stay visible.
///
/// Callers invoke this after every `record_transaction`; it is never
/// triggered automatically.
///
/// ## Example
/// ```rust
/// use perk_core::{rewards, Customer, Money, Tier};
///
/// let mut customer = Customer::create("Andi", Money::from_cents(250_000)).unwrap();
/// let grant = rewards::apply_reward(&mut customer).unwrap();
///
/// // 5% of 250 000 = 12 500 base points; Bronze before the update, no bonus.
/// assert_eq!(grant.earned, 12_500);
/// assert_eq!(grant.tier, Tier::Platinum); // tier AFTER the update
/// assert_eq!(customer.points(), 12_500);
/// ```
pub fn apply_reward(customer: &mut Customer) -> CoreResult<RewardGrant> {
    let old = customer.points();
    let new_total = total_points_for(customer);
    let earned = new_total - old;

    customer.set_points(new_total)?;

    Ok(RewardGrant {
        earned,
        tier: tier_of(new_total),
    })
}

// =============================================================================
// Voucher Redemption
// =============================================================================

/// Redeems a voucher from the static catalog against the point balance.
///
/// ## Errors
/// `CoreError::VoucherNotFound` when the selector is not in the catalog;
/// the balance is untouched.
///
/// ## Outcomes
/// Both `Redeemed` and `InsufficientPoints` are normal results - running
/// out of points is a business condition, not a fault.
///
/// ## Example
/// ```rust
/// use perk_core::{rewards, Customer, Money, RedeemOutcome};
///
/// let mut customer = Customer::create("Andi", Money::zero()).unwrap();
/// customer.set_points(150).unwrap();
///
/// match rewards::redeem(&mut customer, 1).unwrap() {
///     RedeemOutcome::Redeemed { value_cents, points_spent } => {
///         assert_eq!(value_cents, 50_000);
///         assert_eq!(points_spent, 100);
///     }
///     RedeemOutcome::InsufficientPoints { .. } => unreachable!(),
/// }
/// assert_eq!(customer.points(), 50);
/// ```
pub fn redeem(customer: &mut Customer, selector: u32) -> CoreResult<RedeemOutcome> {
    let voucher = voucher(selector).ok_or(CoreError::VoucherNotFound { selector })?;

    if customer.try_redeem(voucher.points_required)? {
        Ok(RedeemOutcome::Redeemed {
            value_cents: voucher.value_cents,
            points_spent: voucher.points_required,
        })
    } else {
        Ok(RedeemOutcome::InsufficientPoints {
            points_required: voucher.points_required,
            balance: customer.points(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn customer_with(points: i64, spent_cents: i64) -> Customer {
        let mut customer = Customer::create("Andi", Money::from_cents(spent_cents)).unwrap();
        customer.set_points(points).unwrap();
        customer
    }

    // =========================================================================
    // Tier derivation
    // =========================================================================

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier_of(0), Tier::Bronze);
        assert_eq!(tier_of(499), Tier::Bronze);
        assert_eq!(tier_of(500), Tier::Silver);
        assert_eq!(tier_of(1999), Tier::Silver);
        assert_eq!(tier_of(2000), Tier::Gold);
        assert_eq!(tier_of(4999), Tier::Gold);
        assert_eq!(tier_of(5000), Tier::Platinum);
        assert_eq!(tier_of(1_000_000), Tier::Platinum);
    }

    #[test]
    fn test_tier_of_is_monotonic() {
        let mut last = tier_of(0);
        for points in 0..6000 {
            let tier = tier_of(points);
            assert!(tier >= last, "tier regressed at {points} points");
            last = tier;
        }
    }

    #[test]
    fn test_tier_of_is_total_below_domain() {
        // Out-of-domain negatives still resolve rather than panic.
        assert_eq!(tier_of(-1), Tier::Bronze);
        assert_eq!(tier_of(i64::MIN), Tier::Bronze);
    }

    #[test]
    fn test_points_to_next_tier() {
        assert_eq!(points_to_next_tier(0), Some((Tier::Silver, 500)));
        assert_eq!(points_to_next_tier(499), Some((Tier::Silver, 1)));
        assert_eq!(points_to_next_tier(600), Some((Tier::Gold, 1400)));
        assert_eq!(points_to_next_tier(4999), Some((Tier::Platinum, 1)));
        assert_eq!(points_to_next_tier(5000), None);
    }

    // =========================================================================
    // Point computation
    // =========================================================================

    #[test]
    fn test_fresh_customer_earns_base_points_only() {
        // 250 000 spend, 0 points → Bronze pre-update, no bonus.
        let mut customer = Customer::create("Andi", Money::from_cents(250_000)).unwrap();

        let grant = apply_reward(&mut customer).unwrap();

        assert_eq!(grant.earned, 12_500);
        assert_eq!(customer.points(), 12_500);
        assert_eq!(grant.tier, Tier::Platinum);
    }

    #[test]
    fn test_silver_customer_earns_bonus() {
        // base = 50 000, Silver bonus +2% = 1000, target 51 000.
        let mut customer = customer_with(600, 1_000_000);

        let grant = apply_reward(&mut customer).unwrap();

        assert_eq!(customer.points(), 51_000);
        assert_eq!(grant.earned, 50_400);
        assert_eq!(grant.tier, Tier::Platinum);
    }

    #[test]
    fn test_bonus_uses_pre_update_tier() {
        // 600 points = Silver (+2%), even though the recomputed balance
        // lands deep in Platinum territory.
        let customer = customer_with(600, 1_000_000);
        assert_eq!(total_points_for(&customer), 51_000);

        // Same spend from a Gold standing (+5%) yields more.
        let customer = customer_with(2000, 1_000_000);
        assert_eq!(total_points_for(&customer), 52_500);
    }

    #[test]
    fn test_fractional_points_floor() {
        // 30 × 5% = 1.5 → 1 point at Bronze.
        let customer = customer_with(0, 30);
        assert_eq!(total_points_for(&customer), 1);

        // Silver: 1.5 × 1.02 = 1.53 → still 1. The floor applies to the
        // bonus-inclusive total, not to the base first.
        let customer = customer_with(600, 30);
        assert_eq!(total_points_for(&customer), 1);

        // 19 × 5% = 0.95 → 0 points.
        let customer = customer_with(0, 19);
        assert_eq!(total_points_for(&customer), 0);
    }

    #[test]
    fn test_reapplying_compounds_through_tier_only() {
        // Recomputing without new spend only moves the balance if the tier
        // changed in between: the total is absolute, not accumulated.
        let mut customer = Customer::create("Andi", Money::from_cents(250_000)).unwrap();

        apply_reward(&mut customer).unwrap();
        assert_eq!(customer.points(), 12_500); // now Platinum

        let grant = apply_reward(&mut customer).unwrap();
        // base 12 500 × 1.10 = 13 750 at Platinum standing.
        assert_eq!(customer.points(), 13_750);
        assert_eq!(grant.earned, 1_250);
    }

    #[test]
    fn test_earned_is_unclamped() {
        // A balance hand-set above the recomputed target must yield a
        // negative earned value, not a clamp to zero.
        let mut customer = customer_with(100_000, 250_000);

        let grant = apply_reward(&mut customer).unwrap();

        // Platinum standing: 12 500 × 1.10 = 13 750.
        assert_eq!(customer.points(), 13_750);
        assert_eq!(grant.earned, 13_750 - 100_000);
        assert!(grant.earned < 0);
    }

    #[test]
    fn test_zero_spend_grants_nothing() {
        let mut customer = Customer::create("Siti", Money::zero()).unwrap();

        let grant = apply_reward(&mut customer).unwrap();

        assert_eq!(grant.earned, 0);
        assert_eq!(grant.tier, Tier::Bronze);
        assert_eq!(customer.points(), 0);
    }

    // =========================================================================
    // Voucher redemption
    // =========================================================================

    #[test]
    fn test_catalog_contents() {
        assert_eq!(VOUCHER_CATALOG.len(), 4);
        assert_eq!(voucher(1).unwrap().points_required, 100);
        assert_eq!(voucher(1).unwrap().value_cents, 50_000);
        assert_eq!(voucher(4).unwrap().points_required, 1000);
        assert_eq!(voucher(4).unwrap().value_cents, 500_000);
        assert!(voucher(0).is_none());
        assert!(voucher(5).is_none());
    }

    #[test]
    fn test_redeem_success() {
        let mut customer = customer_with(150, 0);

        let outcome = redeem(&mut customer, 1).unwrap();

        assert_eq!(
            outcome,
            RedeemOutcome::Redeemed {
                value_cents: 50_000,
                points_spent: 100,
            }
        );
        assert_eq!(customer.points(), 50);
    }

    #[test]
    fn test_redeem_insufficient_balance() {
        // 150 points cannot cover the 200-point voucher; nothing changes.
        let mut customer = customer_with(150, 0);

        let outcome = redeem(&mut customer, 2).unwrap();

        assert_eq!(
            outcome,
            RedeemOutcome::InsufficientPoints {
                points_required: 200,
                balance: 150,
            }
        );
        assert_eq!(customer.points(), 150);
    }

    #[test]
    fn test_redeem_unknown_selector() {
        let mut customer = customer_with(150, 0);

        let err = redeem(&mut customer, 99).unwrap_err();

        assert!(matches!(
            err,
            CoreError::VoucherNotFound { selector: 99 }
        ));
        assert_eq!(customer.points(), 150);
    }

    #[test]
    fn test_redeem_exact_balance() {
        let mut customer = customer_with(100, 0);

        let outcome = redeem(&mut customer, 1).unwrap();

        assert!(outcome.is_redeemed());
        assert_eq!(customer.points(), 0);
    }

    // =========================================================================
    // End-to-end
    // =========================================================================

    #[test]
    fn test_purchase_reward_redeem_cycle() {
        let mut customer = Customer::create("Andi", Money::zero()).unwrap();

        customer.record_transaction(Money::from_cents(10_000)).unwrap();
        let grant = apply_reward(&mut customer).unwrap();
        assert_eq!(grant.earned, 500);
        assert_eq!(grant.tier, Tier::Silver);

        // 500 points covers the smallest voucher.
        let outcome = redeem(&mut customer, 1).unwrap();
        assert!(outcome.is_redeemed());
        assert_eq!(customer.points(), 400);

        // Next purchase is rewarded from the diminished (Bronze) standing.
        customer.record_transaction(Money::from_cents(10_000)).unwrap();
        let grant = apply_reward(&mut customer).unwrap();
        assert_eq!(customer.points(), 1000);
        assert_eq!(grant.earned, 600);
    }
}
