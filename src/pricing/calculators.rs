//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no I/O, no shared state, no panics.
//! Every input, including zero, negative, NaN and huge acreage, maps to a
//! `PriceQuote`; problems are reported as custom-quote outcomes.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{ComputedQuote, CustomReason, PriceQuote, PricingRequest, Program};
use super::tiers::{default_tiers, tier_for, PricingTier, CUSTOM_THRESHOLD};

/// Days in the normalized billing month
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// The engine never rounds; this is for presenting quotes.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pestcontrol_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(135.714285), 2), dec!(135.71));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Convert an engine amount to a two-place money value for display.
/// `None` for non-finite values.
pub fn to_money(amount: f64) -> Option<Decimal> {
    let mut money = round_money(Decimal::from_f64(amount)?, 2);
    money.rescale(2);
    Some(money)
}

/// Express a per-visit price as the cost of an equivalent 30-day month.
pub fn monthly_equivalent(per_visit: f64, frequency_days: u32) -> f64 {
    per_visit * (DAYS_PER_MONTH / f64::from(frequency_days))
}

/// Quote a request against the residential tier table.
pub fn calculate_pricing(request: &PricingRequest) -> PriceQuote {
    calculate_pricing_with(default_tiers(), request)
}

/// Quote a request against an explicit tier table.
///
/// `tiers` must be sorted ascending by `max_acreage`. A table that leaves a
/// gap below `CUSTOM_THRESHOLD` yields `TierNotConfigured` for acreage in
/// the gap rather than an error.
pub fn calculate_pricing_with(tiers: &[PricingTier], request: &PricingRequest) -> PriceQuote {
    let acreage = request.acreage;

    if !acreage.is_finite() || acreage <= 0.0 {
        return PriceQuote::custom(CustomReason::InvalidAcreage);
    }
    if acreage > CUSTOM_THRESHOLD {
        return PriceQuote::custom(CustomReason::ExceedsServiceableArea { acreage });
    }
    // Only subscriptions bill on a cadence; one-time and annual never fail on it.
    if request.program == Program::Subscription && request.frequency_days == 0 {
        return PriceQuote::custom(CustomReason::InvalidFrequency);
    }

    let Some(tier) = tier_for(tiers, acreage) else {
        return PriceQuote::custom(CustomReason::TierNotConfigured { acreage });
    };

    PriceQuote::Computed(price_tier(*tier, request))
}

fn price_tier(tier: PricingTier, request: &PricingRequest) -> ComputedQuote {
    match request.program {
        Program::Subscription => {
            let per_visit = tier.per_visit_rate;
            let per_month = monthly_equivalent(per_visit, request.frequency_days);
            ComputedQuote {
                tier,
                per_visit: Some(per_visit),
                per_month,
                annual_total: Some(per_month * MONTHS_PER_YEAR),
                message: None,
            }
        }
        Program::OneTime => {
            let per_visit = tier.per_visit_rate;
            // No cadence given: the single visit is the month's cost.
            let per_month = match request.frequency_days {
                0 => per_visit,
                days => monthly_equivalent(per_visit, days),
            };
            ComputedQuote {
                tier,
                per_visit: Some(per_visit),
                per_month,
                annual_total: None,
                message: None,
            }
        }
        Program::Annual => {
            let annual_total = tier.annual_rate;
            ComputedQuote {
                tier,
                per_visit: None,
                per_month: annual_total / MONTHS_PER_YEAR,
                annual_total: Some(annual_total),
                message: None,
            }
        }
    }
}
