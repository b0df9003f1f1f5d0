//! Acreage tier table for residential service.
//!
//! Tiers are ordered ascending by `max_acreage` and together cover
//! `(0, CUSTOM_THRESHOLD]`. Each tier's upper bound is inclusive; a tier
//! starts just above the previous tier's bound.

/// Largest property (in acres) the engine prices automatically.
pub const CUSTOM_THRESHOLD: f64 = 2.0;

/// One acreage band with its flat rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingTier {
    pub label: &'static str,
    /// Inclusive upper bound in acres
    pub max_acreage: f64,
    /// Price of a single visit (subscription and one-time programs)
    pub per_visit_rate: f64,
    /// Flat price of a full year of service (annual program)
    pub annual_rate: f64,
}

/// Residential tier table.
pub static TIERS: [PricingTier; 5] = [
    PricingTier {
        label: "quarter-acre",
        max_acreage: 0.25,
        per_visit_rate: 95.0,
        annual_rate: 1500.0,
    },
    PricingTier {
        label: "half-acre",
        max_acreage: 0.5,
        per_visit_rate: 115.0,
        annual_rate: 1800.0,
    },
    PricingTier {
        label: "one-acre",
        max_acreage: 1.0,
        per_visit_rate: 145.0,
        annual_rate: 2200.0,
    },
    PricingTier {
        label: "acre-and-a-half",
        max_acreage: 1.5,
        per_visit_rate: 175.0,
        annual_rate: 2700.0,
    },
    PricingTier {
        label: "two-acre",
        max_acreage: CUSTOM_THRESHOLD,
        per_visit_rate: 210.0,
        annual_rate: 3200.0,
    },
];

/// The table used by [`crate::pricing::calculate_pricing`].
pub fn default_tiers() -> &'static [PricingTier] {
    &TIERS
}

/// Find the band covering `acreage`: the first tier whose bound is `>= acreage`.
pub fn tier_for(tiers: &[PricingTier], acreage: f64) -> Option<&PricingTier> {
    tiers.iter().find(|tier| acreage <= tier.max_acreage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_sorted_and_end_at_threshold() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].max_acreage < pair[1].max_acreage);
        }
        assert_eq!(TIERS[TIERS.len() - 1].max_acreage, CUSTOM_THRESHOLD);
        assert!(TIERS[0].max_acreage > 0.0);
    }

    #[test]
    fn test_tier_rates_positive_and_non_decreasing() {
        for tier in &TIERS {
            assert!(tier.per_visit_rate > 0.0);
            assert!(tier.annual_rate > 0.0);
        }
        for pair in TIERS.windows(2) {
            assert!(pair[0].per_visit_rate <= pair[1].per_visit_rate);
            assert!(pair[0].annual_rate <= pair[1].annual_rate);
        }
    }

    #[test]
    fn test_tier_for_inclusive_upper_bound() {
        assert_eq!(tier_for(&TIERS, 0.25).map(|t| t.label), Some("quarter-acre"));
        assert_eq!(tier_for(&TIERS, 0.2501).map(|t| t.label), Some("half-acre"));
        assert_eq!(tier_for(&TIERS, 1.4).map(|t| t.label), Some("acre-and-a-half"));
        assert_eq!(tier_for(&TIERS, 2.0).map(|t| t.label), Some("two-acre"));
    }

    #[test]
    fn test_tier_for_outside_table() {
        assert!(tier_for(&TIERS, 2.01).is_none());
        assert!(tier_for(&[], 0.5).is_none());
    }
}
