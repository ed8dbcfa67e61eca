//! Duration-based volume discount schedules.

use rate_card_core::{DiscountTier, RateCardError, RateCardResult, ScheduleVariant};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::info;

/// Ordered discount tiers. Lookups walk the tiers from the highest
/// `min_days` down and the first band containing the duration wins; a
/// duration no band covers gets no discount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountSchedule {
    tiers: Vec<DiscountTier>,
}

impl DiscountSchedule {
    /// Build a schedule from arbitrary tiers, validating each one.
    pub fn new(mut tiers: Vec<DiscountTier>) -> RateCardResult<Self> {
        for tier in &tiers {
            validate_tier(tier)?;
        }
        // Stable sort keeps declaration order between tiers sharing a floor.
        tiers.sort_by(|a, b| b.min_days.cmp(&a.min_days));
        info!(tiers = tiers.len(), "Discount schedule built");
        Ok(Self { tiers })
    }

    /// Long-horizon policy. Durations of 31-149 days get no discount even
    /// though both shorter and longer campaigns do.
    pub fn long_horizon() -> Self {
        Self {
            tiers: vec![
                DiscountTier::at_least(365, 0.20),
                DiscountTier::at_least(150, 0.15),
                DiscountTier::between(1, 30, 0.10),
            ],
        }
    }

    /// Short-horizon policy.
    pub fn short_horizon() -> Self {
        Self {
            tiers: vec![
                DiscountTier::at_least(30, 0.25),
                DiscountTier::at_least(14, 0.15),
                DiscountTier::at_least(7, 0.05),
            ],
        }
    }

    pub fn for_variant(variant: ScheduleVariant) -> Self {
        match variant {
            ScheduleVariant::LongHorizon => Self::long_horizon(),
            ScheduleVariant::ShortHorizon => Self::short_horizon(),
        }
    }

    /// Shared instance of the variant's built-in schedule.
    pub fn builtin(variant: ScheduleVariant) -> &'static Self {
        static LONG: OnceLock<DiscountSchedule> = OnceLock::new();
        static SHORT: OnceLock<DiscountSchedule> = OnceLock::new();
        match variant {
            ScheduleVariant::LongHorizon => LONG.get_or_init(Self::long_horizon),
            ScheduleVariant::ShortHorizon => SHORT.get_or_init(Self::short_horizon),
        }
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// The tier that applies to `days`, if any.
    pub fn tier_for(&self, days: u32) -> Option<&DiscountTier> {
        self.tiers.iter().find(|tier| tier.contains(days))
    }

    /// Discount fraction for a campaign of `days`.
    pub fn discount_for(&self, days: u32) -> f64 {
        self.tier_for(days).map_or(0.0, |tier| tier.rate)
    }

    /// Badge text for the duration, e.g. `"15% discount"` or `"No discount"`.
    pub fn discount_label(&self, days: u32) -> String {
        match percent(self.discount_for(days)) {
            0 => "No discount".to_string(),
            pct => format!("{pct}% discount"),
        }
    }
}

/// Whole-number percentage of a discount fraction.
pub(crate) fn percent(discount: f64) -> u32 {
    (discount * 100.0).round() as u32
}

fn validate_tier(tier: &DiscountTier) -> RateCardResult<()> {
    if tier.min_days == 0 {
        return Err(RateCardError::InvalidTier(
            "min_days must be at least 1".to_string(),
        ));
    }
    if let Some(max) = tier.max_days {
        if max < tier.min_days {
            return Err(RateCardError::InvalidTier(format!(
                "max_days {max} is below min_days {}",
                tier.min_days
            )));
        }
    }
    if !(0.0..1.0).contains(&tier.rate) {
        return Err(RateCardError::InvalidTier(format!(
            "rate {} is outside [0, 1)",
            tier.rate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_horizon_bands() {
        let schedule = DiscountSchedule::long_horizon();
        assert_eq!(schedule.discount_for(730), 0.20);
        assert_eq!(schedule.discount_for(365), 0.20);
        assert_eq!(schedule.discount_for(364), 0.15);
        assert_eq!(schedule.discount_for(150), 0.15);
        assert_eq!(schedule.discount_for(149), 0.0);
        assert_eq!(schedule.discount_for(31), 0.0);
        assert_eq!(schedule.discount_for(30), 0.10);
        assert_eq!(schedule.discount_for(1), 0.10);
    }

    #[test]
    fn test_short_horizon_bands() {
        let schedule = DiscountSchedule::short_horizon();
        assert_eq!(schedule.discount_for(365), 0.25);
        assert_eq!(schedule.discount_for(30), 0.25);
        assert_eq!(schedule.discount_for(29), 0.15);
        assert_eq!(schedule.discount_for(14), 0.15);
        assert_eq!(schedule.discount_for(13), 0.05);
        assert_eq!(schedule.discount_for(7), 0.05);
        assert_eq!(schedule.discount_for(6), 0.0);
        assert_eq!(schedule.discount_for(1), 0.0);
    }

    #[test]
    fn test_new_sorts_tiers_by_floor() {
        let schedule = DiscountSchedule::new(vec![
            DiscountTier::at_least(7, 0.05),
            DiscountTier::at_least(30, 0.25),
            DiscountTier::at_least(14, 0.15),
        ])
        .unwrap();
        assert_eq!(schedule, DiscountSchedule::short_horizon());
    }

    #[test]
    fn test_overlapping_bands_prefer_higher_floor() {
        let schedule = DiscountSchedule::new(vec![
            DiscountTier::between(1, 100, 0.05),
            DiscountTier::at_least(50, 0.10),
        ])
        .unwrap();
        assert_eq!(schedule.discount_for(49), 0.05);
        assert_eq!(schedule.discount_for(75), 0.10);
    }

    #[test]
    fn test_rejects_invalid_tiers() {
        let bad = [
            DiscountTier::at_least(0, 0.1),
            DiscountTier::between(30, 10, 0.1),
            DiscountTier::at_least(10, 1.0),
            DiscountTier::at_least(10, -0.1),
        ];
        for tier in bad {
            assert!(matches!(
                DiscountSchedule::new(vec![tier]),
                Err(RateCardError::InvalidTier(_))
            ));
        }
    }

    #[test]
    fn test_empty_schedule_never_discounts() {
        let schedule = DiscountSchedule::new(Vec::new()).unwrap();
        assert_eq!(schedule.discount_for(365), 0.0);
        assert_eq!(schedule.discount_label(365), "No discount");
    }

    #[test]
    fn test_discount_labels() {
        let schedule = DiscountSchedule::long_horizon();
        assert_eq!(schedule.discount_label(400), "20% discount");
        assert_eq!(schedule.discount_label(200), "15% discount");
        assert_eq!(schedule.discount_label(90), "No discount");
        assert_eq!(schedule.discount_label(30), "10% discount");
    }
}
