//! Ad-unit catalogs, one per schedule variant.

use rate_card_core::{AdType, AdUnit, RateCardError, RateCardResult, ScheduleVariant};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Ordered, read-only list of ad units with unique names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    units: Vec<AdUnit>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and non-positive rates.
    pub fn new(units: Vec<AdUnit>) -> RateCardResult<Self> {
        let mut seen = HashSet::with_capacity(units.len());
        for unit in &units {
            if !seen.insert(unit.name.as_str()) {
                return Err(RateCardError::InvalidCatalog(format!(
                    "duplicate ad unit name {:?}",
                    unit.name
                )));
            }
            if !(unit.base_rate.is_finite() && unit.base_rate > 0.0) {
                return Err(RateCardError::InvalidCatalog(format!(
                    "ad unit {:?} has non-positive base rate {}",
                    unit.name, unit.base_rate
                )));
            }
        }
        Ok(Self { units })
    }

    /// Shared instance of the variant's built-in catalog.
    pub fn builtin(variant: ScheduleVariant) -> &'static Self {
        static LONG: OnceLock<Catalog> = OnceLock::new();
        static SHORT: OnceLock<Catalog> = OnceLock::new();
        match variant {
            ScheduleVariant::LongHorizon => LONG.get_or_init(long_horizon_units),
            ScheduleVariant::ShortHorizon => SHORT.get_or_init(short_horizon_units),
        }
    }

    pub fn units(&self) -> &[AdUnit] {
        &self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdUnit> {
        self.units.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AdUnit> {
        self.units.iter().find(|unit| unit.name == name)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Standard IAB sizes plus video and takeover packages.
fn long_horizon_units() -> Catalog {
    use AdType::*;
    Catalog {
        units: vec![
            AdUnit::new(
                "Medium Rectangle",
                "300×250",
                12.0,
                Display,
                "High-performing ad size that works well embedded within text content",
            ),
            AdUnit::new(
                "Leaderboard",
                "728×90",
                15.0,
                Display,
                "Horizontal banner typically placed at the top of a webpage",
            ),
            AdUnit::new(
                "Mobile Banner",
                "320×50",
                8.0,
                Display,
                "Small horizontal banner optimized for mobile devices",
            ),
            AdUnit::new(
                "Large Rectangle",
                "336×280",
                14.0,
                Display,
                "Slightly larger than medium rectangle, often used in-content",
            ),
            AdUnit::new(
                "Wide Skyscraper",
                "160×600",
                10.0,
                Display,
                "Tall, narrow ad that appears on the side of webpages",
            ),
            AdUnit::new(
                "Half Page",
                "300×600",
                18.0,
                Display,
                "Large format ad with high visibility and engagement",
            ),
            AdUnit::new(
                "Billboard",
                "970×250",
                20.0,
                Display,
                "Large horizontal format for premium placement",
            ),
            AdUnit::new(
                "In-Stream Video",
                "Various",
                35.0,
                Video,
                "Video ad that plays before, during, or after video content",
            ),
            AdUnit::new(
                "Outstream Video",
                "Various",
                30.0,
                Video,
                "Video ad that appears within content, often auto-playing on scroll",
            ),
            AdUnit::new(
                "Full-Site Takeover",
                "Multiple",
                75.0,
                Takeover,
                "Premium package with multiple ad units across the entire site",
            ),
            AdUnit::new(
                "Homepage Takeover",
                "Multiple",
                60.0,
                Takeover,
                "Premium visibility with multiple ad units on the homepage",
            ),
        ],
    }
}

/// Display-only banner set sold by the day or week.
fn short_horizon_units() -> Catalog {
    use AdType::Display;
    Catalog {
        units: vec![
            AdUnit::new(
                "Medium Rectangle",
                "300×250",
                12.0,
                Display,
                "High-performing ad size that works well embedded within text content",
            ),
            AdUnit::new(
                "Leaderboard",
                "728×90",
                15.0,
                Display,
                "Horizontal banner typically placed at the top of a webpage",
            ),
            AdUnit::new(
                "Mobile Banner",
                "320×50",
                8.0,
                Display,
                "Small horizontal banner optimized for mobile devices",
            ),
            AdUnit::new(
                "Wide Skyscraper",
                "160×600",
                10.0,
                Display,
                "Tall, narrow ad that appears on the side of webpages",
            ),
            AdUnit::new(
                "Half Page",
                "300×600",
                18.0,
                Display,
                "Large format ad with high visibility and engagement",
            ),
            AdUnit::new(
                "Billboard",
                "970×250",
                20.0,
                Display,
                "Large horizontal format for premium placement",
            ),
        ],
    }
}
