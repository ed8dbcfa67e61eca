use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RateCardError;

/// Shortest campaign the rate card will quote, in days.
pub const MIN_DURATION_DAYS: u32 = 1;

// ─── Ad Units ───────────────────────────────────────────────────────────────

/// Placement family. Drives preview styling only, never price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdType {
    Display,
    Video,
    Takeover,
}

/// How the presentation layer should sketch a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreviewKind {
    /// Dashed box at the unit's pixel size (capped for display).
    PixelBox,
    /// 16:9 player frame.
    VideoFrame,
    /// Header, sidebars and footer all carrying the same campaign.
    TakeoverLayout,
}

impl AdType {
    pub fn placement_label(&self) -> &'static str {
        match self {
            AdType::Takeover => "Premium placement",
            AdType::Display | AdType::Video => "Standard placement",
        }
    }

    pub fn preview_kind(&self) -> PreviewKind {
        match self {
            AdType::Display => PreviewKind::PixelBox,
            AdType::Video => PreviewKind::VideoFrame,
            AdType::Takeover => PreviewKind::TakeoverLayout,
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for AdType {
    fn default() -> Self {
        AdType::Display
    }
}

/// One catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdUnit {
    pub name: String,
    /// `"W×H"` in pixels, or a sentinel such as `"Various"` / `"Multiple"`.
    pub dimensions: String,
    /// Undiscounted price per day.
    pub base_rate: f64,
    #[serde(default)]
    pub ad_type: AdType,
    #[serde(default)]
    pub description: String,
}

impl AdUnit {
    pub fn new(
        name: impl Into<String>,
        dimensions: impl Into<String>,
        base_rate: f64,
        ad_type: AdType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dimensions: dimensions.into(),
            base_rate,
            ad_type,
            description: description.into(),
        }
    }
}

// ─── Discount Tiers ─────────────────────────────────────────────────────────

/// A duration band and the discount fraction it earns.
///
/// `min_days` is an inclusive lower bound. `max_days`, when present, is an
/// inclusive upper bound; open-ended tiers leave it unset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiscountTier {
    pub min_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days: Option<u32>,
    /// Fraction in `[0, 1)`.
    pub rate: f64,
}

impl DiscountTier {
    pub fn at_least(min_days: u32, rate: f64) -> Self {
        Self {
            min_days,
            max_days: None,
            rate,
        }
    }

    pub fn between(min_days: u32, max_days: u32, rate: f64) -> Self {
        Self {
            min_days,
            max_days: Some(max_days),
            rate,
        }
    }

    pub fn contains(&self, days: u32) -> bool {
        days >= self.min_days && self.max_days.map_or(true, |max| days <= max)
    }
}

// ─── Quotes ─────────────────────────────────────────────────────────────────

/// Computed price for one unit over one duration. Amounts are rounded to cents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QuoteResult {
    pub daily_rate: f64,
    pub total_rate: f64,
    pub discount_percent: u32,
}

// ─── Schedule Variants ──────────────────────────────────────────────────────

/// Pricing policy. Each variant carries its own discount schedule, catalog
/// and longest accepted campaign.
///
/// Serializes as `long_horizon` / `short_horizon`; deserialization goes
/// through `FromStr`, so config and CLI accept the same spellings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ScheduleVariant {
    /// Campaigns measured in months; up to two years.
    LongHorizon,
    /// Campaigns measured in days or weeks; up to one year.
    ShortHorizon,
}

impl ScheduleVariant {
    pub fn max_duration_days(&self) -> u32 {
        match self {
            ScheduleVariant::LongHorizon => 730,
            ScheduleVariant::ShortHorizon => 365,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleVariant::LongHorizon => "long-horizon",
            ScheduleVariant::ShortHorizon => "short-horizon",
        }
    }
}

#[allow(clippy::derivable_impls)]
impl Default for ScheduleVariant {
    fn default() -> Self {
        ScheduleVariant::LongHorizon
    }
}

impl fmt::Display for ScheduleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ScheduleVariant {
    type Error = RateCardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ScheduleVariant {
    type Err = RateCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "long-horizon" | "long" | "a" => Ok(ScheduleVariant::LongHorizon),
            "short-horizon" | "short" | "b" => Ok(ScheduleVariant::ShortHorizon),
            other => Err(RateCardError::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        let open = DiscountTier::at_least(150, 0.15);
        assert!(open.contains(150));
        assert!(open.contains(10_000));
        assert!(!open.contains(149));

        let closed = DiscountTier::between(1, 30, 0.10);
        assert!(closed.contains(1));
        assert!(closed.contains(30));
        assert!(!closed.contains(31));
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!(
            "short_horizon".parse::<ScheduleVariant>().unwrap(),
            ScheduleVariant::ShortHorizon
        );
        assert_eq!(
            "Long-Horizon".parse::<ScheduleVariant>().unwrap(),
            ScheduleVariant::LongHorizon
        );
        assert!(matches!(
            "weekly".parse::<ScheduleVariant>(),
            Err(RateCardError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_variant_deserializes_like_from_str() {
        for spelling in ["short_horizon", "short-horizon", "Short-Horizon", "short"] {
            let variant: ScheduleVariant =
                serde_json::from_value(serde_json::json!(spelling)).unwrap();
            assert_eq!(variant, ScheduleVariant::ShortHorizon, "{spelling:?}");
        }
        let variant: ScheduleVariant = serde_json::from_str(r#""long-horizon""#).unwrap();
        assert_eq!(variant, ScheduleVariant::LongHorizon);
        assert!(serde_json::from_str::<ScheduleVariant>(r#""weekly""#).is_err());

        assert_eq!(
            serde_json::to_value(ScheduleVariant::ShortHorizon).unwrap(),
            "short_horizon"
        );
    }

    #[test]
    fn test_ad_type_labels() {
        assert_eq!(AdType::Takeover.placement_label(), "Premium placement");
        assert_eq!(AdType::Video.placement_label(), "Standard placement");
        assert_eq!(AdType::Video.preview_kind(), PreviewKind::VideoFrame);
    }

    #[test]
    fn test_ad_unit_wire_shape() {
        let unit = AdUnit::new(
            "Leaderboard",
            "728×90",
            15.0,
            AdType::Display,
            "Top of page",
        );
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["ad_type"], "display");
        assert_eq!(json["base_rate"], 15.0);

        let tier: DiscountTier = serde_json::from_str(r#"{"min_days":7,"rate":0.05}"#).unwrap();
        assert_eq!(tier, DiscountTier::at_least(7, 0.05));
    }
}
