//! Tiered discount pricing for ad placements.
//!
//! Turns a unit's base daily rate and a campaign duration into a discounted
//! daily rate, a campaign total and the discount percentage, under one of the
//! configured discount schedules. Also normalizes raw duration input and
//! parses `"W×H"` dimension strings for preview sizing. Everything here is
//! pure and read-only after construction.

pub mod catalog;
pub mod dimensions;
pub mod duration;
pub mod engine;
pub mod schedule;

pub use catalog::Catalog;
pub use dimensions::{parse_dims, PixelSize};
pub use duration::{ClampOutcome, ClampedDuration};
pub use engine::{PricingEngine, RateCardEntry};
pub use schedule::DiscountSchedule;

use rate_card_core::{AdUnit, QuoteResult, ScheduleVariant};

/// Built-in catalog for `variant`, in display order.
pub fn catalog(variant: ScheduleVariant) -> &'static Catalog {
    Catalog::builtin(variant)
}

/// Quote `unit` for `duration_days` under the variant's built-in schedule.
pub fn quote(unit: &AdUnit, duration_days: u32, variant: ScheduleVariant) -> QuoteResult {
    engine::quote_ad_unit(unit, duration_days, DiscountSchedule::builtin(variant))
}

/// Normalize raw duration text into the variant's accepted range.
pub fn clamp_duration(raw: &str, variant: ScheduleVariant) -> ClampedDuration {
    duration::clamp_duration(raw, variant.max_duration_days())
}
