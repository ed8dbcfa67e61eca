//! Pricing engine: turns a base daily rate and a campaign length into a
//! discounted quote under a discount schedule.

use rate_card_core::config::PricingConfig;
use rate_card_core::{AdUnit, QuoteResult, RateCardError, RateCardResult, ScheduleVariant};
use serde::Serialize;
use tracing::{info, trace};

use crate::catalog::Catalog;
use crate::duration::{self, ClampedDuration};
use crate::schedule::{percent, DiscountSchedule};

// ---------------------------------------------------------------------------
// Quote arithmetic
// ---------------------------------------------------------------------------

/// Quote `base_rate` for `days` under `schedule`.
///
/// The total is computed from the unrounded daily rate; daily and total are
/// then rounded to cents independently.
pub fn quote_rate(base_rate: f64, days: u32, schedule: &DiscountSchedule) -> QuoteResult {
    let discount = schedule.discount_for(days);
    let daily = base_rate * (1.0 - discount);
    let total = daily * f64::from(days);
    QuoteResult {
        daily_rate: round_cents(daily),
        total_rate: round_cents(total),
        discount_percent: percent(discount),
    }
}

/// Quote a catalog unit, recording the quote in logs and metrics.
pub(crate) fn quote_ad_unit(
    unit: &AdUnit,
    days: u32,
    schedule: &DiscountSchedule,
) -> QuoteResult {
    let quote = quote_rate(unit.base_rate, days, schedule);
    trace!(
        unit = %unit.name,
        days,
        daily = quote.daily_rate,
        total = quote.total_rate,
        discount_percent = quote.discount_percent,
        "Quoted ad unit"
    );
    metrics::counter!("rate_card.quotes").increment(1);
    quote
}

/// Round half away from zero to two decimal places.
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// One catalog line of a rate card.
#[derive(Debug, Clone, Serialize)]
pub struct RateCardEntry<'a> {
    pub unit: &'a AdUnit,
    pub quote: QuoteResult,
}

/// A variant's schedule, catalog and duration bound, bundled for the
/// presentation layer. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    variant: ScheduleVariant,
    schedule: DiscountSchedule,
    catalog: &'static Catalog,
}

impl PricingEngine {
    /// Engine using the variant's built-in schedule.
    pub fn new(variant: ScheduleVariant) -> Self {
        Self::with_schedule(variant, DiscountSchedule::for_variant(variant))
    }

    /// Engine using a caller-supplied schedule with the variant's catalog.
    pub fn with_schedule(variant: ScheduleVariant, schedule: DiscountSchedule) -> Self {
        let catalog = Catalog::builtin(variant);
        info!(
            variant = %variant,
            units = catalog.len(),
            tiers = schedule.tiers().len(),
            max_days = variant.max_duration_days(),
            "PricingEngine initialized"
        );
        Self {
            variant,
            schedule,
            catalog,
        }
    }

    /// Engine from configuration; custom tiers replace the built-in schedule.
    pub fn from_config(config: &PricingConfig) -> RateCardResult<Self> {
        let schedule = match &config.custom_tiers {
            Some(tiers) => DiscountSchedule::new(tiers.clone())?,
            None => DiscountSchedule::for_variant(config.variant),
        };
        Ok(Self::with_schedule(config.variant, schedule))
    }

    pub fn variant(&self) -> ScheduleVariant {
        self.variant
    }

    pub fn schedule(&self) -> &DiscountSchedule {
        &self.schedule
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn max_duration_days(&self) -> u32 {
        self.variant.max_duration_days()
    }

    pub fn clamp_duration(&self, raw: &str) -> ClampedDuration {
        duration::clamp_duration(raw, self.max_duration_days())
    }

    pub fn quote_unit(&self, unit: &AdUnit, days: u32) -> QuoteResult {
        quote_ad_unit(unit, days, &self.schedule)
    }

    pub fn quote_by_name(&self, name: &str, days: u32) -> RateCardResult<QuoteResult> {
        let unit = self
            .catalog
            .get(name)
            .ok_or_else(|| RateCardError::UnknownAdUnit(name.to_string()))?;
        Ok(self.quote_unit(unit, days))
    }

    /// Quote every catalog unit for `days`, in catalog order.
    pub fn rate_card(&self, days: u32) -> Vec<RateCardEntry<'static>> {
        self.catalog
            .iter()
            .map(|unit| RateCardEntry {
                unit,
                quote: self.quote_unit(unit, days),
            })
            .collect()
    }

    pub fn discount_label(&self, days: u32) -> String {
        self.schedule.discount_label(days)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
