//! Terminal rendering of rate cards and the selected unit's preview.

use rate_card_core::{AdUnit, PreviewKind, ScheduleVariant};
use rate_card_pricing::{parse_dims, ClampedDuration, PricingEngine, RateCardEntry};
use serde::Serialize;
use std::fmt::{self, Write};

/// The highlighted unit, if any.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selection<'a> {
    selected: Option<&'a AdUnit>,
}

impl<'a> Selection<'a> {
    /// Selecting the highlighted unit again clears the highlight; any other
    /// unit replaces it.
    pub fn toggle(&mut self, unit: &'a AdUnit) {
        self.selected = match self.selected {
            Some(current) if current.name == unit.name => None,
            _ => Some(unit),
        };
    }

    pub fn get(&self) -> Option<&'a AdUnit> {
        self.selected
    }

    pub fn is_selected(&self, unit: &AdUnit) -> bool {
        self.selected.is_some_and(|current| current.name == unit.name)
    }
}

pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// JSON shape of one rendered rate card.
#[derive(Debug, Serialize)]
pub struct RateCardView<'a> {
    pub variant: ScheduleVariant,
    pub duration: ClampedDuration,
    pub discount_label: String,
    pub entries: Vec<RateCardEntry<'a>>,
    pub selected: Option<&'a str>,
}

impl<'a> RateCardView<'a> {
    pub fn new(
        engine: &PricingEngine,
        duration: ClampedDuration,
        entries: Vec<RateCardEntry<'a>>,
        selection: &Selection<'a>,
    ) -> Self {
        Self {
            variant: engine.variant(),
            duration,
            discount_label: engine.discount_label(duration.days),
            entries,
            selected: selection.get().map(|unit| unit.name.as_str()),
        }
    }
}

pub fn render_table(
    view: &RateCardView<'_>,
    selection: &Selection<'_>,
) -> Result<String, fmt::Error> {
    let days = view.duration.days;
    let mut out = String::new();

    writeln!(out, "Ad Rate Calculator ({})", view.variant)?;
    writeln!(out, "Campaign duration: {days} days [{}]", view.discount_label)?;
    writeln!(out)?;

    for entry in &view.entries {
        let unit = entry.unit;
        let quote = entry.quote;
        let marker = if selection.is_selected(unit) { '*' } else { ' ' };
        let off = match quote.discount_percent {
            0 => String::new(),
            pct => format!(" ({pct}% off)"),
        };
        writeln!(
            out,
            "{marker} {:<20} {:<9} {:>12}/day  ${} base{off}",
            unit.name,
            unit.dimensions,
            format_usd(quote.daily_rate),
            unit.base_rate
        )?;
    }

    let selected = selection
        .get()
        .and_then(|unit| view.entries.iter().find(|e| e.unit.name == unit.name));
    if let Some(entry) = selected {
        let unit = entry.unit;
        writeln!(out)?;
        writeln!(out, "{}: {}", unit.name, unit.description)?;
        writeln!(
            out,
            "Total for {days} days: {}",
            format_usd(entry.quote.total_rate)
        )?;
        writeln!(out, "{}", unit.ad_type.placement_label())?;
        writeln!(out, "{}", describe_preview(unit))?;
    }

    Ok(out)
}

pub fn describe_preview(unit: &AdUnit) -> String {
    match unit.ad_type.preview_kind() {
        PreviewKind::PixelBox => match parse_dims(&unit.dimensions) {
            Some(size) => {
                let preview = size.preview_box();
                format!(
                    "Visual size preview: {}×{} ({}×{} px box)",
                    size.width, size.height, preview.width, preview.height
                )
            }
            None => format!("Visual size preview: {} (no fixed size)", unit.dimensions),
        },
        PreviewKind::VideoFrame => {
            "Video ad format: 16:9 player frame. Video ads offer higher engagement and brand recall rates."
                .to_string()
        }
        PreviewKind::TakeoverLayout => {
            "Takeover format: header banner, two sidebars and footer across the page.".to_string()
        }
    }
}
