//! Campaign-duration input normalization.
//!
//! Raw input is never rejected: unparseable text becomes one day and
//! out-of-range values snap to the nearest bound. The outcome is reported
//! alongside the value so callers and tests can see what happened.

use rate_card_core::types::MIN_DURATION_DAYS;
use serde::Serialize;
use tracing::debug;

/// What normalization did to the input.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClampOutcome {
    /// In range, used as given.
    Accepted,
    /// No leading integer; fell back to the minimum.
    Defaulted,
    /// Below the minimum.
    RaisedToMin,
    /// Above the variant's maximum.
    LoweredToMax,
}

impl ClampOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClampOutcome::Accepted => "accepted",
            ClampOutcome::Defaulted => "defaulted",
            ClampOutcome::RaisedToMin => "raised_to_min",
            ClampOutcome::LoweredToMax => "lowered_to_max",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ClampedDuration {
    pub days: u32,
    pub outcome: ClampOutcome,
}

/// Parse `raw` like a form field and clamp it into `[1, max_days]`.
pub fn clamp_duration(raw: &str, max_days: u32) -> ClampedDuration {
    let clamped = match parse_leading_int(raw) {
        Some(value) => clamp_days(value, max_days),
        None => ClampedDuration {
            days: MIN_DURATION_DAYS,
            outcome: ClampOutcome::Defaulted,
        },
    };
    if clamped.outcome != ClampOutcome::Accepted {
        debug!(
            raw,
            days = clamped.days,
            outcome = clamped.outcome.as_str(),
            "Duration normalized"
        );
        metrics::counter!("rate_card.duration_normalized", "outcome" => clamped.outcome.as_str())
            .increment(1);
    }
    clamped
}

/// Clamp an already-numeric duration into `[1, max_days]`.
pub fn clamp_days(value: i64, max_days: u32) -> ClampedDuration {
    let max_days = max_days.max(MIN_DURATION_DAYS);
    if value < i64::from(MIN_DURATION_DAYS) {
        ClampedDuration {
            days: MIN_DURATION_DAYS,
            outcome: ClampOutcome::RaisedToMin,
        }
    } else if value > i64::from(max_days) {
        ClampedDuration {
            days: max_days,
            outcome: ClampOutcome::LoweredToMax,
        }
    } else {
        ClampedDuration {
            days: value as u32,
            outcome: ClampOutcome::Accepted,
        }
    }
}

/// Optional sign followed by at least one digit, after leading whitespace.
/// Anything after the digits is ignored (`"42days"` is 42). Huge values
/// saturate rather than wrap.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
