//! Shared domain types, configuration and errors for the ad-placement rate card.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{RateCardError, RateCardResult};
pub use types::{AdType, AdUnit, DiscountTier, PreviewKind, QuoteResult, ScheduleVariant};
