//! Rate Card: ad placement pricing calculator.
//!
//! Terminal front end over the pricing engine: loads configuration, normalizes
//! the requested duration, quotes the catalog and prints it.

mod render;

use clap::{Parser, ValueEnum};
use rate_card_core::config::AppConfig;
use rate_card_core::{RateCardError, ScheduleVariant};
use rate_card_pricing::{ClampOutcome, PricingEngine};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::render::{RateCardView, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rate-card")]
#[command(about = "Quote ad placements with duration-based volume discounts")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pricing variant: long-horizon or short-horizon (overrides config)
    #[arg(long, env = "RATE_CARD__PRICING__VARIANT")]
    variant: Option<ScheduleVariant>,

    /// Campaign duration in days, as typed; out-of-range values are clamped
    #[arg(long, allow_hyphen_values = true)]
    days: Option<String>,

    /// Toggle selection of an ad unit by name (repeatable)
    #[arg(long = "select", value_name = "UNIT")]
    select: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the rate card itself
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rate_card=info".into());
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    // Load configuration
    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(variant) = cli.variant {
        config.pricing.variant = variant;
    }

    let engine = PricingEngine::from_config(&config.pricing)?;

    let raw_days = cli
        .days
        .unwrap_or_else(|| config.pricing.default_duration_days.to_string());
    let duration = engine.clamp_duration(&raw_days);
    if duration.outcome != ClampOutcome::Accepted {
        info!(
            raw = %raw_days,
            days = duration.days,
            outcome = duration.outcome.as_str(),
            "Campaign duration adjusted"
        );
    }

    let mut selection = Selection::default();
    for name in &cli.select {
        let unit = engine
            .catalog()
            .get(name)
            .ok_or_else(|| RateCardError::UnknownAdUnit(name.clone()))?;
        selection.toggle(unit);
    }

    let view = RateCardView::new(&engine, duration, engine.rate_card(duration.days), &selection);
    match cli.format {
        OutputFormat::Table => print!("{}", render::render_table(&view, &selection)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}
