use serde::Deserialize;
use std::path::Path;

use crate::error::RateCardResult;
use crate::types::{DiscountTier, ScheduleVariant};

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `RATE_CARD__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub variant: ScheduleVariant,
    #[serde(default = "default_duration_days")]
    pub default_duration_days: u32,
    /// Replaces the variant's built-in discount schedule when set.
    #[serde(default)]
    pub custom_tiers: Option<Vec<DiscountTier>>,
}

fn default_duration_days() -> u32 {
    30
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            variant: ScheduleVariant::default(),
            default_duration_days: default_duration_days(),
            custom_tiers: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional config file, then environment
    /// variables (which win).
    pub fn load(path: Option<&Path>) -> RateCardResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix("RATE_CARD")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let loaded: AppConfig = config.try_deserialize()?;
        tracing::debug!(
            variant = %loaded.pricing.variant,
            default_duration_days = loaded.pricing.default_duration_days,
            custom_tiers = loaded.pricing.custom_tiers.is_some(),
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.pricing.variant, ScheduleVariant::LongHorizon);
        assert_eq!(config.pricing.default_duration_days, 30);
        assert!(config.pricing.custom_tiers.is_none());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.pricing.variant, ScheduleVariant::LongHorizon);
        assert_eq!(config.pricing.default_duration_days, 30);
    }

    #[test]
    fn test_toml_with_custom_tiers() {
        let config = from_toml(
            r#"
            [pricing]
            variant = "short_horizon"
            default_duration_days = 14

            [[pricing.custom_tiers]]
            min_days = 60
            rate = 0.3

            [[pricing.custom_tiers]]
            min_days = 1
            max_days = 3
            rate = 0.02
            "#,
        );
        assert_eq!(config.pricing.variant, ScheduleVariant::ShortHorizon);
        assert_eq!(config.pricing.default_duration_days, 14);

        let tiers = config.pricing.custom_tiers.unwrap();
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0], DiscountTier::at_least(60, 0.3));
        assert_eq!(tiers[1], DiscountTier::between(1, 3, 0.02));
    }

    // Env vars are process-wide, so every env-driven case lives in this one test.
    #[test]
    fn test_env_overrides_file() {
        let path = std::env::temp_dir().join(format!(
            "rate-card-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"
            [pricing]
            variant = "long_horizon"
            default_duration_days = 14

            [[pricing.custom_tiers]]
            min_days = 1
            rate = 0.5
            "#,
        )
        .unwrap();

        let from_file = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(from_file.pricing.variant, ScheduleVariant::LongHorizon);
        assert_eq!(from_file.pricing.default_duration_days, 14);

        let cases = [
            ("short-horizon", ScheduleVariant::ShortHorizon),
            ("short_horizon", ScheduleVariant::ShortHorizon),
            ("long-horizon", ScheduleVariant::LongHorizon),
        ];
        for (spelling, expected) in cases {
            std::env::set_var("RATE_CARD__PRICING__VARIANT", spelling);
            std::env::set_var("RATE_CARD__PRICING__DEFAULT_DURATION_DAYS", "45");

            let loaded = AppConfig::load(Some(path.as_path())).unwrap();
            assert_eq!(loaded.pricing.variant, expected, "{spelling:?}");
            assert_eq!(loaded.pricing.default_duration_days, 45);
            assert_eq!(
                loaded.pricing.custom_tiers,
                Some(vec![DiscountTier::at_least(1, 0.5)])
            );
        }

        std::env::set_var("RATE_CARD__PRICING__VARIANT", "weekly");
        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(crate::RateCardError::Config(_))
        ));

        std::env::remove_var("RATE_CARD__PRICING__VARIANT");
        std::env::remove_var("RATE_CARD__PRICING__DEFAULT_DURATION_DAYS");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/rate-card.toml"))).unwrap_err();
        assert!(matches!(err, crate::RateCardError::Config(_)));
    }
}
