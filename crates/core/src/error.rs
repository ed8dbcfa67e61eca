use thiserror::Error;

pub type RateCardResult<T> = Result<T, RateCardError>;

#[derive(Error, Debug)]
pub enum RateCardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown schedule variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid discount tier: {0}")]
    InvalidTier(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown ad unit: {0}")]
    UnknownAdUnit(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for RateCardError {
    fn from(err: config::ConfigError) -> Self {
        RateCardError::Config(err.to_string())
    }
}
