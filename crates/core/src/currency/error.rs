//! Currency configuration error types.

use changemaker_shared::CurrencyCode;
use thiserror::Error;

/// Errors raised while resolving a currency configuration.
#[derive(Debug, Error)]
pub enum CurrencyConfigError {
    /// No configuration document exists for the requested currency.
    #[error("No configuration found for currency {0}")]
    ConfigNotFound(CurrencyCode),

    /// The requested code cannot name a configuration document.
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// The merged configuration violates a structural rule.
    #[error("Invalid configuration for {code}: {reason}")]
    InvalidConfig {
        /// Currency whose configuration is invalid.
        code: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The documents could not be read or deserialized.
    #[error("Failed to load currency configuration: {0}")]
    Load(#[from] config::ConfigError),
}
