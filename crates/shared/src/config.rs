//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Currency document location.
    #[serde(default)]
    pub currencies: CurrenciesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Where the per-currency configuration documents live.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrenciesConfig {
    /// Directory holding `default.toml` and one `<code>.toml` per currency.
    #[serde(default = "default_currencies_dir")]
    pub dir: PathBuf,
}

impl Default for CurrenciesConfig {
    fn default() -> Self {
        Self {
            dir: default_currencies_dir(),
        }
    }
}

fn default_currencies_dir() -> PathBuf {
    PathBuf::from("config/currencies")
}

impl AppConfig {
    /// Loads configuration from `config/default` and `CHANGEMAKER__*` env vars.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("CHANGEMAKER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
