//! Resolves currency configurations from layered TOML documents.
//!
//! Layers, later wins:
//! 1. `<dir>/default.toml` - settings shared by every currency (optional)
//! 2. `<dir>/<code>.toml` - the currency document (required)
//! 3. [`ConfigOverrides`] - supplied by the caller at runtime
//!
//! Keys are overwritten wholesale, so a currency's `denominations` list always
//! comes from its own document.

use std::path::{Path, PathBuf};

use changemaker_shared::CurrencyCode;
use config::{Config, File};
use tracing::debug;

use super::error::CurrencyConfigError;
use super::types::{ConfigOverrides, CurrencyConfig, USE_HALF_DOLLARS, USE_PENNIES};

/// File stem of the shared defaults document.
const DEFAULTS_DOCUMENT: &str = "default.toml";

/// Loads and merges currency documents from a directory.
///
/// Holds no state beyond the directory path; every call to [`resolve`]
/// reads the documents again and returns an independent value.
///
/// [`resolve`]: CurrencyConfigLoader::resolve
#[derive(Debug, Clone)]
pub struct CurrencyConfigLoader {
    dir: PathBuf,
}

impl CurrencyConfigLoader {
    /// Creates a loader reading documents from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the documents are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the merged configuration for `code` (case-insensitive).
    pub fn resolve(
        &self,
        code: &str,
        overrides: &ConfigOverrides,
    ) -> Result<CurrencyConfig, CurrencyConfigError> {
        let code: CurrencyCode = code
            .parse()
            .map_err(|_| CurrencyConfigError::InvalidCurrencyCode(code.to_string()))?;

        let document = self.dir.join(format!("{}.toml", code.file_stem()));
        if !document.is_file() {
            return Err(CurrencyConfigError::ConfigNotFound(code));
        }

        let merged = Config::builder()
            .add_source(File::from(self.dir.join(DEFAULTS_DOCUMENT)).required(false))
            .add_source(File::from(document.as_path()).required(true))
            .set_override_option(USE_PENNIES, overrides.use_pennies)?
            .set_override_option(USE_HALF_DOLLARS, overrides.use_half_dollars)?
            .set_override_option("random_divisor", overrides.random_divisor.map(i64::from))?
            .build()?;

        let flag_names: Vec<String> = merged
            .get_array("denominations")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|denomination| denomination.into_table().ok())
            .filter_map(|table| table.get("flag").cloned())
            .filter_map(|flag| flag.into_string().ok())
            .collect();

        let mut config: CurrencyConfig = merged.clone().try_deserialize()?;
        for flag in flag_names {
            let enabled = merged.get_bool(&flag).unwrap_or(false);
            config.flags.insert(flag, enabled);
        }

        if config.code != code {
            return Err(CurrencyConfigError::InvalidConfig {
                code: code.to_string(),
                reason: format!("document declares code {}", config.code),
            });
        }
        config.validate()?;

        debug!(
            currency = %config.code,
            use_pennies = config.use_pennies,
            use_half_dollars = config.use_half_dollars,
            random_divisor = config.random_divisor,
            "Resolved currency configuration"
        );
        Ok(config)
    }
}
