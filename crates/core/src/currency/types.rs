//! Currency configuration types.

use std::collections::BTreeMap;

use changemaker_shared::CurrencyCode;
use serde::{Deserialize, Serialize};

use super::error::CurrencyConfigError;

/// Setting that enables the smallest unit (pennies, one-cent coins).
pub const USE_PENNIES: &str = "use_pennies";

/// Setting that enables the half-dollar coin.
pub const USE_HALF_DOLLARS: &str = "use_half_dollars";

/// A coin or bill of fixed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    /// Singular display name (e.g. "penny").
    pub name: String,
    /// Plural display name (e.g. "pennies").
    pub plural: String,
    /// Value in minor units.
    pub value: u64,
    /// Boolean setting that must be true for this denomination to be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Denomination {
    /// Creates an always-active denomination.
    pub fn new(name: impl Into<String>, plural: impl Into<String>, value: u64) -> Self {
        Self {
            name: name.into(),
            plural: plural.into(),
            value,
            flag: None,
        }
    }

    /// Gates this denomination behind a boolean setting.
    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Returns the display name for `count` units.
    pub fn label(&self, count: u64) -> &str {
        if count == 1 { &self.name } else { &self.plural }
    }
}

/// Merged configuration for one currency.
///
/// Built by [`CurrencyConfigLoader`](super::CurrencyConfigLoader) from the
/// defaults document, the currency document and runtime overrides, in that
/// order of increasing precedence. Read-only once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    pub code: CurrencyCode,
    /// Display name.
    pub name: String,
    /// Largest owed amount (whole units) the sample generator produces.
    #[serde(default = "default_max_value")]
    pub max_value: u64,
    /// Whether the smallest unit is in circulation. When false, change is
    /// rounded to the nearest five minor units.
    #[serde(default = "default_true")]
    pub use_pennies: bool,
    /// Whether the half-dollar coin is handed out.
    #[serde(default)]
    pub use_half_dollars: bool,
    /// Owed whole units divisible by this trigger randomized change.
    #[serde(default = "default_random_divisor")]
    pub random_divisor: u32,
    /// Every denomination of the currency, in declaration order.
    pub denominations: Vec<Denomination>,
    /// Bills and coins customers pay with (generator only, minor units).
    #[serde(default)]
    pub payment_denominations: Vec<u64>,
    /// Resolved values of other flags named by denominations.
    #[serde(default, skip_deserializing)]
    pub flags: BTreeMap<String, bool>,
}

fn default_true() -> bool {
    true
}

fn default_max_value() -> u64 {
    100
}

fn default_random_divisor() -> u32 {
    3
}

impl CurrencyConfig {
    /// Creates a configuration with the built-in defaults.
    pub fn new(code: CurrencyCode, name: impl Into<String>, denominations: Vec<Denomination>) -> Self {
        Self {
            code,
            name: name.into(),
            max_value: default_max_value(),
            use_pennies: true,
            use_half_dollars: false,
            random_divisor: default_random_divisor(),
            denominations,
            payment_denominations: Vec::new(),
            flags: BTreeMap::new(),
        }
    }

    /// Returns whether the named boolean setting is on.
    ///
    /// Unknown settings are off.
    pub fn is_enabled(&self, flag: &str) -> bool {
        match flag {
            USE_PENNIES => self.use_pennies,
            USE_HALF_DOLLARS => self.use_half_dollars,
            other => self.flags.get(other).copied().unwrap_or(false),
        }
    }

    /// Returns the denominations in use, strictly descending by value.
    ///
    /// A denomination is active when it has no flag or its flag is on.
    /// Equal values keep declaration order.
    pub fn active_denominations(&self) -> Vec<Denomination> {
        let mut active: Vec<Denomination> = self
            .denominations
            .iter()
            .filter(|d| d.flag.as_deref().is_none_or(|flag| self.is_enabled(flag)))
            .cloned()
            .collect();
        active.sort_by(|a, b| b.value.cmp(&a.value));
        active
    }

    /// Whether change must be rounded to the nearest five minor units.
    pub fn rounds_to_nickel(&self) -> bool {
        !self.use_pennies
    }

    /// Checks the structural rules a resolved configuration must satisfy.
    pub fn validate(&self) -> Result<(), CurrencyConfigError> {
        let invalid = |reason: &str| CurrencyConfigError::InvalidConfig {
            code: self.code.to_string(),
            reason: reason.to_string(),
        };

        if self.denominations.is_empty() {
            return Err(invalid("no denominations declared"));
        }
        if let Some(d) = self.denominations.iter().find(|d| d.value == 0) {
            return Err(invalid(&format!("denomination '{}' has zero value", d.name)));
        }
        if self.random_divisor == 0 {
            return Err(invalid("random_divisor must be at least 1"));
        }
        if self.payment_denominations.contains(&0) {
            return Err(invalid("payment denominations must be positive"));
        }
        Ok(())
    }
}

/// Caller-supplied settings applied on top of the documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigOverrides {
    /// Forces pennies on or off.
    pub use_pennies: Option<bool>,
    /// Forces half dollars on or off.
    pub use_half_dollars: Option<bool>,
    /// Replaces the randomization divisor.
    pub random_divisor: Option<u32>,
}

impl ConfigOverrides {
    /// Sets the pennies override.
    #[must_use]
    pub const fn with_pennies(mut self, enabled: bool) -> Self {
        self.use_pennies = Some(enabled);
        self
    }

    /// Sets the half-dollar override.
    #[must_use]
    pub const fn with_half_dollars(mut self, enabled: bool) -> Self {
        self.use_half_dollars = Some(enabled);
        self
    }

    /// Sets the divisor override.
    #[must_use]
    pub const fn with_divisor(mut self, divisor: u32) -> Self {
        self.random_divisor = Some(divisor);
        self
    }
}
