//! Currency codes.

use serde::{Deserialize, Serialize};

/// Code identifying a currency configuration document (e.g. "USD").
///
/// Always stored uppercase. Restricted to 2-8 ASCII alphanumerics so a code
/// can be used directly as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The code used when a transaction file names no currency.
    pub const DEFAULT: &'static str = "USD";

    /// Returns the uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase form used for document file names.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let valid = (2..=8).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphanumeric());
        if valid {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(format!("Invalid currency code: {s}"))
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}
