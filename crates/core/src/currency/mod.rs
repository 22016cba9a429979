//! Currency configuration and denomination selection.

pub mod error;
pub mod loader;
pub mod types;

pub use error::CurrencyConfigError;
pub use loader::CurrencyConfigLoader;
pub use types::{ConfigOverrides, CurrencyConfig, Denomination, USE_HALF_DOLLARS, USE_PENNIES};
