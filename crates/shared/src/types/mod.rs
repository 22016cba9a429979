//! Common types used across the application.

pub mod amount;
pub mod currency;

pub use amount::{AmountError, format_amount, parse_amount};
pub use currency::CurrencyCode;
