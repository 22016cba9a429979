//! Change-making engine for Changemaker.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Configuration documents are the only I/O.
//!
//! # Modules
//!
//! - `currency` - Layered currency configuration and active denominations
//! - `change` - Nickel rounding, minimum and randomized change, policy choice
//! - `register` - Transaction lines and whole files

pub mod change;
pub mod currency;
pub mod register;

pub use change::{Breakdown, ChangePolicy};
pub use currency::{ConfigOverrides, CurrencyConfig, CurrencyConfigLoader, Denomination};
pub use register::{CashRegister, ChangeLine, FileResult, RegisterError, process_file};
