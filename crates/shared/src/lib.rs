//! Shared types, errors, and configuration for Changemaker.
//!
//! This crate provides common types used across all other crates:
//! - Amount codec between decimal text and integer minor units
//! - Currency codes
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{AmountError, CurrencyCode};
