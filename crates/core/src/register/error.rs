//! Transaction processing error types.

use changemaker_shared::{AmountError, AppError};
use thiserror::Error;

use crate::change::ChangeError;
use crate::currency::CurrencyConfigError;

/// A transaction line that cannot be processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// An amount did not parse.
    #[error("{field} amount: {source}")]
    InvalidAmount {
        /// Which amount ("owed" or "paid").
        field: &'static str,
        /// Parse failure.
        source: AmountError,
    },

    /// The customer paid less than they owe.
    #[error("amount paid ({paid}) is less than amount owed ({owed})")]
    InsufficientPayment {
        /// Owed amount, formatted.
        owed: String,
        /// Paid amount, formatted.
        paid: String,
    },

    /// The line is not `<owed>,<paid>`.
    #[error("expected '<owed>,<paid>', got '{0}'")]
    MalformedLine(String),
}

/// Errors raised while processing transactions.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// Currency configuration could not be resolved. Fatal to the whole file.
    #[error(transparent)]
    Config(#[from] CurrencyConfigError),

    /// A single transaction is invalid.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] TransactionError),

    /// The change cannot be paid out with the active denominations.
    #[error(transparent)]
    Unrepresentable(#[from] ChangeError),
}

impl RegisterError {
    /// Whether the error only concerns one line of a file.
    pub fn is_line_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        let message = err.to_string();
        match err {
            RegisterError::Config(CurrencyConfigError::ConfigNotFound(_)) => Self::NotFound(message),
            RegisterError::Config(CurrencyConfigError::InvalidCurrencyCode(_))
            | RegisterError::InvalidTransaction(_) => Self::Validation(message),
            RegisterError::Config(_) => Self::Configuration(message),
            RegisterError::Unrepresentable(_) => Self::BusinessRule(message),
        }
    }
}
